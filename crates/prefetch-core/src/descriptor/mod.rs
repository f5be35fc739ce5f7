//! Canonical prefetch descriptor.
//!
//! A `Descriptor` names an artifact (file name, size, SHA-1, optional SHA-256) and where
//! to download it from. The same record is used for the caller's claim and for the
//! values measured from the downloaded bytes.

mod render;

pub use render::{render, Notation};

use crate::checksum::Checksums;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Input notation a descriptor was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrefetchType {
    /// Single-line `prefetch <name> sha1:.. size:.. <url>` action script statement.
    Statement,
    /// `add prefetch item name=.. sha1=..` inside a prefetch block.
    Block,
    /// Structured mapping with the canonical field names.
    Dictionary,
}

impl fmt::Display for PrefetchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrefetchType::Statement => write!(f, "statement"),
            PrefetchType::Block => write!(f, "block"),
            PrefetchType::Dictionary => write!(f, "dictionary"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_path: Option<PathBuf>,
    pub file_size: u64,
    pub file_sha1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_sha256: Option<String>,
    pub download_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefetch_type: Option<PrefetchType>,
}

impl Descriptor {
    /// Build the observed descriptor for a file that was measured at `path`.
    pub fn observed(path: &Path, url: &str, sums: Checksums) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            file_name,
            file_path: Some(path.to_path_buf()),
            file_size: sums.size,
            file_sha1: sums.sha1,
            file_sha256: Some(sums.sha256),
            download_url: url.to_string(),
            prefetch_type: None,
        }
    }

    /// Where the artifact lives locally: `file_path`, or `file_name` under `base_dir`.
    pub fn destination(&self, base_dir: &Path) -> PathBuf {
        match &self.file_path {
            Some(p) => p.clone(),
            None => base_dir.join(&self.file_name),
        }
    }

    pub fn has_sha256(&self) -> bool {
        self.file_sha256.as_deref().is_some_and(|s| !s.is_empty())
    }
}
