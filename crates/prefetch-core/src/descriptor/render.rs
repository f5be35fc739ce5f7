//! Render a descriptor back into one of the accepted notations.

use super::{Descriptor, PrefetchType};

/// Output notation for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notation {
    Statement,
    Block,
    Json,
}

impl Notation {
    /// Notation matching the one a descriptor was parsed from (JSON when unknown).
    pub fn for_type(prefetch_type: Option<PrefetchType>) -> Self {
        match prefetch_type {
            Some(PrefetchType::Statement) => Notation::Statement,
            Some(PrefetchType::Block) => Notation::Block,
            Some(PrefetchType::Dictionary) | None => Notation::Json,
        }
    }
}

pub fn render(d: &Descriptor, notation: Notation) -> String {
    match notation {
        Notation::Statement => statement(d),
        Notation::Block => block_item(d),
        Notation::Json => serde_json::to_string_pretty(d).unwrap_or_default(),
    }
}

fn statement(d: &Descriptor) -> String {
    let mut out = format!(
        "prefetch {} sha1:{} size:{} {}",
        d.file_name, d.file_sha1, d.file_size, d.download_url
    );
    if let Some(sha256) = d.file_sha256.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(" sha256:");
        out.push_str(sha256);
    }
    out
}

fn block_item(d: &Descriptor) -> String {
    let mut out = format!(
        "add prefetch item name={} sha1={} size={} url={}",
        d.file_name, d.file_sha1, d.file_size, d.download_url
    );
    if let Some(sha256) = d.file_sha256.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(" sha256=");
        out.push_str(sha256);
    }
    out
}
