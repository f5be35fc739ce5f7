//! Non-fatal notices raised while validating, fetching and reconciling.
//!
//! Callers pass a `Diagnostics` list into the pipeline and inspect it afterwards;
//! every entry is also logged at warn level when it is recorded.

use crate::error::Defect;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Input failed the structural gate.
    BadPrefetch(Defect),
    /// One side of a reconciliation lacks SHA-256, so only size and SHA-1 were compared.
    MissingSha256 { file_name: String },
    /// An existing local file was measured instead of downloading.
    ReusedLocalFile(PathBuf),
    /// Claimed and observed descriptors disagree on the listed fields.
    Mismatch {
        file_name: String,
        fields: Vec<&'static str>,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::BadPrefetch(defect) => write!(f, "bad prefetch: {}", defect),
            Diagnostic::MissingSha256 { file_name } => {
                write!(f, "sha256 missing for {}; compared size and sha1 only", file_name)
            }
            Diagnostic::ReusedLocalFile(path) => {
                write!(f, "reusing existing file {} without download", path.display())
            }
            Diagnostic::Mismatch { file_name, fields } => {
                write!(f, "prefetches did not match for {}", file_name)?;
                if !fields.is_empty() {
                    write!(f, " ({})", fields.join(", "))?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered list of diagnostics recorded during one or more pipeline calls.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic and log it.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        match &diagnostic {
            Diagnostic::Mismatch { .. } => tracing::error!("{}", diagnostic),
            _ => tracing::warn!("{}", diagnostic),
        }
        self.entries.push(diagnostic);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_missing_sha256(&self) -> bool {
        self.iter()
            .any(|d| matches!(d, Diagnostic::MissingSha256 { .. }))
    }

    pub fn has_mismatch(&self) -> bool {
        self.iter().any(|d| matches!(d, Diagnostic::Mismatch { .. }))
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_query() {
        let mut diags = Diagnostics::new();
        assert!(diags.is_empty());
        diags.push(Diagnostic::MissingSha256 {
            file_name: "a.bin".to_string(),
        });
        assert!(diags.has_missing_sha256());
        assert!(!diags.has_mismatch());
        diags.push(Diagnostic::Mismatch {
            file_name: "a.bin".to_string(),
            fields: vec!["file_size"],
        });
        assert_eq!(diags.len(), 2);
        assert!(diags.has_mismatch());
    }

    #[test]
    fn mismatch_display_lists_fields() {
        let d = Diagnostic::Mismatch {
            file_name: "unzip.exe".to_string(),
            fields: vec!["file_size", "file_sha1"],
        };
        assert_eq!(
            d.to_string(),
            "prefetches did not match for unzip.exe (file_size, file_sha1)"
        );
    }
}
