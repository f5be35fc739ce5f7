//! Identity comparison of a claimed and an observed descriptor.
//!
//! Size and SHA-1 must agree. SHA-256 must agree when both sides carry it; when
//! either side lacks it the comparison is skipped with a warning so descriptors that
//! predate SHA-256 stay usable. With no hash compared at all the verdict is a mismatch.

use crate::descriptor::Descriptor;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Field-by-field outcome of comparing two descriptors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reconciliation {
    /// Fields present on both sides whose values disagree.
    pub mismatched: Vec<&'static str>,
    /// Number of hash fields actually compared.
    pub hashes_compared: usize,
    /// True when SHA-256 was skipped because one or both sides lack it.
    pub sha256_skipped: bool,
}

impl Reconciliation {
    pub fn is_match(&self) -> bool {
        self.mismatched.is_empty() && self.hashes_compared > 0
    }
}

fn present(hash: Option<&str>) -> Option<&str> {
    hash.map(str::trim).filter(|h| !h.is_empty())
}

/// Compare `claimed` against `observed` without recording anything.
pub fn reconcile(claimed: &Descriptor, observed: &Descriptor) -> Reconciliation {
    let mut r = Reconciliation::default();

    if claimed.file_size != observed.file_size {
        r.mismatched.push("file_size");
    }

    match (
        present(Some(claimed.file_sha1.as_str())),
        present(Some(observed.file_sha1.as_str())),
    ) {
        (Some(a), Some(b)) => {
            r.hashes_compared += 1;
            if !a.eq_ignore_ascii_case(b) {
                r.mismatched.push("file_sha1");
            }
        }
        _ => tracing::debug!(file = %claimed.file_name, "sha1 not comparable"),
    }

    match (
        present(claimed.file_sha256.as_deref()),
        present(observed.file_sha256.as_deref()),
    ) {
        (Some(a), Some(b)) => {
            r.hashes_compared += 1;
            if !a.eq_ignore_ascii_case(b) {
                r.mismatched.push("file_sha256");
            }
        }
        _ => r.sha256_skipped = true,
    }

    r
}

/// Compare and record the diagnostics the comparison warrants.
///
/// Records `MissingSha256` when the SHA-256 comparison had to be skipped.
pub fn judge(
    claimed: &Descriptor,
    observed: &Descriptor,
    diagnostics: &mut Diagnostics,
) -> Reconciliation {
    let r = reconcile(claimed, observed);
    if r.sha256_skipped {
        diagnostics.push(Diagnostic::MissingSha256 {
            file_name: claimed.file_name.clone(),
        });
    }
    if r.hashes_compared == 0 {
        tracing::warn!(file = %claimed.file_name, "no hash in common; identity cannot be established");
    }
    r
}

/// True when the two descriptors identify the same artifact.
pub fn matches(claimed: &Descriptor, observed: &Descriptor, diagnostics: &mut Diagnostics) -> bool {
    judge(claimed, observed, diagnostics).is_match()
}
