//! `prefetch checksum <path>` – measure a local file.

use crate::cli::Outcome;
use anyhow::{Context, Result};
use prefetch_core::checksum;
use std::path::Path;

/// Print size, SHA-1 and SHA-256 of the given file.
pub fn run_checksum(path: &Path) -> Result<Outcome> {
    let sums = checksum::checksums_path(path)
        .with_context(|| format!("measure {}", path.display()))?;
    println!("size    {}", sums.size);
    println!("sha1    {}", sums.sha1);
    println!("sha256  {}", sums.sha256);
    Ok(Outcome::Success)
}
