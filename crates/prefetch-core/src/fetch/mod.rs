//! Obtain an artifact and measure it.
//!
//! `fetch_and_regenerate` downloads (or reuses) the file at a destination path and
//! produces a descriptor purely from the bytes on disk. It never compares against a
//! claimed descriptor; judging is the caller's job.

mod curl_transport;
mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use curl_transport::CurlTransport;
pub use store::download_to;

use crate::checksum;
use crate::descriptor::Descriptor;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::FetchError;
use std::io::Write;
use std::path::Path;

/// Network collaborator: stream the body of a URL into a sink.
pub trait Transport {
    /// Write the full response body of `url` to `sink` and return the number of bytes written.
    /// Non-success status codes are errors.
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError>;
}

/// Ensure `destination` holds the artifact from `url`, then measure it.
///
/// An existing file is reused as-is without any network access. Otherwise the body is
/// downloaded atomically; on failure no partial file is left behind.
pub fn fetch_and_regenerate(
    transport: &dyn Transport,
    url: &str,
    destination: &Path,
    diagnostics: &mut Diagnostics,
) -> Result<Descriptor, FetchError> {
    if destination.is_file() {
        diagnostics.push(Diagnostic::ReusedLocalFile(destination.to_path_buf()));
    } else {
        let written = download_to(transport, url, destination)?;
        tracing::info!(url, bytes = written, "downloaded to {}", destination.display());
    }

    let sums = checksum::checksums_path(destination)
        .map_err(|e| FetchError::io("measure", destination, e))?;
    tracing::debug!(
        size = sums.size,
        sha1 = %sums.sha1,
        sha256 = %sums.sha256,
        "measured {}",
        destination.display()
    );
    Ok(Descriptor::observed(destination, url, sums))
}
