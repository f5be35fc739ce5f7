//! Size, SHA-1 and SHA-256 measurement of a local file.
//!
//! All three values are accumulated in a single read pass so large artifacts are
//! only streamed from disk once.

use sha1::Sha1;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const BUF_SIZE: usize = 64 * 1024;

/// Measured identity of a byte stream. Digests are lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checksums {
    pub size: u64,
    pub sha1: String,
    pub sha256: String,
}

/// Measure everything read from `reader` until EOF.
pub fn checksums_reader<R: Read>(mut reader: R) -> io::Result<Checksums> {
    let mut sha1 = Sha1::new();
    let mut sha256 = Sha256::new();
    let mut size = 0u64;
    let mut buf = vec![0u8; BUF_SIZE];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        sha1.update(&buf[..n]);
        sha256.update(&buf[..n]);
        size += n as u64;
    }
    Ok(Checksums {
        size,
        sha1: hex::encode(sha1.finalize()),
        sha256: hex::encode(sha256.finalize()),
    })
}

/// Measure the file at `path`. Reads in chunks to keep memory use bounded.
pub fn checksums_path(path: &Path) -> io::Result<Checksums> {
    let f = File::open(path)?;
    checksums_reader(f)
}
