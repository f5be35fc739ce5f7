//! Atomic download: stream into a `.part` temp file next to the destination,
//! sync, then rename into place. The temp file is removed on every failure path.

use super::Transport;
use crate::error::FetchError;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Suffix of the temp file used before the atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

fn parent_dir(destination: &Path) -> PathBuf {
    match destination.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Download `url` to `destination`, creating parent directories. Returns bytes written.
pub fn download_to(
    transport: &dyn Transport,
    url: &str,
    destination: &Path,
) -> Result<u64, FetchError> {
    let parent = parent_dir(destination);
    fs::create_dir_all(&parent).map_err(|e| FetchError::io("create directory", &parent, e))?;

    let prefix = match destination.file_name() {
        Some(name) => format!(".{}.", name.to_string_lossy()),
        None => ".download.".to_string(),
    };
    let mut part = tempfile::Builder::new()
        .prefix(&prefix)
        .suffix(TEMP_SUFFIX)
        .tempfile_in(&parent)
        .map_err(|e| FetchError::io("create temp file in", &parent, e))?;

    let written = {
        let mut writer = BufWriter::new(part.as_file_mut());
        let n = transport.get(url, &mut writer)?;
        writer.flush().map_err(FetchError::Write)?;
        n
    };
    part.as_file()
        .sync_all()
        .map_err(|e| FetchError::io("sync", part.path(), e))?;

    part.persist(destination)
        .map_err(|e| FetchError::io("rename into", destination, e.error))?;
    Ok(written)
}
