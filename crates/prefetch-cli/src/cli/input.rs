//! Reading prefetch input from an argument, a file, or stdin.

use anyhow::{Context, Result};
use prefetch_core::RawPrefetch;
use std::io::Read;

/// Resolve `arg`: `-` reads stdin, `@path` reads a file, anything else is the prefetch text.
pub fn read_text(arg: &str) -> Result<String> {
    if arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read prefetch from stdin")?;
        return Ok(buf);
    }
    if let Some(path) = arg.strip_prefix('@') {
        return std::fs::read_to_string(path).with_context(|| format!("read prefetch {path}"));
    }
    Ok(arg.to_string())
}

pub fn read_prefetch(arg: &str) -> Result<RawPrefetch> {
    let text = read_text(arg)?;
    Ok(RawPrefetch::detect(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_text_passes_through() {
        assert_eq!(read_text("prefetch a sha1:b").unwrap(), "prefetch a sha1:b");
    }

    #[test]
    fn at_prefix_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("p.txt");
        std::fs::write(&path, "add prefetch item name=a").unwrap();
        let arg = format!("@{}", path.display());
        assert_eq!(read_text(&arg).unwrap(), "add prefetch item name=a");
        assert!(read_text("@/nonexistent/prefetch.txt").is_err());
    }

    #[test]
    fn unrecognized_text_is_an_error() {
        assert!(read_prefetch("hello world").is_err());
    }
}
