//! Error taxonomy for the prefetch pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// A single structural problem found in a prefetch's fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Defect {
    #[error("missing required field `{0}`")]
    Missing(&'static str),
    #[error("size `{0}` is not a non-negative integer")]
    BadSize(String),
    #[error("sha1 `{0}` is not 40 hex characters")]
    BadSha1(String),
    #[error("sha256 `{0}` is not 64 hex characters")]
    BadSha256(String),
    #[error("file name `{0}` is not a bare file name")]
    BadName(String),
    #[error("download url is empty")]
    EmptyUrl,
    #[error("unreadable prefetch: {0}")]
    Unreadable(String),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unrecognized prefetch notation: {0:?}")]
    Unrecognized(String),
    #[error("prefetch block contains {0} `add prefetch item` lines, expected exactly one")]
    ItemCount(usize),
    #[error("prefetch map is not a JSON object of scalar values: {0}")]
    Json(String),
    #[error(transparent)]
    Field(#[from] Defect),
}

/// Raw input rejected by the structural gate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("bad prefetch: {0}")]
pub struct ValidationError(pub Defect);

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("transfer of {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: curl::Error,
    },
    #[error("GET {url} returned HTTP {code}")]
    Http { url: String, code: u32 },
    #[error("writing response body failed: {0}")]
    Write(#[source] std::io::Error),
    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    pub(crate) fn io(op: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        FetchError::Io {
            op,
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum PrefetchError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("prefetches do not match; either the prefetch or the download is invalid")]
    Mismatch,
}
