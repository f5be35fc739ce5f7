//! Structural gate run before any network or filesystem work.
//!
//! `validate` never fails: it answers true/false and records one `BadPrefetch`
//! diagnostic describing the first defect found. Raising an error is left to the caller.

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Defect, ParseError};
use crate::parse::{self, RawPrefetch};

const SHA1_HEX_LEN: usize = 40;
const SHA256_HEX_LEN: usize = 64;

fn is_hex_of_len(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| b.is_ascii_hexdigit())
}

pub fn is_sha1(s: &str) -> bool {
    is_hex_of_len(s, SHA1_HEX_LEN)
}

pub fn is_sha256(s: &str) -> bool {
    is_hex_of_len(s, SHA256_HEX_LEN)
}

pub(crate) fn parse_size(s: &str) -> Result<u64, Defect> {
    let t = s.trim();
    if t.is_empty() || !t.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Defect::BadSize(s.to_string()));
    }
    t.parse::<u64>().map_err(|_| Defect::BadSize(s.to_string()))
}

pub(crate) fn normalize_sha1(s: &str) -> Result<String, Defect> {
    let t = s.trim();
    if !is_sha1(t) {
        return Err(Defect::BadSha1(s.to_string()));
    }
    Ok(t.to_ascii_lowercase())
}

pub(crate) fn normalize_sha256(s: &str) -> Result<String, Defect> {
    let t = s.trim();
    if !is_sha256(t) {
        return Err(Defect::BadSha256(s.to_string()));
    }
    Ok(t.to_ascii_lowercase())
}

/// First structural defect of `raw`, if any.
pub fn check(raw: &RawPrefetch) -> Result<(), Defect> {
    match parse::parse(raw) {
        Ok(_) => Ok(()),
        Err(ParseError::Field(defect)) => Err(defect),
        Err(other) => Err(Defect::Unreadable(other.to_string())),
    }
}

/// True when `raw` is a well-formed prefetch. Records one diagnostic when false.
pub fn validate(raw: &RawPrefetch, diagnostics: &mut Diagnostics) -> bool {
    match check(raw) {
        Ok(()) => true,
        Err(defect) => {
            diagnostics.push(Diagnostic::BadPrefetch(defect));
            false
        }
    }
}
