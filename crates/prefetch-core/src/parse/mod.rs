//! Normalize the three accepted prefetch notations into a `Descriptor`.
//!
//! Each notation has its own extractor that pulls the raw field text out of the input;
//! the shared `build` step then checks shapes and constructs the canonical record.

mod block;
mod map;
mod statement;

use crate::descriptor::{Descriptor, PrefetchType};
use crate::error::{Defect, ParseError};
use crate::validate;
use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Raw prefetch input, tagged by notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawPrefetch {
    /// `prefetch <name> sha1:<hex> size:<n> <url> [sha256:<hex>]`
    Statement(String),
    /// Multi-line prefetch block containing one `add prefetch item` line.
    Block(String),
    /// Mapping keyed by the canonical field names.
    Map(BTreeMap<String, String>),
}

impl RawPrefetch {
    /// Classify free text by shape: statement keyword, block item line, or a JSON object.
    pub fn detect(text: &str) -> Result<Self, ParseError> {
        let trimmed = text.trim();
        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("prefetch ") {
            return Ok(RawPrefetch::Statement(trimmed.to_string()));
        }
        if lower.lines().any(|l| {
            let l = l.trim_start();
            l.starts_with("add prefetch item") || l.starts_with("begin prefetch block")
        }) {
            return Ok(RawPrefetch::Block(trimmed.to_string()));
        }
        if trimmed.starts_with('{') {
            return map::from_json(trimmed).map(RawPrefetch::Map);
        }
        let snippet: String = trimmed.chars().take(40).collect();
        Err(ParseError::Unrecognized(snippet))
    }

    pub fn prefetch_type(&self) -> PrefetchType {
        match self {
            RawPrefetch::Statement(_) => PrefetchType::Statement,
            RawPrefetch::Block(_) => PrefetchType::Block,
            RawPrefetch::Map(_) => PrefetchType::Dictionary,
        }
    }
}

impl From<&Descriptor> for RawPrefetch {
    fn from(d: &Descriptor) -> Self {
        let mut m = BTreeMap::new();
        m.insert("file_name".to_string(), d.file_name.clone());
        if let Some(p) = &d.file_path {
            m.insert("file_path".to_string(), p.to_string_lossy().into_owned());
        }
        m.insert("file_size".to_string(), d.file_size.to_string());
        m.insert("file_sha1".to_string(), d.file_sha1.clone());
        if let Some(sha256) = &d.file_sha256 {
            m.insert("file_sha256".to_string(), sha256.clone());
        }
        m.insert("download_url".to_string(), d.download_url.clone());
        RawPrefetch::Map(m)
    }
}

/// Field text pulled out of a notation, before shape checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Fields {
    pub name: Option<String>,
    pub path: Option<String>,
    pub size: Option<String>,
    pub sha1: Option<String>,
    pub sha256: Option<String>,
    pub url: Option<String>,
}

fn extract(raw: &RawPrefetch) -> Result<Fields, ParseError> {
    match raw {
        RawPrefetch::Statement(text) => statement::extract(text),
        RawPrefetch::Block(text) => block::extract(text),
        RawPrefetch::Map(m) => Ok(map::extract(m)),
    }
}

/// A single normal path component: no separators, not `.` or `..`, not absolute.
fn is_bare_name(name: &str) -> bool {
    name != ".." && Path::new(name).file_name() == Some(OsStr::new(name))
}

fn build(fields: Fields, prefetch_type: PrefetchType) -> Result<Descriptor, Defect> {
    let file_name = fields
        .name
        .filter(|n| !n.trim().is_empty())
        .ok_or(Defect::Missing("file_name"))?;
    if !is_bare_name(&file_name) {
        return Err(Defect::BadName(file_name));
    }
    let size = fields.size.ok_or(Defect::Missing("file_size"))?;
    let file_size = validate::parse_size(&size)?;
    let sha1 = fields.sha1.ok_or(Defect::Missing("file_sha1"))?;
    let file_sha1 = validate::normalize_sha1(&sha1)?;
    let file_sha256 = fields
        .sha256
        .filter(|s| !s.trim().is_empty())
        .map(|s| validate::normalize_sha256(&s))
        .transpose()?;
    let download_url = fields.url.ok_or(Defect::Missing("download_url"))?;
    if download_url.trim().is_empty() {
        return Err(Defect::EmptyUrl);
    }
    Ok(Descriptor {
        file_name,
        file_path: fields.path.filter(|p| !p.is_empty()).map(PathBuf::from),
        file_size,
        file_sha1,
        file_sha256,
        download_url: download_url.trim().to_string(),
        prefetch_type: Some(prefetch_type),
    })
}

/// Parse any supported notation into a canonical descriptor.
pub fn parse(raw: &RawPrefetch) -> Result<Descriptor, ParseError> {
    let fields = extract(raw)?;
    Ok(build(fields, raw.prefetch_type())?)
}

/// Detect the notation of `text` and parse it.
pub fn parse_text(text: &str) -> Result<Descriptor, ParseError> {
    parse(&RawPrefetch::detect(text)?)
}

#[cfg(test)]
mod tests;
