//! `prefetch <name> sha1:<hex> size:<bytes> <url> [sha256:<hex>]`

use super::Fields;
use crate::error::{Defect, ParseError};

/// Split `tag:value` when `token` starts with `tag:` (case-insensitive).
fn tagged<'a>(token: &'a str, tag: &str) -> Option<&'a str> {
    let (head, value) = token.split_once(':')?;
    head.eq_ignore_ascii_case(tag).then_some(value)
}

pub(super) fn extract(text: &str) -> Result<Fields, ParseError> {
    let mut tokens = text.split_whitespace();
    match tokens.next() {
        Some(kw) if kw.eq_ignore_ascii_case("prefetch") => {}
        _ => {
            let snippet: String = text.chars().take(40).collect();
            return Err(ParseError::Unrecognized(snippet));
        }
    }
    let name = tokens.next().ok_or(Defect::Missing("file_name"))?;
    if name.contains("://") || tagged(name, "sha1").is_some() || tagged(name, "size").is_some() {
        return Err(Defect::Missing("file_name").into());
    }

    let mut fields = Fields {
        name: Some(name.to_string()),
        ..Fields::default()
    };
    for token in tokens {
        if token.contains("://") {
            fields.url = Some(token.to_string());
        } else if let Some(v) = tagged(token, "sha1") {
            fields.sha1 = Some(v.to_string());
        } else if let Some(v) = tagged(token, "sha256") {
            fields.sha256 = Some(v.to_string());
        } else if let Some(v) = tagged(token, "size") {
            fields.size = Some(v.to_string());
        } else {
            tracing::debug!(token, "ignoring unknown prefetch statement token");
        }
    }
    Ok(fields)
}
