//! Prefetch block: one `add prefetch item name=.. sha1=.. size=.. url=..` line.

use super::Fields;
use crate::error::ParseError;

const ITEM_PREFIX: &str = "add prefetch item";

pub(super) fn extract(text: &str) -> Result<Fields, ParseError> {
    let items: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| {
            l.get(..ITEM_PREFIX.len())
                .is_some_and(|p| p.eq_ignore_ascii_case(ITEM_PREFIX))
        })
        .collect();
    if items.len() != 1 {
        return Err(ParseError::ItemCount(items.len()));
    }

    let mut fields = Fields::default();
    for pair in items[0][ITEM_PREFIX.len()..].split_whitespace() {
        let Some((key, value)) = pair.split_once('=') else {
            tracing::debug!(pair, "ignoring prefetch item token without '='");
            continue;
        };
        let value = Some(value.to_string());
        match key.to_ascii_lowercase().as_str() {
            "name" => fields.name = value,
            "sha1" => fields.sha1 = value,
            "sha256" => fields.sha256 = value,
            "size" => fields.size = value,
            "url" => fields.url = value,
            other => tracing::debug!(key = other, "ignoring unknown prefetch item key"),
        }
    }
    Ok(fields)
}
