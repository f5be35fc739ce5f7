//! Canonical mapping (`file_name`, `file_size`, `file_sha1`, ...).

use super::Fields;
use crate::error::ParseError;
use serde_json::Value;
use std::collections::BTreeMap;

/// Read a JSON object whose values are strings or numbers. Nulls are dropped.
pub(super) fn from_json(text: &str) -> Result<BTreeMap<String, String>, ParseError> {
    let raw: BTreeMap<String, Value> =
        serde_json::from_str(text).map_err(|e| ParseError::Json(e.to_string()))?;
    let mut out = BTreeMap::new();
    for (key, value) in raw {
        let text = match value {
            Value::Null => continue,
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(ParseError::Json(format!("`{key}` is not a scalar")));
            }
        };
        out.insert(key, text);
    }
    Ok(out)
}

pub(super) fn extract(m: &BTreeMap<String, String>) -> Fields {
    let get = |k: &str| m.get(k).cloned();
    Fields {
        name: get("file_name"),
        path: get("file_path"),
        size: get("file_size"),
        sha1: get("file_sha1"),
        sha256: get("file_sha256"),
        url: get("download_url"),
    }
}
