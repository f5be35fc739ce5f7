//! Tests for notation detection and parsing.

use super::{parse, parse_text, RawPrefetch};
use crate::descriptor::PrefetchType;
use crate::error::{Defect, ParseError};
use std::collections::BTreeMap;
use std::path::Path;

const SHA1: &str = "e1652b058195db3f5f754b7ab430652ae04a50b8";
const SHA256: &str = "8d9b5d3f1b6b8c0a7c7a1f2f6f8a9b0c1d2e3f405162738495a6b7c8d9e0f1a2";
const URL: &str = "http://software.bigfix.com/download/redist/unzip-5.52.exe";

fn canonical_map() -> BTreeMap<String, String> {
    [
        ("file_name", "unzip.exe"),
        ("file_size", "167936"),
        ("file_sha1", SHA1),
        ("download_url", URL),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

#[test]
fn statement_with_sha256() {
    let text = format!("prefetch unzip.exe sha1:{SHA1} size:167936 {URL} sha256:{SHA256}");
    let d = parse_text(&text).unwrap();
    assert_eq!(d.file_name, "unzip.exe");
    assert_eq!(d.file_size, 167936);
    assert_eq!(d.file_sha1, SHA1);
    assert_eq!(d.file_sha256.as_deref(), Some(SHA256));
    assert_eq!(d.download_url, URL);
    assert_eq!(d.prefetch_type, Some(PrefetchType::Statement));
    assert!(d.file_path.is_none());
}

#[test]
fn statement_tags_any_order_and_case() {
    let text = format!("PREFETCH unzip.exe {URL} SIZE:167936 SHA1:{}", SHA1.to_uppercase());
    let d = parse_text(&text).unwrap();
    assert_eq!(d.file_size, 167936);
    assert_eq!(d.file_sha1, SHA1);
    assert!(d.file_sha256.is_none());
}

#[test]
fn statement_without_name() {
    let text = format!("prefetch sha1:{SHA1} size:1 {URL}");
    match parse_text(&text) {
        Err(ParseError::Field(Defect::Missing("file_name"))) => {}
        other => panic!("expected missing file_name, got {other:?}"),
    }
}

#[test]
fn block_single_item() {
    let text = format!(
        "begin prefetch block\n  add prefetch item name=unzip.exe sha1={SHA1} size=167936 url={URL} sha256={SHA256}\n  collect prefetch items\nend prefetch block\n"
    );
    let raw = RawPrefetch::detect(&text).unwrap();
    assert!(matches!(raw, RawPrefetch::Block(_)));
    let d = parse(&raw).unwrap();
    assert_eq!(d.file_name, "unzip.exe");
    assert_eq!(d.file_size, 167936);
    assert_eq!(d.file_sha256.as_deref(), Some(SHA256));
    assert_eq!(d.prefetch_type, Some(PrefetchType::Block));
}

#[test]
fn block_url_with_query_keeps_equals() {
    let text = format!(
        "add prefetch item name=a.zip sha1={SHA1} size=10 url=https://example.com/a.zip?token=abc"
    );
    let d = parse_text(&text).unwrap();
    assert_eq!(d.download_url, "https://example.com/a.zip?token=abc");
}

#[test]
fn block_with_two_items_rejected() {
    let line = format!("add prefetch item name=a sha1={SHA1} size=1 url={URL}");
    let text = format!("begin prefetch block\n{line}\n{line}\nend prefetch block");
    assert!(matches!(parse_text(&text), Err(ParseError::ItemCount(2))));
}

#[test]
fn canonical_map_is_identity() {
    let raw = RawPrefetch::Map(canonical_map());
    let d = parse(&raw).unwrap();
    assert_eq!(d.file_name, "unzip.exe");
    assert_eq!(d.file_size, 167936);
    assert_eq!(d.file_sha1, SHA1);
    assert_eq!(d.download_url, URL);
    assert!(d.file_sha256.is_none());
    assert!(d.file_path.is_none());
    assert_eq!(d.prefetch_type, Some(PrefetchType::Dictionary));
}

#[test]
fn map_keeps_file_path() {
    let mut m = canonical_map();
    m.insert("file_path".to_string(), "/tmp/cache/unzip.exe".to_string());
    let d = parse(&RawPrefetch::Map(m)).unwrap();
    assert_eq!(d.file_path.as_deref(), Some(Path::new("/tmp/cache/unzip.exe")));
}

#[test]
fn json_map_accepts_numeric_size() {
    let text = format!(
        r#"{{"file_name": "unzip.exe", "file_size": 167936, "file_sha1": "{SHA1}", "download_url": "{URL}", "file_sha256": null}}"#
    );
    let raw = RawPrefetch::detect(&text).unwrap();
    let d = parse(&raw).unwrap();
    assert_eq!(d.file_size, 167936);
    assert!(d.file_sha256.is_none());
}

#[test]
fn json_map_rejects_nested_values() {
    let err = RawPrefetch::detect(r#"{"file_name": ["a"]}"#).unwrap_err();
    assert!(matches!(err, ParseError::Json(_)));
}

#[test]
fn non_numeric_size_rejected() {
    let mut m = canonical_map();
    m.insert("file_size".to_string(), "big".to_string());
    match parse(&RawPrefetch::Map(m)) {
        Err(ParseError::Field(Defect::BadSize(s))) => assert_eq!(s, "big"),
        other => panic!("expected BadSize, got {other:?}"),
    }
}

#[test]
fn short_sha1_rejected() {
    let mut m = canonical_map();
    m.insert("file_sha1".to_string(), "abc123".to_string());
    assert!(matches!(
        parse(&RawPrefetch::Map(m)),
        Err(ParseError::Field(Defect::BadSha1(_)))
    ));
}

#[test]
fn unrecognized_text() {
    assert!(matches!(
        RawPrefetch::detect("download this please"),
        Err(ParseError::Unrecognized(_))
    ));
}
