//! Command handlers run against `file://` URLs through the curl transport.

use crate::cli::commands::{run_backfill, run_checksum, run_validate, run_verify};
use prefetch_core::checksum::checksums_path;
use prefetch_core::fetch::CurlTransport;
use crate::cli::Outcome;
use prefetch_core::Prefetcher;
use std::path::Path;

fn file_url(path: &Path) -> String {
    url::Url::from_file_path(path).unwrap().to_string()
}

struct Fixture {
    _dir: tempfile::TempDir,
    source: std::path::PathBuf,
    work: std::path::PathBuf,
}

fn fixture() -> Fixture {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("source.bin");
    std::fs::write(&source, vec![42u8; 5000]).unwrap();
    let work = dir.path().join("work");
    std::fs::create_dir(&work).unwrap();
    Fixture {
        _dir: dir,
        source,
        work,
    }
}

fn statement(name: &str, size: u64, sha1: &str, url: &str) -> String {
    format!("prefetch {name} sha1:{sha1} size:{size} {url}")
}

#[test]
fn verify_match_saves_file() {
    let fx = fixture();
    let sums = checksums_path(&fx.source).unwrap();
    let prefetcher = Prefetcher::new(CurlTransport::default(), &fx.work);
    let input = statement("copy.bin", sums.size, &sums.sha1, &file_url(&fx.source));

    let code = run_verify(&prefetcher, &input, true).unwrap();

    assert_eq!(code, Outcome::Success);
    assert!(fx.work.join("copy.bin").is_file());
}

#[test]
fn verify_mismatch_exits_with_two() {
    let fx = fixture();
    let sums = checksums_path(&fx.source).unwrap();
    let prefetcher = Prefetcher::new(CurlTransport::default(), &fx.work);
    let input = statement("copy.bin", sums.size + 1, &sums.sha1, &file_url(&fx.source));

    let code = run_verify(&prefetcher, &input, false).unwrap();

    assert_eq!(code, Outcome::Mismatch);
    assert!(!fx.work.join("copy.bin").exists());
}

#[test]
fn verify_invalid_input_is_an_error() {
    let fx = fixture();
    let prefetcher = Prefetcher::new(CurlTransport::default(), &fx.work);
    let input = r#"{"file_name": "a.bin", "file_size": 1, "file_sha1": "abc"}"#;
    assert!(run_verify(&prefetcher, input, true).is_err());
}

#[test]
fn backfill_succeeds_without_saving() {
    let fx = fixture();
    let sums = checksums_path(&fx.source).unwrap();
    let prefetcher = Prefetcher::new(CurlTransport::default(), &fx.work);
    let input = statement("copy.bin", sums.size, &sums.sha1, &file_url(&fx.source));

    let code = run_backfill(&prefetcher, &input, None).unwrap();

    assert_eq!(code, Outcome::Success);
    assert!(std::fs::read_dir(&fx.work).unwrap().next().is_none());
}

#[test]
fn validate_reports_status() {
    let good = statement(
        "a.bin",
        10,
        "e1652b058195db3f5f754b7ab430652ae04a50b8",
        "http://example.com/a.bin",
    );
    assert_eq!(run_validate(&good).unwrap(), Outcome::Success);
    assert_eq!(run_validate("prefetch a.bin size:10").unwrap(), Outcome::Invalid);
    assert_eq!(run_validate("not a prefetch").unwrap(), Outcome::Invalid);
}

#[test]
fn checksum_missing_file_is_an_error() {
    let fx = fixture();
    assert_eq!(run_checksum(&fx.source).unwrap(), Outcome::Success);
    assert!(run_checksum(&fx.work.join("absent")).is_err());
}
