//! `prefetch verify <input>` – fetch, measure and compare.

use super::report;
use crate::cli::{input, Outcome};
use anyhow::{Context, Result};
use prefetch_core::fetch::Transport;
use prefetch_core::{Diagnostics, Prefetcher};

pub fn run_verify<T: Transport>(
    prefetcher: &Prefetcher<T>,
    arg: &str,
    save_file: bool,
) -> Result<Outcome> {
    let raw = input::read_prefetch(arg)?;
    let mut diagnostics = Diagnostics::new();
    let result = prefetcher.prefetch(&raw, save_file, &mut diagnostics);
    report(&diagnostics);

    match result.context("verification failed")? {
        Some(observed) => {
            println!("{}", serde_json::to_string_pretty(&observed)?);
            Ok(Outcome::Success)
        }
        None => {
            eprintln!("prefetches do not match; either the prefetch or the download is invalid");
            Ok(Outcome::Mismatch)
        }
    }
}
