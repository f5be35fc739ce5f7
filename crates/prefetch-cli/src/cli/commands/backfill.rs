//! `prefetch backfill <input>` – add SHA-256 to an existing prefetch.

use super::report;
use crate::cli::{input, Outcome};
use anyhow::{Context, Result};
use prefetch_core::descriptor::{render, Notation};
use prefetch_core::fetch::Transport;
use prefetch_core::{Diagnostics, Prefetcher};

pub fn run_backfill<T: Transport>(
    prefetcher: &Prefetcher<T>,
    arg: &str,
    format: Option<Notation>,
) -> Result<Outcome> {
    let raw = input::read_prefetch(arg)?;
    let mut diagnostics = Diagnostics::new();
    let result = prefetcher.add_strong_hash(&raw, &mut diagnostics);
    report(&diagnostics);

    let upgraded = result.context("backfill failed")?;
    let notation = format.unwrap_or_else(|| Notation::for_type(upgraded.prefetch_type));
    println!("{}", render(&upgraded, notation));
    Ok(Outcome::Success)
}
