//! `prefetch from-url <url>` – generate a prefetch for a URL.

use super::report;
use crate::cli::Outcome;
use anyhow::{Context, Result};
use prefetch_core::descriptor::{render, Notation};
use prefetch_core::fetch::Transport;
use prefetch_core::{Diagnostics, Prefetcher};

pub fn run_from_url<T: Transport>(
    prefetcher: &Prefetcher<T>,
    url: &str,
    save_file: bool,
    notation: Notation,
) -> Result<Outcome> {
    let mut diagnostics = Diagnostics::new();
    let result = prefetcher.from_url(url, save_file, &mut diagnostics);
    report(&diagnostics);

    let generated = result.with_context(|| format!("generate prefetch for {url}"))?;
    println!("{}", render(&generated, notation));
    Ok(Outcome::Success)
}
