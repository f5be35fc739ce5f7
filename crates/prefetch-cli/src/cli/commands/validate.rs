//! `prefetch validate <input>` – structural check only.

use super::report;
use crate::cli::{input, Outcome};
use anyhow::Result;
use prefetch_core::{validate, Diagnostics, RawPrefetch};

pub fn run_validate(arg: &str) -> Result<Outcome> {
    let text = input::read_text(arg)?;
    let mut diagnostics = Diagnostics::new();
    let valid = match RawPrefetch::detect(&text) {
        Ok(raw) => validate::validate(&raw, &mut diagnostics),
        Err(e) => {
            eprintln!("warning: bad prefetch: {e}");
            false
        }
    };
    report(&diagnostics);
    if valid {
        println!("valid");
        Ok(Outcome::Success)
    } else {
        println!("invalid");
        Ok(Outcome::Invalid)
    }
}
