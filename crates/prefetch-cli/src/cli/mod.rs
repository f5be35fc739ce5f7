//! CLI for verifying BigFix prefetch descriptors.

mod commands;
mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use prefetch_core::config::{self, PrefetchConfig};
use prefetch_core::descriptor::Notation;
use prefetch_core::Prefetcher;
use std::path::PathBuf;
use std::process::ExitCode;

use commands::{run_backfill, run_checksum, run_from_url, run_validate, run_verify};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "prefetch")]
#[command(about = "Verify that downloads match their BigFix prefetch descriptors", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of the XDG config path.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

/// How a command finished; mapped to the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Input failed validation.
    Invalid,
    /// The artifact does not match its prefetch.
    Mismatch,
}

impl From<Outcome> for ExitCode {
    fn from(o: Outcome) -> Self {
        match o {
            Outcome::Success => ExitCode::SUCCESS,
            Outcome::Invalid => ExitCode::from(1),
            Outcome::Mismatch => ExitCode::from(2),
        }
    }
}

/// Notation used when printing a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Statement,
    Block,
    Json,
}

impl From<OutputFormat> for Notation {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Statement => Notation::Statement,
            OutputFormat::Block => Notation::Block,
            OutputFormat::Json => Notation::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download (or reuse) the file a prefetch describes and verify size and hashes.
    Verify {
        /// Prefetch statement, block, or JSON map; `@FILE` reads a file, `-` reads stdin.
        input: String,
        /// Verify without keeping the downloaded file.
        #[arg(long)]
        no_save: bool,
    },

    /// Check the structure of a prefetch without any network access.
    Validate {
        /// Prefetch statement, block, or JSON map; `@FILE` reads a file, `-` reads stdin.
        input: String,
    },

    /// Print the prefetch with a SHA-256 added, in its original notation unless `--format` is given.
    Backfill {
        /// Prefetch statement, block, or JSON map; `@FILE` reads a file, `-` reads stdin.
        input: String,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Generate a prefetch for a URL by downloading and measuring it.
    FromUrl {
        /// Direct HTTP/HTTPS URL.
        url: String,
        /// Keep the downloaded file in the download directory.
        #[arg(long)]
        save: bool,
        #[arg(long, value_enum, default_value = "statement")]
        format: OutputFormat,
    },

    /// Print size, SHA-1 and SHA-256 of a local file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

fn prefetcher(cfg: &PrefetchConfig) -> Result<Prefetcher<prefetch_core::fetch::CurlTransport>> {
    Prefetcher::from_config(cfg).context("resolve working directory")
}

impl CliCommand {
    pub fn run_from_args() -> Result<Outcome> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Verify { input, no_save } => {
                run_verify(&prefetcher(&cfg)?, &input, !no_save)
            }
            CliCommand::Validate { input } => run_validate(&input),
            CliCommand::Backfill { input, format } => {
                run_backfill(&prefetcher(&cfg)?, &input, format.map(Notation::from))
            }
            CliCommand::FromUrl { url, save, format } => {
                run_from_url(&prefetcher(&cfg)?, &url, save, format.into())
            }
            CliCommand::Checksum { path } => run_checksum(&path),
        }
    }
}

#[cfg(test)]
mod tests;
