//! Tracing setup for prefetch runs: an append-only log under the XDG state dir,
//! or stderr when that cannot be opened.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const APP_PREFIX: &str = "bigfix-prefetch";
const DEFAULT_FILTER: &str = "info,prefetch_core=debug,prefetch=debug";

/// Per-event sink. Falls back to stderr for events where the log handle fails to clone.
enum LogSink {
    File(std::fs::File),
    Stderr,
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            LogSink::File(f) => f.write(buf),
            LogSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            LogSink::File(f) => f.flush(),
            LogSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Send verification events to `$XDG_STATE_HOME/bigfix-prefetch/bigfix-prefetch.log`.
///
/// Fails when the state dir is unwritable or a subscriber is already installed; the CLI
/// then calls `init_logging_stderr`.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(APP_PREFIX)?;
    let log_dir = xdg_dirs.get_state_home().join(APP_PREFIX);

    fs::create_dir_all(&log_dir)?;
    let log_file_path: PathBuf = log_dir.join(format!("{APP_PREFIX}.log"));

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    struct LogFile(std::fs::File);

    impl<'a> MakeWriter<'a> for LogFile {
        type Writer = LogSink;

        fn make_writer(&'a self) -> Self::Writer {
            self.0
                .try_clone()
                .map(LogSink::File)
                .unwrap_or(LogSink::Stderr)
        }
    }

    let writer: BoxMakeWriter = BoxMakeWriter::new(LogFile(file));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    tracing::info!(log = %log_file_path.display(), "prefetch logging started");

    Ok(())
}

/// Stderr-only subscriber with the same filter. A second install is silently ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}
