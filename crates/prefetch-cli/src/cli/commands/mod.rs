//! CLI command handlers, one per file.

mod backfill;
mod checksum;
mod from_url;
mod validate;
mod verify;

pub use backfill::run_backfill;
pub use checksum::run_checksum;
pub use from_url::run_from_url;
pub use validate::run_validate;
pub use verify::run_verify;

use prefetch_core::Diagnostics;

/// Print recorded diagnostics to stderr.
fn report(diagnostics: &Diagnostics) {
    for d in diagnostics {
        eprintln!("warning: {d}");
    }
}
