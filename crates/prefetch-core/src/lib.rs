pub mod config;
pub mod logging;

pub mod checksum;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod parse;
pub mod prefetch;
pub mod reconcile;
pub mod url_model;
pub mod validate;

pub use descriptor::{Descriptor, PrefetchType};
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::PrefetchError;
pub use parse::RawPrefetch;
pub use prefetch::Prefetcher;
