//! Verification pipeline: validate, parse, fetch and measure, reconcile.

use crate::config::PrefetchConfig;
use crate::descriptor::Descriptor;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{Defect, FetchError, ParseError, PrefetchError, ValidationError};
use crate::fetch::{self, CurlTransport, Transport};
use crate::parse::{self, RawPrefetch};
use crate::reconcile;
use crate::url_model::filename_from_url_path;
use crate::validate;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Runs verification passes against a transport, resolving relative destinations
/// against `work_dir`.
pub struct Prefetcher<T> {
    transport: T,
    work_dir: PathBuf,
}

impl Prefetcher<CurlTransport> {
    /// Curl-backed prefetcher; destinations default to `download_dir` or the current directory.
    pub fn from_config(cfg: &PrefetchConfig) -> std::io::Result<Self> {
        let work_dir = match &cfg.download_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        Ok(Self::new(CurlTransport::new(cfg), work_dir))
    }
}

/// Where a fetch lands. Ephemeral destinations are removed when this is dropped.
struct Destination {
    path: PathBuf,
    scratch: Option<TempDir>,
}

impl Destination {
    fn ephemeral(file_name: &str) -> Result<Self, FetchError> {
        let scratch = tempfile::Builder::new()
            .prefix("prefetch-")
            .tempdir()
            .map_err(|e| FetchError::io("create temp dir in", std::env::temp_dir(), e))?;
        let base = Path::new(file_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "download".into());
        Ok(Self {
            path: scratch.path().join(base),
            scratch: Some(scratch),
        })
    }

    fn saved(path: PathBuf) -> Self {
        Self {
            path,
            scratch: None,
        }
    }

    fn is_ephemeral(&self) -> bool {
        self.scratch.is_some()
    }
}

impl<T: Transport> Prefetcher<T> {
    pub fn new(transport: T, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            transport,
            work_dir: work_dir.into(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    fn destination(&self, claimed: &Descriptor, save_file: bool) -> Result<Destination, FetchError> {
        if save_file {
            Ok(Destination::saved(claimed.destination(&self.work_dir)))
        } else {
            Destination::ephemeral(&claimed.file_name)
        }
    }

    fn fetch(
        &self,
        url: &str,
        destination: &Destination,
        diagnostics: &mut Diagnostics,
    ) -> Result<Descriptor, FetchError> {
        let mut observed =
            fetch::fetch_and_regenerate(&self.transport, url, &destination.path, diagnostics)?;
        if destination.is_ephemeral() {
            observed.file_path = None;
        }
        Ok(observed)
    }

    /// Verify one prefetch: the artifact is fetched (or an existing local copy reused),
    /// measured, and compared with the claim.
    ///
    /// Returns the measured descriptor on a match and `Ok(None)` on a mismatch, which is
    /// also recorded as a `Mismatch` diagnostic. Structural and transport failures are errors.
    /// With `save_file == false` the artifact is fetched into a scratch directory that is
    /// removed before returning.
    pub fn prefetch(
        &self,
        raw: &RawPrefetch,
        save_file: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<Option<Descriptor>, PrefetchError> {
        if let Err(defect) = validate::check(raw) {
            diagnostics.push(Diagnostic::BadPrefetch(defect.clone()));
            return Err(ValidationError(defect).into());
        }
        let claimed = parse::parse(raw)?;

        let _span = tracing::info_span!("prefetch", file = %claimed.file_name).entered();
        let destination = self.destination(&claimed, save_file)?;
        tracing::debug!(save_file, "destination {}", destination.path.display());

        let observed = self.fetch(&claimed.download_url, &destination, diagnostics)?;
        let verdict = reconcile::judge(&claimed, &observed, diagnostics);
        if verdict.is_match() {
            tracing::info!("prefetches match");
            return Ok(Some(observed));
        }

        diagnostics.push(Diagnostic::Mismatch {
            file_name: claimed.file_name.clone(),
            fields: verdict.mismatched,
        });
        Ok(None)
    }

    /// Produce an upgraded descriptor carrying SHA-256, without keeping the artifact.
    ///
    /// The result keeps the claimed notation in `prefetch_type`. A mismatch is an error
    /// here since there is no trustworthy descriptor to return.
    pub fn add_strong_hash(
        &self,
        raw: &RawPrefetch,
        diagnostics: &mut Diagnostics,
    ) -> Result<Descriptor, PrefetchError> {
        let claimed = parse::parse(raw)?;
        let mut upgraded = self
            .prefetch(raw, false, diagnostics)?
            .ok_or(PrefetchError::Mismatch)?;
        upgraded.prefetch_type = claimed.prefetch_type;
        Ok(upgraded)
    }

    /// Generate a descriptor for a bare URL, naming the file after the last path segment.
    pub fn from_url(
        &self,
        url: &str,
        save_file: bool,
        diagnostics: &mut Diagnostics,
    ) -> Result<Descriptor, PrefetchError> {
        let file_name = filename_from_url_path(url)
            .ok_or(ParseError::Field(Defect::Missing("file_name")))?;
        let destination = if save_file {
            Destination::saved(self.work_dir.join(&file_name))
        } else {
            Destination::ephemeral(&file_name)?
        };
        Ok(self.fetch(url, &destination, diagnostics)?)
    }
}
