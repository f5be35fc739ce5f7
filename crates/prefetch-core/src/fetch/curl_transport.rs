//! Single-stream HTTP GET via libcurl.

use super::Transport;
use crate::config::PrefetchConfig;
use crate::error::FetchError;
use std::io::{self, Write};
use std::time::Duration;

/// libcurl-backed transport configured from `PrefetchConfig`.
#[derive(Debug, Clone)]
pub struct CurlTransport {
    connect_timeout: Duration,
    timeout: Duration,
    max_redirections: u32,
    low_speed_limit: u32,
    low_speed_time: Duration,
    user_agent: Option<String>,
    max_recv_speed: Option<u64>,
}

impl CurlTransport {
    pub fn new(cfg: &PrefetchConfig) -> Self {
        Self {
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
            max_redirections: cfg.max_redirections,
            low_speed_limit: cfg.low_speed_limit,
            low_speed_time: Duration::from_secs(cfg.low_speed_time_secs),
            user_agent: cfg.user_agent.clone(),
            max_recv_speed: cfg.max_bytes_per_sec,
        }
    }

    fn configure(&self, easy: &mut curl::easy::Easy, url: &str) -> Result<(), curl::Error> {
        easy.url(url)?;
        easy.follow_location(true)?;
        easy.max_redirections(self.max_redirections)?;
        easy.connect_timeout(self.connect_timeout)?;
        easy.timeout(self.timeout)?;
        if self.low_speed_limit > 0 {
            easy.low_speed_limit(self.low_speed_limit)?;
            easy.low_speed_time(self.low_speed_time)?;
        }
        if let Some(ua) = &self.user_agent {
            easy.useragent(ua)?;
        }
        if let Some(speed) = self.max_recv_speed {
            easy.max_recv_speed(speed)?;
        }
        Ok(())
    }
}

impl Default for CurlTransport {
    fn default() -> Self {
        Self::new(&PrefetchConfig::default())
    }
}

impl Transport for CurlTransport {
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        let transport_err = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let mut easy = curl::easy::Easy::new();
        self.configure(&mut easy, url).map_err(transport_err)?;

        let mut written = 0u64;
        let mut write_error: Option<io::Error> = None;
        let performed = {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| match sink.write_all(data) {
                    Ok(()) => {
                        written += data.len() as u64;
                        Ok(data.len())
                    }
                    Err(e) => {
                        tracing::warn!("download write failed: {}", e);
                        write_error = Some(e);
                        Ok(0) // abort transfer
                    }
                })
                .map_err(transport_err)?;
            transfer.perform()
        };
        if let Some(e) = write_error {
            return Err(FetchError::Write(e));
        }
        performed.map_err(transport_err)?;

        // Non-HTTP schemes (e.g. file://) report 0.
        let code = easy.response_code().map_err(transport_err)?;
        if code != 0 && !(200..300).contains(&code) {
            return Err(FetchError::Http {
                url: url.to_string(),
                code,
            });
        }
        tracing::debug!(url, code, bytes = written, "GET complete");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_url(path: &std::path::Path) -> String {
        url::Url::from_file_path(path).unwrap().to_string()
    }

    #[test]
    fn reads_file_url() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("source.bin");
        std::fs::write(&src, b"payload over curl").unwrap();

        let mut out = Vec::new();
        let n = CurlTransport::default()
            .get(&file_url(&src), &mut out)
            .unwrap();
        assert_eq!(n, 17);
        assert_eq!(out, b"payload over curl");
    }

    #[test]
    fn missing_file_url_is_transport_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = CurlTransport::default()
            .get(&file_url(&dir.path().join("absent.bin")), &mut out)
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(out.is_empty());
    }

    #[test]
    fn unsupported_scheme_is_transport_error() {
        let mut out = Vec::new();
        let err = CurlTransport::default()
            .get("notascheme://example.com/file.bin", &mut out)
            .unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
    }
}
