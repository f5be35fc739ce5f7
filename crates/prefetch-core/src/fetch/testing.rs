//! In-memory transport for tests.

use super::Transport;
use crate::error::FetchError;
use std::cell::Cell;
use std::collections::HashMap;
use std::io::Write;

enum Response {
    Body(Vec<u8>),
    /// Writes the partial body, then fails as if the server dropped mid-stream.
    Broken(Vec<u8>),
}

#[derive(Default)]
pub(crate) struct MemoryTransport {
    responses: HashMap<String, Response>,
    calls: Cell<usize>,
}

impl MemoryTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, body: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), Response::Body(body));
        self
    }

    pub(crate) fn failing(mut self, url: &str, partial: Vec<u8>) -> Self {
        self.responses
            .insert(url.to_string(), Response::Broken(partial));
        self
    }

    /// Number of `get` calls made so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Transport for MemoryTransport {
    fn get(&self, url: &str, sink: &mut dyn Write) -> Result<u64, FetchError> {
        self.calls.set(self.calls.get() + 1);
        match self.responses.get(url) {
            Some(Response::Body(body)) => {
                sink.write_all(body).map_err(FetchError::Write)?;
                Ok(body.len() as u64)
            }
            Some(Response::Broken(partial)) => {
                sink.write_all(partial).map_err(FetchError::Write)?;
                Err(FetchError::Http {
                    url: url.to_string(),
                    code: 502,
                })
            }
            None => Err(FetchError::Http {
                url: url.to_string(),
                code: 404,
            }),
        }
    }
}
