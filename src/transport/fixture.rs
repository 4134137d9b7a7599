//! Fixture-replay transport
//!
//! Serves fixed documents keyed by URL. Query parameters are compared
//! order-insensitively, so `?id=1&type=x` and `?type=x&id=1` hit the same
//! fixture.

use super::Transport;
use crate::error::{Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone)]
enum Reply {
    Document(String),
    Status { status: u16, body: String },
}

/// Transport double replaying canned responses
#[derive(Debug, Default)]
pub struct FixtureTransport {
    replies: HashMap<String, Reply>,
    delay: Option<Duration>,
    fetches: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl FixtureTransport {
    /// Create an empty fixture transport
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for `url`
    #[must_use]
    pub fn with_document(mut self, url: &str, body: impl Into<String>) -> Self {
        self.replies
            .insert(canonical_url(url), Reply::Document(body.into()));
        self
    }

    /// Fail `url` with an HTTP status
    #[must_use]
    pub fn with_status(mut self, url: &str, status: u16, body: impl Into<String>) -> Self {
        self.replies.insert(
            canonical_url(url),
            Reply::Status {
                status,
                body: body.into(),
            },
        );
        self
    }

    /// Delay every fetch, to simulate latency
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of fetches served so far, including failures
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// URLs requested so far, in order
    pub fn requested_urls(&self) -> Vec<String> {
        self.requested
            .lock()
            .map(|urls| urls.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Transport for FixtureTransport {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(url.to_string());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match self.replies.get(&canonical_url(url)) {
            Some(Reply::Document(body)) => Ok(body.clone()),
            Some(Reply::Status { status, body }) => Err(Error::http_status(*status, body.clone())),
            None => Err(Error::FixtureNotFound {
                url: url.to_string(),
            }),
        }
    }
}

/// Normalize a URL so that query parameter order does not matter
pub fn canonical_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let mut pairs: Vec<(String, String)> = parsed.query_pairs().into_owned().collect();
    pairs.sort();

    if pairs.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(&pairs);
    }
    parsed.to_string()
}
