//! Transport module
//!
//! The transport is the only I/O boundary of the client: given a fully
//! formed URL it returns the raw document body or a transport failure.
//!
//! # Implementations
//!
//! - **HttpTransport**: reqwest with retries, backoff and a window rate limit
//! - **FixtureTransport**: replays canned documents, for tests and demos

mod client;
mod fixture;
mod rate_limit;

pub use client::{HttpTransport, HttpTransportConfig, HttpTransportConfigBuilder};
pub use fixture::{canonical_url, FixtureTransport};
pub use rate_limit::{RateLimiter, RateLimiterConfig};

use crate::error::Result;
use async_trait::async_trait;

/// Performs one fetch of a fully formed URL.
///
/// Implementations must be safe to call from many concurrently running
/// requests.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Fetch the body behind `url`
    async fn fetch(&self, url: &str) -> Result<String>;
}

#[cfg(test)]
mod tests;
