//! Engine types
//!
//! Call handles, completion callbacks and execution statistics.

use crate::error::{Error, Result};
use crate::request::EndpointKind;
use crate::response::Response;
use serde::Serialize;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::task::{Context, Poll};
use tokio::task::JoinHandle;

/// Completion callback, invoked once with the final response
pub type Callback<T> = Box<dyn FnOnce(&Response<T>) -> anyhow::Result<()> + Send + 'static>;

/// Handle to a submitted call
///
/// Resolves to the call's [`Response`]. The outer `Result` only fails when
/// the call never produced a response: it was cancelled or its task
/// panicked.
#[derive(Debug)]
#[must_use = "a call handle does nothing unless awaited or cancelled"]
pub struct CallHandle<T> {
    handle: JoinHandle<Response<T>>,
    cancelled: bool,
}

impl<T> CallHandle<T> {
    pub(crate) fn new(handle: JoinHandle<Response<T>>) -> Self {
        Self {
            handle,
            cancelled: false,
        }
    }

    /// Abort the call. No further page is requested; awaiting the handle
    /// yields [`Error::Cancelled`].
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether the call has finished, successfully or not
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for CallHandle<T> {
    type Output = Result<Response<T>>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.cancelled {
            return Poll::Ready(Err(Error::Cancelled));
        }
        Pin::new(&mut self.handle).poll(cx).map(|joined| match joined {
            Ok(response) => Ok(response),
            Err(e) if e.is_cancelled() => Err(Error::Cancelled),
            Err(e) => Err(Error::execution(e.to_string())),
        })
    }
}

/// A completion callback that returned an error or panicked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackFailure {
    pub endpoint: EndpointKind,
    pub message: String,
}

/// Counters shared by every call of an engine
#[derive(Debug, Default)]
pub struct ExecutionStats {
    calls: AtomicU64,
    pages_fetched: AtomicU64,
    failed_calls: AtomicU64,
    callback_failures: AtomicU64,
}

impl ExecutionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_call(&self) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_page(&self) {
        self.pages_fetched.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_failed_call(&self) {
        self.failed_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn add_callback_failure(&self) {
        self.callback_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Point-in-time copy of the counters
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            calls: self.calls.load(Ordering::Relaxed),
            pages_fetched: self.pages_fetched.load(Ordering::Relaxed),
            failed_calls: self.failed_calls.load(Ordering::Relaxed),
            callback_failures: self.callback_failures.load(Ordering::Relaxed),
        }
    }
}

/// Statistics from an engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    /// Calls started
    pub calls: u64,
    /// Documents fetched successfully, across all pages
    pub pages_fetched: u64,
    /// Calls that resolved to an error response
    pub failed_calls: u64,
    /// Completion callbacks that failed
    pub callback_failures: u64,
}
