//! Execution engine module
//!
//! Runs requests against the transport, off the caller's task.
//!
//! # Overview
//!
//! The engine module provides:
//! - `Engine` - fetches, maps and paginates a request into a `Response`
//! - `CallHandle` - the future a submitted call resolves through
//! - `ExecutionStats` - counters shared by all calls of one engine
//!
//! Pages of one request are fetched strictly one after another. Independent
//! requests run concurrently on the tokio runtime and share nothing but the
//! transport and the atomic counters.

mod types;

pub use types::{Callback, CallHandle, CallbackFailure, ExecutionStats, StatsSnapshot};

use crate::config::ClientConfig;
use crate::mapper::{FromXml, Mapper};
use crate::pagination::{NextPage, PageNumberPaginator, Paginated, PaginationState};
use crate::request::Request;
use crate::response::{Response, ResponseError};
use crate::transport::Transport;
use futures::future::BoxFuture;
use std::collections::VecDeque;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{debug, error, info};

/// Callback failures kept for inspection; older ones are dropped
pub const MAX_RECORDED_CALLBACK_FAILURES: usize = 100;

/// Strategy a submitted call runs with
pub(crate) type Runner<T> = fn(Engine, Request) -> BoxFuture<'static, Response<T>>;

/// One fetch, one document
pub(crate) fn run_single<T>(engine: Engine, request: Request) -> BoxFuture<'static, Response<T>>
where
    T: FromXml + Send + 'static,
{
    Box::pin(async move { engine.execute(&request).await })
}

/// Sequential page walk under the request's pagination mode
pub(crate) fn run_paginated<T>(engine: Engine, request: Request) -> BoxFuture<'static, Response<T>>
where
    T: FromXml + Paginated + Send + 'static,
{
    Box::pin(async move { engine.execute_paginated(&request).await })
}

/// Execution engine
#[derive(Clone)]
pub struct Engine {
    transport: Arc<dyn Transport>,
    mapper: Mapper,
    config: Arc<ClientConfig>,
    stats: Arc<ExecutionStats>,
    callback_failures: Arc<Mutex<VecDeque<CallbackFailure>>>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("mapper", &self.mapper)
            .field("stats", &self.stats.snapshot())
            .finish_non_exhaustive()
    }
}

impl Engine {
    /// Create an engine over an injected transport
    pub fn new(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            transport,
            mapper: Mapper::new(config.enum_policy),
            config: Arc::new(config),
            stats: Arc::new(ExecutionStats::new()),
            callback_failures: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn mapper(&self) -> Mapper {
        self.mapper
    }

    /// Get statistics
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// The most recent completion callback failures, oldest first
    ///
    /// At most [`MAX_RECORDED_CALLBACK_FAILURES`] are kept; the stats
    /// counter still counts every failure.
    pub fn callback_failures(&self) -> Vec<CallbackFailure> {
        self.callback_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    // ------------------------------------------------------------------------
    // Submission
    // ------------------------------------------------------------------------

    /// Spawn a call and return its handle immediately
    pub(crate) fn submit<T>(
        &self,
        request: Request,
        run: Runner<T>,
        on_complete: Option<Callback<T>>,
    ) -> CallHandle<T>
    where
        T: Send + 'static,
    {
        let engine = self.clone();
        let endpoint = request.kind();
        let task = async move {
            let response = run(engine.clone(), request).await;
            if let Some(callback) = on_complete {
                engine.invoke_callback(endpoint, callback, &response);
            }
            response
        };
        CallHandle::new(tokio::spawn(task))
    }

    fn invoke_callback<T>(
        &self,
        endpoint: crate::request::EndpointKind,
        callback: Callback<T>,
        response: &Response<T>,
    ) {
        let message = match catch_unwind(AssertUnwindSafe(|| callback(response))) {
            Ok(Ok(())) => return,
            Ok(Err(e)) => format!("{e:#}"),
            Err(panic) => panic_message(panic.as_ref()),
        };

        error!(%endpoint, %message, "Completion callback failed");
        self.stats.add_callback_failure();
        let mut failures = self
            .callback_failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if failures.len() == MAX_RECORDED_CALLBACK_FAILURES {
            failures.pop_front();
        }
        failures.push_back(CallbackFailure { endpoint, message });
    }

    // ------------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------------

    /// Fetch and map a single document
    pub async fn execute<T: FromXml>(&self, request: &Request) -> Response<T> {
        self.stats.add_call();
        let response = match self.fetch_and_map(request).await {
            Ok(data) => Response::Success(data),
            Err(err) => Response::Error(err),
        };
        self.finish(response)
    }

    /// Fetch every page the request's pagination mode allows and merge them
    pub async fn execute_paginated<T: FromXml + Paginated>(&self, request: &Request) -> Response<T> {
        self.stats.add_call();
        let response = self.walk_pages(request).await;
        self.finish(response)
    }

    fn finish<T>(&self, response: Response<T>) -> Response<T> {
        if let Some(err) = response.error() {
            debug!(kind = %err.kind, message = %err.message, "Call failed");
            self.stats.add_failed_call();
        }
        response
    }

    async fn walk_pages<T: FromXml + Paginated>(&self, request: &Request) -> Response<T> {
        let paginator = PageNumberPaginator::for_request(request);
        let mut state = PaginationState::starting_at(request.start_page());

        let mut aggregate: T = match self.fetch_and_map(request).await {
            Ok(first) => first,
            Err(err) => return Response::Error(err),
        };
        let mut next = paginator.process_page(
            &mut state,
            aggregate.page_items(),
            aggregate.declared_total(),
        );

        while let NextPage::Continue { page } = next {
            let page_data: T = match self.fetch_and_map(&request.for_page(page)).await {
                Ok(data) => data,
                Err(err) => return Response::Error(err.aborted_at(page)),
            };
            next = paginator.process_page(
                &mut state,
                page_data.page_items(),
                page_data.declared_total(),
            );
            aggregate.merge_page(page_data);
        }

        if let NextPage::Done(reason) = next {
            info!(
                kind = %request.kind(),
                pages = state.pages_fetched,
                items = state.observed,
                total = ?state.declared_total,
                %reason,
                "Pagination complete"
            );
        }
        Response::Success(aggregate)
    }

    async fn fetch_and_map<T: FromXml>(&self, request: &Request) -> Result<T, ResponseError> {
        let url = request.url(&self.config).map_err(ResponseError::from)?;
        debug!(kind = %request.kind(), %url, "Fetching");

        let body = self.transport.fetch(&url).await.map_err(ResponseError::from)?;
        self.stats.add_page();

        let mapped = self.mapper.map::<T>(request.kind(), &body);
        match mapped {
            Ok(data) => Ok(data),
            Err(err) => Err(ResponseError::mapping(err, body)),
        }
    }
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = panic.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}
