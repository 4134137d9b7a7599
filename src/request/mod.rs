//! Request module
//!
//! Builds immutable descriptions of calls against the XML API.
//!
//! # Overview
//!
//! - [`EndpointKind`] - the fixed set of query shapes and their root elements
//! - [`Request`] - endpoint, parameters and pagination mode
//! - Per-endpoint constructors (`Request::things`, `Request::user`, ...) that
//!   validate their arguments before any I/O happens

mod endpoints;
mod types;

pub use endpoints::{
    CollectionOptions, GuildOptions, PlaysOptions, SearchOptions, ThingOptions, ThreadOptions,
    UserOptions, THING_PAGE_SIZE_RANGE,
};
pub use types::{ApiRoot, EndpointKind, PaginationMode, Request, DEFAULT_THING_PAGE_SIZE};
