//! Pagination module
//!
//! Supports: page-number pagination driven by a declared total
//!
//! # Overview
//!
//! Paginated endpoints return one page per request and declare the size of
//! the whole result (`total`, `numthreads`, `count`, `totalitems`). The
//! [`PageNumberPaginator`] decides after every page whether another one is
//! needed; [`Paginated`] tells it what a page holds and how pages merge.
//!
//! Pages are merged in page order. Scalar fields always come from the first
//! page.

mod merge;
mod paginator;
mod types;

pub use paginator::PageNumberPaginator;
pub use types::{NextPage, Paginated, PaginationState, StopReason};

#[cfg(test)]
mod tests;
