//! Pagination types and traits

use std::fmt;

/// Aggregates that span several pages
pub trait Paginated: Sized {
    /// Size of the whole result as declared by the page, if any
    fn declared_total(&self) -> Option<u64>;

    /// Number of items this page carries
    fn page_items(&self) -> u64;

    /// Append the collections of the following page. Scalars stay as they
    /// are on `self`.
    fn merge_page(&mut self, next: Self);
}

/// Result of the next page computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page number next
    Continue { page: u32 },
    /// No more pages
    Done(StopReason),
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue { .. })
    }
}

/// Why pagination ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The page cap was reached (always 1 for unpaginated calls)
    PageCap,
    /// No total declared, or a total of zero
    NoTotal,
    /// Cumulative items reached the declared total
    TotalReached,
    /// The page carried no items
    EmptyPage,
    /// The page is the last one implied by total and page size
    LastPage,
    /// The page carried fewer items than the page size
    ShortPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::PageCap => "page cap reached",
            Self::NoTotal => "no declared total",
            Self::TotalReached => "declared total reached",
            Self::EmptyPage => "empty page",
            Self::LastPage => "last page",
            Self::ShortPage => "short page",
        };
        f.write_str(reason)
    }
}

/// Tracks pagination state during iteration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaginationState {
    /// Number of the page processed last
    pub page: u32,
    /// Pages processed so far
    pub pages_fetched: u32,
    /// Items observed across all pages
    pub observed: u64,
    /// Total declared by the first page
    pub declared_total: Option<u64>,
}

impl PaginationState {
    /// State before the first page, which will be `start_page`
    pub fn starting_at(start_page: u32) -> Self {
        Self {
            page: start_page,
            ..Default::default()
        }
    }

    /// Record a processed page
    pub fn record_page(&mut self, page_items: u64, declared_total: Option<u64>) {
        if self.pages_fetched == 0 {
            self.declared_total = declared_total;
        }
        self.pages_fetched += 1;
        self.observed += page_items;
    }
}
