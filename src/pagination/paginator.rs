//! Page number paginator

use super::types::{NextPage, PaginationState, StopReason};
use crate::request::Request;

/// Page-number pagination with total-driven stop conditions
///
/// Common pattern: `?page=2`, with the page size fixed by the endpoint or
/// by a `pagesize` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageNumberPaginator {
    /// Items per full page
    pub page_size: Option<u32>,
    /// Maximum pages to fetch, including the first; `None` is unbounded
    pub page_cap: Option<u32>,
}

impl PageNumberPaginator {
    pub fn new(page_size: Option<u32>, page_cap: Option<u32>) -> Self {
        Self {
            page_size,
            page_cap,
        }
    }

    /// Paginator for a request's endpoint and pagination mode
    pub fn for_request(request: &Request) -> Self {
        Self::new(request.page_size(), request.pagination().page_cap())
    }

    /// Record the page described by `state.page` and decide what comes next
    pub fn process_page(
        &self,
        state: &mut PaginationState,
        page_items: u64,
        declared_total: Option<u64>,
    ) -> NextPage {
        state.record_page(page_items, declared_total);

        if self.page_cap.is_some_and(|cap| state.pages_fetched >= cap) {
            return NextPage::Done(StopReason::PageCap);
        }

        let total = match state.declared_total {
            None | Some(0) => return NextPage::Done(StopReason::NoTotal),
            Some(total) => total,
        };

        if state.observed >= total {
            return NextPage::Done(StopReason::TotalReached);
        }

        if page_items == 0 {
            return NextPage::Done(StopReason::EmptyPage);
        }

        if let Some(size) = self.page_size.filter(|s| *s > 0) {
            let last_page = total.div_ceil(u64::from(size));
            if u64::from(state.page) >= last_page {
                return NextPage::Done(StopReason::LastPage);
            }
            if page_items < u64::from(size) {
                return NextPage::Done(StopReason::ShortPage);
            }
        }

        state.page += 1;
        NextPage::Continue { page: state.page }
    }
}
