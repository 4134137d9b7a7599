//! Tests for pagination module

use super::*;
use crate::mapper::Mapper;
use crate::model::{Forum, Things, User};
use crate::request::{EndpointKind, PaginationMode, Request, ThingOptions};
use pretty_assertions::assert_eq;
use test_case::test_case;

// ============================================================================
// Paginator Tests
// ============================================================================

fn exhaustive(page_size: u32) -> PageNumberPaginator {
    PageNumberPaginator::new(Some(page_size), None)
}

#[test]
fn test_single_page_mode_stops_after_first_page() {
    let paginator = PageNumberPaginator::new(Some(50), Some(1));
    let mut state = PaginationState::starting_at(1);
    let next = paginator.process_page(&mut state, 50, Some(500));
    assert_eq!(next, NextPage::Done(StopReason::PageCap));
    assert_eq!(state.pages_fetched, 1);
}

#[test_case(None; "no total")]
#[test_case(Some(0); "zero total")]
fn test_missing_total_ends_after_first_page(total: Option<u64>) {
    let mut state = PaginationState::starting_at(1);
    let next = exhaustive(50).process_page(&mut state, 0, total);
    assert_eq!(next, NextPage::Done(StopReason::NoTotal));
}

#[test]
fn test_walks_until_total_reached() {
    let paginator = exhaustive(1000);
    let mut state = PaginationState::starting_at(1);

    assert_eq!(
        paginator.process_page(&mut state, 1000, Some(2200)),
        NextPage::Continue { page: 2 }
    );
    assert_eq!(
        paginator.process_page(&mut state, 1000, Some(2200)),
        NextPage::Continue { page: 3 }
    );
    assert_eq!(
        paginator.process_page(&mut state, 200, Some(2200)),
        NextPage::Done(StopReason::TotalReached)
    );
    assert_eq!(state.pages_fetched, 3);
    assert_eq!(state.observed, 2200);
}

#[test]
fn test_total_comes_from_first_page() {
    let paginator = exhaustive(10);
    let mut state = PaginationState::starting_at(1);
    paginator.process_page(&mut state, 10, Some(30));
    // A later page declaring a different total does not move the target
    paginator.process_page(&mut state, 10, Some(1000));
    assert_eq!(state.declared_total, Some(30));
    assert_eq!(
        paginator.process_page(&mut state, 10, Some(1000)),
        NextPage::Done(StopReason::TotalReached)
    );
}

#[test]
fn test_empty_page_stops() {
    let mut state = PaginationState::starting_at(1);
    let paginator = exhaustive(10);
    paginator.process_page(&mut state, 10, Some(100));
    assert_eq!(
        paginator.process_page(&mut state, 0, Some(100)),
        NextPage::Done(StopReason::EmptyPage)
    );
}

#[test]
fn test_short_page_stops() {
    let mut state = PaginationState::starting_at(1);
    assert_eq!(
        exhaustive(50).process_page(&mut state, 30, Some(500)),
        NextPage::Done(StopReason::ShortPage)
    );
}

#[test]
fn test_last_page_by_arithmetic_stops() {
    // Jump to the last page implied by total and page size
    let paginator = exhaustive(25);
    let mut state = PaginationState::starting_at(1);
    let _ = paginator.process_page(&mut state, 25, Some(200));
    state.page = 8;
    assert_eq!(
        paginator.process_page(&mut state, 25, Some(200)),
        NextPage::Done(StopReason::LastPage)
    );
}

#[test]
fn test_page_cap_counts_first_page() {
    let paginator = PageNumberPaginator::new(Some(10), Some(2));
    let mut state = PaginationState::starting_at(1);
    assert!(paginator.process_page(&mut state, 10, Some(100)).is_continue());
    assert!(paginator.process_page(&mut state, 10, Some(100)).is_done());
}

#[test]
fn test_paginator_for_request() {
    let request = Request::things(
        &[1],
        ThingOptions {
            comments: true,
            page_size: Some(25),
            ..Default::default()
        },
    )
    .unwrap()
    .with_pagination(PaginationMode::Pages(3));
    let paginator = PageNumberPaginator::for_request(&request);
    assert_eq!(paginator.page_size, Some(25));
    assert_eq!(paginator.page_cap, Some(3));
}

// ============================================================================
// Merge Tests
// ============================================================================

fn map<T: crate::mapper::FromXml>(kind: EndpointKind, raw: &str) -> T {
    Mapper::default().map(kind, raw).unwrap()
}

#[test]
fn test_user_merge_keeps_first_page_scalars() {
    let mut first: User = map(
        EndpointKind::User,
        r#"<user id="1" name="alice"><country value="NL"/>
            <buddies total="3" page="1"><buddy id="11" name="bob"/><buddy id="12" name="carol"/></buddies></user>"#,
    );
    let second: User = map(
        EndpointKind::User,
        r#"<user id="1" name="alice"><country value=""/>
            <buddies total="3" page="2"><buddy id="13" name="dave"/></buddies></user>"#,
    );
    assert_eq!(first.declared_total(), Some(3));
    assert_eq!(first.page_items(), 2);

    first.merge_page(second);
    let buddies = first.buddies.as_ref().unwrap();
    assert_eq!(buddies.page, 1);
    let names: Vec<_> = buddies.buddies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, vec!["bob", "carol", "dave"]);
    assert_eq!(first.country.as_deref(), Some("NL"));
}

#[test]
fn test_user_without_lists_has_no_total() {
    let user: User = map(EndpointKind::User, r#"<user id="1" name="alice"/>"#);
    assert_eq!(user.declared_total(), None);
    assert_eq!(user.page_items(), 0);
}

#[test]
fn test_forum_merge_appends_threads() {
    let page = |ids: &[u64]| -> Forum {
        let threads: String = ids
            .iter()
            .map(|id| format!(r#"<thread id="{id}" subject="s{id}"/>"#))
            .collect();
        map(
            EndpointKind::Forum,
            &format!(r#"<forum id="19" title="General" numthreads="4"><threads>{threads}</threads></forum>"#),
        )
    };
    let mut forum = page(&[1, 2]);
    forum.merge_page(page(&[3, 4]));
    let ids: Vec<_> = forum.threads.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(forum.declared_total(), Some(4));
}

#[test]
fn test_things_merge_comments_per_thing() {
    let mut first: Things = map(
        EndpointKind::Thing,
        r#"<items>
            <item type="boardgame" id="1"><comments page="1" totalitems="3"><comment username="a"/><comment username="b"/></comments></item>
            <item type="boardgame" id="2"><comments page="1" totalitems="1"><comment username="z"/></comments></item>
        </items>"#,
    );
    let second: Things = map(
        EndpointKind::Thing,
        r#"<items>
            <item type="boardgame" id="1"><comments page="2" totalitems="3"><comment username="c"/></comments></item>
            <item type="boardgame" id="2"><comments page="2" totalitems="1"/></item>
        </items>"#,
    );
    assert_eq!(first.declared_total(), Some(3));
    assert_eq!(first.page_items(), 2);
    assert_eq!(second.page_items(), 1);

    first.merge_page(second);
    let users = |idx: usize| -> Vec<String> {
        first.things[idx]
            .comments
            .as_ref()
            .unwrap()
            .comments
            .iter()
            .map(|c| c.username.clone())
            .collect()
    };
    assert_eq!(users(0), vec!["a", "b", "c"]);
    assert_eq!(users(1), vec!["z"]);
}
