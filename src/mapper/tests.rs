//! Tests for mapper module

use super::*;
use crate::error::MappingErrorKind;
use crate::model::*;
use crate::types::{Domain, FamilyType, SitemapLocationType, SubType, ThingType};
use chrono::{Datelike, NaiveDate, Timelike};
use pretty_assertions::assert_eq;
use test_case::test_case;

const THING: &str = include_str!("../../tests/fixtures/thing.xml");
const COLLECTION: &str = include_str!("../../tests/fixtures/collection.xml");
const USER: &str = include_str!("../../tests/fixtures/user.xml");
const FORUM: &str = include_str!("../../tests/fixtures/forum.xml");
const THREAD: &str = include_str!("../../tests/fixtures/thread.xml");
const GUILD: &str = include_str!("../../tests/fixtures/guild.xml");
const GEEKLIST: &str = include_str!("../../tests/fixtures/geeklist.xml");
const PLAYS: &str = include_str!("../../tests/fixtures/plays.xml");
const HOT: &str = include_str!("../../tests/fixtures/hot.xml");
const SEARCH: &str = include_str!("../../tests/fixtures/search.xml");
const SITEMAP_INDEX: &str = include_str!("../../tests/fixtures/sitemapindex.xml");
const FAMILY: &str = include_str!("../../tests/fixtures/family.xml");

fn tolerant() -> Mapper {
    Mapper::default()
}

fn strict() -> Mapper {
    Mapper::new(EnumPolicy::Strict)
}

fn kind_of<T: std::fmt::Debug>(result: Result<T, MappingError>) -> MappingErrorKind {
    result.unwrap_err().kind
}

// ============================================================================
// Things
// ============================================================================

#[test]
fn test_map_thing() {
    let things: Things = tolerant().map(EndpointKind::Thing, THING).unwrap();
    assert_eq!(things.things.len(), 1);
    assert_eq!(
        things.terms_of_use.as_deref(),
        Some("https://boardgamegeek.com/xmlapi/termsofuse")
    );

    let thing = &things.things[0];
    assert_eq!(thing.id, 174430);
    assert_eq!(thing.thing_type, Some(ThingType::BoardGame));
    assert_eq!(thing.name.as_deref(), Some("Gloomhaven"));
    assert_eq!(thing.names.len(), 2);
    assert_eq!(thing.year_published, Some(2017));
    assert_eq!(thing.min_players, Some(1));
    assert_eq!(thing.max_players, Some(4));
    assert_eq!(thing.playing_time, Some(120));
    assert_eq!(thing.min_age, Some(14));
    assert_eq!(
        thing.description.as_deref(),
        Some("Gloomhaven is a game of Euro-inspired tactical combat & more.")
    );
    assert_eq!(thing.links.len(), 4);
    assert_eq!(thing.links[1].link_type, "boardgamemechanic");
    assert_eq!(thing.links[1].value, "Cooperative Game");
    assert!(!thing.links[3].inbound);
}

#[test]
fn test_map_thing_polls() {
    let things: Things = tolerant().map(EndpointKind::Thing, THING).unwrap();
    let thing = &things.things[0];

    assert_eq!(thing.polls.len(), 2);
    let players = &thing.polls[0];
    assert_eq!(players.name, "suggested_numplayers");
    assert_eq!(players.total_votes, 1092);
    assert_eq!(players.results[1].num_players.as_deref(), Some("4+"));
    assert_eq!(players.results[0].results[0].num_votes, 172);

    let language = &thing.polls[1];
    assert_eq!(language.results[0].num_players, None);
    assert_eq!(language.results[0].results[1].level, Some(4));

    assert_eq!(thing.poll_summaries[0].results.len(), 2);
}

#[test]
fn test_map_thing_optional_sections() {
    let things: Things = tolerant().map(EndpointKind::Thing, THING).unwrap();
    let thing = &things.things[0];

    let video = &thing.videos[0];
    assert_eq!(video.user_id, Some(42));
    assert_eq!(video.post_date.unwrap().year(), 2018);

    let version = &thing.versions[0];
    assert_eq!(version.name.as_deref(), Some("English second edition"));
    assert_eq!(version.product_code.as_deref(), Some("CPH0201"));
    assert_eq!(version.weight, Some(21.6));
    assert!(version.links[0].inbound);

    let comments = thing.comments.as_ref().unwrap();
    assert_eq!(comments.total_items, 3);
    assert_eq!(comments.comments[1].rating.as_deref(), Some("N/A"));
    assert_eq!(comments.comments[1].value, None);

    let ratings = &thing.statistics.as_ref().unwrap().ratings;
    assert_eq!(ratings.users_rated.as_deref(), Some("60123"));
    assert_eq!(ratings.average_weight.as_deref(), Some("3.91"));
    assert_eq!(ratings.ranks.len(), 2);
    assert_eq!(ratings.ranks[1].value.as_deref(), Some("Not Ranked"));

    let listing = &thing.listings[0];
    assert_eq!(listing.price.as_ref().unwrap().value, 140.0);
    assert_eq!(listing.condition.as_deref(), Some("new"));
    assert_eq!(listing.list_date.unwrap().day(), 1);
}

// ============================================================================
// Collection
// ============================================================================

#[test]
fn test_map_collection() {
    let collection: Collection = tolerant().map(EndpointKind::Collection, COLLECTION).unwrap();
    assert_eq!(collection.total_items, 2);
    assert_eq!(collection.items.len(), 2);

    let first = &collection.items[0];
    assert_eq!(first.collection_id, 51000001);
    assert_eq!(first.object_id, 174430);
    assert_eq!(first.subtype, ThingType::BoardGame);
    assert_eq!(first.name, "Gloomhaven");
    assert_eq!(first.year_published, Some(2017));
    assert_eq!(first.num_plays, Some(12));

    let status = first.status.as_ref().unwrap();
    assert!(status.own);
    assert!(status.want_to_play);
    assert!(!status.wishlist);
    let modified = status.last_modified.unwrap();
    assert_eq!(modified.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    assert_eq!(modified.hour(), 18);

    let stats = first.stats.as_ref().unwrap();
    assert_eq!(stats.num_owned, Some(96000));
    assert_eq!(stats.rating.as_ref().unwrap().value.as_deref(), Some("9"));

    let second = &collection.items[1];
    assert_eq!(second.status.as_ref().unwrap().wishlist_priority, Some(2));
    assert_eq!(second.stats, None);
}

// ============================================================================
// Community documents
// ============================================================================

#[test]
fn test_map_user() {
    let user: User = tolerant().map(EndpointKind::User, USER).unwrap();
    assert_eq!(user.id, Some(1234));
    assert_eq!(user.name, "alice");
    assert_eq!(user.first_name.as_deref(), Some("Alice"));
    assert_eq!(user.last_login, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(user.web_address, None);
    assert_eq!(user.trade_rating, Some(7));

    let buddies = user.buddies.unwrap();
    assert_eq!(buddies.total, 3);
    assert_eq!(buddies.buddies[2].name, "dave");

    let top = user.top.unwrap();
    assert_eq!(top.domain, Some(Domain::BoardGame));
    assert_eq!(top.items[1].id, 224517);
    assert_eq!(user.hot, None);
}

#[test]
fn test_map_unknown_user() {
    let raw = r#"<user id="" name="nobody" termsofuse="https://boardgamegeek.com/xmlapi/termsofuse">
        <firstname value=""/><lastname value=""/><yearregistered value=""/></user>"#;
    let user: User = tolerant().map(EndpointKind::User, raw).unwrap();
    assert_eq!(user.id, None);
    assert_eq!(user.year_registered, None);
    assert_eq!(user.buddies, None);
}

#[test]
fn test_map_forum() {
    let forum: Forum = tolerant().map(EndpointKind::Forum, FORUM).unwrap();
    assert_eq!(forum.id, 19);
    assert_eq!(forum.num_threads, 3);
    assert!(!forum.no_posting);
    assert_eq!(forum.threads.len(), 3);
    assert_eq!(forum.threads[1].author.as_deref(), Some("bob"));
    assert_eq!(forum.last_post_date.unwrap().day(), 7);
}

#[test]
fn test_map_forum_list() {
    let raw = r#"<forums type="thing" id="174430" termsofuse="x">
        <forum id="19" groupid="0" title="General" noposting="0" description="Post here" numthreads="3" numposts="120" lastpostdate="Thu, 07 Mar 2024 18:02:11 +0000"/>
        <forum id="20" groupid="0" title="Rules" noposting="1" description="" numthreads="0" numposts="0" lastpostdate=""/>
    </forums>"#;
    let list: ForumList = tolerant().map(EndpointKind::ForumList, raw).unwrap();
    assert_eq!(list.list_type, crate::types::ForumListType::Thing);
    assert_eq!(list.forums.len(), 2);
    assert!(list.forums[1].no_posting);
    assert_eq!(list.forums[1].last_post_date, None);
    assert_eq!(list.forums[1].description, None);
}

#[test]
fn test_map_thread() {
    let thread: Thread = tolerant().map(EndpointKind::Thread, THREAD).unwrap();
    assert_eq!(thread.id, 3210001);
    assert_eq!(thread.subject.as_deref(), Some("Solo campaign tips"));
    assert_eq!(thread.articles.len(), 2);
    assert_eq!(
        thread.articles[0].body.as_deref(),
        Some("Play two characters <b>at most</b>.")
    );
    assert_eq!(thread.articles[0].num_edits, 1);
    assert_eq!(thread.articles[1].edit_date.unwrap().hour(), 10);
}

#[test]
fn test_map_guild() {
    let guild: Guild = tolerant().map(EndpointKind::Guild, GUILD).unwrap();
    assert_eq!(guild.name, "Oxford Gamers");
    assert_eq!(guild.manager.as_deref(), Some("alice"));
    let location = guild.location.unwrap();
    assert_eq!(location.address1, None);
    assert_eq!(location.city.as_deref(), Some("Oxford"));
    let members = guild.members.unwrap();
    assert_eq!(members.count, 2);
    assert_eq!(members.members[1].name, "bob");
}

#[test]
fn test_map_missing_guild() {
    let raw = r#"<guild id="0" termsofuse="x"><error>Guild not found.</error></guild>"#;
    let err = tolerant().map::<Guild>(EndpointKind::Guild, raw).unwrap_err();
    assert_eq!(err.kind, MappingErrorKind::SchemaMismatch);
    assert!(err.message.contains("Guild not found."));
}

#[test]
fn test_map_geeklist() {
    let list: GeekList = tolerant().map(EndpointKind::GeekList, GEEKLIST).unwrap();
    assert_eq!(list.id, 331520);
    assert_eq!(list.thumbs, 25);
    assert_eq!(list.num_items, 1);
    assert_eq!(list.title.as_deref(), Some("Best solo games"));
    assert_eq!(list.comments.len(), 1);
    assert_eq!(list.comments[0].text.as_deref(), Some("Nice list."));

    let item = &list.items[0];
    assert_eq!(item.subtype, Some(SubType::BoardGame));
    assert_eq!(item.object_id, 174430);
    assert_eq!(item.image_id, Some(2437871));
    assert_eq!(item.comments[0].username.as_deref(), Some("bob"));
}

#[test]
fn test_map_plays() {
    let plays: Plays = tolerant().map(EndpointKind::Plays, PLAYS).unwrap();
    assert_eq!(plays.total, 2);
    assert_eq!(plays.user_id, Some(1234));

    let first = &plays.plays[0];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 3, 2));
    assert_eq!(first.length_minutes, 150);
    assert_eq!(first.comments.as_deref(), Some("Scenario 3 cleared."));
    assert_eq!(first.players.len(), 2);
    assert_eq!(first.players[1].username, None);
    assert!(first.players[1].new);
    assert_eq!(first.players[1].score, None);

    let second = &plays.plays[1];
    assert!(second.incomplete);
    assert_eq!(second.location, None);
    assert!(second.players.is_empty());
    assert_eq!(
        second.item.as_ref().unwrap().subtypes,
        vec![SubType::BoardGame, SubType::BoardGameImplementation]
    );
}

// ============================================================================
// Lists
// ============================================================================

#[test]
fn test_map_hot() {
    let hot: HotList = tolerant().map(EndpointKind::Hot, HOT).unwrap();
    assert_eq!(hot.items.len(), 2);
    assert_eq!(hot.items[0].rank, 1);
    assert_eq!(hot.items[1].name.as_deref(), Some("Brass: Birmingham"));
}

#[test]
fn test_map_search() {
    let results: SearchResults = tolerant().map(EndpointKind::Search, SEARCH).unwrap();
    assert_eq!(results.total, 2);
    assert_eq!(results.items[1].result_type, ThingType::BoardGameExpansion);
    assert_eq!(results.items[1].year_published, None);
    assert!(results.items[0].name.is_primary());
}

#[test]
fn test_map_family() {
    let family: Family = tolerant().map(EndpointKind::Family, FAMILY).unwrap();
    let item = &family.items[0];
    assert_eq!(item.family_type, FamilyType::BoardGameFamily);
    assert_eq!(item.name.as_deref(), Some("Game: Gloomhaven"));
    assert!(item.links.iter().all(|l| l.inbound));
}

#[test]
fn test_map_sitemap_index() {
    let index: SitemapIndex = tolerant().map(EndpointKind::SitemapIndex, SITEMAP_INDEX).unwrap();
    let types: Vec<_> = index.sitemaps.iter().map(|s| s.location_type).collect();
    assert_eq!(
        types,
        vec![
            SitemapLocationType::BoardGames,
            SitemapLocationType::BoardGames,
            SitemapLocationType::RpgItems,
            SitemapLocationType::Unknown,
        ]
    );
    assert_eq!(
        index
            .locations_of(&[SitemapLocationType::BoardGames])
            .count(),
        2
    );
    assert_eq!(index.locations_of(&[]).count(), 4);
}

#[test]
fn test_map_sitemap() {
    let raw = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://boardgamegeek.com/boardgame/1/die-macher</loc><changefreq>weekly</changefreq><priority>0.5</priority><lastmod>2024-03-01T10:00:00+00:00</lastmod></url>
  <url><loc>https://boardgamegeek.com/boardgame/2/dragonmaster</loc></url>
</urlset>"#;
    let sitemap: Sitemap = tolerant().map(EndpointKind::Sitemap, raw).unwrap();
    assert_eq!(sitemap.urls.len(), 2);
    assert_eq!(sitemap.urls[0].priority, Some(0.5));
    assert_eq!(sitemap.urls[0].last_modified, NaiveDate::from_ymd_opt(2024, 3, 1));
    assert_eq!(sitemap.urls[1].change_frequency, None);
}

// ============================================================================
// Failures
// ============================================================================

#[test_case("<items><item"; "truncated")]
#[test_case("not xml at all"; "plain text")]
#[test_case(""; "empty body")]
fn test_malformed_document(raw: &str) {
    assert_eq!(
        kind_of(tolerant().map::<Things>(EndpointKind::Thing, raw)),
        MappingErrorKind::MalformedDocument
    );
}

#[test]
fn test_root_mismatch() {
    let err = tolerant().map::<User>(EndpointKind::User, FORUM).unwrap_err();
    assert_eq!(err.kind, MappingErrorKind::SchemaMismatch);
    assert!(err.message.contains("expected <user>"));
    assert!(err.message.contains("found <forum>"));
}

#[test]
fn test_error_document_message_is_surfaced() {
    let raw = "<errors><error><message>Rate limit exceeded.</message></error></errors>";
    let err = tolerant().map::<Things>(EndpointKind::Thing, raw).unwrap_err();
    assert_eq!(err.kind, MappingErrorKind::SchemaMismatch);
    assert!(err.message.contains("Rate limit exceeded."));

    let raw = r#"<error message="Invalid username specified"/>"#;
    let err = tolerant().map::<Collection>(EndpointKind::Collection, raw).unwrap_err();
    assert!(err.message.contains("Invalid username specified"));
}

#[test]
fn test_missing_required_field() {
    let raw = r#"<user name="alice"><buddies total="1" page="1"><buddy name="bob"/></buddies></user>"#;
    let err = tolerant().map::<User>(EndpointKind::User, raw).unwrap_err();
    assert_eq!(err.kind, MappingErrorKind::MissingField);
    assert_eq!(err.message, "<buddy> is missing required 'id'");
}

#[test_case(r#"<forum id="abc" title="t"/>"#; "non numeric id")]
#[test_case(r#"<forum id="1" title="t" noposting="maybe"/>"#; "bad flag")]
#[test_case(r#"<forum id="1" title="t" lastpostdate="yesterday"/>"#; "bad date")]
fn test_type_mismatch(raw: &str) {
    assert_eq!(
        kind_of(tolerant().map::<Forum>(EndpointKind::Forum, raw)),
        MappingErrorKind::TypeMismatch
    );
}

#[test]
fn test_unknown_enum_policy() {
    let raw = r#"<items><item type="boardgamefancy" id="1"/></items>"#;

    let things: Things = tolerant().map(EndpointKind::Thing, raw).unwrap();
    assert_eq!(
        things.things[0].thing_type,
        Some(ThingType::Unknown("boardgamefancy".to_string()))
    );

    let err = strict().map::<Things>(EndpointKind::Thing, raw).unwrap_err();
    assert_eq!(err.kind, MappingErrorKind::UnknownEnumValue);
    assert!(err.message.contains("boardgamefancy"));
}

#[test]
fn test_strict_policy_accepts_known_values() {
    let things: Things = strict().map(EndpointKind::Thing, THING).unwrap();
    assert_eq!(things.things[0].thing_type, Some(ThingType::BoardGame));
}

#[test]
fn test_mapping_is_deterministic() {
    let first: Plays = tolerant().map(EndpointKind::Plays, PLAYS).unwrap();
    let second: Plays = tolerant().map(EndpointKind::Plays, PLAYS).unwrap();
    assert_eq!(first, second);

    let first = tolerant().map::<Forum>(EndpointKind::Forum, "<forum id='x'/>");
    let second = tolerant().map::<Forum>(EndpointKind::Forum, "<forum id='x'/>");
    assert_eq!(first, second);
}
