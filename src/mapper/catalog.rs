//! Things, families, hot list and search results, plus the fragments they
//! share with other documents (names, links, ratings)

use super::xml::Element;
use super::FromXml;
use crate::error::MappingError;
use crate::model::{
    Comment, Comments, Family, FamilyItem, HotList, HotListItem, Link, MarketplaceListing, Name,
    Poll, PollResult, PollResults, PollSummary, PollSummaryResult, Price, Rank, Ratings,
    SearchResult, SearchResults, Statistics, Thing, Things, Version, Video, WebLink,
};

type Result<T> = std::result::Result<T, MappingError>;

// ============================================================================
// Shared Fragments
// ============================================================================

/// `<name type="primary" sortindex="1" value="..."/>`
pub(super) fn name(el: Element<'_, '_>) -> Result<Name> {
    Ok(Name {
        value: el.req_str("value")?,
        name_type: el.opt_str("type"),
        sort_index: el.opt_num("sortindex")?,
    })
}

/// Value of the primary name, else of the first name
pub(super) fn primary_name(names: &[Name]) -> Option<String> {
    names
        .iter()
        .find(|n| n.is_primary())
        .or_else(|| names.first())
        .map(|n| n.value.clone())
}

/// `<link type="boardgamemechanic" id="2023" value="Cooperative Game"/>`
pub(super) fn link(el: Element<'_, '_>) -> Result<Link> {
    Ok(Link {
        link_type: el.req_str("type")?,
        id: el.req_num("id")?,
        value: el.req_str("value")?,
        inbound: el.flag("inbound")?,
    })
}

/// Rating block shared by thing statistics and collection stats
pub(super) fn ratings(el: Element<'_, '_>) -> Result<Ratings> {
    Ok(Ratings {
        value: el.opt_str("value"),
        users_rated: el.value_str("usersrated"),
        average: el.value_str("average"),
        bayes_average: el.value_str("bayesaverage"),
        std_dev: el.value_str("stddev"),
        median: el.value_str("median"),
        owned: el.value_str("owned"),
        trading: el.value_str("trading"),
        wanting: el.value_str("wanting"),
        wishing: el.value_str("wishing"),
        num_comments: el.value_str("numcomments"),
        num_weights: el.value_str("numweights"),
        average_weight: el.value_str("averageweight"),
        ranks: el.collect_in("ranks", "rank", rank)?,
    })
}

fn rank(el: Element<'_, '_>) -> Result<Rank> {
    Ok(Rank {
        rank_type: el.opt_str("type"),
        id: el.req_num("id")?,
        name: el.req_str("name")?,
        friendly_name: el.opt_str("friendlyname"),
        value: el.opt_str("value"),
        bayes_average: el.opt_str("bayesaverage"),
    })
}

fn terms_of_use(root: Element<'_, '_>) -> Option<String> {
    root.opt_str("termsofuse")
}

// ============================================================================
// Things
// ============================================================================

impl FromXml for Things {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: terms_of_use(root),
            things: root.collect("item", thing)?,
        })
    }
}

fn thing(el: Element<'_, '_>) -> Result<Thing> {
    let names = el.collect("name", name)?;
    Ok(Thing {
        id: el.req_num("id")?,
        thing_type: el.opt_enum("type")?,
        name: primary_name(&names),
        names,
        thumbnail: el.child_text("thumbnail"),
        image: el.child_text("image"),
        description: el.child_text("description"),
        year_published: el.value_num("yearpublished")?,
        date_published: el.value_str("datepublished"),
        release_date: el.value_date("releasedate")?,
        min_players: el.value_num("minplayers")?,
        max_players: el.value_num("maxplayers")?,
        playing_time: el.value_num("playingtime")?,
        min_play_time: el.value_num("minplaytime")?,
        max_play_time: el.value_num("maxplaytime")?,
        min_age: el.value_num("minage")?,
        series_code: el.value_str("seriescode"),
        issue_index: el.value_num("issueindex")?,
        polls: el.collect("poll", poll)?,
        poll_summaries: el.collect("poll-summary", poll_summary)?,
        links: el.collect("link", link)?,
        videos: el.collect_in("videos", "video", video)?,
        versions: el.collect_in("versions", "item", version)?,
        comments: el.child("comments").map(comments).transpose()?,
        statistics: el.child("statistics").map(statistics).transpose()?,
        listings: el.collect_in("marketplacelistings", "listing", listing)?,
    })
}

fn poll(el: Element<'_, '_>) -> Result<Poll> {
    Ok(Poll {
        name: el.req_str("name")?,
        title: el.opt_str("title"),
        total_votes: el.num_or_zero("totalvotes")?,
        results: el.collect("results", |results| {
            Ok(PollResults {
                num_players: results.opt_str("numplayers"),
                results: results.collect("result", poll_result)?,
            })
        })?,
    })
}

fn poll_result(el: Element<'_, '_>) -> Result<PollResult> {
    Ok(PollResult {
        value: el.req_str("value")?,
        num_votes: el.num_or_zero("numvotes")?,
        level: el.opt_num("level")?,
    })
}

fn poll_summary(el: Element<'_, '_>) -> Result<PollSummary> {
    Ok(PollSummary {
        name: el.opt_str("name"),
        title: el.opt_str("title"),
        results: el.collect("result", |r| {
            Ok(PollSummaryResult {
                name: r.opt_str("name"),
                value: r.opt_str("value"),
            })
        })?,
    })
}

fn video(el: Element<'_, '_>) -> Result<Video> {
    Ok(Video {
        id: el.req_num("id")?,
        title: el.opt_str("title"),
        category: el.opt_str("category"),
        language: el.opt_str("language"),
        link: el.opt_str("link"),
        username: el.opt_str("username"),
        user_id: el.opt_num("userid")?,
        post_date: el.opt_rfc3339("postdate")?,
    })
}

fn version(el: Element<'_, '_>) -> Result<Version> {
    let names = el.collect("name", name)?;
    Ok(Version {
        id: el.req_num("id")?,
        version_type: el.opt_str("type"),
        name: primary_name(&names),
        names,
        thumbnail: el.child_text("thumbnail"),
        image: el.child_text("image"),
        year_published: el.value_num("yearpublished")?,
        release_date: el.value_date("releasedate")?,
        product_code: el.value_str("productcode"),
        width: el.value_num("width")?,
        length: el.value_num("length")?,
        depth: el.value_num("depth")?,
        weight: el.value_num("weight")?,
        links: el.collect("link", link)?,
    })
}

fn comments(el: Element<'_, '_>) -> Result<Comments> {
    Ok(Comments {
        page: el.opt_num("page")?.unwrap_or(1),
        total_items: el.num_or_zero("totalitems")?,
        comments: el.collect("comment", |c| {
            Ok(Comment {
                username: c.req_str("username")?,
                rating: c.opt_str("rating"),
                value: c.opt_str("value"),
            })
        })?,
    })
}

fn statistics(el: Element<'_, '_>) -> Result<Statistics> {
    Ok(Statistics {
        page: el.opt_num("page")?,
        ratings: match el.child("ratings") {
            Some(r) => ratings(r)?,
            None => Ratings::default(),
        },
    })
}

fn listing(el: Element<'_, '_>) -> Result<MarketplaceListing> {
    let price = match el.child("price") {
        Some(p) => Some(Price {
            value: p.req_num("value")?,
            currency: p.opt_str("currency"),
        }),
        None => None,
    };
    let link = match el.child("link") {
        Some(l) => Some(WebLink {
            href: l.req_str("href")?,
            title: l.opt_str("title"),
        }),
        None => None,
    };
    Ok(MarketplaceListing {
        list_date: el.value_rfc2822("listdate")?,
        price,
        condition: el.value_str("condition"),
        notes: el.value_str("notes"),
        link,
    })
}

// ============================================================================
// Families
// ============================================================================

impl FromXml for Family {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: terms_of_use(root),
            items: root.collect("item", family_item)?,
        })
    }
}

fn family_item(el: Element<'_, '_>) -> Result<FamilyItem> {
    let names = el.collect("name", name)?;
    Ok(FamilyItem {
        id: el.req_num("id")?,
        family_type: el.req_enum("type")?,
        name: primary_name(&names),
        names,
        thumbnail: el.child_text("thumbnail"),
        image: el.child_text("image"),
        description: el.child_text("description"),
        links: el.collect("link", link)?,
    })
}

// ============================================================================
// Hot List
// ============================================================================

impl FromXml for HotList {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: terms_of_use(root),
            items: root.collect("item", |el| {
                Ok(HotListItem {
                    id: el.req_num("id")?,
                    rank: el.req_num("rank")?,
                    name: el.value_str("name"),
                    thumbnail: el.value_str("thumbnail"),
                    year_published: el.value_num("yearpublished")?,
                })
            })?,
        })
    }
}

// ============================================================================
// Search
// ============================================================================

impl FromXml for SearchResults {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: terms_of_use(root),
            total: root.num_or_zero("total")?,
            items: root.collect("item", |el| {
                Ok(SearchResult {
                    id: el.req_num("id")?,
                    result_type: el.req_enum("type")?,
                    name: name(el.req_child("name")?)?,
                    year_published: el.value_num("yearpublished")?,
                })
            })?,
        })
    }
}
