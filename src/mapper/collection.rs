//! Collections and logged plays

use super::catalog::ratings;
use super::xml::Element;
use super::FromXml;
use crate::error::MappingError;
use crate::model::{
    Collection, CollectionItem, CollectionStatistics, CollectionStatus, Play, PlayItem, Player,
    Plays,
};

type Result<T> = std::result::Result<T, MappingError>;

// ============================================================================
// Collection
// ============================================================================

impl FromXml for Collection {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            total_items: root.num_or_zero("totalitems")?,
            publish_date: root.opt_str("pubdate"),
            items: root.collect("item", collection_item)?,
        })
    }
}

fn collection_item(el: Element<'_, '_>) -> Result<CollectionItem> {
    Ok(CollectionItem {
        collection_id: el.req_num("collid")?,
        object_id: el.req_num("objectid")?,
        object_type: el.opt_str("objecttype"),
        subtype: el.req_enum("subtype")?,
        name: el
            .req_child("name")?
            .text()
            .ok_or_else(|| MappingError::missing_field("name", "text"))?,
        original_name: el.child_text("originalname"),
        year_published: el.child_text_num("yearpublished")?,
        image: el.child_text("image"),
        thumbnail: el.child_text("thumbnail"),
        status: el.child("status").map(status).transpose()?,
        num_plays: el.child_text_num("numplays")?,
        comment: el.child_text("comment"),
        condition_text: el.child_text("conditiontext"),
        stats: el.child("stats").map(collection_stats).transpose()?,
    })
}

fn status(el: Element<'_, '_>) -> Result<CollectionStatus> {
    Ok(CollectionStatus {
        own: el.flag("own")?,
        prev_owned: el.flag("prevowned")?,
        for_trade: el.flag("fortrade")?,
        want: el.flag("want")?,
        want_to_play: el.flag("wanttoplay")?,
        want_to_buy: el.flag("wanttobuy")?,
        wishlist: el.flag("wishlist")?,
        wishlist_priority: el.opt_num("wishlistpriority")?,
        preordered: el.flag("preordered")?,
        last_modified: el.opt_naive_datetime("lastmodified")?,
    })
}

fn collection_stats(el: Element<'_, '_>) -> Result<CollectionStatistics> {
    Ok(CollectionStatistics {
        min_players: el.opt_num("minplayers")?,
        max_players: el.opt_num("maxplayers")?,
        min_play_time: el.opt_num("minplaytime")?,
        max_play_time: el.opt_num("maxplaytime")?,
        playing_time: el.opt_num("playingtime")?,
        num_owned: el.opt_num("numowned")?,
        rating: el.child("rating").map(ratings).transpose()?,
    })
}

// ============================================================================
// Plays
// ============================================================================

impl FromXml for Plays {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            username: root.opt_str("username"),
            user_id: root.opt_num("userid")?,
            total: root.num_or_zero("total")?,
            page: root.opt_num("page")?.unwrap_or(1),
            plays: root.collect("play", play)?,
        })
    }
}

fn play(el: Element<'_, '_>) -> Result<Play> {
    Ok(Play {
        id: el.req_num("id")?,
        date: el.opt_date("date")?,
        quantity: el.opt_num("quantity")?.unwrap_or(1),
        length_minutes: el.num_or_zero("length")?,
        incomplete: el.flag("incomplete")?,
        no_win_stats: el.flag("nowinstats")?,
        location: el.opt_str("location"),
        item: el.child("item").map(play_item).transpose()?,
        comments: el.child_text("comments"),
        players: el.collect_in("players", "player", player)?,
    })
}

fn play_item(el: Element<'_, '_>) -> Result<PlayItem> {
    Ok(PlayItem {
        name: el.req_str("name")?,
        object_type: el.req_enum("objecttype")?,
        object_id: el.req_num("objectid")?,
        subtypes: el.collect_in("subtypes", "subtype", |s| s.req_enum("value"))?,
    })
}

fn player(el: Element<'_, '_>) -> Result<Player> {
    Ok(Player {
        username: el.opt_str("username"),
        user_id: el.opt_num("userid")?,
        name: el.opt_str("name"),
        start_position: el.opt_str("startposition"),
        color: el.opt_str("color"),
        score: el.opt_str("score"),
        new: el.flag("new")?,
        rating: el.opt_str("rating"),
        win: el.flag("win")?,
    })
}
