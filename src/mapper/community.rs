//! Users, forums, threads, guilds and geeklists

use super::xml::Element;
use super::FromXml;
use crate::error::MappingError;
use crate::model::{
    Article, Buddies, Buddy, Forum, ForumList, ForumSummary, GeekList, GeekListComment,
    GeekListItem, Guild, GuildMember, GuildMembers, GuildReference, Location, Thread,
    ThreadSummary, User, UserGuilds, UserList, UserListItem,
};

type Result<T> = std::result::Result<T, MappingError>;

// ============================================================================
// User
// ============================================================================

impl FromXml for User {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.opt_num("id")?,
            name: root.req_str("name")?,
            first_name: root.value_str("firstname"),
            last_name: root.value_str("lastname"),
            avatar_link: root.value_str("avatarlink"),
            year_registered: root.value_num("yearregistered")?,
            last_login: root.value_date("lastlogin")?,
            state_or_province: root.value_str("stateorprovince"),
            country: root.value_str("country"),
            web_address: root.value_str("webaddress"),
            xbox_account: root.value_str("xboxaccount"),
            wii_account: root.value_str("wiiaccount"),
            psn_account: root.value_str("psnaccount"),
            battle_net_account: root.value_str("battlenetaccount"),
            steam_account: root.value_str("steamaccount"),
            trade_rating: root.value_num("traderating")?,
            buddies: root.child("buddies").map(buddies).transpose()?,
            guilds: root.child("guilds").map(user_guilds).transpose()?,
            top: root.child("top").map(user_list).transpose()?,
            hot: root.child("hot").map(user_list).transpose()?,
        })
    }
}

fn buddies(el: Element<'_, '_>) -> Result<Buddies> {
    Ok(Buddies {
        total: el.num_or_zero("total")?,
        page: el.opt_num("page")?.unwrap_or(1),
        buddies: el.collect("buddy", |b| {
            Ok(Buddy {
                id: b.req_num("id")?,
                name: b.req_str("name")?,
            })
        })?,
    })
}

fn user_guilds(el: Element<'_, '_>) -> Result<UserGuilds> {
    Ok(UserGuilds {
        total: el.num_or_zero("total")?,
        page: el.opt_num("page")?.unwrap_or(1),
        guilds: el.collect("guild", |g| {
            Ok(GuildReference {
                id: g.req_num("id")?,
                name: g.req_str("name")?,
            })
        })?,
    })
}

fn user_list(el: Element<'_, '_>) -> Result<UserList> {
    Ok(UserList {
        domain: el.opt_enum("domain")?,
        items: el.collect("item", |item| {
            Ok(UserListItem {
                rank: item.req_num("rank")?,
                item_type: item.opt_str("type"),
                id: item.req_num("id")?,
                name: item.req_str("name")?,
            })
        })?,
    })
}

// ============================================================================
// Forums
// ============================================================================

impl FromXml for Forum {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.req_num("id")?,
            title: root.req_str("title")?,
            num_threads: root.num_or_zero("numthreads")?,
            num_posts: root.num_or_zero("numposts")?,
            last_post_date: root.opt_rfc2822("lastpostdate")?,
            no_posting: root.flag("noposting")?,
            threads: root.collect_in("threads", "thread", |t| {
                Ok(ThreadSummary {
                    id: t.req_num("id")?,
                    subject: t.req_str("subject")?,
                    author: t.opt_str("author"),
                    num_articles: t.num_or_zero("numarticles")?,
                    post_date: t.opt_rfc2822("postdate")?,
                    last_post_date: t.opt_rfc2822("lastpostdate")?,
                })
            })?,
        })
    }
}

impl FromXml for ForumList {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.req_num("id")?,
            list_type: root.req_enum("type")?,
            forums: root.collect("forum", |f| {
                Ok(ForumSummary {
                    id: f.req_num("id")?,
                    group_id: f.opt_num("groupid")?,
                    title: f.req_str("title")?,
                    no_posting: f.flag("noposting")?,
                    description: f.opt_str("description"),
                    num_threads: f.num_or_zero("numthreads")?,
                    num_posts: f.num_or_zero("numposts")?,
                    last_post_date: f.opt_rfc2822("lastpostdate")?,
                })
            })?,
        })
    }
}

impl FromXml for Thread {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.req_num("id")?,
            link: root.opt_str("link"),
            subject: root.child_text("subject"),
            num_articles: root.num_or_zero("numarticles")?,
            articles: root.collect_in("articles", "article", |a| {
                Ok(Article {
                    id: a.req_num("id")?,
                    username: a.opt_str("username"),
                    link: a.opt_str("link"),
                    post_date: a.opt_rfc3339("postdate")?,
                    edit_date: a.opt_rfc3339("editdate")?,
                    num_edits: a.num_or_zero("numedits")?,
                    subject: a.child_text("subject"),
                    body: a.child_text("body"),
                })
            })?,
        })
    }
}

// ============================================================================
// Guild
// ============================================================================

impl FromXml for Guild {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        if let Some(message) = root.child_text("error") {
            return Err(MappingError::schema_mismatch(format!(
                "service returned an error: {message}"
            )));
        }
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.req_num("id")?,
            name: root.req_str("name")?,
            created: root.opt_rfc2822("created")?,
            category: root.child_text("category"),
            website: root.child_text("website"),
            manager: root.child_text("manager"),
            description: root.child_text("description"),
            location: root.child("location").map(|l| Location {
                address1: l.child_text("addr1"),
                address2: l.child_text("addr2"),
                city: l.child_text("city"),
                state_or_province: l.child_text("stateorprovince"),
                postal_code: l.child_text("postalcode"),
                country: l.child_text("country"),
            }),
            members: root.child("members").map(guild_members).transpose()?,
        })
    }
}

fn guild_members(el: Element<'_, '_>) -> Result<GuildMembers> {
    Ok(GuildMembers {
        count: el.num_or_zero("count")?,
        page: el.opt_num("page")?.unwrap_or(1),
        members: el.collect("member", |m| {
            Ok(GuildMember {
                name: m.req_str("name")?,
                join_date: m.opt_rfc2822("date")?,
            })
        })?,
    })
}

// ============================================================================
// GeekList
// ============================================================================

impl FromXml for GeekList {
    fn from_xml(root: Element<'_, '_>) -> Result<Self> {
        Ok(Self {
            terms_of_use: root.opt_str("termsofuse"),
            id: root.req_num("id")?,
            post_date: root.child_text_rfc2822("postdate")?,
            edit_date: root.child_text_rfc2822("editdate")?,
            thumbs: root.child_text_num("thumbs")?.unwrap_or(0),
            num_items: root.child_text_num("numitems")?.unwrap_or(0),
            username: root.child_text("username"),
            title: root.child_text("title"),
            description: root.child_text("description"),
            comments: root.collect("comment", geeklist_comment)?,
            items: root.collect("item", geeklist_item)?,
        })
    }
}

fn geeklist_comment(el: Element<'_, '_>) -> Result<GeekListComment> {
    Ok(GeekListComment {
        username: el.opt_str("username"),
        date: el.opt_rfc2822("date")?,
        post_date: el.opt_rfc2822("postdate")?,
        edit_date: el.opt_rfc2822("editdate")?,
        thumbs: el.num_or_zero("thumbs")?,
        text: el.text(),
    })
}

fn geeklist_item(el: Element<'_, '_>) -> Result<GeekListItem> {
    Ok(GeekListItem {
        id: el.req_num("id")?,
        object_type: el.opt_str("objecttype"),
        subtype: el.opt_enum("subtype")?,
        object_id: el.req_num("objectid")?,
        object_name: el.opt_str("objectname"),
        username: el.opt_str("username"),
        post_date: el.opt_rfc2822("postdate")?,
        edit_date: el.opt_rfc2822("editdate")?,
        thumbs: el.num_or_zero("thumbs")?,
        image_id: el.opt_num("imageid")?,
        body: el.child_text("body"),
        comments: el.collect("comment", geeklist_comment)?,
    })
}
