//! CLI commands and argument parsing

use crate::types::{
    Domain, FamilyType, ForumListType, HotListType, LogLevel, PlayThingType, SitemapLocationType,
    SubType, ThingType,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// BoardGameGeek XML API client
#[derive(Parser, Debug)]
#[command(name = "bgg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity; RUST_LOG directives still apply
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Page selection for paginated endpoints
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PageArgs {
    /// Fetch every page
    #[arg(long)]
    pub all_pages: bool,

    /// Fetch at most this many pages
    #[arg(long, conflicts_with = "all_pages")]
    pub pages: Option<u32>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Look up things by id
    Thing {
        /// Thing ids (comma-separated)
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<u64>,

        /// Only these thing types
        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<ThingType>,

        #[arg(long)]
        stats: bool,

        #[arg(long)]
        versions: bool,

        #[arg(long)]
        videos: bool,

        #[arg(long)]
        marketplace: bool,

        #[arg(long, conflicts_with = "rating_comments")]
        comments: bool,

        #[arg(long)]
        rating_comments: bool,

        #[arg(long)]
        page: Option<u32>,

        /// Comments per page (10-100)
        #[arg(long)]
        page_size: Option<u32>,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// A user's collection
    Collection {
        username: String,

        #[arg(long)]
        subtype: Option<ThingType>,

        /// Only owned items
        #[arg(long)]
        own: bool,

        /// Only wishlisted items
        #[arg(long)]
        wishlist: bool,

        #[arg(long)]
        stats: bool,

        #[arg(long)]
        brief: bool,
    },

    /// A user profile
    User {
        name: String,

        #[arg(long)]
        buddies: bool,

        #[arg(long)]
        guilds: bool,

        #[arg(long)]
        top: bool,

        #[arg(long)]
        hot: bool,

        #[arg(long)]
        domain: Option<Domain>,

        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Threads of a forum
    Forum {
        id: u64,

        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Forums attached to a thing or family
    ForumList {
        id: u64,

        #[arg(long = "type", default_value = "thing")]
        list_type: ForumListType,
    },

    /// Articles of a thread
    Thread {
        id: u64,

        #[arg(long)]
        min_article_id: Option<u64>,

        #[arg(long)]
        count: Option<u32>,
    },

    /// A geeklist
    Geeklist {
        id: u64,

        #[arg(long)]
        comments: bool,
    },

    /// A guild
    Guild {
        id: u64,

        #[arg(long)]
        members: bool,

        /// Sort members by join date instead of name
        #[arg(long)]
        sort_by_date: bool,

        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// The hot list
    Hot {
        #[arg(long = "type")]
        list_type: Option<HotListType>,
    },

    /// Search things by name
    Search {
        query: String,

        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<ThingType>,

        #[arg(long)]
        exact: bool,
    },

    /// The sitemap index
    SitemapIndex,

    /// One sitemap page
    Sitemap {
        /// Absolute sitemap location, as listed by the index
        location: String,
    },

    /// Every sitemap of the given types, grouped by type
    SitemapDiffuse {
        /// Location types (comma-separated); every listed sitemap when omitted
        #[arg(long = "type", value_enum, value_delimiter = ',')]
        types: Vec<SitemapLocationType>,
    },

    /// Logged plays
    Plays {
        username: String,

        /// Only plays of this thing or family
        #[arg(long)]
        id: Option<u64>,

        #[arg(long = "type")]
        thing_type: Option<PlayThingType>,

        #[arg(long)]
        subtype: Option<SubType>,

        #[arg(long)]
        min_date: Option<NaiveDate>,

        #[arg(long)]
        max_date: Option<NaiveDate>,

        #[arg(long)]
        page: Option<u32>,

        #[command(flatten)]
        pages: PageArgs,
    },

    /// Look up families by id
    Family {
        /// Family ids (comma-separated)
        #[arg(required = true, value_delimiter = ',')]
        ids: Vec<u64>,

        #[arg(long = "type", value_delimiter = ',')]
        types: Vec<FamilyType>,
    },
}
