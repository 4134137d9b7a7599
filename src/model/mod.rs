//! Domain model
//!
//! Typed records produced by the mapper, one module per endpoint family.
//! Every field that the service may omit is an `Option` or an empty `Vec`;
//! counts whose zero is meaningful are plain integers.
//!
//! Rating and statistics values stay textual because the service mixes
//! numbers with markers such as `N/A`.

mod collection;
mod common;
mod forum;
mod geeklist;
mod guild;
mod lists;
mod plays;
mod sitemap;
mod thing;
mod user;

pub use collection::{Collection, CollectionItem, CollectionStatistics, CollectionStatus};
pub use common::{Link, Name, Rank, Ratings};
pub use forum::{Article, Forum, ForumList, ForumSummary, Thread, ThreadSummary};
pub use geeklist::{GeekList, GeekListComment, GeekListItem};
pub use guild::{Guild, GuildMember, GuildMembers, Location};
pub use lists::{Family, FamilyItem, HotList, HotListItem, SearchResult, SearchResults};
pub use plays::{Play, PlayItem, Player, Plays};
pub use sitemap::{Sitemap, SitemapIndex, SitemapLocation, SitemapUrl};
pub use thing::{
    Comment, Comments, MarketplaceListing, Poll, PollResult, PollResults, PollSummary,
    PollSummaryResult, Price, Statistics, Thing, Things, Version, Video, WebLink,
};
pub use user::{Buddies, Buddy, GuildReference, User, UserGuilds, UserList, UserListItem};

/// Timestamp carrying the offset the service reported
pub type Timestamp = chrono::DateTime<chrono::FixedOffset>;
