use super::Timestamp;
use crate::types::ForumListType;
use serde::Serialize;

/// One page of a forum's thread list, or every page once merged
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forum {
    pub terms_of_use: Option<String>,
    pub id: u64,
    pub title: String,
    pub num_threads: u64,
    pub num_posts: u64,
    pub last_post_date: Option<Timestamp>,
    pub no_posting: bool,
    pub threads: Vec<ThreadSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThreadSummary {
    pub id: u64,
    pub subject: String,
    pub author: Option<String>,
    pub num_articles: u32,
    pub post_date: Option<Timestamp>,
    pub last_post_date: Option<Timestamp>,
}

/// Forums attached to a thing or family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumList {
    pub terms_of_use: Option<String>,
    pub id: u64,
    pub list_type: ForumListType,
    pub forums: Vec<ForumSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForumSummary {
    pub id: u64,
    pub group_id: Option<u64>,
    pub title: String,
    pub no_posting: bool,
    pub description: Option<String>,
    pub num_threads: u64,
    pub num_posts: u64,
    pub last_post_date: Option<Timestamp>,
}

/// A forum thread with its articles
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Thread {
    pub terms_of_use: Option<String>,
    pub id: u64,
    pub link: Option<String>,
    pub subject: Option<String>,
    pub num_articles: u32,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    pub id: u64,
    pub username: Option<String>,
    pub link: Option<String>,
    pub post_date: Option<Timestamp>,
    pub edit_date: Option<Timestamp>,
    pub num_edits: u32,
    pub subject: Option<String>,
    pub body: Option<String>,
}
