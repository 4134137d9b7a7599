use serde::Serialize;

/// One name variant of a thing or family
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Name {
    pub value: String,
    /// `primary` or `alternate`
    pub name_type: Option<String>,
    pub sort_index: Option<u32>,
}

impl Name {
    pub fn is_primary(&self) -> bool {
        self.name_type.as_deref() == Some("primary")
    }
}

/// Relationship to another catalog object.
///
/// `link_type` is the discriminator (`boardgamedesigner`,
/// `boardgamemechanic`, ...). New discriminators appear over time, so it is
/// kept as text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub link_type: String,
    pub id: u64,
    pub value: String,
    pub inbound: bool,
}

/// Aggregated rating figures, kept as reported
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ratings {
    /// The user's own rating in collections, often `N/A`
    pub value: Option<String>,
    pub users_rated: Option<String>,
    pub average: Option<String>,
    pub bayes_average: Option<String>,
    pub std_dev: Option<String>,
    pub median: Option<String>,
    pub owned: Option<String>,
    pub trading: Option<String>,
    pub wanting: Option<String>,
    pub wishing: Option<String>,
    pub num_comments: Option<String>,
    pub num_weights: Option<String>,
    pub average_weight: Option<String>,
    pub ranks: Vec<Rank>,
}

/// Position in one ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rank {
    /// `subtype` or `family`
    pub rank_type: Option<String>,
    pub id: u64,
    pub name: String,
    pub friendly_name: Option<String>,
    /// Rank number or `Not Ranked`
    pub value: Option<String>,
    pub bayes_average: Option<String>,
}
