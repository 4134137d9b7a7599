//! Common types used throughout the BGG client
//!
//! This module contains the request/response enumerations shared by the
//! request builders, the mapper and the domain model, plus a few small
//! utility types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ============================================================================
// Open Enumerations
// ============================================================================

/// Enumerations whose wire values may grow over time.
///
/// Every open enum carries an `Unknown(raw)` catch-all so that a value the
/// client has never seen still maps; the mapper decides whether that is an
/// error based on [`crate::config::EnumPolicy`].
pub trait OpenEnum: Sized {
    /// Parse a wire value, falling back to the catch-all variant
    fn from_param(value: &str) -> Self;

    /// Whether this is the catch-all variant
    fn is_unknown(&self) -> bool;
}

macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $param:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// A value not (yet) known to this client
            Unknown(String),
        }

        impl $name {
            /// Wire value used in request parameters and documents
            pub fn as_param(&self) -> &str {
                match self {
                    $( Self::$variant => $param, )+
                    Self::Unknown(raw) => raw.as_str(),
                }
            }
        }

        impl OpenEnum for $name {
            fn from_param(value: &str) -> Self {
                match value {
                    $( $param => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }

            fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_param())
            }
        }

        impl std::str::FromStr for $name {
            type Err = std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(<Self as OpenEnum>::from_param(s))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_param())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(<Self as OpenEnum>::from_param(&raw))
            }
        }
    };
}

open_enum! {
    /// Type of a catalog thing
    pub enum ThingType {
        BoardGame => "boardgame",
        BoardGameExpansion => "boardgameexpansion",
        BoardGameAccessory => "boardgameaccessory",
        VideoGame => "videogame",
        RpgItem => "rpgitem",
        RpgIssue => "rpgissue",
    }
}

open_enum! {
    /// Lists available from the hot endpoint
    pub enum HotListType {
        BoardGame => "boardgame",
        BoardGameCompany => "boardgamecompany",
        BoardGamePerson => "boardgameperson",
        Rpg => "rpg",
        RpgCompany => "rpgcompany",
        RpgPerson => "rpgperson",
        VideoGame => "videogame",
        VideoGameCompany => "videogamecompany",
    }
}

open_enum! {
    /// Site domain used by user top/hot lists
    pub enum Domain {
        BoardGame => "boardgame",
        Rpg => "rpg",
        VideoGame => "videogame",
    }
}

open_enum! {
    /// Owner kind of a forum list
    pub enum ForumListType {
        Thing => "thing",
        Family => "family",
    }
}

open_enum! {
    /// Type of a family
    pub enum FamilyType {
        BoardGameFamily => "boardgamefamily",
        Rpg => "rpg",
        RpgPeriodical => "rpgperiodical",
    }
}

open_enum! {
    /// Object kind a logged play refers to
    pub enum PlayThingType {
        Thing => "thing",
        Family => "family",
    }
}

open_enum! {
    /// Fine grained sub type of a catalog object
    pub enum SubType {
        BoardGame => "boardgame",
        BoardGameAccessory => "boardgameaccessory",
        BoardGameArtist => "boardgameartist",
        BoardGameCategory => "boardgamecategory",
        BoardGameCompany => "boardgamecompany",
        BoardGameCompilation => "boardgamecompilation",
        BoardGameDesigner => "boardgamedesigner",
        BoardGameExpansion => "boardgameexpansion",
        BoardGameFamily => "boardgamefamily",
        BoardGameHonor => "boardgamehonor",
        BoardGameImplementation => "boardgameimplementation",
        BoardGameIntegration => "boardgameintegration",
        BoardGameMechanic => "boardgamemechanic",
        BoardGamePublisher => "boardgamepublisher",
        BoardGameVersion => "boardgameversion",
        Rpg => "rpg",
        RpgItem => "rpgitem",
        RpgIssue => "rpgissue",
        RpgPeriodical => "rpgperiodical",
        VideoGame => "videogame",
        VideoGameCompany => "videogamecompany",
        VideoGameExpansion => "videogameexpansion",
    }
}

// ============================================================================
// Request Flags
// ============================================================================

/// Include/exclude switch, sent as `1`/`0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Inclusion {
    Include,
    Exclude,
}

impl Inclusion {
    /// Query parameter value
    pub fn to_param(self) -> &'static str {
        match self {
            Inclusion::Include => "1",
            Inclusion::Exclude => "0",
        }
    }

    pub fn is_include(self) -> bool {
        matches!(self, Inclusion::Include)
    }
}

impl From<bool> for Inclusion {
    fn from(value: bool) -> Self {
        if value {
            Inclusion::Include
        } else {
            Inclusion::Exclude
        }
    }
}

/// Sort order of guild members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberSort {
    #[default]
    Username,
    Date,
}

impl MemberSort {
    pub fn to_param(self) -> &'static str {
        match self {
            MemberSort::Username => "username",
            MemberSort::Date => "date",
        }
    }
}

// ============================================================================
// Sitemap Location Type
// ============================================================================

/// Category of a sitemap location, derived from its URL
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum SitemapLocationType {
    BoardGames,
    BoardGameAccessories,
    BoardGameAccessoryFamilies,
    BoardGameAccessoryVersions,
    BoardGameArtists,
    BoardGameAuthors,
    BoardGameCompilations,
    BoardGameDesigners,
    BoardGameEvents,
    BoardGameExpansions,
    BoardGameFamilies,
    BoardGameImplementations,
    BoardGameIssues,
    BoardGameIssueArticles,
    BoardGameIssueVersions,
    BoardGamePeriodicals,
    BoardGamePublishers,
    BoardGameSleeves,
    BoardGameSleeveManufacturers,
    BoardGameSubDomains,
    BoardGameVersions,
    CardTypes,
    CardSets,
    Files,
    GeekLists,
    Images,
    Rpg,
    RpgArtists,
    RpgCategories,
    RpgDesigners,
    RpgFamilies,
    RpgGenres,
    RpgIssues,
    RpgIssueArticles,
    RpgIssueVersions,
    RpgItems,
    RpgItemVersions,
    RpgMechanics,
    RpgPeriodicals,
    RpgProducers,
    RpgPublishers,
    RpgSeries,
    RpgSettings,
    RpgSystems,
    Threads,
    VideoGames,
    VideoGameBoardGames,
    VideoGameCharacters,
    VideoGameCharacterVersions,
    VideoGameCompilations,
    VideoGameDevelopers,
    VideoGameExpansions,
    VideoGameFranchises,
    VideoGameGenres,
    VideoGameHardware,
    VideoGameHardwareVersions,
    VideoGamePlatforms,
    VideoGamePublishers,
    VideoGameSeries,
    VideoGameThemes,
    VideoGameVersions,
    WikiPages,
    #[value(skip)]
    Unknown,
}

impl SitemapLocationType {
    /// All known location types, in URL-part matching order
    pub const KNOWN: [SitemapLocationType; 62] = [
        Self::BoardGames,
        Self::BoardGameAccessories,
        Self::BoardGameAccessoryFamilies,
        Self::BoardGameAccessoryVersions,
        Self::BoardGameArtists,
        Self::BoardGameAuthors,
        Self::BoardGameCompilations,
        Self::BoardGameDesigners,
        Self::BoardGameEvents,
        Self::BoardGameExpansions,
        Self::BoardGameFamilies,
        Self::BoardGameImplementations,
        Self::BoardGameIssues,
        Self::BoardGameIssueArticles,
        Self::BoardGameIssueVersions,
        Self::BoardGamePeriodicals,
        Self::BoardGamePublishers,
        Self::BoardGameSleeves,
        Self::BoardGameSleeveManufacturers,
        Self::BoardGameSubDomains,
        Self::BoardGameVersions,
        Self::CardTypes,
        Self::CardSets,
        Self::Files,
        Self::GeekLists,
        Self::Images,
        Self::Rpg,
        Self::RpgArtists,
        Self::RpgCategories,
        Self::RpgDesigners,
        Self::RpgFamilies,
        Self::RpgGenres,
        Self::RpgIssues,
        Self::RpgIssueArticles,
        Self::RpgIssueVersions,
        Self::RpgItems,
        Self::RpgItemVersions,
        Self::RpgMechanics,
        Self::RpgPeriodicals,
        Self::RpgProducers,
        Self::RpgPublishers,
        Self::RpgSeries,
        Self::RpgSettings,
        Self::RpgSystems,
        Self::Threads,
        Self::VideoGames,
        Self::VideoGameBoardGames,
        Self::VideoGameCharacters,
        Self::VideoGameCharacterVersions,
        Self::VideoGameCompilations,
        Self::VideoGameDevelopers,
        Self::VideoGameExpansions,
        Self::VideoGameFranchises,
        Self::VideoGameGenres,
        Self::VideoGameHardware,
        Self::VideoGameHardwareVersions,
        Self::VideoGamePlatforms,
        Self::VideoGamePublishers,
        Self::VideoGameSeries,
        Self::VideoGameThemes,
        Self::VideoGameVersions,
        Self::WikiPages,
    ];

    /// Fragment of the sitemap file name identifying this type
    pub fn url_part(self) -> &'static str {
        match self {
            Self::BoardGames => "geekitems_boardgame_page",
            Self::BoardGameAccessories => "boardgameaccessory_page",
            Self::BoardGameAccessoryFamilies => "bgaccessoryfamily_page",
            Self::BoardGameAccessoryVersions => "bgaccessoryversion_page",
            Self::BoardGameArtists => "boardgameartist_page",
            Self::BoardGameAuthors => "boardgameauthor_page",
            Self::BoardGameCompilations => "boardgamecompilation_page",
            Self::BoardGameDesigners => "boardgamedesigner_page",
            Self::BoardGameEvents => "boardgameevent_page",
            Self::BoardGameExpansions => "boardgameexpansion_page",
            Self::BoardGameFamilies => "boardgamefamily_page",
            Self::BoardGameImplementations => "boardgameimplementation_page",
            Self::BoardGameIssues => "boardgameissue_page",
            Self::BoardGameIssueArticles => "boardgameissuearticle_page",
            Self::BoardGameIssueVersions => "boardgameissueversion_page",
            Self::BoardGamePeriodicals => "boardgameperiodical_page",
            Self::BoardGamePublishers => "boardgamepublisher_page",
            Self::BoardGameSleeves => "bgsleeve_page",
            Self::BoardGameSleeveManufacturers => "bgsleevemfg_page",
            Self::BoardGameSubDomains => "boardgamesubdomain_page",
            Self::BoardGameVersions => "boardgameversion_page_",
            Self::CardTypes => "cardtype_page",
            Self::CardSets => "cardset_page",
            Self::Files => "files_page",
            Self::GeekLists => "geeklists_page",
            Self::Images => "images_page",
            Self::Rpg => "rpg_page",
            Self::RpgArtists => "rpgartist_page",
            Self::RpgCategories => "rpgcategory_page",
            Self::RpgDesigners => "rpgdesigner_page",
            Self::RpgFamilies => "rpgfamily_page",
            Self::RpgGenres => "rpggenre_page",
            Self::RpgIssues => "rpgissue_page",
            Self::RpgIssueArticles => "rpgissuearticle_page",
            Self::RpgIssueVersions => "rpgissueversion_page",
            Self::RpgItems => "rpgitem_page",
            Self::RpgItemVersions => "rpgitemversion_page",
            Self::RpgMechanics => "rpgmechanic_page",
            Self::RpgPeriodicals => "rpgperiodical_page",
            Self::RpgProducers => "rpgproducer_page",
            Self::RpgPublishers => "rpgpublisher_page",
            Self::RpgSeries => "rpgseries_page",
            Self::RpgSettings => "rpgsetting_page",
            Self::RpgSystems => "rpgsystem_page",
            Self::Threads => "threads_page",
            Self::VideoGames => "videogame_page",
            Self::VideoGameBoardGames => "videogamebg_page",
            Self::VideoGameCharacters => "videogamecharacter_page",
            Self::VideoGameCharacterVersions => "vgcharacterversion_page",
            Self::VideoGameCompilations => "videogamecompilation_page",
            Self::VideoGameDevelopers => "videogamedeveloper_page",
            Self::VideoGameExpansions => "videogameexpansion_page",
            Self::VideoGameFranchises => "videogamefranchise_page",
            Self::VideoGameGenres => "videogamegenre_page",
            Self::VideoGameHardware => "videogamehardware_page",
            Self::VideoGameHardwareVersions => "videogamehwversion_page",
            Self::VideoGamePlatforms => "videogameplatform_page",
            Self::VideoGamePublishers => "videogamepublisher_page",
            Self::VideoGameSeries => "videogameseries_page",
            Self::VideoGameThemes => "videogametheme_page",
            Self::VideoGameVersions => "videogameversion_page",
            Self::WikiPages => "wiki_page",
            Self::Unknown => "",
        }
    }

    /// Classify a sitemap location by the fragment its URL contains.
    ///
    /// A fragment at offset zero does not count: locations are always full
    /// URLs, so a match there means the URL is not a real sitemap location.
    pub fn from_url(url: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|kind| url.find(kind.url_part()).is_some_and(|idx| idx > 0))
            .unwrap_or(Self::Unknown)
    }
}

// ============================================================================
// Backoff Type
// ============================================================================

/// Type of backoff for retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}

// ============================================================================
// Log Level
// ============================================================================

/// Log verbosity for the process-wide subscriber
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Extension trait for Option<String> to handle empty strings
pub trait OptionStringExt {
    /// Returns None if the string is empty
    fn none_if_empty(self) -> Option<String>;
}

impl OptionStringExt for Option<String> {
    fn none_if_empty(self) -> Option<String> {
        self.filter(|s| !s.is_empty())
    }
}

impl OptionStringExt for String {
    fn none_if_empty(self) -> Option<String> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_open_enum_round_trip_known_value() {
        let ty = ThingType::from_param("boardgameexpansion");
        assert_eq!(ty, ThingType::BoardGameExpansion);
        assert_eq!(ty.as_param(), "boardgameexpansion");
        assert!(!ty.is_unknown());
    }

    #[test]
    fn test_open_enum_keeps_unknown_value() {
        let ty = SubType::from_param("boardgamepodcast");
        assert_eq!(ty, SubType::Unknown("boardgamepodcast".to_string()));
        assert_eq!(ty.to_string(), "boardgamepodcast");
        assert!(ty.is_unknown());
    }

    #[test]
    fn test_open_enum_serde() {
        let json = serde_json::to_string(&Domain::Rpg).unwrap();
        assert_eq!(json, "\"rpg\"");
        let parsed: HotListType = serde_json::from_str("\"boardgameperson\"").unwrap();
        assert_eq!(parsed, HotListType::BoardGamePerson);
    }

    #[test]
    fn test_inclusion_param() {
        assert_eq!(Inclusion::Include.to_param(), "1");
        assert_eq!(Inclusion::Exclude.to_param(), "0");
        assert_eq!(Inclusion::from(true), Inclusion::Include);
    }

    #[test]
    fn test_sitemap_location_type_from_url() {
        assert_eq!(
            SitemapLocationType::from_url(
                "https://boardgamegeek.com/sitemap_geekitems_boardgame_page_1"
            ),
            SitemapLocationType::BoardGames
        );
        assert_eq!(
            SitemapLocationType::from_url("https://boardgamegeek.com/sitemap_rpgitem_page_12"),
            SitemapLocationType::RpgItems
        );
        assert_eq!(
            SitemapLocationType::from_url("https://boardgamegeek.com/sitemap_other_3"),
            SitemapLocationType::Unknown
        );
        assert_eq!(
            SitemapLocationType::from_url("rpg_page"),
            SitemapLocationType::Unknown
        );
    }

    #[test_case("sitemap_geekitems_bgaccessoryfamily_page_1", SitemapLocationType::BoardGameAccessoryFamilies)]
    #[test_case("sitemap_geekitems_boardgameissue_page_4", SitemapLocationType::BoardGameIssues)]
    #[test_case("sitemap_geekitems_boardgameissuearticle_page_2", SitemapLocationType::BoardGameIssueArticles)]
    #[test_case("sitemap_geekitems_bgsleevemfg_page_1", SitemapLocationType::BoardGameSleeveManufacturers)]
    #[test_case("sitemap_geekitems_cardset_page_1", SitemapLocationType::CardSets)]
    #[test_case("sitemap_geekitems_rpgmechanic_page_1", SitemapLocationType::RpgMechanics)]
    #[test_case("sitemap_geekitems_videogameversion_page_9", SitemapLocationType::VideoGameVersions)]
    #[test_case("sitemap_geekitems_videogamebg_page_1", SitemapLocationType::VideoGameBoardGames)]
    #[test_case("sitemap_geekitems_vgcharacterversion_page_1", SitemapLocationType::VideoGameCharacterVersions)]
    #[test_case("sitemap_geekitems_videogamehwversion_page_1", SitemapLocationType::VideoGameHardwareVersions)]
    fn test_sitemap_location_type_full_catalog(file: &str, expected: SitemapLocationType) {
        let url = format!("https://boardgamegeek.com/{file}");
        assert_eq!(SitemapLocationType::from_url(&url), expected);
    }

    #[test]
    fn test_sitemap_location_type_parts_round_trip() {
        for kind in SitemapLocationType::KNOWN {
            let url = format!("https://boardgamegeek.com/sitemap_geekitems_{}1", kind.url_part());
            let url = url.replace("geekitems_geekitems_", "geekitems_");
            assert_eq!(SitemapLocationType::from_url(&url), kind, "{url}");
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(tracing::Level::from(LogLevel::Debug), tracing::Level::DEBUG);
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_option_string_none_if_empty() {
        assert_eq!(
            Some("test".to_string()).none_if_empty(),
            Some("test".to_string())
        );
        assert_eq!(Some(String::new()).none_if_empty(), None);
        assert_eq!(None::<String>.none_if_empty(), None);
        assert_eq!(String::new().none_if_empty(), None);
    }
}
