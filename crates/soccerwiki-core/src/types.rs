//! Data types for the soccerwiki crawler
//!
//! This module contains the identifiers, page addresses and records that
//! flow between the fetcher, the parsers and the orchestrator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// League identifier as it appears in `league.php?leagueid=`
pub type LeagueId = String;

/// Club identifier as it appears in `squad.php?clubid=`
pub type ClubId = String;

/// Player identifier as it appears in `player.php?pid=`
pub type PlayerId = String;

/// One addressable page on the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    /// League overview listing its clubs
    League(LeagueId),
    /// Club squad listing its players
    Squad(ClubId),
    /// Player detail page
    Player(PlayerId),
}

impl Page {
    /// Relative path (with query) of this page on the site.
    ///
    /// # Examples
    /// ```
    /// use soccerwiki_core::Page;
    ///
    /// assert_eq!(Page::Player("1234".into()).path(), "/player.php?pid=1234");
    /// ```
    pub fn path(&self) -> String {
        match self {
            Page::League(id) => format!("/league.php?leagueid={}", urlencoding::encode(id)),
            Page::Squad(id) => format!("/squad.php?clubid={}", urlencoding::encode(id)),
            Page::Player(id) => format!("/player.php?pid={}", urlencoding::encode(id)),
        }
    }

    /// Identifier carried by this page
    pub fn id(&self) -> &str {
        match self {
            Page::League(id) | Page::Squad(id) | Page::Player(id) => id,
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// A player as extracted from the player detail page.
///
/// Values are raw trimmed text; numeric coercion is left to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    /// Player identifier from the page URL
    pub id: PlayerId,
    /// Display name
    pub name: String,
    /// Age as shown on the page
    pub age: String,
    /// Headline stats value
    pub stats: String,
    /// Height as shown on the page (unit included)
    pub height: String,
    /// Weight as shown on the page (unit included)
    pub weight: String,
    /// Shirt number in the current squad
    pub squad_number: String,
}

impl PlayerRecord {
    /// Column names in output order
    pub const COLUMNS: [&'static str; 7] = [
        "id",
        "name",
        "age",
        "stats",
        "height",
        "weight",
        "squad_number",
    ];

    /// Field values in `COLUMNS` order
    pub fn row(&self) -> [&str; 7] {
        [
            &self.id,
            &self.name,
            &self.age,
            &self.stats,
            &self.height,
            &self.weight,
            &self.squad_number,
        ]
    }
}

/// Result of crawling one league.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    /// League that was crawled
    pub league_id: LeagueId,
    /// Records sorted ascending by `id` (string order)
    pub records: Vec<PlayerRecord>,
    /// Distinct clubs found on the league page
    pub clubs_discovered: usize,
    /// Clubs whose squad page could not be fetched or parsed
    pub clubs_failed: usize,
    /// Distinct players found across all squads
    pub players_discovered: usize,
    /// Players whose detail page could not be fetched or parsed
    pub players_failed: usize,
}
