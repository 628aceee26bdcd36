//! HTML parsers for soccerwiki.org pages
//!
//! This module contains parsers for extracting data from the three page
//! kinds the crawler visits:
//! - `league`: club ids from a league page
//! - `squad`: player ids from a club squad page
//! - `player`: the player record from a player detail page

pub mod league;
pub mod links;
pub mod player;
pub mod squad;

// Re-export main parsing functions
pub use league::parse_league_page;
pub use links::{extract_link_id, PLAYER_LINK_PATTERN, SQUAD_LINK_PATTERN};
pub use player::{
    parse_player_page, parse_player_page_with, FieldExtractor, InfoListExtractor, InfoListLayout,
};
pub use squad::parse_squad_page;
