//! League page parser
//!
//! The league page carries two `table-custom table-roster` tables; the
//! second one lists the clubs.

use std::collections::HashSet;

use scraper::Html;

use crate::error::ParseError;
use crate::types::ClubId;

use super::links::{collect_link_ids, link_regex, selector, SQUAD_LINK_PATTERN};

/// Parse the distinct club ids from a league page.
///
/// # Arguments
/// * `html` - Raw HTML content of `league.php?leagueid=...`
///
/// # Returns
/// * `Ok(HashSet<ClubId>)` with every club linked from the roster table
/// * `Err(ParseError::MissingSection)` if fewer than two roster tables exist
pub fn parse_league_page(html: &str) -> Result<HashSet<ClubId>, ParseError> {
    let document = Html::parse_document(html);
    let tables = selector("table.table-custom.table-roster")?;

    let clubs_table = document
        .select(&tables)
        .nth(1)
        .ok_or(ParseError::MissingSection("club roster table"))?;

    collect_link_ids(clubs_table, &link_regex(SQUAD_LINK_PATTERN)?)
}
