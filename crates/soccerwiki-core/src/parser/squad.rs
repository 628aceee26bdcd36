//! Squad page parser
//!
//! Players of a club are listed in `table#datatable`.

use std::collections::HashSet;

use scraper::Html;

use crate::error::ParseError;
use crate::types::PlayerId;

use super::links::{collect_link_ids, link_regex, selector, PLAYER_LINK_PATTERN};

/// Parse the distinct player ids from a club squad page.
///
/// # Arguments
/// * `html` - Raw HTML content of `squad.php?clubid=...`
///
/// # Returns
/// * `Ok(HashSet<PlayerId>)` with every player linked from the squad table
/// * `Err(ParseError::MissingSection)` if the squad table is absent
pub fn parse_squad_page(html: &str) -> Result<HashSet<PlayerId>, ParseError> {
    let document = Html::parse_document(html);
    let table = selector("table#datatable")?;

    let squad_table = document
        .select(&table)
        .next()
        .ok_or(ParseError::MissingSection("table#datatable"))?;

    collect_link_ids(squad_table, &link_regex(PLAYER_LINK_PATTERN)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_squad_page() {
        let html = r#"<html><body>
            <a href="/player.php?pid=500">Featured player outside the table</a>
            <table id="datatable">
                <tr><td><a href="/player.php?pid=1"><img></a></td>
                    <td><a href="/player.php?pid=1">Player One</a></td>
                    <td><a href="/squad.php?clubid=10">Club</a></td></tr>
                <tr><td><a href="/player.php?pid=2">Player Two</a></td></tr>
            </table>
        </body></html>"#;

        let players = parse_squad_page(html).unwrap();

        assert_eq!(players.len(), 2);
        assert!(players.contains("1"));
        assert!(players.contains("2"));
        assert!(!players.contains("500"));
    }

    #[test]
    fn test_parse_squad_page_missing_table() {
        let html = r#"<table class="datatable"><tr><td>wrong attribute</td></tr></table>"#;
        assert_eq!(
            parse_squad_page(html),
            Err(ParseError::MissingSection("table#datatable"))
        );
    }

    #[test]
    fn test_parse_squad_page_without_players() {
        let html = r#"<table id="datatable"><tr><td>No players</td></tr></table>"#;
        assert!(parse_squad_page(html).unwrap().is_empty());
    }
}
