//! Identifier extraction from anchor hrefs
//!
//! League and squad pages both list their children as links of the form
//! `/<script>.php?<key>=<id>`; this module pulls the ids out of them.

use std::collections::HashSet;

use regex_lite::Regex;
use scraper::{ElementRef, Selector};

use crate::dedupe::dedupe;
use crate::error::ParseError;

/// Links from a league page to club squads
pub const SQUAD_LINK_PATTERN: &str = r"^/squad\.php\?clubid=([^&#]+)";

/// Links from a squad page to player details
pub const PLAYER_LINK_PATTERN: &str = r"^/player\.php\?pid=([^&#]+)";

/// Compile a CSS selector, mapping failures to `ParseError`.
pub(crate) fn selector(css: &str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|e| ParseError::InvalidSelector(format!("{css}: {e:?}")))
}

/// Compile one of the link patterns.
pub(crate) fn link_regex(pattern: &str) -> Result<Regex, ParseError> {
    Regex::new(pattern).map_err(|e| ParseError::InvalidSelector(format!("{pattern}: {e}")))
}

/// Extract the id captured by `pattern` from an href.
///
/// # Returns
/// * `Some(id)` if the href targets the expected page and carries an id
/// * `None` otherwise
///
/// # Examples
/// ```
/// use soccerwiki_core::parser::{extract_link_id, SQUAD_LINK_PATTERN};
///
/// assert_eq!(extract_link_id("/squad.php?clubid=10", SQUAD_LINK_PATTERN), Some("10".to_string()));
/// assert_eq!(extract_link_id("/player.php?pid=10", SQUAD_LINK_PATTERN), None);
/// ```
pub fn extract_link_id(href: &str, pattern: &str) -> Option<String> {
    let re = Regex::new(pattern).ok()?;
    capture_id(&re, href)
}

fn capture_id(re: &Regex, href: &str) -> Option<String> {
    let caps = re.captures(href.trim())?;
    let raw = caps.get(1)?.as_str().trim();
    // Ids are stored decoded; `Page::path` encodes them again
    let id = urlencoding::decode(raw).map(|id| id.into_owned()).unwrap_or_else(|_| raw.to_string());
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Collect the distinct ids of all anchors under `scope` matching `re`.
pub(crate) fn collect_link_ids(scope: ElementRef<'_>, re: &Regex) -> Result<HashSet<String>, ParseError> {
    let anchors = selector("a[href]")?;

    Ok(dedupe(scope.select(&anchors).filter_map(|a| {
        a.value().attr("href").and_then(|href| capture_id(re, href))
    })))
}
