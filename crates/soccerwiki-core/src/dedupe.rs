//! Identifier deduplication
//!
//! A club or player is often linked several times from the same page
//! (name cell, photo cell, ...). Collapsing to a set here guarantees each
//! identifier is fetched once.

use std::collections::HashSet;

/// Collapse identifiers into a set.
///
/// Output order is unspecified; ordering is applied once at the end of
/// the crawl.
///
/// # Examples
/// ```
/// use soccerwiki_core::dedupe;
///
/// let ids = dedupe(["10".to_string(), "10".to_string(), "20".to_string()]);
/// assert_eq!(ids.len(), 2);
/// ```
pub fn dedupe<I>(ids: I) -> HashSet<String>
where
    I: IntoIterator<Item = String>,
{
    ids.into_iter().collect()
}
