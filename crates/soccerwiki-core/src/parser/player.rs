//! Player page parser
//!
//! Player details are read from `div.player-info-main`. Most fields sit at
//! fixed positions in a list of `p.player-info-subtitle` lines, which is
//! fragile, so the lookup lives behind the `FieldExtractor` trait and can
//! be replaced without touching the crawler.

use scraper::{ElementRef, Html};

use crate::error::ParseError;
use crate::types::PlayerRecord;

use super::links::selector;

/// Strategy for turning a parsed player page into a record.
///
/// Implementations must fail instead of defaulting when a field is
/// missing; a record is either complete or not produced at all.
pub trait FieldExtractor: Send + Sync {
    /// Extract the record for player `id` from `document`
    fn extract(&self, document: &Html, id: &str) -> Result<PlayerRecord, ParseError>;
}

/// Positions of the labelled lines inside the player info block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoListLayout {
    /// Line holding the player name (default: 0)
    pub name: usize,
    /// Line holding the rating badge (default: 3)
    pub stats: usize,
    /// Line labelled with the age (default: 4)
    pub age: usize,
    /// Line labelled with the height (default: 6)
    pub height: usize,
    /// Line labelled with the weight (default: 7)
    pub weight: usize,
}

impl Default for InfoListLayout {
    fn default() -> Self {
        Self {
            name: 0,
            stats: 3,
            age: 4,
            height: 6,
            weight: 7,
        }
    }
}

/// Positional extractor matching the current soccerwiki player page.
#[derive(Debug, Clone, Default)]
pub struct InfoListExtractor {
    layout: InfoListLayout,
}

impl InfoListExtractor {
    /// Create an extractor for a custom line layout.
    pub fn new(layout: InfoListLayout) -> Self {
        Self { layout }
    }

    /// Line layout in use
    pub fn layout(&self) -> InfoListLayout {
        self.layout
    }
}

impl FieldExtractor for InfoListExtractor {
    fn extract(&self, document: &Html, id: &str) -> Result<PlayerRecord, ParseError> {
        let container_sel = selector("div.player-info-main")?;
        let line_sel = selector("p.player-info-subtitle.mb-2")?;
        let span_sel = selector("span")?;
        let stats_sel = selector("span.promo-creative-tickets-number")?;

        let container = document
            .select(&container_sel)
            .next()
            .ok_or(ParseError::FieldMissing("player-info-main"))?;
        let lines: Vec<ElementRef<'_>> = container.select(&line_sel).collect();

        let labelled = |index: usize, field: &'static str| {
            lines
                .get(index)
                .and_then(|line| line.select(&span_sel).next())
                .and_then(text_after)
                .ok_or(ParseError::FieldMissing(field))
        };

        let name = labelled(self.layout.name, "name")?;
        let age = labelled(self.layout.age, "age")?;
        let height = labelled(self.layout.height, "height")?;
        let weight = labelled(self.layout.weight, "weight")?;

        let stats = lines
            .get(self.layout.stats)
            .and_then(|line| line.select(&stats_sel).next())
            .map(|el| el.text().collect::<String>().trim().to_string())
            .ok_or(ParseError::FieldMissing("stats"))?;

        let squad_number = container
            .select(&span_sel)
            .find(|span| span.text().collect::<String>().contains("Squad Number"))
            .and_then(text_after)
            .ok_or(ParseError::FieldMissing("squad_number"))?;

        Ok(PlayerRecord {
            id: id.to_string(),
            name,
            age,
            stats,
            height,
            weight,
            squad_number,
        })
    }
}

/// Trimmed text node directly following `label`, if there is one.
fn text_after(label: ElementRef<'_>) -> Option<String> {
    let sibling = label.next_sibling()?;
    let text = sibling.value().as_text()?;
    Some(text.trim().to_string())
}

/// Parse a player page with the default positional layout.
///
/// # Arguments
/// * `html` - Raw HTML content of `player.php?pid=...`
/// * `id` - Player id the page was requested for
///
/// # Returns
/// * `Ok(PlayerRecord)` with every field populated
/// * `Err(ParseError::FieldMissing)` naming the first field not found
pub fn parse_player_page(html: &str, id: &str) -> Result<PlayerRecord, ParseError> {
    parse_player_page_with(html, id, &InfoListExtractor::default())
}

/// Parse a player page with a custom extraction strategy.
pub fn parse_player_page_with(
    html: &str,
    id: &str,
    extractor: &dyn FieldExtractor,
) -> Result<PlayerRecord, ParseError> {
    let document = Html::parse_document(html);
    extractor.extract(&document, id)
}

#[cfg(test)]
pub(crate) mod fixtures {
    /// Minimal player page in the layout the site currently serves.
    pub fn player_html(name: &str, squad_number: Option<&str>) -> String {
        let squad = squad_number
            .map(|n| format!(r#"<p class="player-info-subtitle mb-2"><span>Squad Number:</span> {n}</p>"#))
            .unwrap_or_default();

        format!(
            r#"<html><body>
            <div class="player-info-main">
                <p class="player-info-subtitle mb-2"><span>Full name:</span>
                    {name}
                </p>
                <p class="player-info-subtitle mb-2"><span>Nationality:</span> Vietnam</p>
                <p class="player-info-subtitle mb-2"><span>Position:</span> M(C)</p>
                <p class="player-info-subtitle mb-2"><span>Rating:</span>
                    <span class="promo-creative-tickets-number"> 71 </span></p>
                <p class="player-info-subtitle mb-2"><span>Age:</span> 24 </p>
                <p class="player-info-subtitle mb-2"><span>Date of birth:</span> 01/01/2001</p>
                <p class="player-info-subtitle mb-2"><span>Height:</span> 175 cm</p>
                <p class="player-info-subtitle mb-2"><span>Weight:</span> 68 kg</p>
                <p class="player-info-subtitle mb-2"><span>Foot:</span> Right</p>
                {squad}
            </div>
            </body></html>"#
        )
    }
}
