//! League crawler
//!
//! This module sequences the three page levels: the league page yields
//! club ids, the squad pages (fanned out) yield player ids, and the player
//! pages (fanned out wider) yield records. Only a failure on the league
//! page aborts the crawl; club and player failures are logged, counted and
//! skipped.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::client::{PageSource, SoccerwikiClient};
use crate::dedupe::dedupe;
use crate::error::{Result, SoccerwikiError};
use crate::fanout::{fan_out, partition_results};
use crate::parser::{
    parse_league_page, parse_player_page_with, parse_squad_page, FieldExtractor, InfoListExtractor,
};
use crate::types::{ClubId, CrawlReport, Page, PlayerId, PlayerRecord};

/// Concurrency limits for the two fan-out phases
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Squad pages fetched at once (default: 25)
    pub club_concurrency: usize,
    /// Player pages fetched at once (default: 45)
    pub player_concurrency: usize,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            club_concurrency: 25,
            player_concurrency: 45,
        }
    }
}

/// Crawls a league into a sorted list of player records.
///
/// # Example
/// ```no_run
/// use soccerwiki_core::Crawler;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let crawler = Crawler::new()?;
///
///     let report = crawler.crawl_league("89").await?;
///     println!("{} players", report.records.len());
///
///     Ok(())
/// }
/// ```
pub struct Crawler<S> {
    source: Arc<S>,
    config: CrawlConfig,
    extractor: Arc<dyn FieldExtractor>,
}

impl Crawler<SoccerwikiClient> {
    /// Create a crawler over the live site with default configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new() -> Result<Self> {
        Ok(Self::with_source(SoccerwikiClient::new()?, CrawlConfig::default()))
    }
}

impl<S> Crawler<S>
where
    S: PageSource + 'static,
{
    /// Create a crawler over any page source.
    ///
    /// This is useful for testing or for pointing at a mirror.
    pub fn with_source(source: S, config: CrawlConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
            extractor: Arc::new(InfoListExtractor::default()),
        }
    }

    /// Replace the player field extraction strategy.
    pub fn with_extractor(mut self, extractor: impl FieldExtractor + 'static) -> Self {
        self.extractor = Arc::new(extractor);
        self
    }

    /// Concurrency limits in use
    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    /// Page source the crawler fetches from
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Club ids listed on a league page.
    ///
    /// # Errors
    /// - `SoccerwikiError::Fetch` if the page cannot be fetched
    /// - `SoccerwikiError::Parse` if the club roster table is missing
    pub async fn club_ids(&self, league_id: &str) -> Result<HashSet<ClubId>> {
        load_league(&*self.source, league_id).await
    }

    /// Player ids listed on a club's squad page.
    pub async fn player_ids(&self, club_id: &str) -> Result<HashSet<PlayerId>> {
        load_squad(&*self.source, club_id).await
    }

    /// One player's record.
    pub async fn player(&self, player_id: &str) -> Result<PlayerRecord> {
        load_player(&*self.source, self.extractor.as_ref(), player_id).await
    }

    /// Crawl every player of a league.
    ///
    /// # Returns
    /// * `Ok(CrawlReport)` with records sorted ascending by `id`; failed
    ///   clubs and players are counted, not returned
    /// * `Err(SoccerwikiError)` if the league page itself fails, in which
    ///   case no club or player page is requested
    pub async fn crawl_league(&self, league_id: &str) -> Result<CrawlReport> {
        info!(league_id, "fetching league page");
        let clubs = self.club_ids(league_id).await?;
        let clubs_discovered = clubs.len();
        info!(league_id, clubs = clubs_discovered, "discovered clubs");

        let source = Arc::clone(&self.source);
        let squad_results = fan_out(
            clubs.into_iter().collect(),
            self.config.club_concurrency,
            move |club_id: ClubId| {
                let source = Arc::clone(&source);
                async move { load_squad(&*source, &club_id).await }
            },
        )
        .await;

        let (squads, club_errors) = partition_results(squad_results);
        for e in &club_errors {
            warn!(error = %e, "skipping club");
        }

        let players = dedupe(squads.into_iter().flatten());
        let players_discovered = players.len();
        info!(
            league_id,
            players = players_discovered,
            clubs_failed = club_errors.len(),
            "discovered players"
        );

        let source = Arc::clone(&self.source);
        let extractor = Arc::clone(&self.extractor);
        let player_results = fan_out(
            players.into_iter().collect(),
            self.config.player_concurrency,
            move |player_id: PlayerId| {
                let source = Arc::clone(&source);
                let extractor = Arc::clone(&extractor);
                async move { load_player(&*source, extractor.as_ref(), &player_id).await }
            },
        )
        .await;

        let (mut records, player_errors) = partition_results(player_results);
        for e in &player_errors {
            warn!(error = %e, "skipping player");
        }

        // String order, so "10" sorts before "2"
        records.sort_by(|a, b| a.id.cmp(&b.id));

        info!(
            league_id,
            records = records.len(),
            players_failed = player_errors.len(),
            "crawl finished"
        );

        Ok(CrawlReport {
            league_id: league_id.to_string(),
            records,
            clubs_discovered,
            clubs_failed: club_errors.len(),
            players_discovered,
            players_failed: player_errors.len(),
        })
    }
}

async fn load_league<S: PageSource>(source: &S, league_id: &str) -> Result<HashSet<ClubId>> {
    let page = Page::League(league_id.to_string());
    let html = source.fetch(&page).await?;
    parse_league_page(&html).map_err(|e| parse_error(&page, e))
}

async fn load_squad<S: PageSource>(source: &S, club_id: &str) -> Result<HashSet<PlayerId>> {
    let page = Page::Squad(club_id.to_string());
    let html = source.fetch(&page).await?;
    let players = parse_squad_page(&html).map_err(|e| parse_error(&page, e))?;
    debug!(club_id, players = players.len(), "parsed squad");
    Ok(players)
}

async fn load_player<S: PageSource>(
    source: &S,
    extractor: &dyn FieldExtractor,
    player_id: &str,
) -> Result<PlayerRecord> {
    let page = Page::Player(player_id.to_string());
    let html = source.fetch(&page).await?;
    parse_player_page_with(&html, player_id, extractor).map_err(|e| parse_error(&page, e))
}

fn parse_error(page: &Page, source: crate::error::ParseError) -> SoccerwikiError {
    SoccerwikiError::Parse {
        page: page.path(),
        source,
    }
}
