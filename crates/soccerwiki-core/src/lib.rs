//! Soccerwiki Crawler Core Library
//!
//! This crate provides the crawling functionality for soccerwiki.org
//! league, squad and player pages.
//!
//! # Features
//! - Discover the clubs of a league and the players of each club
//! - Fetch and parse every player page with bounded concurrency
//! - Best-effort crawling: failed clubs and players are counted and skipped
//! - Deterministic output sorted by player id

pub mod client;
pub mod crawler;
pub mod dedupe;
pub mod error;
pub mod fanout;
pub mod parser;
pub mod sink;
pub mod types;

// Re-export main types for convenience
pub use client::{ClientConfig, PageSource, SoccerwikiClient};
pub use crawler::{CrawlConfig, Crawler};
pub use dedupe::dedupe;
pub use error::{FetchError, ParseError, Result, SinkError, SoccerwikiError};
pub use fanout::{fan_out, partition_results};
pub use sink::{deliver, MemorySink, RecordSink};
pub use types::{ClubId, CrawlReport, LeagueId, Page, PlayerId, PlayerRecord};
