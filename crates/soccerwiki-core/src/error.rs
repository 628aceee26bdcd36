//! Error types for the soccerwiki crawler
//!
//! Fetch and parse failures are separate types so the orchestrator can
//! absorb them per item during fan-out, while `SoccerwikiError` is what
//! escapes a whole crawl.

use thiserror::Error;

/// A single page request failed at the transport level.
///
/// HTTP status codes never produce this error; only connection, timeout
/// and body-read failures do.
#[derive(Error, Debug)]
#[error("Failed to fetch {url}: {source}")]
pub struct FetchError {
    /// Full URL that was requested
    pub url: String,
    /// Underlying transport error
    #[source]
    pub source: reqwest::Error,
}

/// Markup did not have the shape the parser expects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Expected container or table is absent from the page
    #[error("Missing section: {0}")]
    MissingSection(&'static str),

    /// A required player field could not be located
    #[error("Missing field: {0}")]
    FieldMissing(&'static str),

    /// A CSS selector or pattern failed to compile
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Output sink rejected the records.
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing to the destination failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder-specific failure (spreadsheet, CSV, JSON)
    #[error("Encoding failed: {0}")]
    Encode(String),
}

/// Error type for whole-crawl operations
#[derive(Error, Debug)]
pub enum SoccerwikiError {
    /// Page request failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Page markup could not be parsed
    #[error("Failed to parse {page}: {source}")]
    Parse {
        /// Page URL path that failed
        page: String,
        #[source]
        source: ParseError,
    },

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Sink failed while receiving records
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result type alias for crawler operations
pub type Result<T> = std::result::Result<T, SoccerwikiError>;
