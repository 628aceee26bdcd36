//! Command-line arguments

use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use soccerwiki_core::client::{DEFAULT_USER_AGENT, SOCCERWIKI_BASE_URL};
use soccerwiki_core::{ClientConfig, CrawlConfig};

/// Crawl every player of a soccerwiki league into a spreadsheet.
#[derive(Debug, Parser, Clone)]
#[command(name = "soccerwiki", version, about)]
pub struct Args {
    /// League id as used in league.php?leagueid=
    #[arg(short, long, value_name = "ID", default_value = "89")]
    pub league: String,

    /// Output file
    #[arg(short, long, value_name = "FILE", default_value = "data/data.xlsx")]
    pub output: PathBuf,

    /// Output format (inferred from the file extension when omitted)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Squad pages fetched concurrently
    #[arg(long, value_name = "N", default_value_t = 25)]
    pub club_concurrency: usize,

    /// Player pages fetched concurrently
    #[arg(long, value_name = "N", default_value_t = 45)]
    pub player_concurrency: usize,

    /// Per-request timeout
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Site root
    #[arg(long, value_name = "URL", env = "SOCCERWIKI_BASE_URL", default_value = SOCCERWIKI_BASE_URL)]
    pub base_url: String,

    /// User-Agent header sent with every request
    #[arg(long, value_name = "UA", env = "SOCCERWIKI_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            base_url: self.base_url.clone(),
            user_agent: self.user_agent.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig {
            club_concurrency: self.club_concurrency,
            player_concurrency: self.player_concurrency,
        }
    }

    /// Explicit `--format`, else the output extension, else xlsx.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.output))
            .unwrap_or(OutputFormat::Xlsx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Xlsx,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" => Some(Self::Xlsx),
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}
