#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use rand::Rng;
use soccerwiki_core::{FetchError, Page, PageSource};

pub fn league_html(club_ids: &[&str]) -> String {
    let links: String = club_ids
        .iter()
        .map(|id| format!(r#"<tr><td><a href="/squad.php?clubid={id}">Club {id}</a></td></tr>"#))
        .collect();
    format!(
        r#"<html><body>
            <table class="table-custom table-roster"><tr><td>Standings</td></tr></table>
            <table class="table-custom table-roster">{links}</table>
        </body></html>"#
    )
}

pub fn squad_html(player_ids: &[&str]) -> String {
    let links: String = player_ids
        .iter()
        .map(|id| format!(r#"<tr><td><a href="/player.php?pid={id}">Player {id}</a></td></tr>"#))
        .collect();
    format!(r#"<html><body><table id="datatable">{links}</table></body></html>"#)
}

pub fn player_html(name: &str, squad_number: Option<&str>) -> String {
    let squad = squad_number
        .map(|n| format!(r#"<p class="player-info-subtitle mb-2"><span>Squad Number:</span> {n}</p>"#))
        .unwrap_or_default();
    format!(
        r#"<html><body><div class="player-info-main">
            <p class="player-info-subtitle mb-2"><span>Name:</span> {name} </p>
            <p class="player-info-subtitle mb-2"><span>Nationality:</span> Vietnam</p>
            <p class="player-info-subtitle mb-2"><span>Position:</span> D(C)</p>
            <p class="player-info-subtitle mb-2"><span>Rating:</span><span class="promo-creative-tickets-number">68</span></p>
            <p class="player-info-subtitle mb-2"><span>Age:</span> 27</p>
            <p class="player-info-subtitle mb-2"><span>Born:</span> 1998</p>
            <p class="player-info-subtitle mb-2"><span>Height:</span> 181 cm</p>
            <p class="player-info-subtitle mb-2"><span>Weight:</span> 77 kg</p>
            {squad}
        </div></body></html>"#
    )
}

/// Build a reqwest error without touching the network.
pub fn transport_error() -> reqwest::Error {
    reqwest::Client::new()
        .get("not a url")
        .build()
        .unwrap_err()
}

/// In-memory page source that sleeps a random few milliseconds per
/// request, so completion order differs between runs.
#[derive(Default)]
pub struct DelayedSource {
    pages: HashMap<String, String>,
    broken: Vec<String>,
    requests: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl DelayedSource {
    pub fn page(mut self, page: Page, html: impl Into<String>) -> Self {
        self.pages.insert(page.path(), html.into());
        self
    }

    /// Fail this page at the transport level
    pub fn unreachable(mut self, page: Page) -> Self {
        self.broken.push(page.path());
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests_for(&self, path: &str) -> usize {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.as_str() == path)
            .count()
    }
}

impl PageSource for DelayedSource {
    async fn fetch(&self, page: &Page) -> Result<String, FetchError> {
        let path = page.path();
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(path.clone());

        let delay = rand::thread_rng().gen_range(0..8u64);
        tokio::time::sleep(Duration::from_millis(delay)).await;

        if self.broken.contains(&path) {
            return Err(FetchError {
                url: path,
                source: transport_error(),
            });
        }
        Ok(self.pages.get(&path).cloned().unwrap_or_default())
    }
}
