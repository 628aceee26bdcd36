use soccerwiki_core::{CrawlConfig, Crawler, SoccerwikiClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let league_id = std::env::args().nth(1).unwrap_or_else(|| "89".to_string());
    let crawler = Crawler::with_source(SoccerwikiClient::new()?, CrawlConfig::default());

    println!("Crawling league {}...\n", league_id);

    let report = crawler.crawl_league(&league_id).await?;
    println!("Found {} clubs", report.clubs_discovered);

    println!(
        "\n{} players ({} clubs failed, {} players failed)",
        report.records.len(),
        report.clubs_failed,
        report.players_failed
    );
    for record in report.records.iter().take(10) {
        println!(
            "  {:>8}  {:<30} age {:<4} #{}",
            record.id, record.name, record.age, record.squad_number
        );
    }
    if report.records.len() > 10 {
        println!("  ... and {} more", report.records.len() - 10);
    }

    Ok(())
}
