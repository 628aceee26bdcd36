mod common;

use common::{league_html, player_html, squad_html};
use soccerwiki_core::{ClientConfig, CrawlConfig, Crawler, Page, SoccerwikiClient, SoccerwikiError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SoccerwikiClient {
    SoccerwikiClient::with_config(ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    })
    .unwrap()
}

async fn mount_page(server: &MockServer, script: &str, key: &str, id: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(script))
        .and(query_param(key, id))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/player.php"))
        .and(query_param("pid", "7"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let body = client_for(&server)
        .fetch_page(&Page::Player("7".into()))
        .await
        .unwrap();

    assert_eq!(body, "<html>ok</html>");
}

#[tokio::test]
async fn test_fetch_returns_body_for_error_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/squad.php"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html>Not found</html>"))
        .mount(&server)
        .await;

    let body = client_for(&server)
        .fetch_page(&Page::Squad("1".into()))
        .await
        .unwrap();

    assert_eq!(body, "<html>Not found</html>");
}

#[tokio::test]
async fn test_crawl_league_over_http() {
    let server = MockServer::start().await;
    mount_page(&server, "/league.php", "leagueid", "89", league_html(&["10", "10", "20"])).await;
    mount_page(&server, "/squad.php", "clubid", "10", squad_html(&["1", "2"])).await;
    mount_page(&server, "/squad.php", "clubid", "20", squad_html(&["2", "3"])).await;
    mount_page(&server, "/player.php", "pid", "1", player_html("One", Some("1"))).await;
    mount_page(&server, "/player.php", "pid", "2", player_html("Two", Some("2"))).await;
    mount_page(&server, "/player.php", "pid", "3", player_html("Three", None)).await;

    let crawler = Crawler::with_source(client_for(&server), CrawlConfig::default());
    let report = crawler.crawl_league("89").await.unwrap();

    let ids: Vec<&str> = report.records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2"]);
    assert_eq!(report.players_failed, 1);
}

#[tokio::test]
async fn test_malformed_league_page_stops_crawl() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/league.php"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>Server error</html>"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/squad.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string(squad_html(&["1"])))
        .expect(0)
        .mount(&server)
        .await;

    let crawler = Crawler::with_source(client_for(&server), CrawlConfig::default());
    let err = crawler.crawl_league("89").await.unwrap_err();

    assert!(matches!(err, SoccerwikiError::Parse { .. }));
}
