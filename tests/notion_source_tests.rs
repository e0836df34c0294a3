use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::{Value, json};
use stat_radar::RadarError;
use stat_radar::api::{DEFAULT_FETCH_TIMEOUT, StatExtractor};
use stat_radar::source::{
    MAX_QUERY_PAGES, NotionConfig, NotionSource, RecordSource, collect_stats,
};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(id: &str, name: &str, points: f64) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Stat Name": { "id": "title", "type": "title", "title": [{ "plain_text": name }] },
            "Points": { "id": "pts", "type": "number", "number": points }
        }
    })
}

fn source_for(server: &MockServer) -> NotionSource {
    let config = NotionConfig::new("secret-token", "db-123")
        .with_api_base(server.uri())
        .with_timeout(Duration::from_secs(5));
    NotionSource::new(config, "Stat Name").expect("source")
}

#[tokio::test]
async fn query_sends_auth_version_and_sort() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .and(header("Authorization", "Bearer secret-token"))
        .and(header("Notion-Version", "2022-06-28"))
        .and(body_partial_json(json!({
            "page_size": 100,
            "sorts": [{ "property": "Stat Name", "direction": "ascending" }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "results": [page("p-1", "Agility", 12.0), page("p-2", "Strength", 7.0)],
            "has_more": false,
            "next_cursor": null
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = collect_stats(&source_for(&server), &StatExtractor::default())
        .await
        .expect("payload");

    assert_eq!(payload.labels, ["Agility", "Strength"]);
    assert_eq!(payload.values, [12.0, 7.0]);
}

#[tokio::test]
async fn query_follows_cursors_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .and(body_partial_json(json!({ "start_cursor": "cursor-2" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [page("p-3", "Wisdom", 30.0)],
            "has_more": false,
            "next_cursor": null
        })))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [page("p-1", "Agility", 12.0), page("p-2", "Strength", 7.0)],
            "has_more": true,
            "next_cursor": "cursor-2"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let records = source_for(&server).query().await.expect("records");
    let ids: Vec<&str> = records.iter().map(|record| record.id.as_str()).collect();
    assert_eq!(ids, ["p-1", "p-2", "p-3"]);
}

#[tokio::test]
async fn rejected_query_reports_status_and_public_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "object": "error",
            "status": 401,
            "code": "unauthorized",
            "message": "API token is invalid."
        })))
        .mount(&server)
        .await;

    let err = source_for(&server).query().await.expect_err("401 must fail");
    match &err {
        RadarError::UpstreamQuery { status, body } => {
            assert_eq!(*status, 401);
            assert!(body.contains("unauthorized"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.public_message(), "Failed to query Notion");
}

#[tokio::test]
async fn undecodable_response_is_a_transport_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let err = source_for(&server).query().await.expect_err("html must fail");
    assert!(matches!(err, RadarError::Transport(_)));
    assert_eq!(err.public_message(), "Unexpected error calling Notion");
}

fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn config_requires_token_and_database() {
    for vars in [
        vec![],
        vec![("NOTION_TOKEN", "secret")],
        vec![("DATABASE_ID", "db")],
        vec![("NOTION_TOKEN", "  "), ("DATABASE_ID", "db")],
    ] {
        let err = NotionConfig::from_lookup(lookup_from(&vars)).expect_err("must be missing");
        assert!(matches!(err, RadarError::Configuration(_)));
        assert_eq!(
            err.public_message(),
            "Missing NOTION_TOKEN or DATABASE_ID env vars"
        );
    }
}

#[test]
fn config_reads_optional_overrides() {
    let config = NotionConfig::from_lookup(lookup_from(&[
        ("NOTION_TOKEN", "secret"),
        ("DATABASE_ID", "db"),
        ("NOTION_API_BASE", "http://localhost:9999/v1/"),
        ("NOTION_TIMEOUT_SECS", "3"),
    ]))
    .expect("config");

    assert_eq!(config.timeout, Duration::from_secs(3));
    assert_eq!(config.query_url(), "http://localhost:9999/v1/databases/db/query");
    assert_eq!(config.page_size, 100);
    assert_eq!(config.api_version, "2022-06-28");
}

#[test]
fn config_rejects_malformed_or_zero_timeout() {
    for raw in ["soon", "0", " 0 ", "-3"] {
        let err = NotionConfig::from_lookup(lookup_from(&[
            ("NOTION_TOKEN", "secret"),
            ("DATABASE_ID", "db"),
            ("NOTION_TIMEOUT_SECS", raw),
        ]))
        .expect_err("timeout must be a positive number of seconds");
        assert!(matches!(err, RadarError::Configuration(_)), "{raw}: {err:?}");
    }
}

#[test]
fn config_defaults_to_the_shared_fetch_timeout() {
    let config = NotionConfig::new("secret", "abc");
    assert_eq!(config.timeout, DEFAULT_FETCH_TIMEOUT);
}

#[test]
fn default_query_url_targets_notion() {
    let config = NotionConfig::new("secret", "abc");
    assert_eq!(
        config.query_url(),
        "https://api.notion.com/v1/databases/abc/query"
    );
}

#[tokio::test]
async fn slow_query_fails_at_the_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "results": [], "has_more": false }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&server)
        .await;

    let config = NotionConfig::new("secret-token", "db-123")
        .with_api_base(server.uri())
        .with_timeout(Duration::from_millis(300));
    let source = NotionSource::new(config, "Stat Name").expect("source");

    let started = Instant::now();
    let err = source.query().await.expect_err("slow query must time out");
    let elapsed = started.elapsed();

    assert!(matches!(err, RadarError::Transport(_)));
    assert_eq!(err.public_message(), "Unexpected error calling Notion");
    assert!(elapsed < Duration::from_secs(5), "query took {elapsed:?}");
}

#[tokio::test]
async fn query_stops_at_the_page_cap_with_partial_results() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/databases/db-123/query"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "results": [page("p-loop", "Agility", 1.0)],
            "has_more": true,
            "next_cursor": "again"
        })))
        .expect(MAX_QUERY_PAGES as u64)
        .mount(&server)
        .await;

    let records = source_for(&server).query().await.expect("partial records");
    assert_eq!(records.len(), MAX_QUERY_PAGES);
}
