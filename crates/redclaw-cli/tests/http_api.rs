//! Request/response contract against a fake service over real HTTP.

mod support;

use clap::Parser;
use redclaw_cli::{run, Cli, ClientConfig, CliError};
use serde_json::json;

use support::FakeService;

const KEY: &str = "rk_test_key";

async fn invoke(service: &FakeService, args: &[&str]) -> (Result<(), CliError>, String) {
    let cli = Cli::parse_from(args);
    let config = ClientConfig::new(&service.url(), KEY).expect("valid config");
    let mut out = Vec::new();
    let result = run(&cli, config, &mut out).await;
    (result, String::from_utf8(out).expect("valid utf8"))
}

#[tokio::test]
async fn status_is_one_authenticated_get() {
    let service = FakeService::start(200, r#"{"status":"ok","version":"2.1.0"}"#).await;

    let (result, output) = invoke(&service, &["redclaw", "status"]).await;
    result.expect("status succeeds");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/v1/status");
    assert_eq!(
        requests[0].header("authorization"),
        Some(format!("Bearer {KEY}").as_str())
    );
    assert_eq!(requests[0].header("accept"), Some("application/json"));
    assert!(output.contains("2.1.0"));
}

#[tokio::test]
async fn status_accepts_empty_body() {
    let service = FakeService::start(200, "").await;

    let (result, output) = invoke(&service, &["redclaw", "status"]).await;
    result.expect("empty 200 is healthy");
    assert!(output.ends_with("\nok\n"), "output: {output}");
}

#[tokio::test]
async fn status_accepts_plain_text_body() {
    let service = FakeService::start(200, "OK").await;

    let (result, output) = invoke(&service, &["redclaw", "status"]).await;
    result.expect("plain-text 200 is healthy");
    assert!(output.ends_with("\nOK\n"), "output: {output}");

    let (result, output) = invoke(&service, &["redclaw", "--format", "json", "status"]).await;
    result.expect("plain-text 200 is healthy");
    assert_eq!(output, "\"OK\"\n");
}

#[tokio::test]
async fn timeout_bounds_a_hung_request() {
    let service = FakeService::hanging().await;

    let started = std::time::Instant::now();
    let (result, _) = invoke(&service, &["redclaw", "--timeout", "1", "status"]).await;
    assert!(matches!(result, Err(CliError::Request { status: None, .. })));
    assert!(started.elapsed() < std::time::Duration::from_secs(10));
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn status_failure_carries_status_and_body() {
    let service = FakeService::start(503, r#"{"error":"ingest backlog"}"#).await;

    let (result, _) = invoke(&service, &["redclaw", "status"]).await;
    match result.expect_err("503 is a failure") {
        CliError::Request { status, body } => {
            assert_eq!(status, Some(503));
            assert_eq!(body, r#"{"error":"ingest backlog"}"#);
        }
        other => panic!("expected Request error, got {other:?}"),
    }
    assert_eq!(service.requests().len(), 1);
}

#[tokio::test]
async fn alerts_list_sends_both_filters_once() {
    let service = FakeService::start(
        200,
        r#"[
            {"id": 3, "source": "foo", "keyword": "breach", "timestamp": "2026-10-18T08:00:00Z", "title": "Latest"},
            {"id": 1, "source": "foo", "keyword": "leak", "timestamp": "2026-10-17T08:00:00Z", "title": "Earlier"}
        ]"#,
    )
    .await;

    let (result, output) =
        invoke(&service, &["redclaw", "alerts", "list", "--source", "foo", "--limit", "5"]).await;
    result.expect("alerts list succeeds");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/v1/alerts?source=foo&limit=5");

    let latest = output.find("Latest").expect("first alert rendered");
    let earlier = output.find("Earlier").expect("second alert rendered");
    assert!(latest < earlier);
}

#[tokio::test]
async fn alerts_list_without_filters_has_no_query() {
    let service = FakeService::start(200, r#"{"alerts": []}"#).await;

    let (result, output) = invoke(&service, &["redclaw", "alerts", "list"]).await;
    result.expect("alerts list succeeds");

    assert_eq!(service.requests()[0].target, "/api/v1/alerts");
    assert!(output.contains("No alerts found"));
}

#[tokio::test]
async fn keywords_add_posts_pattern_and_echoes_id() {
    let service = FakeService::start(201, r#"{"id": 42, "pattern": "ransomware", "enabled": true}"#).await;

    let (result, output) = invoke(&service, &["redclaw", "keywords", "add", "ransomware"]).await;
    result.expect("add succeeds");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/api/v1/keywords");
    assert_eq!(requests[0].json(), json!({"pattern": "ransomware"}));
    assert!(output.contains("42"));
}

#[tokio::test]
async fn keywords_delete_unknown_is_not_found() {
    let service = FakeService::start(404, r#"{"detail":"Keyword not found"}"#).await;

    let (result, _) = invoke(&service, &["redclaw", "keywords", "delete", "999"]).await;
    match result.expect_err("404 is a failure") {
        CliError::NotFound { body } => assert_eq!(body, r#"{"detail":"Keyword not found"}"#),
        other => panic!("expected NotFound, got {other:?}"),
    }

    let requests = service.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].target, "/api/v1/keywords/999");
}

#[tokio::test]
async fn keywords_toggle_tolerates_empty_body() {
    let service = FakeService::start(200, "").await;

    let (result, output) = invoke(&service, &["redclaw", "keywords", "toggle", "7"]).await;
    result.expect("toggle succeeds");

    let requests = service.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/api/v1/keywords/7/toggle");
    assert!(output.contains("Keyword 7 toggled"));
}

#[tokio::test]
async fn keywords_add_disabled_sends_enabled_false() {
    let service = FakeService::start(201, r#"{"id": 43}"#).await;

    let (result, _) =
        invoke(&service, &["redclaw", "keywords", "add", "phishing", "--disabled"]).await;
    result.expect("add succeeds");

    assert_eq!(
        service.requests()[0].json(),
        json!({"pattern": "phishing", "enabled": false})
    );
}

#[tokio::test]
async fn keywords_toggle_reads_enveloped_keyword() {
    let service = FakeService::start(
        200,
        r#"{"data": {"id": 7, "pattern": "leak", "enabled": false}}"#,
    )
    .await;

    let (result, output) = invoke(&service, &["redclaw", "keywords", "toggle", "7"]).await;
    result.expect("toggle succeeds");
    assert!(output.contains("Keyword 7 'leak' is now disabled"), "output: {output}");
}

#[tokio::test]
async fn blank_keyword_id_is_rejected_without_request() {
    let service = FakeService::start(200, "").await;

    for verb in ["delete", "toggle"] {
        let (result, _) = invoke(&service, &["redclaw", "keywords", verb, "  "]).await;
        assert!(
            matches!(result, Err(CliError::Validation(_))),
            "keywords {verb}: {result:?}"
        );
    }
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn keywords_export_is_stable_json() {
    let service = FakeService::start(
        200,
        r#"{"data": [{"id": 1, "pattern": "leak", "enabled": true}, {"id": 2, "pattern": "breach", "enabled": false}]}"#,
    )
    .await;

    let (result, output) = invoke(&service, &["redclaw", "keywords", "export"]).await;
    result.expect("export succeeds");

    let doc: serde_json::Value = serde_json::from_str(&output).expect("export is JSON");
    assert_eq!(
        doc,
        json!({
            "version": 1,
            "keywords": [
                {"pattern": "leak", "enabled": true},
                {"pattern": "breach", "enabled": false}
            ]
        })
    );
    assert_eq!(service.requests()[0].target, "/api/v1/keywords");
}

#[tokio::test]
async fn sources_add_rss_posts_typed_body() {
    let service = FakeService::start(201, r#"{"data": {"id": "src_77"}}"#).await;

    let (result, output) = invoke(
        &service,
        &["redclaw", "sources", "add-rss", "https://example.com/feed.xml"],
    )
    .await;
    result.expect("add-rss succeeds");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/api/v1/sources");
    assert_eq!(
        requests[0].json(),
        json!({"type": "rss", "url": "https://example.com/feed.xml"})
    );
    assert!(output.contains("src_77"));
}

#[tokio::test]
async fn sources_add_rss_rejects_malformed_url_without_request() {
    let service = FakeService::start(201, r#"{"id": 1}"#).await;

    let (result, _) = invoke(&service, &["redclaw", "sources", "add-rss", "not-a-url"]).await;
    assert!(matches!(result, Err(CliError::Validation(_))));
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn sources_list_reads_envelope() {
    let service = FakeService::start(
        200,
        r#"{"sources": [{"id": 3, "type": "rss", "url": "https://example.com/feed.xml", "active": false}]}"#,
    )
    .await;

    let (result, output) = invoke(&service, &["redclaw", "sources", "list"]).await;
    result.expect("sources list succeeds");

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/v1/sources");
    assert!(output.contains("https://example.com/feed.xml"));
    assert!(output.contains("Total: 1 source(s)"));
}

#[tokio::test]
async fn base_url_path_prefix_is_kept() {
    let service = FakeService::start(200, "[]").await;
    let cli = Cli::parse_from(["redclaw", "sources", "list"]);
    let config =
        ClientConfig::new(&format!("{}/redclaw/", service.url()), KEY).expect("valid config");

    let mut out = Vec::new();
    run(&cli, config, &mut out).await.expect("list succeeds");

    assert_eq!(service.requests()[0].target, "/redclaw/api/v1/sources");
}

#[tokio::test]
async fn undecodable_success_body_is_decode_error() {
    let service = FakeService::start(200, "<html>login</html>").await;

    let (result, _) = invoke(&service, &["redclaw", "keywords", "list"]).await;
    assert!(matches!(result, Err(CliError::Decode(_))));
}
