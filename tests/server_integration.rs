use axum::http::StatusCode;
use axum_test::TestServer;
use inkjet::AppState;
use inkjet::chat::ChatMessage;
use inkjet::config::AppConfig;
use inkjet::server::build_router;
use serde_json::{Value, json};
use std::sync::Arc;

fn test_server(config: AppConfig) -> TestServer {
    let state = AppState::new(Arc::new(config));
    TestServer::new(build_router(state)).expect("Failed to start test server")
}

#[tokio::test]
async fn index_renders_every_panel_once() {
    let server = test_server(AppConfig::default());

    let response = server.get("/").await;
    response.assert_status_ok();
    let html = response.text();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("ink!jet"));
    for id in ["app-header", "code-editor", "chat-history", "terminal-panel"] {
        let needle = format!(r#"id="{id}""#);
        assert_eq!(html.matches(&needle).count(), 1, "{id}");
    }
    assert_eq!(html.matches("chat-message ").count(), 3);
}

#[tokio::test]
async fn index_reflects_injected_chat_history() {
    let mut config = AppConfig::default();
    config.chat.messages = vec![
        ChatMessage::user("Write me a flipper contract"),
        ChatMessage::assistant("Here is a flipper contract"),
    ];
    let server = test_server(config);

    let html = server.get("/").await.text();
    let question = html.find("Write me a flipper contract").unwrap();
    let answer = html.find("Here is a flipper contract").unwrap();
    assert!(question < answer);
    assert_eq!(html.matches("chat-message user-message").count(), 1);
    assert_eq!(html.matches("chat-message assistant-message").count(), 1);
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server(AppConfig::default());

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn editor_events_are_accepted_without_side_effects() {
    let server = test_server(AppConfig::default());
    let before = server.get("/").await.text();

    let events = [
        json!({ "type": "before_mount", "host": { "version": "0.52.0" } }),
        json!({ "type": "mount", "editor": { "id": "$model1" }, "host": { "version": "0.52.0" } }),
        json!({ "type": "change", "value": "#[ink::contract]\nmod flipper {}" }),
        json!({ "type": "change", "value": null }),
        json!({ "type": "validate", "markers": [{
            "severity": 8,
            "message": "expected item",
            "startLineNumber": 2,
            "startColumn": 1,
            "endLineNumber": 2,
            "endColumn": 4
        }] }),
    ];
    for event in &events {
        server
            .post("/api/editor/events")
            .json(event)
            .await
            .assert_status(StatusCode::NO_CONTENT);
    }

    let after = server.get("/").await.text();
    assert_eq!(before, after);
}

#[tokio::test]
async fn malformed_editor_events_are_rejected() {
    let server = test_server(AppConfig::default());

    let response = server
        .post("/api/editor/events")
        .json(&json!({ "type": "scroll", "top": 10 }))
        .await;
    assert!(response.status_code().is_client_error());

    let response = server
        .post("/api/editor/events")
        .json(&json!({ "type": "validate", "markers": [{ "severity": 3 }] }))
        .await;
    assert!(response.status_code().is_client_error());
}

#[tokio::test]
async fn analyze_never_changes_the_page() {
    let server = test_server(AppConfig::default());
    let before = server.get("/").await.text();

    for _ in 0..3 {
        let response = server.post("/api/analyze").await;
        response.assert_status(StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());
    }

    let after = server.get("/").await.text();
    assert_eq!(before, after);
}

/// Local `src="..."` and `href="..."` targets in the page.
fn local_asset_urls(html: &str) -> Vec<String> {
    let mut urls = Vec::new();
    for attr in ["src=\"", "href=\""] {
        let mut rest = html;
        while let Some(start) = rest.find(attr) {
            rest = &rest[start + attr.len()..];
            let end = rest.find('"').expect("unterminated attribute");
            let url = &rest[..end];
            if url.starts_with('/') {
                urls.push(url.to_string());
            }
            rest = &rest[end..];
        }
    }
    urls
}

#[tokio::test]
async fn every_referenced_asset_is_served() {
    let server = test_server(AppConfig::default());
    let html = server.get("/").await.text();

    let urls = local_asset_urls(&html);
    assert!(urls.contains(&"/static/app.js".to_string()));
    assert!(urls.contains(&"/static/code-editor.js".to_string()));
    assert!(urls.contains(&"/static/app.css".to_string()));

    for url in &urls {
        let response = server.get(url).await;
        assert_eq!(response.status_code(), StatusCode::OK, "{url}");
    }
}

#[tokio::test]
async fn analyze_click_binding_is_shipped() {
    let server = test_server(AppConfig::default());
    let html = server.get("/").await.text();
    assert!(html.contains(r#"data-post-url="/api/analyze""#));

    let script = server.get("/static/app.js").await.text();
    assert!(script.contains("data-post-url"));
    assert!(script.contains(r#"method: "POST""#));
}

#[tokio::test]
async fn editor_component_hosts_monaco() {
    let server = test_server(AppConfig::default());

    let response = server.get("/static/code-editor.js").await;
    response.assert_status_ok();
    let script = response.text();
    assert!(script.contains(r#"customElements.define("code-editor""#));
    assert!(script.contains("monaco.editor.create"));
    assert!(script.contains("onDidChangeModelContent"));
    assert!(script.contains("onDidChangeMarkers"));
    assert!(!script.contains("<textarea") && !script.contains(r#"createElement("textarea")"#));
}

#[tokio::test]
async fn page_points_the_editor_at_the_configured_loader() {
    let mut config = AppConfig::default();
    config.monaco.base_url = "/static/vendor/monaco/vs".to_string();
    let server = test_server(config);

    let html = server.get("/").await.text();
    assert!(html.contains(r#"loader-base="/static/vendor/monaco/vs""#));
}
