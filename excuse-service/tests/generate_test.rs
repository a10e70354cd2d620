mod common;

use common::TestApp;
use reqwest::Client;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn generate_with_defaults_uses_templates() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({}))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["source"], "template");

    let excuse = body["excuse"].as_str().expect("excuse should be a string");
    assert!(!excuse.is_empty());
    // Default length is "short": cut at the first sentence.
    assert!(excuse.ends_with('.'));
}

#[tokio::test]
async fn unknown_category_and_tone_fall_back() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({
            "category": "nonsense",
            "tone": "sarcastic",
            "length": "medium"
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["source"], "template");
    assert!(!body["excuse"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn overlong_context_is_rejected() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({ "context": "x".repeat(1001) }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 400);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Context too long");
}

#[tokio::test]
async fn context_at_the_limit_is_accepted() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({ "context": "x".repeat(1000), "length": "medium" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn use_ai_without_provider_falls_back_to_templates() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({ "use_ai": true }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["source"], "template");
}

#[tokio::test]
async fn use_ai_generates_via_gemini() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{
                        "text": "I would love to, but my sourdough starter needs emotional support tonight."
                    }]
                }
            }]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_gemini(&mock_server.uri()).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({
            "context": "board game night",
            "category": "social",
            "tone": "funny",
            "length": "medium",
            "use_ai": true
        }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["source"], "ai");
    assert_eq!(
        body["excuse"],
        "I would love to, but my sourdough starter needs emotional support tonight."
    );
}

#[tokio::test]
async fn gemini_failure_falls_back_to_templates() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend exploded"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_gemini(&mock_server.uri()).await;
    let client = Client::new();

    let response = client
        .post(&format!("{}/generate", app.address))
        .json(&json!({ "use_ai": true, "length": "medium" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["source"], "template");
    assert!(!body["excuse"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn health_reports_ai_enabled_when_key_is_configured() {
    let mock_server = MockServer::start().await;
    let app = TestApp::spawn_with_gemini(&mock_server.uri()).await;
    let client = Client::new();

    let response = client
        .get(&format!("{}/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["ai_enabled"], true);
}
