//! Shared test utilities and fixtures
//!
//! Common infrastructure for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use folio_engine::{
    ManualScheduler, RecordingTarget, RelayClient, Typewriter, TypewriterConfig, TypewriterSettings,
    WordList,
};

pub const SUBMIT_PATH: &str = "/submit";
pub const TEST_ACCESS_KEY: &str = "test-access-key";

/// Start a mock server that simulates the form relay
pub async fn start_relay_mock() -> MockServer {
    MockServer::start().await
}

/// Mount a relay reply with the given status and JSON body
pub async fn mount_relay_reply(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path(SUBMIT_PATH))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Mount the relay's success reply
pub async fn mount_relay_success(server: &MockServer) {
    mount_relay_reply(
        server,
        200,
        serde_json::json!({ "success": true, "message": "Email sent successfully!" }),
    )
    .await;
}

/// Relay client pointed at the mock server
pub fn relay_client(server: &MockServer) -> RelayClient {
    RelayClient::new(
        format!("{}{SUBMIT_PATH}", server.uri()),
        Some(TEST_ACCESS_KEY.to_string()),
        Duration::from_secs(5),
    )
    .expect("relay client builds")
}

/// Typewriter on logical time with default timing
pub fn manual_typewriter(words: &str) -> Typewriter<RecordingTarget, ManualScheduler> {
    let config = TypewriterConfig::new(
        WordList::parse(words).expect("valid word list"),
        TypewriterSettings::default(),
    );
    Typewriter::start(Some(RecordingTarget::new()), ManualScheduler::new(), config)
        .expect("target provided")
}
