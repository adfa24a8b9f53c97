//! Common test utilities for integration tests.
//!
//! ```ignore
//! mod common;
//! use common::{app_with, MockHttpConfig};
//!
//! let http = MockHttpConfig::new().with_completion("{...}").build();
//! let app = app_with(&http);
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde_json::{json, Value};
use specdeck::app::App;
use specdeck::assistant::{
    ApiKey, AssistantPanel, CompletionClient, CredentialSource, SessionCredential,
};
use specdeck::spec::SpecStore;

pub const TEST_KEY: &str = "sk-test-key";

/// An App with a configured key talking to `http`.
pub fn app_with(http: &MockHttpClient) -> App {
    let credential = SessionCredential::new(Some((
        ApiKey::new(TEST_KEY).expect("test key"),
        CredentialSource::Environment,
    )));
    app_with_credential(http, credential)
}

/// An App without any configured key.
pub fn app_without_key(http: &MockHttpClient) -> App {
    app_with_credential(http, SessionCredential::default())
}

fn app_with_credential(http: &MockHttpClient, credential: SessionCredential) -> App {
    let client = CompletionClient::new(Arc::new(http.clone()), TEST_BASE_URL, "gpt-3.5-turbo");
    App::new(SpecStore::new(), AssistantPanel::new(credential), client)
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type `text` one key at a time.
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

/// Deliver every pending async message to the app, waiting for at least one.
pub async fn pump_messages(app: &mut App) {
    let mut rx = app.message_rx.take().expect("message receiver");
    let first = tokio::time::timeout(std::time::Duration::from_secs(5), rx.recv())
        .await
        .expect("timed out waiting for app message")
        .expect("channel closed");
    app.handle_message(first);
    while let Ok(msg) = rx.try_recv() {
        app.handle_message(msg);
    }
    app.message_rx = Some(rx);
}

/// A minimal document that passes shape validation.
pub fn minimal_doc(title: &str) -> Value {
    json!({
        "openapi": "3.0.0",
        "info": {"title": title, "version": "1.0.0"},
        "paths": {}
    })
}
