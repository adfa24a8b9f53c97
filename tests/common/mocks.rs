//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `specdeck::adapters::mock` plus a builder for
//! canned completion replies.

pub use specdeck::adapters::mock::http::MockResponse;
pub use specdeck::adapters::mock::MockHttpClient;
pub use specdeck::traits::{HttpError, Response};

use bytes::Bytes;
use serde_json::json;

/// Endpoint the test client posts to.
pub const TEST_BASE_URL: &str = "https://llm.test/v1";
pub const TEST_COMPLETIONS_URL: &str = "https://llm.test/v1/chat/completions";

/// Body of a successful chat completion carrying `content`.
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [
            {"index": 0, "message": {"role": "assistant", "content": content}, "finish_reason": "stop"}
        ]
    })
    .to_string()
}

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Reply to the completions endpoint with `content`.
    pub fn with_completion(self, content: &str) -> Self {
        self.client.set_response(
            TEST_COMPLETIONS_URL,
            MockResponse::Success(Response::new(200, Bytes::from(completion_body(content)))),
        );
        self
    }

    /// Reply to the completions endpoint with an error status.
    pub fn with_status(self, status: u16, body: &str) -> Self {
        self.client.set_response(
            TEST_COMPLETIONS_URL,
            MockResponse::Success(Response::new(status, Bytes::from(body.to_string()))),
        );
        self
    }

    /// Fail at the transport level.
    #[allow(dead_code)]
    pub fn with_transport_error(self, error: HttpError) -> Self {
        self.client
            .set_response(TEST_COMPLETIONS_URL, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
