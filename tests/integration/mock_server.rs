//! Mock HTTP server setup for integration tests

use ai_lib_lite::{ChatConfig, EmbeddingConfig};
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const CHAT_PATH: &str = "/v1/chat/completions";
pub const EMBEDDINGS_PATH: &str = "/v1/embeddings";
pub const TEST_API_KEY: &str = "sk-test";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = format!("{}/v1", server.url());
        Self { server, base_url }
    }

    pub fn chat_config(&self) -> ChatConfig {
        ChatConfig::new()
            .with_api_key(TEST_API_KEY)
            .with_base_url(&self.base_url)
    }

    pub fn embedding_config(&self) -> EmbeddingConfig {
        EmbeddingConfig::new()
            .with_api_key(TEST_API_KEY)
            .with_base_url(&self.base_url)
    }

    /// Create a mock for a JSON response that also checks the standard request headers
    pub fn mock_json_response(&mut self, path: &str, status: u16, body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .match_header("authorization", format!("Bearer {}", TEST_API_KEY).as_str())
            .match_header("content-type", "application/json")
            .match_header("x-client-request-id", Matcher::Regex("^[0-9a-f-]{36}$".to_string()))
            .with_status(status as usize)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create()
    }

    /// Create a mock for a plain-text error response
    pub fn mock_error_response(&mut self, path: &str, status: u16, error_body: &str) -> Mock {
        self.server
            .mock("POST", path)
            .with_status(status as usize)
            .with_header("content-type", "text/plain")
            .with_body(error_body)
            .create()
    }
}
