//! HTTP transport seam.
//!
//! Adapters only need one capability from the network: send a POST with
//! headers and a body, get back a status and the full body text. Keeping it
//! behind [`Transport`] lets tests swap in a scripted double.

mod http;

pub use http::HttpTransport;

use std::time::Duration;

/// A fully prepared outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub timeout: Duration,
}

impl HttpRequest {
    /// JSON POST with bearer authorization.
    pub fn json_post(
        url: impl Into<String>,
        api_key: &str,
        body: String,
        timeout: Duration,
    ) -> Self {
        Self {
            url: url.into(),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                ("Authorization".to_string(), format!("Bearer {}", api_key)),
            ],
            body,
            timeout,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a completed exchange, successful or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Blocking POST capability.
pub trait Transport: Send + Sync {
    fn post(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
