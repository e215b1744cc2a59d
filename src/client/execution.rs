//! Single-request execution shared by the provider adapters.

use crate::error::ProviderError;
use crate::transport::{HttpRequest, Transport};
use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-client-request-id";

/// Where a request goes and how it authenticates.
pub(crate) struct Endpoint<'a> {
    pub url: &'a str,
    pub api_key: &'a str,
    pub timeout: Duration,
    /// Short label for log fields ("chat", "embeddings").
    pub source: &'static str,
}

/// Encode `payload`, POST it once, and decode the success body into `R`.
///
/// Non-success statuses are classified into a [`ProviderError`]; the body is
/// read in full and kept as the error detail.
pub(crate) fn post_json<P, R>(
    transport: &dyn Transport,
    endpoint: &Endpoint<'_>,
    payload: &P,
) -> Result<R>
where
    P: Serialize,
    R: DeserializeOwned,
{
    let body = serde_json::to_string(payload)?;
    let client_request_id = Uuid::new_v4().to_string();
    let request = HttpRequest::json_post(endpoint.url, endpoint.api_key, body, endpoint.timeout)
        .with_header(REQUEST_ID_HEADER, client_request_id.as_str());

    debug!(
        client_request_id = client_request_id.as_str(),
        endpoint = endpoint.url,
        source = endpoint.source,
        "ai-lib-lite sending request"
    );
    let start = Instant::now();
    let resp = transport.post(request)?;

    if !resp.is_success() {
        let err = ProviderError::new(resp.status, resp.body);
        warn!(
            http_status = err.status(),
            error_kind = err.kind().name(),
            retryable = err.is_retryable(),
            client_request_id = client_request_id.as_str(),
            endpoint = endpoint.url,
            duration_ms = start.elapsed().as_millis(),
            "ai-lib-lite request failed"
        );
        return Err(err.into());
    }

    info!(
        http_status = resp.status,
        client_request_id = client_request_id.as_str(),
        endpoint = endpoint.url,
        duration_ms = start.elapsed().as_millis(),
        "ai-lib-lite request completed"
    );

    Ok(serde_json::from_str(&resp.body)?)
}
