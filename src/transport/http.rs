use super::{HttpRequest, HttpResponse, Transport, TransportError};
use crate::config::HttpConfig;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use reqwest::Proxy;
use tracing::debug;

/// [`Transport`] backed by a pooled `reqwest` blocking client.
///
/// The client is built once; its connection pool is reused by every call.
/// Timeouts are set per request by the adapter.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::blocking::Client::builder()
            .pool_max_idle_per_host(config.pool_max_idle_per_host)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy_url) = &config.proxy_url {
            let proxy = Proxy::all(proxy_url.as_str()).map_err(|e| {
                Error::configuration_with_context(
                    "invalid proxy URL",
                    ErrorContext::new()
                        .with_field_path("http.proxy_url")
                        .with_details(format!("{}: {}", proxy_url, e)),
                )
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(TransportError::from)?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn post(&self, request: HttpRequest) -> std::result::Result<HttpResponse, TransportError> {
        debug!(url = request.url.as_str(), timeout_ms = request.timeout.as_millis(), "POST");

        let mut req = self
            .client
            .post(&request.url)
            .timeout(request.timeout)
            .body(request.body);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        let resp = req.send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;

        Ok(HttpResponse { status, body })
    }
}
