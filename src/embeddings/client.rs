//! OpenAI-compatible embedding adapter.

use super::types::{EmbeddingInput, EmbeddingRequest, EmbeddingResponse, Vector};
use super::Embedder;
use crate::client::{post_json, Endpoint};
use crate::config::EmbeddingConfig;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;

/// Fixed per-request timeout; embedding batches can be large.
pub const EMBEDDING_TIMEOUT: Duration = Duration::from_secs(180);

#[derive(Clone)]
pub struct OpenAiEmbedder {
    config: EmbeddingConfig,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl OpenAiEmbedder {
    pub fn new(config: EmbeddingConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config.http)?);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: EmbeddingConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint();
        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    fn execute(&self, input: EmbeddingInput<'_>) -> Result<EmbeddingResponse> {
        let request = EmbeddingRequest {
            input,
            model: &self.config.model,
        };
        let endpoint = Endpoint {
            url: &self.endpoint,
            api_key: &self.config.api_key,
            timeout: EMBEDDING_TIMEOUT,
            source: "embeddings",
        };
        post_json(self.transport.as_ref(), &endpoint, &request)
    }
}

impl Embedder for OpenAiEmbedder {
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vector>> {
        self.execute(EmbeddingInput::Batch(texts))?
            .into_ordered_vectors(texts.len())
    }

    fn embed_query(&self, text: &str) -> Result<Vector> {
        let empty = || {
            Error::empty_result_with_context(
                "no embeddings in response",
                ErrorContext::new()
                    .with_field_path("response.data")
                    .with_source("embeddings"),
            )
        };

        let response = self.execute(EmbeddingInput::Single(text))?;
        if response.data.is_empty() {
            return Err(empty());
        }
        response.into_ordered_vectors(1)?.pop().ok_or_else(empty)
    }
}

impl std::fmt::Debug for OpenAiEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEmbedder")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
