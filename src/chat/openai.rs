//! OpenAI-compatible chat adapter.

use super::types::{flatten, ChatRequest, ChatResponse, WireMessage};
use super::Chat;
use crate::client::{post_json, Endpoint};
use crate::config::ChatConfig;
use crate::transport::{HttpTransport, Transport};
use crate::types::message::{Conversation, Message, MessageRole};
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Fixed per-request timeout for chat completions.
pub const CHAT_TIMEOUT: Duration = Duration::from_secs(10);

/// [`Chat`] implementation for an OpenAI-compatible `/chat/completions` endpoint.
///
/// Holds only immutable configuration and a shared transport, so one instance
/// can serve many threads at once.
#[derive(Clone)]
pub struct OpenAiChat {
    config: ChatConfig,
    endpoint: String,
    transport: Arc<dyn Transport>,
}

impl OpenAiChat {
    /// Validate `config` and build an adapter over a fresh [`HttpTransport`].
    pub fn new(config: ChatConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(&config.http)?);
        Self::with_transport(config, transport)
    }

    pub fn with_transport(config: ChatConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        config.validate()?;
        let endpoint = config.endpoint();
        Ok(Self {
            config,
            endpoint,
            transport,
        })
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    fn complete(&self, messages: Vec<WireMessage>) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages,
            temperature: self.config.temperature,
        };
        let endpoint = Endpoint {
            url: &self.endpoint,
            api_key: &self.config.api_key,
            timeout: CHAT_TIMEOUT,
            source: "chat",
        };

        let response: ChatResponse = post_json(self.transport.as_ref(), &endpoint, &request)?;
        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
            .ok_or_else(|| {
                Error::empty_result_with_context(
                    "no choices in chat completion response",
                    ErrorContext::new()
                        .with_field_path("response.choices")
                        .with_source("chat"),
                )
            })
    }
}

impl Chat for OpenAiChat {
    fn generate(&self, batch: &[Conversation]) -> Result<Message> {
        let messages = flatten(batch);
        debug!(
            conversations = batch.len(),
            messages = messages.len(),
            model = self.config.model.as_str(),
            "generating chat reply"
        );
        let content = self.complete(messages)?;
        Ok(Message::ai(content))
    }

    fn call(&self, query: &str) -> Result<String> {
        self.complete(vec![WireMessage {
            role: MessageRole::User.as_str().to_string(),
            content: query.to_string(),
        }])
    }
}

impl std::fmt::Debug for OpenAiChat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiChat")
            .field("config", &self.config)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}
