//! Wire format of the chat-completion endpoint (OpenAI-compatible).

use crate::types::message::{Conversation, Message};
use serde::{Deserialize, Serialize};

/// `{role, content}` as the provider expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct WireMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role().as_str().to_string(),
            content: message.content().to_string(),
        }
    }
}

/// Flatten a batch of conversations into one ordered message list.
///
/// Conversation boundaries are not marked on the wire.
pub(crate) fn flatten(batch: &[Conversation]) -> Vec<WireMessage> {
    batch
        .iter()
        .flat_map(|conversation| conversation.iter().map(WireMessage::from))
        .collect()
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage>,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    /// `null` when the reply was cut off, e.g. by a content filter.
    #[serde(default)]
    pub content: Option<String>,
}
