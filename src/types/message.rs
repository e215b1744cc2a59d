//! Role-tagged chat messages and their generic map form.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Generic key/value form of a message: `{"type": <role>, "content": <text>}`.
pub type MessageMap = BTreeMap<String, String>;

/// One chat history, oldest message first.
pub type Conversation = Vec<Message>;

const TYPE_KEY: &str = "type";
const CONTENT_KEY: &str = "content";

/// Errors raised while rebuilding messages from maps.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageError {
    #[error("no `type` key on message map")]
    MissingType,

    #[error("unsupported message type: {0}")]
    UnsupportedMessageType(String),
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl MessageRole {
    /// Tag used both in message maps and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageRole::System => "system",
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageRole {
    type Err = MessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(MessageError::UnsupportedMessageType(other.to_string())),
        }
    }
}

/// A single chat message. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    role: MessageRole,
    content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    pub fn human(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Assistant, content)
    }

    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    pub fn role(&self) -> MessageRole {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Rebuild a message from its map form.
    ///
    /// `"type"` is required; a missing `"content"` means an empty message.
    pub fn from_map(map: &MessageMap) -> Result<Self, MessageError> {
        let role: MessageRole = map
            .get(TYPE_KEY)
            .ok_or(MessageError::MissingType)?
            .parse()?;
        let content = map.get(CONTENT_KEY).cloned().unwrap_or_default();
        Ok(Self { role, content })
    }

    pub fn to_map(&self) -> MessageMap {
        let mut map = MessageMap::new();
        map.insert(TYPE_KEY.to_string(), self.role.as_str().to_string());
        map.insert(CONTENT_KEY.to_string(), self.content.clone());
        map
    }
}

/// Convert every map in order, stopping at the first failure.
pub fn messages_from_maps(maps: &[MessageMap]) -> Result<Vec<Message>, MessageError> {
    maps.iter().map(Message::from_map).collect()
}

pub fn messages_to_maps(messages: &[Message]) -> Vec<MessageMap> {
    messages.iter().map(Message::to_map).collect()
}
