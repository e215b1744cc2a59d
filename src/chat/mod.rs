//! Chat capability and its OpenAI-compatible adapter.
//!
//! [`Chat`] is the provider-independent contract. Wire types stay private to
//! the adapter modules, so adding a provider means adding an adapter, never
//! touching the trait.

mod openai;
mod types;

pub use openai::{OpenAiChat, CHAT_TIMEOUT};

use crate::types::message::{Conversation, Message};
use crate::Result;

/// Operations every chat provider must support.
pub trait Chat: Send + Sync {
    /// Produce one assistant reply for a batch of conversations.
    ///
    /// Whether several conversations are answered jointly or independently is
    /// up to the adapter; exactly one assistant message comes back either way.
    fn generate(&self, batch: &[Conversation]) -> Result<Message>;

    /// Single-turn shortcut: send `query` as one human message, return the reply text.
    fn call(&self, query: &str) -> Result<String>;
}
