//! # ai-lib-lite
//!
//! 轻量级阻塞式 LLM 客户端：统一的消息模型、聊天与向量嵌入能力，以及 OpenAI 兼容的适配器。
//!
//! A small, blocking client for large-language-model providers.
//!
//! ## Overview
//!
//! - A role-tagged [`Message`] model with a generic map form for storage and interop
//! - The [`Chat`] and [`Embedder`] capabilities, implemented by provider adapters
//! - [`OpenAiChat`] and [`OpenAiEmbedder`] for OpenAI-compatible endpoints
//! - A provider error taxonomy ([`ProviderErrorKind`]) callers can branch on
//!
//! Every operation issues exactly one request and blocks until the response or
//! the adapter's fixed timeout. There is no streaming, retrying or queuing.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_lib_lite::{Chat, ChatConfig, Message, OpenAiChat};
//!
//! fn main() -> ai_lib_lite::Result<()> {
//!     let chat = OpenAiChat::new(ChatConfig::from_env().with_temperature(0.2))?;
//!
//!     let reply = chat.generate(&[vec![
//!         Message::system("You are terse."),
//!         Message::human("Name a prime number."),
//!     ]])?;
//!     println!("{}", reply.content());
//!
//!     // Or a single turn:
//!     println!("{}", chat.call("hello")?);
//!     Ok(())
//! }
//! ```
//!
//! ## Branching on provider failures
//!
//! ```rust,no_run
//! use ai_lib_lite::{Chat, ChatConfig, OpenAiChat, ProviderErrorKind};
//!
//! # fn main() -> ai_lib_lite::Result<()> {
//! let chat = OpenAiChat::new(ChatConfig::from_env())?;
//! match chat.call("hello") {
//!     Ok(text) => println!("{text}"),
//!     Err(e) if e.provider_kind() == Some(ProviderErrorKind::IncorrectApiKey) => {
//!         eprintln!("check OPENAI_API_KEY: {e}")
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Messages, roles, conversations, map conversion |
//! | [`chat`] | Chat capability and OpenAI-compatible adapter |
//! | [`embeddings`] | Embedding capability, adapter and text batching |
//! | [`error_code`] | Provider error taxonomy |
//! | [`config`] | Adapter configuration records |
//! | [`transport`] | Blocking HTTP transport seam |

pub mod chat;
mod client;
pub mod config;
pub mod embeddings;
pub mod error_code;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use chat::{Chat, OpenAiChat};
pub use config::{ChatConfig, EmbeddingConfig, HttpConfig};
pub use embeddings::{batch_texts, Embedder, OpenAiEmbedder, Vector};
pub use error_code::ProviderErrorKind;
pub use types::{Conversation, Message, MessageMap, MessageRole};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ProviderError};
