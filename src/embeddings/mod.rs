//! Embedding support for AI models.
//!
//! This module provides:
//! - The [`Embedder`] capability and its OpenAI-compatible adapter
//! - [`batch_texts`] for splitting long inputs into bounded windows

mod batching;
mod client;
mod types;

pub use batching::batch_texts;
pub use client::{OpenAiEmbedder, EMBEDDING_TIMEOUT};
pub use types::Vector;

use crate::Result;

/// Operations every embedding provider must support.
pub trait Embedder: Send + Sync {
    /// One vector per input text, in input order.
    fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vector>>;

    /// Vector for a single text.
    fn embed_query(&self, text: &str) -> Result<Vector>;
}
