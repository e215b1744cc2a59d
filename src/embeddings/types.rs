//! Embedding wire types and response ordering.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};

pub type Vector = Vec<f32>;

/// Request for generating embeddings.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct EmbeddingRequest<'a> {
    pub input: EmbeddingInput<'a>,
    pub model: &'a str,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub(crate) enum EmbeddingInput<'a> {
    Single(&'a str),
    Batch(&'a [String]),
}

/// A single embedding vector with its position in the request.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Embedding {
    pub embedding: Vector,
    pub index: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct EmbeddingResponse {
    #[serde(default)]
    pub data: Vec<Embedding>,
}

impl EmbeddingResponse {
    /// Vectors ordered by their `index` field. The indices must be exactly
    /// `0..expected`.
    pub fn into_ordered_vectors(self, expected: usize) -> Result<Vec<Vector>> {
        let mut data = self.data;
        if data.len() != expected {
            return Err(Error::validation_with_context(
                format!("expected {} embeddings, provider returned {}", expected, data.len()),
                ErrorContext::new()
                    .with_field_path("response.data")
                    .with_source("embeddings"),
            ));
        }

        data.sort_by_key(|e| e.index);
        if let Some((position, item)) = data
            .iter()
            .enumerate()
            .find(|(position, item)| item.index != *position)
        {
            return Err(Error::validation_with_context(
                "embedding indices do not match request positions",
                ErrorContext::new()
                    .with_field_path(format!("response.data[{}].index", position))
                    .with_details(format!("index {}", item.index))
                    .with_source("embeddings"),
            ));
        }

        Ok(data.into_iter().map(|e| e.embedding).collect())
    }
}
