//! Splitting long texts into bounded windows ahead of embedding.

use crate::{Error, ErrorContext, Result};

/// Split each text into consecutive, non-overlapping windows of `batch_size`
/// Unicode scalar values. The last window of a text may be shorter.
///
/// Returns one list per input text, in input order. An empty text yields an
/// empty list. `batch_size == 0` is rejected.
///
/// ```rust
/// use ai_lib_lite::embeddings::batch_texts;
///
/// let batches = batch_texts(&["abcdef", "abc"], 2).unwrap();
/// assert_eq!(batches, vec![vec!["ab", "cd", "ef"], vec!["ab", "c"]]);
/// ```
pub fn batch_texts<S: AsRef<str>>(texts: &[S], batch_size: usize) -> Result<Vec<Vec<String>>> {
    if batch_size == 0 {
        return Err(Error::validation_with_context(
            "batch_size must be at least 1",
            ErrorContext::new()
                .with_field_path("batch_size")
                .with_source("batching"),
        ));
    }

    Ok(texts
        .iter()
        .map(|text| {
            let chars: Vec<char> = text.as_ref().chars().collect();
            chars
                .chunks(batch_size)
                .map(|window| window.iter().collect())
                .collect()
        })
        .collect())
}
