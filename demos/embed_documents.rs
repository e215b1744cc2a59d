//! Embedding example: split a long text into windows and embed each one
//!
//! Usage:
//!   OPENAI_API_KEY="your_key" cargo run --example embed_documents

use ai_lib_lite::{batch_texts, Embedder, EmbeddingConfig, OpenAiEmbedder};
use tracing_subscriber::EnvFilter;

const WINDOW: usize = 200;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let embedder = OpenAiEmbedder::new(EmbeddingConfig::from_env())?;

    let document = "Rust is a multi-paradigm, general-purpose programming language. ".repeat(10);
    let windows = batch_texts(&[document], WINDOW)?.remove(0);
    println!("{} windows of up to {} characters", windows.len(), WINDOW);

    let vectors = embedder.embed_documents(&windows)?;
    for (i, v) in vectors.iter().enumerate() {
        println!("window {}: {} dimensions", i, v.len());
    }

    let query = embedder.embed_query("What kind of language is Rust?")?;
    println!("query: {} dimensions", query.len());

    Ok(())
}
