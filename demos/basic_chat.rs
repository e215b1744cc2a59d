//! Basic chat example
//!
//! API key is read from the environment:
//! - OPENAI_API_KEY
//! - OPENAI_BASE_URL (optional, for OpenAI-compatible servers)
//!
//! Usage:
//!   OPENAI_API_KEY="your_key" cargo run --example basic_chat

use ai_lib_lite::{Chat, ChatConfig, Message, OpenAiChat};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if std::env::var("OPENAI_API_KEY").is_err() {
        eprintln!("Warning: OPENAI_API_KEY not set. The provider will reject the request.");
    }

    let chat = OpenAiChat::new(ChatConfig::from_env().with_temperature(0.7))?;

    let reply = chat.generate(&[vec![
        Message::system("You are a helpful assistant."),
        Message::human("Explain what an embedding is in one sentence."),
    ]])?;
    println!("Response:\n{}", reply.content());

    match chat.call("And a haiku about it?") {
        Ok(text) => println!("\n{}", text),
        Err(e) => match e.provider_kind() {
            Some(kind) if kind.retryable() => eprintln!("transient failure ({kind}), try again: {e}"),
            _ => return Err(e.into()),
        },
    }

    Ok(())
}
