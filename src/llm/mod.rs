//! Language-model completion: the `CompletionClient` boundary trait and the
//! OpenAI-compatible `ChatClient`.

mod client;
mod types;

pub use client::{ChatClient, CompletionClient, LlmError};
