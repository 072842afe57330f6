//! AI chat assistant
//!
//! Orchestrates the intent classifier, the scripted reply table, and an
//! OpenAI-compatible completion backend into one chat surface.

mod client;
mod prompt;
mod service;


// Re-export public types and structs
pub use client::{CompletionBackend, CompletionClient, CompletionMessage};
pub use prompt::{build_system_prompt, ChatTurn, SYSTEM_PROMPT};
pub use service::{AssistantReply, AssistantService};
