//! AI fallback responder.
//!
//! Messages with no keyword intent are forwarded to an OpenAI-compatible
//! chat-completion endpoint (DeepSeek in production). The responder is a
//! translator only: it never reads or writes the catalog, it just receives
//! the current product listing as prompt context. Every failure collapses
//! to a localized best-effort reply; nothing here can fail the webhook.

pub mod llm;
pub mod responder;

pub use llm::{ChatCompletionsClient, CompletionClient, CompletionError};
pub use responder::FallbackResponder;
