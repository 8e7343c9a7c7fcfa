//! # NLP Module
//!
//! Delegation to an external chat-completion service.
//!
//! Two operations sit on top of the [`ChatModel`] seam: extracting search
//! criteria from a free-text message, and generating a conversational
//! reply grounded in search context. The extraction path funnels the
//! model's reply through the same degrade-to-absent parsing the filter
//! compiler uses, so a malformed reply yields an empty criteria instead
//! of an error.

pub mod client;
pub mod errors;
pub mod service;

pub use client::{ChatMessage, ChatModel, OpenAiChatModel, Role};
pub use errors::{NlpError, NlpResult};
pub use service::{extract_criteria, generate_reply};
