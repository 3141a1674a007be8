//! # scout-llm
//!
//! The language-model side of a screening:
//! - [`ChatModel`], the seam every model call goes through, and
//!   [`ChatClient`], an OpenAI-compatible chat-completions implementation
//!   (OpenRouter by default)
//! - Prompt builders for question generation and follow-up chat
//! - [`generate_questions`], which never fails: model errors are logged and
//!   replaced by fixed fallback questions
//! - [`answer_followup`], whose errors are left to the caller

mod client;
mod error;
mod http;
pub mod prompts;
mod screener;

pub use client::{ChatClient, ChatMessage, ChatModel, ChatRequest, MessageRole};
pub use error::LlmError;
pub use screener::{answer_followup, generate_questions};
