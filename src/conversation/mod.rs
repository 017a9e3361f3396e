//! Conversation module for claude-export
//!
//! Message types and the built-in sample conversation.

mod models;

pub use models::{sample_conversation, Message, Role};
