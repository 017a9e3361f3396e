//! Data models for conversations

use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }

    /// Heading label used in transcripts
    pub fn label(&self) -> &'static str {
        match self {
            Self::User => "User",
            Self::Assistant => "Assistant",
        }
    }
}

/// A single chat message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who wrote the message
    pub role: Role,

    /// Message text, taken as-is
    pub content: String,

    /// Free-form timestamp as provided by the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl Message {
    /// Create a message without a timestamp
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// Timestamp, treating an empty string as absent
    pub fn timestamp(&self) -> Option<&str> {
        self.timestamp.as_deref().filter(|ts| !ts.is_empty())
    }
}

/// The conversation exported when no other source is wired in.
pub fn sample_conversation() -> Vec<Message> {
    vec![
        Message::new(Role::User, "Hello! Can you help me with my project?")
            .with_timestamp("2024-03-31 10:00:00"),
        Message::new(
            Role::Assistant,
            "Of course! I'd be happy to help. What kind of project are you working on?",
        )
        .with_timestamp("2024-03-31 10:00:05"),
    ]
}
