//! Heuristic conversation summaries
//!
//! The summary is built without any model call: the first user message
//! becomes the title, the tail of the conversation becomes the context, and
//! topics come from [`extract_topics`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::conversation::{Message, Role};
use crate::export::timestamp::{display_timestamp, iso_timestamp, sanitize_timestamp};
use crate::export::topics::extract_topics;

pub const DEFAULT_TITLE: &str = "Untitled Conversation";

/// Maximum title length, in characters
pub const TITLE_LEN: usize = 100;

/// Characters kept from each message in the context section
pub const CONTEXT_PREVIEW_LEN: usize = 100;

/// Characters kept from each key point
pub const KEY_POINT_PREVIEW_LEN: usize = 150;

/// Messages at or below this many characters are not key points
pub const KEY_POINT_MIN_LEN: usize = 50;

const CONTEXT_MESSAGES: usize = 3;
const MAX_KEY_POINTS: usize = 5;

/// Derived summary of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationSummary {
    /// Generation time, ISO-8601 UTC
    pub timestamp: String,

    pub title: String,

    /// Topics line followed by the recent context
    pub summary: String,

    pub key_points: Vec<String>,

    pub metadata: SummaryMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryMetadata {
    pub total_messages: usize,

    /// Timestamp of the last message, or the generation time
    pub last_message_time: String,

    pub topics: Vec<String>,

    pub context: String,
}

impl ConversationSummary {
    /// Identifier derived from the generation time, safe for file names
    pub fn conversation_id(&self) -> String {
        sanitize_timestamp(&self.timestamp)
    }

    /// File name the summary is saved under
    pub fn file_name(&self) -> String {
        format!("claude-context-{}.md", self.conversation_id())
    }
}

fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

fn preview(message: &Message, max_chars: usize) -> String {
    format!(
        "{}: {}...",
        message.role.as_str(),
        truncate_chars(&message.content, max_chars)
    )
}

fn title_for(messages: &[Message]) -> String {
    messages
        .iter()
        .find(|m| m.role == Role::User)
        .map(|m| truncate_chars(&m.content, TITLE_LEN))
        .filter(|title| !title.is_empty())
        .unwrap_or(DEFAULT_TITLE)
        .to_string()
}

fn key_points_for(messages: &[Message]) -> Vec<String> {
    let substantial: Vec<&Message> = messages
        .iter()
        .filter(|m| m.content.chars().count() > KEY_POINT_MIN_LEN)
        .collect();

    let skip = substantial.len().saturating_sub(MAX_KEY_POINTS);
    substantial[skip..]
        .iter()
        .map(|m| preview(m, KEY_POINT_PREVIEW_LEN))
        .collect()
}

/// Summarize `messages` as of now.
pub fn generate_summary(messages: &[Message]) -> ConversationSummary {
    generate_summary_at(messages, Utc::now())
}

/// Summarize `messages` with an explicit generation time.
pub fn generate_summary_at(messages: &[Message], now: DateTime<Utc>) -> ConversationSummary {
    let timestamp = iso_timestamp(now);

    let tail = &messages[messages.len().saturating_sub(CONTEXT_MESSAGES)..];
    let context = tail
        .iter()
        .map(|m| preview(m, CONTEXT_PREVIEW_LEN))
        .collect::<Vec<_>>()
        .join("\n");

    let topics = extract_topics(messages);
    let summary = format!(
        "This is a conversation about {}. The most recent context is:\n\n{}",
        topics.join(", "),
        context
    );

    let last_message_time = messages
        .last()
        .and_then(Message::timestamp)
        .map(str::to_string)
        .unwrap_or_else(|| timestamp.clone());

    ConversationSummary {
        title: title_for(messages),
        summary,
        key_points: key_points_for(messages),
        metadata: SummaryMetadata {
            total_messages: messages.len(),
            last_message_time,
            topics,
            context,
        },
        timestamp,
    }
}

/// Render a summary as Markdown.
pub fn render_summary(summary: &ConversationSummary) -> String {
    let key_points = summary
        .key_points
        .iter()
        .map(|point| format!("- {}", point))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "# {title}\n\
\n\
*Last Updated: {updated}*\n\
\n\
## Context\n\
{context}\n\
\n\
## Recent Messages\n\
{key_points}\n\
\n\
## Metadata\n\
- Total Messages: {total}\n\
- Topics: {topics}\n\
- Conversation ID: {id}\n\
\n\
---\n\
\n\
*This is a summary of a Claude conversation. The full conversation is available in the conversations directory.*\n",
        title = summary.title,
        updated = display_timestamp(&summary.metadata.last_message_time),
        context = summary.summary,
        key_points = key_points,
        total = summary.metadata.total_messages,
        topics = summary.metadata.topics.join(", "),
        id = summary.conversation_id(),
    )
}
