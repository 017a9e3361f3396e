//! Markdown transcript rendering

use chrono::{DateTime, Local};

use crate::conversation::Message;
use crate::export::timestamp::display_time;

const SEPARATOR: &str = "---\n\n";

fn format_message(message: &Message) -> String {
    let timestamp = message
        .timestamp()
        .map(|ts| format!(" ({})", ts))
        .unwrap_or_default();

    format!(
        "## {}{}\n\n{}\n\n",
        message.role.label(),
        timestamp,
        message.content
    )
}

/// Render every message as a Markdown document.
pub fn format_conversation(messages: &[Message], exported_at: &DateTime<Local>) -> String {
    let mut output = String::new();
    output.push_str("# Claude Conversation Export\n\n");
    output.push_str(&format!("*Exported on {}*\n\n", display_time(exported_at)));

    let blocks: Vec<String> = messages.iter().map(format_message).collect();
    output.push_str(&blocks.join(SEPARATOR));

    output
}
