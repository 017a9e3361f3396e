//! Export module for claude-export
//!
//! Transcript rendering, topic extraction, summaries, and the exporter that
//! writes them to disk.

mod exporter;
mod summary;
mod timestamp;
mod topics;
mod transcript;

pub use exporter::{ExportReport, Exporter};
pub use summary::{
    generate_summary, generate_summary_at, render_summary, ConversationSummary, SummaryMetadata,
    DEFAULT_TITLE,
};
pub use timestamp::{iso_timestamp, sanitize_timestamp};
pub use topics::{extract_topics, TOPIC_VOCABULARY};
pub use transcript::format_conversation;
