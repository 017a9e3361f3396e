//! Keyword topic extraction

use crate::conversation::Message;

/// Words recognised as topics. Matching is exact on lower-cased,
/// whitespace-separated tokens.
pub const TOPIC_VOCABULARY: [&str; 9] = [
    "project", "code", "file", "script", "function", "error", "bug", "feature", "test",
];

/// Collect vocabulary words in order of first appearance.
pub fn extract_topics(messages: &[Message]) -> Vec<String> {
    let mut topics: Vec<String> = Vec::new();

    for message in messages {
        let content = message.content.to_lowercase();
        for word in content.split_whitespace() {
            if TOPIC_VOCABULARY.contains(&word) && !topics.iter().any(|t| t == word) {
                topics.push(word.to_string());
            }
        }
    }

    topics
}
