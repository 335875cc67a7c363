//! Conversation entry types

use serde::{Deserialize, Serialize};

/// Role tag on the synthetic entry that compaction inserts in place of the
/// dropped prefix
pub const SUMMARY_ROLE: &str = "system";

/// One role-tagged message in a transcript
///
/// Entries are insertion-ordered and unique only by position; duplicate
/// content is allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    pub role: String,
    pub content: String,
}

impl ConversationEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_roundtrip() {
        let entry = ConversationEntry::new("user", "what is the status?");

        let json = serde_json::to_string(&entry).unwrap();
        let parsed: ConversationEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, entry);
    }

    #[test]
    fn test_entry_json_shape() {
        let entry = ConversationEntry::new("assistant", "all clear");
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "all clear");
    }
}
