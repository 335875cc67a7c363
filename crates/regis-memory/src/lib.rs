//! Bounded conversation history with prefix compaction

mod conversation;
mod estimate;
mod summarizer;
mod types;

pub use conversation::{BoundedConversation, ConversationConfig};
pub use estimate::{estimate_units, CHARS_PER_UNIT};
pub use summarizer::{summarize_with_retry, RetryPolicy, SummarizeError, Summarizer};
pub use types::{ConversationEntry, SUMMARY_ROLE};
