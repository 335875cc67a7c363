use regis_memory::{
    BoundedConversation, ConversationConfig, RetryPolicy, SummarizeError, Summarizer, SUMMARY_ROLE,
};
use std::time::Duration;

fn config_200_3() -> ConversationConfig {
    ConversationConfig {
        max_units: 200,
        min_recent: 3,
        retry: RetryPolicy {
            max_attempts: 2,
            initial_backoff: Duration::ZERO,
            max_backoff: Duration::ZERO,
            timeout: Duration::from_secs(1),
        },
    }
}

// 120 chars = 40 estimate units per entry; the cumulative estimate first
// exceeds 200 on the sixth append.
fn entry_content(i: usize) -> String {
    let filler = "argument ".repeat(13);
    format!("{i:>3}{}", &filler[..117])
}

#[test]
fn test_cap_200_min_recent_3_scenario() {
    let mut conv = BoundedConversation::new(config_200_3());

    for i in 0..10 {
        conv.append("user", &entry_content(i));
        assert!(
            conv.estimated_units() <= 200,
            "cap violated after append {i}: {} units",
            conv.estimated_units()
        );

        if i == 5 {
            // First compaction: 3 recent entries plus one summary.
            assert_eq!(conv.len(), 4);
            assert_eq!(conv.entries()[0].role, SUMMARY_ROLE);
        }
    }

    assert!(conv.len() <= 4 + 1);
    assert_eq!(conv.entries().last().unwrap().content, entry_content(9));
}

#[test]
fn test_recent_entries_survive_every_compaction() {
    let mut conv = BoundedConversation::new(config_200_3());

    for i in 0..10 {
        conv.append("user", &entry_content(i));
        // The three most recent appends are always present verbatim.
        let recent: Vec<&str> = conv
            .entries()
            .iter()
            .rev()
            .take(3.min(i + 1))
            .map(|entry| entry.content.as_str())
            .collect();
        for (offset, content) in recent.iter().enumerate() {
            assert_eq!(*content, entry_content(i - offset));
        }
    }
}

struct AlwaysFails;

impl Summarizer for AlwaysFails {
    fn summarize(&self, _text: &str) -> Result<String, SummarizeError> {
        Err(SummarizeError::Timeout)
    }
}

#[test]
fn test_summarizer_failure_never_escapes_append() {
    let mut conv = BoundedConversation::new(config_200_3());

    for i in 0..10 {
        conv.append_with("user", &entry_content(i), &AlwaysFails);
    }

    assert!(conv.estimated_units() <= 200);
    assert_eq!(conv.entries()[0].role, SUMMARY_ROLE);
    assert!(conv.entries()[0].content.contains("earlier entries"));
}
