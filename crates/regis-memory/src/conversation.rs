//! Bounded transcript with synchronous prefix compaction

use crate::estimate::{estimate_units, CHARS_PER_UNIT};
use crate::summarizer::{summarize_with_retry, RetryPolicy, Summarizer};
use crate::types::{ConversationEntry, SUMMARY_ROLE};

/// Longest summary content kept after compaction, in characters
///
/// Keeps a verbose summarizer from re-inflating the history it was asked to
/// shrink. The effective budget is further reduced when the retained suffix
/// leaves less headroom under the cap.
const MAX_SUMMARY_CHARS: usize = 500;

/// Capacity policy for a conversation
///
/// The cap and the retained-suffix length are caller-supplied; defaults
/// match the most common pairing in the assistant's debate loop (4000 units,
/// last 3 entries verbatim).
#[derive(Debug, Clone)]
pub struct ConversationConfig {
    /// Estimated-size cap enforced after every append
    pub max_units: usize,
    /// Most-recent entries always preserved verbatim by compaction
    pub min_recent: usize,
    /// Retry policy applied to the optional summarization collaborator
    pub retry: RetryPolicy,
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            max_units: 4000,
            min_recent: 3,
            retry: RetryPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    Compacting,
}

/// Ordered role-tagged transcript that never outgrows its configured cap
///
/// Entries are appended at the tail only. When an append would leave the
/// estimated size over `max_units`, a compaction step runs synchronously
/// inside the append: the prefix older than the `min_recent` suffix is
/// replaced with a single system-authored summary entry. Compaction is never
/// observable mid-flight; the transient `Compacting` state is entered and
/// exited before `append` returns.
///
/// Not safe for concurrent mutation; one logical session owns an instance,
/// and sharing requires an external lock.
#[derive(Debug, Clone)]
pub struct BoundedConversation {
    entries: Vec<ConversationEntry>,
    config: ConversationConfig,
    state: State,
}

impl BoundedConversation {
    pub fn new(config: ConversationConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
            state: State::Normal,
        }
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of per-entry content estimates (see [`estimate_units`])
    pub fn estimated_units(&self) -> usize {
        self.entries
            .iter()
            .map(|entry| estimate_units(&entry.content))
            .sum()
    }

    /// Append an entry, compacting with the static placeholder if the cap is
    /// exceeded
    pub fn append(&mut self, role: &str, content: &str) {
        self.append_inner(role, content, None);
    }

    /// Append an entry, compacting through `summarizer` if the cap is
    /// exceeded
    ///
    /// A failing summarizer degrades to the static placeholder; no error
    /// escapes this call.
    pub fn append_with(&mut self, role: &str, content: &str, summarizer: &dyn Summarizer) {
        self.append_inner(role, content, Some(summarizer));
    }

    /// Render the transcript as a `ROLE: content` prompt block
    pub fn context_string(&self) -> String {
        self.entries
            .iter()
            .map(|entry| format!("{}: {}", entry.role.to_uppercase(), entry.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn append_inner(&mut self, role: &str, content: &str, summarizer: Option<&dyn Summarizer>) {
        debug_assert_eq!(self.state, State::Normal);
        self.entries.push(ConversationEntry::new(role, content));

        // Nothing safe to drop while the whole history fits in the retained
        // suffix.
        if self.estimated_units() > self.config.max_units
            && self.entries.len() > self.config.min_recent
        {
            self.state = State::Compacting;
            self.compact(summarizer);
            self.state = State::Normal;
        }
    }

    fn compact(&mut self, summarizer: Option<&dyn Summarizer>) {
        let split = self.entries.len() - self.config.min_recent;
        let older: Vec<ConversationEntry> = self.entries.drain(..split).collect();

        // The summary may use at most the headroom the retained suffix
        // leaves under the cap, and never more than MAX_SUMMARY_CHARS.
        let recent_units = self.estimated_units();
        let budget_chars = MAX_SUMMARY_CHARS.min(
            self.config
                .max_units
                .saturating_sub(recent_units)
                .saturating_mul(CHARS_PER_UNIT),
        );

        let summary = match summarizer {
            Some(summarizer) => self.summarize_prefix(&older, summarizer),
            None => placeholder(older.len()),
        };

        self.entries.insert(
            0,
            ConversationEntry::new(SUMMARY_ROLE, clamp_chars(&summary, budget_chars)),
        );
        tracing::debug!(
            dropped = older.len(),
            units = self.estimated_units(),
            "conversation compacted"
        );
    }

    fn summarize_prefix(&self, older: &[ConversationEntry], summarizer: &dyn Summarizer) -> String {
        let text = older
            .iter()
            .map(|entry| format!("{}: {}", entry.role, entry.content))
            .collect::<Vec<_>>()
            .join("\n");

        match summarize_with_retry(summarizer, &text, &self.config.retry) {
            Ok(summary) => summary,
            Err(err) => {
                tracing::warn!(error = %err, "summarization failed, using placeholder");
                placeholder(older.len())
            }
        }
    }
}

impl Default for BoundedConversation {
    fn default() -> Self {
        Self::new(ConversationConfig::default())
    }
}

fn placeholder(dropped: usize) -> String {
    format!("[{dropped} earlier entries were archived to stay within the memory limit]")
}

fn clamp_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let end = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    format!("{}...", &text[..end])
}
