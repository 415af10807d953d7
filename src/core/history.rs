//! # Command History
//!
//! Shell-style recall of previously submitted values.
//!
//! ```text
//! entries:  ["a", "b", "c"]        oldest → newest
//! cursor:    None  → editing the draft
//!            Some(0) → "c"  (most recent)
//!            Some(1) → "b"
//!            Some(2) → "a"  (oldest, Ctrl+Up is a no-op here)
//! ```
//!
//! Browsing never touches `entries`. The draft the user was composing is
//! parked in `pending_draft` and comes back when the cursor returns to `None`.

/// Append-only log of submitted values, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission. Empty and duplicate values are kept.
    pub fn push(&mut self, entry: String) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Entry `back` steps from the most recent one (0 = most recent).
    pub fn recall(&self, back: usize) -> Option<&str> {
        self.entries
            .len()
            .checked_sub(back + 1)
            .and_then(|i| self.entries.get(i))
            .map(String::as_str)
    }
}

/// Where the user currently is in the history, plus the parked draft.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryCursor {
    /// `None` while editing the draft; `Some(n)` while showing the n-th most recent entry.
    pub position: Option<usize>,
    /// Draft text saved while not browsing; restored on return.
    pub pending_draft: String,
}

impl HistoryCursor {
    pub fn is_browsing(&self) -> bool {
        self.position.is_some()
    }

    /// Step toward older entries. Returns the text to display, or `None` at the oldest entry.
    pub fn older<'h>(&mut self, history: &'h History) -> Option<&'h str> {
        let next = self.position.map_or(0, |p| p + 1);
        let entry = history.recall(next)?;
        self.position = Some(next);
        Some(entry)
    }

    /// Step toward newer entries. Returns the text to display, or `None` when
    /// not browsing. Leaving the most recent entry yields the pending draft.
    pub fn newer<'a>(&'a mut self, history: &'a History) -> Option<&'a str> {
        let current = self.position?;
        match current.checked_sub(1) {
            Some(prev) => {
                self.position = Some(prev);
                // `prev` < `current`, which was a valid index
                Some(history.recall(prev).unwrap_or_default())
            }
            None => {
                self.position = None;
                Some(self.pending_draft.as_str())
            }
        }
    }

    /// Keep the parked draft in step with the buffer while not browsing.
    pub fn sync_draft(&mut self, text: &str) {
        if !self.is_browsing() {
            self.pending_draft.clear();
            self.pending_draft.push_str(text);
        }
    }

    pub fn reset(&mut self) {
        self.position = None;
        self.pending_draft.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_of(items: &[&str]) -> History {
        let mut history = History::new();
        for item in items {
            history.push(item.to_string());
        }
        history
    }

    #[test]
    fn recall_counts_back_from_newest() {
        let history = history_of(&["a", "b", "c"]);
        assert_eq!(history.recall(0), Some("c"));
        assert_eq!(history.recall(2), Some("a"));
        assert_eq!(history.recall(3), None);
    }

    #[test]
    fn older_stops_at_oldest() {
        let history = history_of(&["a", "b"]);
        let mut cursor = HistoryCursor::default();
        assert_eq!(cursor.older(&history), Some("b"));
        assert_eq!(cursor.older(&history), Some("a"));
        assert_eq!(cursor.older(&history), None);
        assert_eq!(cursor.position, Some(1));
    }

    #[test]
    fn older_on_empty_history_is_noop() {
        let history = History::new();
        let mut cursor = HistoryCursor::default();
        assert_eq!(cursor.older(&history), None);
        assert!(!cursor.is_browsing());
    }

    #[test]
    fn newer_returns_to_draft() {
        let history = history_of(&["a", "b"]);
        let mut cursor = HistoryCursor::default();
        cursor.sync_draft("xyz");
        cursor.older(&history);
        cursor.older(&history);
        assert_eq!(cursor.newer(&history), Some("b"));
        assert_eq!(cursor.newer(&history), Some("xyz"));
        assert_eq!(cursor.position, None);
        assert_eq!(cursor.newer(&history), None);
    }

    #[test]
    fn sync_draft_ignored_while_browsing() {
        let history = history_of(&["a"]);
        let mut cursor = HistoryCursor::default();
        cursor.sync_draft("draft");
        cursor.older(&history);
        cursor.sync_draft("edited history entry");
        assert_eq!(cursor.pending_draft, "draft");
    }

    #[test]
    fn duplicates_and_empty_entries_are_kept() {
        let history = history_of(&["x", "x", ""]);
        assert_eq!(history.len(), 3);
        assert_eq!(history.recall(0), Some(""));
    }
}
