//! # Widget State
//!
//! Everything the input widget knows, in one place. No terminal types here;
//! presentation lives in `core::presentation` and the `tui` module.
//!
//! ```text
//! InputState
//! ├── text: String                  // live buffer (draft or recalled entry)
//! ├── selection: Selection          // caret + optional selected range
//! ├── focused: bool                 // border highlight only
//! ├── history: History              // submitted values, oldest first
//! ├── history_cursor: HistoryCursor // browse position + parked draft
//! └── clock: SubmissionClock        // submission id source
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::ops::Range;

use crate::core::history::{History, HistoryCursor};
use crate::core::submission::SubmissionClock;

/// Caret and selection as byte offsets into the buffer.
///
/// `anchor` stays put while the selection is extended; `head` is where the
/// caret is drawn. They are equal when nothing is selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    pub fn caret(pos: usize) -> Self {
        Self {
            anchor: pos,
            head: pos,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }

    /// Ordered byte range covered by the selection.
    pub fn range(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }

    /// Forward selection over `range` (caret at the end).
    pub fn from_range(range: Range<usize>) -> Self {
        Self {
            anchor: range.start,
            head: range.end,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    pub text: String,
    pub selection: Selection,
    pub focused: bool,
    pub history: History,
    pub history_cursor: HistoryCursor,
    pub clock: SubmissionClock,
}

impl InputState {
    /// Fresh state for a newly mounted widget. The input grabs focus on mount.
    pub fn new() -> Self {
        Self {
            focused: true,
            ..Self::default()
        }
    }

    pub fn caret(&self) -> usize {
        self.selection.head
    }

    /// Currently selected text (empty when only a caret).
    pub fn selected_text(&self) -> &str {
        &self.text[self.selection.range()]
    }

    /// Replace the whole buffer and put the caret at `caret` (clamped to a char boundary).
    pub(crate) fn set_text(&mut self, text: String, caret: usize) {
        let mut caret = caret.min(text.len());
        while !text.is_char_boundary(caret) {
            caret -= 1;
        }
        self.text = text;
        self.selection = Selection::caret(caret);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_focused_and_empty() {
        let state = InputState::new();
        assert!(state.focused);
        assert!(state.text.is_empty());
        assert!(state.history.is_empty());
        assert_eq!(state.history_cursor.position, None);
        assert_eq!(state.caret(), 0);
    }

    #[test]
    fn selection_range_is_ordered() {
        let backwards = Selection { anchor: 5, head: 2 };
        assert_eq!(backwards.range(), 2..5);
        assert!(!backwards.is_empty());
        assert!(Selection::caret(3).is_empty());
    }

    #[test]
    fn set_text_clamps_caret_to_char_boundary() {
        let mut state = InputState::new();
        // 'é' occupies bytes 1..3
        state.set_text("cé".to_string(), 2);
        assert_eq!(state.caret(), 1);
        state.set_text("ab".to_string(), 99);
        assert_eq!(state.caret(), 2);
    }
}
