//! # Actions
//!
//! Everything that can happen to the widget becomes an `Action`.
//! User presses Ctrl+Up? That's `Action::HistoryOlder`.
//! User clicks the send button? That's `Action::Submit { now_ms }`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` telling the host what (if anything) to do.
//! No side effects here. Even the submission timestamp comes in with the action.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::indent::{self, IndentEdit};
use crate::core::state::{InputState, Selection};
use crate::core::submission::Submission;
use crate::core::text;

/// Caret movements. With `extend` the selection anchor stays put.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    WordLeft,
    WordRight,
    Up,
    Down,
    LineStart,
    LineEnd,
    BufferStart,
    BufferEnd,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Insert text at the caret, replacing any selection (typing, paste, newline).
    Insert(String),
    /// The host reports a whole new value for the text box.
    Change { value: String, caret: usize },
    Backspace,
    Delete,
    Move { motion: Motion, extend: bool },
    SelectAll,
    /// Tab
    Indent,
    /// Shift+Tab
    Outdent,
    /// Ctrl+Up
    HistoryOlder,
    /// Ctrl+Down
    HistoryNewer,
    /// Ctrl+Enter or the submit button.
    Submit { now_ms: i64 },
    Focus(bool),
    Quit,
}

/// What the host should do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Hand this value to the host's output channel.
    Emit(Submission),
    Quit,
}

impl Action {
    /// Log-safe description: text payloads are reduced to their length.
    pub fn summary(&self) -> String {
        match self {
            Action::Insert(text) => format!("Insert({} bytes)", text.len()),
            Action::Change { value, caret } => {
                format!("Change {{ {} bytes, caret: {caret} }}", value.len())
            }
            other => format!("{other:?}"),
        }
    }
}

pub fn update(state: &mut InputState, action: Action) -> Effect {
    debug!("update: {}", action.summary());

    match action {
        Action::Insert(inserted) => {
            let range = state.selection.range();
            let caret = range.start + inserted.len();
            state.text.replace_range(range, &inserted);
            state.selection = Selection::caret(caret);
            state.history_cursor.sync_draft(&state.text);
            Effect::None
        }
        Action::Change { value, caret } => {
            state.set_text(value, caret);
            state.history_cursor.sync_draft(&state.text);
            Effect::None
        }
        Action::Backspace => {
            let range = if state.selection.is_empty() {
                let caret = state.caret();
                if caret == 0 {
                    return Effect::None;
                }
                text::prev_char_boundary(&state.text, caret)..caret
            } else {
                state.selection.range()
            };
            delete_range(state, range);
            Effect::None
        }
        Action::Delete => {
            let range = if state.selection.is_empty() {
                let caret = state.caret();
                if caret >= state.text.len() {
                    return Effect::None;
                }
                caret..text::next_char_boundary(&state.text, caret)
            } else {
                state.selection.range()
            };
            delete_range(state, range);
            Effect::None
        }
        Action::Move { motion, extend } => {
            move_caret(state, motion, extend);
            Effect::None
        }
        Action::SelectAll => {
            state.selection = Selection::from_range(0..state.text.len());
            Effect::None
        }
        Action::Indent => {
            let edit = indent::indent(&state.text, state.selection.range());
            apply_indent_edit(state, edit);
            Effect::None
        }
        Action::Outdent => {
            if let Some(edit) = indent::outdent(&state.text, state.selection.range()) {
                apply_indent_edit(state, edit);
            }
            Effect::None
        }
        Action::HistoryOlder => {
            if let Some(entry) = state.history_cursor.older(&state.history) {
                let entry = entry.to_owned();
                let end = entry.len();
                state.set_text(entry, end);
            }
            Effect::None
        }
        Action::HistoryNewer => {
            if let Some(entry) = state.history_cursor.newer(&state.history) {
                let entry = entry.to_owned();
                let end = entry.len();
                state.set_text(entry, end);
            }
            Effect::None
        }
        Action::Submit { now_ms } => {
            let text = std::mem::take(&mut state.text);
            let id = state.clock.next_id(now_ms);
            state.selection = Selection::default();
            state.history_cursor.reset();
            state.history.push(text.clone());
            Effect::Emit(Submission { text, id })
        }
        Action::Focus(focused) => {
            state.focused = focused;
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn delete_range(state: &mut InputState, range: std::ops::Range<usize>) {
    let start = range.start;
    state.text.replace_range(range, "");
    state.selection = Selection::caret(start);
    state.history_cursor.sync_draft(&state.text);
}

fn apply_indent_edit(state: &mut InputState, edit: IndentEdit) {
    state.text = edit.text;
    state.selection = Selection::from_range(edit.selection);
    state.history_cursor.sync_draft(&state.text);
}

fn move_caret(state: &mut InputState, motion: Motion, extend: bool) {
    let buffer = state.text.as_str();
    let Selection { anchor, head } = state.selection;

    // Without extend, Left/Right on a selection collapse it to the near edge
    if !extend && !state.selection.is_empty() {
        let range = state.selection.range();
        match motion {
            Motion::Left => {
                state.selection = Selection::caret(range.start);
                return;
            }
            Motion::Right => {
                state.selection = Selection::caret(range.end);
                return;
            }
            _ => {}
        }
    }

    let target = match motion {
        Motion::Left if head > 0 => text::prev_char_boundary(buffer, head),
        Motion::Right if head < buffer.len() => text::next_char_boundary(buffer, head),
        Motion::Left | Motion::Right => head,
        Motion::WordLeft => text::prev_word_boundary(buffer, head),
        Motion::WordRight => text::next_word_boundary(buffer, head),
        Motion::Up => text::vertical_target(buffer, head, false).unwrap_or(0),
        Motion::Down => text::vertical_target(buffer, head, true).unwrap_or(buffer.len()),
        Motion::LineStart => text::line_start(buffer, head),
        Motion::LineEnd => text::line_end(buffer, head),
        Motion::BufferStart => 0,
        Motion::BufferEnd => buffer.len(),
    };

    state.selection = if extend {
        Selection {
            anchor,
            head: target,
        }
    } else {
        Selection::caret(target)
    };
}
