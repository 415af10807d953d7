//! Tab / Shift+Tab transforms.
//!
//! Both functions are pure: they take the buffer and the selection range and
//! return the rewritten buffer with the range that should be selected
//! afterwards. An empty range (`start == end`) is a plain caret.

use std::ops::Range;

/// The indent unit inserted by Tab and removed by Shift+Tab.
pub const INDENT_UNIT: &str = "    ";

/// Result of an indent or outdent. `None` from [`outdent`] means nothing changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentEdit {
    pub text: String,
    pub selection: Range<usize>,
}

/// Indent at the caret, or every `\n`-separated piece of the selection.
pub fn indent(text: &str, range: Range<usize>) -> IndentEdit {
    let Range { start, end } = range;

    if start == end {
        let mut out = String::with_capacity(text.len() + INDENT_UNIT.len());
        out.push_str(&text[..start]);
        out.push_str(INDENT_UNIT);
        out.push_str(&text[end..]);
        let caret = start + INDENT_UNIT.len();
        return IndentEdit {
            text: out,
            selection: caret..caret,
        };
    }

    let indented = text[start..end]
        .split('\n')
        .map(|line| format!("{INDENT_UNIT}{line}"))
        .collect::<Vec<_>>()
        .join("\n");

    let new_end = start + indented.len();
    IndentEdit {
        text: format!("{}{}{}", &text[..start], indented, &text[end..]),
        selection: start..new_end,
    }
}

/// Remove one indent unit before the caret, or from the start of every selected piece.
///
/// Returns `None` when the caret is not preceded by a full indent unit or no
/// selected piece starts with one.
pub fn outdent(text: &str, range: Range<usize>) -> Option<IndentEdit> {
    let Range { start, end } = range;

    if start == end {
        let before = &text[..start];
        if !before.ends_with(INDENT_UNIT) {
            return None;
        }
        let caret = start - INDENT_UNIT.len();
        return Some(IndentEdit {
            text: format!("{}{}", &text[..caret], &text[end..]),
            selection: caret..caret,
        });
    }

    let selected = &text[start..end];
    if !selected.split('\n').any(|line| line.starts_with(INDENT_UNIT)) {
        return None;
    }

    let outdented = selected
        .split('\n')
        .map(|line| line.strip_prefix(INDENT_UNIT).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");

    let new_end = start + outdented.len();
    Some(IndentEdit {
        text: format!("{}{}{}", &text[..start], outdented, &text[end..]),
        selection: start..new_end,
    })
}
