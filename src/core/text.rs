//! Pure text navigation helpers for the input buffer.
//!
//! Every offset here is a byte offset that lies on a char boundary.
//! These are stateless helpers with no dependency on `InputState`.

/// Find the byte offset of the previous character boundary before `pos` in `text`.
pub fn prev_char_boundary(text: &str, pos: usize) -> usize {
    text[..pos]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// Find the byte offset of the next character boundary after `pos` in `text`.
pub fn next_char_boundary(text: &str, pos: usize) -> usize {
    text[pos..]
        .char_indices()
        .nth(1)
        .map(|(i, _)| pos + i)
        .unwrap_or(text.len())
}

/// Whether a character is a "word" character (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Find the byte offset of the previous word boundary before `pos` in `text`.
///
/// Skips non-word characters first, then the word itself (readline `backward-word`).
pub fn prev_word_boundary(text: &str, pos: usize) -> usize {
    let before = &text[..pos];
    let mut chars = before.char_indices().rev().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }

    let mut boundary = 0;
    while let Some(&(i, c)) = chars.peek() {
        if !is_word_char(c) {
            boundary = i + c.len_utf8();
            break;
        }
        boundary = i;
        chars.next();
    }

    boundary
}

/// Find the byte offset of the next word boundary after `pos` in `text`.
pub fn next_word_boundary(text: &str, pos: usize) -> usize {
    let after = &text[pos..];
    let mut chars = after.char_indices().peekable();

    while chars.peek().is_some_and(|&(_, c)| !is_word_char(c)) {
        chars.next();
    }
    while chars.peek().is_some_and(|&(_, c)| is_word_char(c)) {
        chars.next();
    }

    match chars.peek() {
        Some(&(i, _)) => pos + i,
        None => text.len(),
    }
}

/// Byte offset where the logical line containing `pos` starts.
pub fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map(|i| i + 1).unwrap_or(0)
}

/// Byte offset where the logical line containing `pos` ends (before its `\n`).
pub fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map(|i| pos + i).unwrap_or(text.len())
}

/// Number of `\n`-delimited lines. An empty buffer is one line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Zero-based (line, char column) of a byte offset.
pub fn line_col(text: &str, pos: usize) -> (usize, usize) {
    let before = &text[..pos];
    let line = before.matches('\n').count();
    let col = before[line_start(text, pos)..].chars().count();
    (line, col)
}

/// Move `pos` one logical line up or down, keeping the char column where possible.
///
/// Returns `None` when already on the first (or last) line.
pub fn vertical_target(text: &str, pos: usize, down: bool) -> Option<usize> {
    let start = line_start(text, pos);
    let column = text[start..pos].chars().count();

    let target_start = if down {
        let end = line_end(text, pos);
        if end == text.len() {
            return None;
        }
        end + 1
    } else {
        if start == 0 {
            return None;
        }
        line_start(text, start - 1)
    };

    let target_end = line_end(text, target_start);
    let offset = text[target_start..target_end]
        .char_indices()
        .nth(column)
        .map(|(i, _)| target_start + i)
        .unwrap_or(target_end);
    Some(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- char boundaries -------------------------------------------------

    #[test]
    fn prev_char_boundary_multibyte() {
        // "café": 'é' starts at byte 3 and is 2 bytes long
        let s = "café";
        assert_eq!(prev_char_boundary(s, 5), 3);
        assert_eq!(prev_char_boundary(s, 3), 2);
    }

    #[test]
    fn prev_char_boundary_emoji() {
        let s = "a🔥b";
        assert_eq!(prev_char_boundary(s, 5), 1);
        assert_eq!(prev_char_boundary(s, 1), 0);
    }

    #[test]
    fn next_char_boundary_multibyte() {
        let s = "café";
        assert_eq!(next_char_boundary(s, 3), 5);
        assert_eq!(next_char_boundary(s, 2), 3);
    }

    #[test]
    fn next_char_boundary_at_end() {
        assert_eq!(next_char_boundary("abc", 2), 3);
    }

    // -- word boundaries -------------------------------------------------

    #[test]
    fn prev_word_simple() {
        assert_eq!(prev_word_boundary("hello world", 11), 6);
        assert_eq!(prev_word_boundary("hello world", 6), 0);
    }

    #[test]
    fn prev_word_punctuation() {
        assert_eq!(prev_word_boundary("foo.bar", 7), 4);
    }

    #[test]
    fn next_word_from_space() {
        assert_eq!(next_word_boundary("hello world", 5), 11);
    }

    #[test]
    fn next_word_underscore_is_word_char() {
        assert_eq!(next_word_boundary("hello_world test", 0), 11);
    }

    // -- lines -----------------------------------------------------------

    #[test]
    fn line_count_counts_trailing_newline() {
        assert_eq!(line_count(""), 1);
        assert_eq!(line_count("a"), 1);
        assert_eq!(line_count("a\n"), 2);
        assert_eq!(line_count("a\nb\nc"), 3);
    }

    #[test]
    fn line_bounds() {
        let s = "ab\ncde\nf";
        assert_eq!(line_start(s, 4), 3);
        assert_eq!(line_end(s, 4), 6);
        assert_eq!(line_start(s, 0), 0);
        assert_eq!(line_end(s, 7), 8);
    }

    #[test]
    fn line_col_reports_char_column() {
        let s = "ab\ncé x";
        assert_eq!(line_col(s, 0), (0, 0));
        assert_eq!(line_col(s, 3), (1, 0));
        // 'é' is two bytes, so byte 6 is char column 2
        assert_eq!(line_col(s, 6), (1, 2));
    }

    #[test]
    fn vertical_target_keeps_column() {
        let s = "hello\nhi\nworld";
        // from column 4 of "hello" down to "hi" clamps to its end
        assert_eq!(vertical_target(s, 4, true), Some(8));
        // from "hi" end down to "world" column 2
        assert_eq!(vertical_target(s, 8, true), Some(11));
        assert_eq!(vertical_target(s, 11, false), Some(8));
    }

    #[test]
    fn vertical_target_at_boundaries() {
        let s = "one\ntwo";
        assert_eq!(vertical_target(s, 1, false), None);
        assert_eq!(vertical_target(s, 5, true), None);
    }
}
