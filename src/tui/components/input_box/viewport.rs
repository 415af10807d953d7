//! Scroll tracking for the InputBox.
//!
//! The box never wraps (like a `white-space: pre` textarea), so it scrolls in
//! both directions. `Viewport` owns the row/column offsets; the buffer and
//! caret are passed in explicitly since they belong to `InputState`.

use ratatui::layout::Rect;
use unicode_width::UnicodeWidthStr;

use crate::core::text::{line_col, line_start};

/// Border (2) + padding (2) consumed horizontally by the bordered block
pub(super) const HORIZONTAL_OVERHEAD: u16 = 4;
/// Top + bottom borders consumed vertically
pub(super) const VERTICAL_OVERHEAD: u16 = 2;
/// Offset from area edge to the first content column (border + padding)
pub(super) const CONTENT_X_OFFSET: u16 = 2;
/// Offset from area edge to the first content row (border)
pub(super) const CONTENT_Y_OFFSET: u16 = 1;

/// Calculate the inner content width after subtracting border/padding overhead.
pub(super) fn inner_width(area_width: u16) -> u16 {
    area_width.saturating_sub(HORIZONTAL_OVERHEAD)
}

/// Display column of `pos` within its line.
pub(super) fn display_column(buffer: &str, pos: usize) -> usize {
    buffer[line_start(buffer, pos)..pos].width()
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(super) struct Viewport {
    /// First visible logical line
    pub row_offset: usize,
    /// First visible display column
    pub col_offset: usize,
}

impl Viewport {
    /// Reset scrolling (used after Submit clears the buffer).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scroll just enough to keep the caret inside a `rows` × `cols` window.
    pub fn follow_caret(&mut self, buffer: &str, caret: usize, rows: usize, cols: usize) {
        let (line, _) = line_col(buffer, caret);
        let column = display_column(buffer, caret);
        let total_lines = buffer.split('\n').count();

        if total_lines <= rows {
            self.row_offset = 0;
        } else if line < self.row_offset {
            self.row_offset = line;
        } else if rows > 0 && line >= self.row_offset + rows {
            self.row_offset = line + 1 - rows;
        }
        self.row_offset = self.row_offset.min(total_lines.saturating_sub(rows.max(1)));

        // Keep one spare column so the caret is visible after the last char
        if column < self.col_offset {
            self.col_offset = column;
        } else if cols > 0 && column >= self.col_offset + cols {
            self.col_offset = column + 1 - cols;
        }
    }

    /// Screen position of the caret inside `area`, or `None` if scrolled out of view.
    pub fn screen_pos(&self, buffer: &str, caret: usize, area: Rect) -> Option<(u16, u16)> {
        let (line, _) = line_col(buffer, caret);
        let column = display_column(buffer, caret);

        let row = line.checked_sub(self.row_offset)?;
        let col = column.checked_sub(self.col_offset)?;
        let rows = area.height.saturating_sub(VERTICAL_OVERHEAD) as usize;
        let cols = inner_width(area.width) as usize;
        if row >= rows || col > cols {
            return None;
        }

        Some((
            area.x + CONTENT_X_OFFSET + col as u16,
            area.y + CONTENT_Y_OFFSET + row as u16,
        ))
    }
}
