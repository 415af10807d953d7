//! # StatusBar Component
//!
//! One-line bar under the input box: key hints on the left, where the user is
//! in the history on the right.
//!
//! Stateless: every field is a prop copied from `InputState` and the theme each frame.
//!
//! ```text
//! Ctrl+Enter send · Tab/Shift+Tab indent · Ctrl+↑/↓ history · Esc quit     history 2/5
//! ```

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Rgb;
use crate::tui::component::Component;

const KEY_HINTS: &str = "Ctrl+Enter send · Tab/Shift+Tab indent · Ctrl+↑/↓ history · Esc quit";

pub struct StatusBar {
    /// Number of entries in the history log
    pub history_len: usize,
    /// Browse position (0 = most recent), `None` while editing the draft
    pub history_position: Option<usize>,
    /// Theme's secondary background
    pub background: Rgb,
}

impl StatusBar {
    pub fn new(history_len: usize, history_position: Option<usize>, background: Rgb) -> Self {
        Self {
            history_len,
            history_position,
            background,
        }
    }

    /// Right-hand label: `history 2/5` while browsing, `draft` otherwise.
    pub fn position_label(&self) -> String {
        match self.history_position {
            // Count from the oldest entry, like shells number their history
            Some(back) => format!(
                "history {}/{}",
                self.history_len.saturating_sub(back),
                self.history_len
            ),
            None if self.history_len == 0 => "draft".to_string(),
            None => format!("draft · {} in history", self.history_len),
        }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let dim = Style::default().add_modifier(Modifier::DIM);
        let label = self.position_label();

        let hints_width = area.width.saturating_sub(label.chars().count() as u16 + 1) as usize;
        let hints: String = KEY_HINTS.chars().take(hints_width).collect();
        let padding = hints_width.saturating_sub(hints.chars().count()) + 1;

        let line = Line::from(vec![
            Span::styled(hints, dim),
            Span::raw(" ".repeat(padding)),
            Span::styled(label, Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let Rgb { r, g, b } = self.background;
        frame.render_widget(
            Paragraph::new(line).style(Style::default().bg(Color::Rgb(r, g, b))),
            area,
        );
    }
}
