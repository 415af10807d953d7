//! # InputBox Component
//!
//! Terminal rendering and key handling for the multi-line input widget.
//!
//! ## Responsibilities
//!
//! - Translate terminal events into core `Action`s (typing, Tab, history, submit)
//! - Draw the buffer with selection highlight, scrollbar and the send button
//! - Report clicks on the send button as submissions
//!
//! ## State Management
//!
//! The text, selection and history live in `core::state::InputState`. This
//! component only keeps what the terminal needs on top: scroll offsets and
//! the screen rectangle of the send button from the last render.

mod viewport;

use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::core::action::Action;
use crate::core::indent::INDENT_UNIT;
use crate::core::presentation::Presentation;
use crate::core::state::InputState;
use crate::core::submission::now_millis;
use crate::core::theme::Rgb;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

use viewport::{VERTICAL_OVERHEAD, Viewport, inner_width};

/// Glyph drawn on the bottom border; clicking it submits.
const SEND_BUTTON: &str = " ➤ ";

/// Input widget presentation state.
///
/// # State
///
/// - `viewport`: Row/column scroll offsets
/// - `button_area`: Where the send button was drawn last frame (for hit testing)
pub struct InputBox {
    viewport: Viewport,
    button_area: Option<Rect>,
}

impl Default for InputBox {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBox {
    pub fn new() -> Self {
        Self {
            viewport: Viewport::default(),
            button_area: None,
        }
    }

    /// Rows needed for the current content: visible text lines plus borders.
    pub fn calculate_height(presentation: &Presentation) -> u16 {
        presentation.visible_lines.saturating_add(VERTICAL_OVERHEAD)
    }

    /// Bind this frame's props for rendering.
    pub fn view<'a>(
        &'a mut self,
        state: &'a InputState,
        presentation: Presentation,
    ) -> InputBoxView<'a> {
        InputBoxView {
            input: self,
            state,
            presentation,
        }
    }

    /// Whether a click at (col, row) hits the send button.
    pub fn hits_send_button(&self, col: u16, row: u16) -> bool {
        self.button_area
            .is_some_and(|area| area.contains(Position::new(col, row)))
    }

    pub fn reset_scroll(&mut self) {
        self.viewport.reset();
    }
}

impl EventHandler for InputBox {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::InputChar(c) => Some(Action::Insert(c.to_string())),
            TuiEvent::Paste(text) => Some(Action::Insert(
                text.replace("\r\n", "\n")
                    .replace('\r', "\n")
                    .replace('\t', INDENT_UNIT),
            )),
            TuiEvent::Backspace => Some(Action::Backspace),
            TuiEvent::Delete => Some(Action::Delete),
            TuiEvent::Indent => Some(Action::Indent),
            TuiEvent::Outdent => Some(Action::Outdent),
            TuiEvent::Move(motion, extend) => Some(Action::Move {
                motion: *motion,
                extend: *extend,
            }),
            TuiEvent::SelectAll => Some(Action::SelectAll),
            TuiEvent::HistoryOlder => Some(Action::HistoryOlder),
            TuiEvent::HistoryNewer => Some(Action::HistoryNewer),
            TuiEvent::Submit => Some(Action::Submit {
                now_ms: now_millis(),
            }),
            TuiEvent::MouseClick(col, row) if self.hits_send_button(*col, *row) => {
                Some(Action::Submit {
                    now_ms: now_millis(),
                })
            }
            TuiEvent::FocusGained => Some(Action::Focus(true)),
            TuiEvent::FocusLost => Some(Action::Focus(false)),
            TuiEvent::Quit => Some(Action::Quit),
            _ => None,
        }
    }
}

/// One frame of the InputBox: persistent state plus this frame's props.
pub struct InputBoxView<'a> {
    input: &'a mut InputBox,
    state: &'a InputState,
    presentation: Presentation,
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

impl InputBoxView<'_> {
    /// Build the visible lines, clipped to the viewport, with the selection reversed.
    fn visible_lines(&self, rows: usize, cols: usize) -> Vec<Line<'static>> {
        let text = self.state.text.as_str();
        let selection = self.state.selection.range();
        let Viewport {
            row_offset,
            col_offset,
        } = self.input.viewport;

        let mut line_start = 0;
        let mut lines = Vec::with_capacity(rows);
        for (index, line) in text.split('\n').enumerate() {
            let start = line_start;
            line_start += line.len() + 1;
            if index < row_offset {
                continue;
            }
            if lines.len() == rows {
                break;
            }

            let mut spans: Vec<Span<'static>> = Vec::new();
            let mut run = String::new();
            let mut run_selected = false;
            let mut column = 0;
            for (offset, c) in line.char_indices() {
                let width = c.width().unwrap_or(0);
                if column < col_offset {
                    column += width;
                    continue;
                }
                if column + width > col_offset + cols {
                    break;
                }
                column += width;

                let selected = selection.contains(&(start + offset));
                if selected != run_selected && !run.is_empty() {
                    spans.push(styled_run(std::mem::take(&mut run), run_selected));
                }
                run_selected = selected;
                run.push(c);
            }
            // Selected newline shows as one highlighted cell
            let newline_selected = selection.contains(&(start + line.len()));
            if !run.is_empty() {
                spans.push(styled_run(run, run_selected));
            }
            if newline_selected && column >= col_offset && column < col_offset + cols {
                spans.push(styled_run(" ".to_string(), true));
            }
            lines.push(Line::from(spans));
        }
        lines
    }

    /// Render scrollbar when content exceeds visible area
    fn render_scrollbar(&self, frame: &mut Frame, area: Rect, rows: usize) {
        use ratatui::widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState};

        let total_lines = self.state.text.split('\n').count();
        if total_lines <= rows {
            return;
        }

        // ScrollbarState content_length is max scrollable position, not total items
        let max_scroll = total_lines - rows;
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll)
            .position(self.input.viewport.row_offset);

        let scrollbar_area = Rect {
            x: area.x + area.width.saturating_sub(1),
            y: area.y + 1,
            width: 1,
            height: area.height.saturating_sub(2),
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .style(Style::default().fg(color(self.presentation.border_color))),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

fn styled_run(text: String, selected: bool) -> Span<'static> {
    if selected {
        Span::styled(text, Style::default().add_modifier(Modifier::REVERSED))
    } else {
        Span::raw(text)
    }
}

impl Component for InputBoxView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows = area.height.saturating_sub(VERTICAL_OVERHEAD) as usize;
        let cols = inner_width(area.width) as usize;
        let caret = self.state.caret();

        self.input
            .viewport
            .follow_caret(&self.state.text, caret, rows, cols);

        let presentation = self.presentation;
        let border_style = Style::default().fg(color(presentation.border_color));
        let button_style = Style::default()
            .fg(color(presentation.button_color))
            .add_modifier(Modifier::BOLD);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .padding(Padding::horizontal(1))
            .title(" Input ")
            .title_bottom(Line::from(Span::styled(SEND_BUTTON, button_style)).right_aligned());

        let paragraph = Paragraph::new(self.visible_lines(rows, cols))
            .block(block)
            .style(
                Style::default()
                    .fg(color(presentation.text_color))
                    .bg(color(presentation.background_color)),
            );

        frame.render_widget(paragraph, area);
        self.render_scrollbar(frame, area, rows);

        // Right-aligned bottom title ends just before the corner
        let button_width = SEND_BUTTON.chars().count() as u16;
        self.input.button_area = (area.width > button_width + 2 && area.height > 0).then(|| Rect {
            x: area.x + area.width - 1 - button_width,
            y: area.y + area.height - 1,
            width: button_width,
            height: 1,
        });

        if self.state.focused
            && let Some(position) = self.input.viewport.screen_pos(&self.state.text, caret, area)
        {
            frame.set_cursor_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::update;
    use crate::core::config::{CliOverrides, InputBoxConfig, LINES_CAP, ResolvedConfig, resolve_with};
    use crate::core::presentation::derive;
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(input: &mut InputBox, state: &InputState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let presentation = derive(state, &ResolvedConfig::default(), &Theme::default());

        terminal
            .draw(|f| input.view(state, presentation).render(f, f.area()))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn maps_editing_keys_to_actions() {
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::InputChar('x')),
            Some(Action::Insert("x".into()))
        );
        assert_eq!(input.handle_event(&TuiEvent::Indent), Some(Action::Indent));
        assert_eq!(
            input.handle_event(&TuiEvent::HistoryOlder),
            Some(Action::HistoryOlder)
        );
        assert!(matches!(
            input.handle_event(&TuiEvent::Submit),
            Some(Action::Submit { .. })
        ));
        assert_eq!(input.handle_event(&TuiEvent::ScrollUp), None);
    }

    #[test]
    fn paste_normalizes_tabs_and_crlf() {
        let mut input = InputBox::new();
        assert_eq!(
            input.handle_event(&TuiEvent::Paste("a\r\n\tb".into())),
            Some(Action::Insert("a\n    b".into()))
        );
    }

    #[test]
    fn render_shows_text_and_send_button() {
        let mut input = InputBox::new();
        let mut state = InputState::new();
        update(&mut state, Action::Insert("hello\nworld".into()));

        let screen = draw(&mut input, &state, 30, 4);
        assert!(screen.contains("hello"));
        assert!(screen.contains("world"));
        assert!(screen.contains("➤"));
    }

    #[test]
    fn click_on_send_button_submits() {
        let mut input = InputBox::new();
        let state = InputState::new();
        assert!(input.handle_event(&TuiEvent::MouseClick(27, 3)).is_none());

        draw(&mut input, &state, 30, 4);
        // bottom border row, just left of the corner
        assert!(input.hits_send_button(27, 3));
        assert!(!input.hits_send_button(5, 3));
        assert!(matches!(
            input.handle_event(&TuiEvent::MouseClick(27, 3)),
            Some(Action::Submit { .. })
        ));
    }

    #[test]
    fn height_follows_visible_lines() {
        let mut state = InputState::new();
        update(&mut state, Action::Insert("1\n2\n3".into()));
        let config = ResolvedConfig {
            min_lines: 1,
            max_lines: 2,
            ..ResolvedConfig::default()
        };
        let presentation = derive(&state, &config, &Theme::default());
        assert_eq!(InputBox::calculate_height(&presentation), 4);
    }

    #[test]
    fn height_of_largest_configured_box_does_not_overflow() {
        let config = resolve_with(
            &InputBoxConfig::default(),
            None,
            CliOverrides {
                min_lines: Some(u16::MAX),
                max_lines: None,
            },
            |_| None,
        );
        let presentation = derive(&InputState::new(), &config, &Theme::default());
        assert_eq!(
            InputBox::calculate_height(&presentation),
            LINES_CAP + VERTICAL_OVERHEAD
        );

        let unbounded = Presentation {
            visible_lines: u16::MAX,
            ..presentation
        };
        assert_eq!(InputBox::calculate_height(&unbounded), u16::MAX);
    }

    #[test]
    fn long_buffer_scrolls_to_caret() {
        let mut input = InputBox::new();
        let mut state = InputState::new();
        update(&mut state, Action::Insert("l1\nl2\nl3\nl4\nlast".into()));

        let screen = draw(&mut input, &state, 20, 4);
        assert!(screen.contains("last"));
        assert!(!screen.contains("l1"));
    }
}
