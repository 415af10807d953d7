//! # Transcript Component
//!
//! Scrollable view of every value the widget has handed to the host.
//!
//! `Transcript` is a transient component (created each frame) that wraps
//! `&'a mut TranscriptState` (persistent scroll state) and the submitted
//! values (props), the same split `ScrollViewState` / `ScrollView` uses.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::submission::Submission;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Scroll state for the transcript. Must be persisted in the parent TuiState.
pub struct TranscriptState {
    pub scroll_state: ScrollViewState,
    /// When true, auto-scroll to bottom on new content
    pub stick_to_bottom: bool,
    /// Content and viewport height from the last render (for scroll clamping)
    content_height: u16,
    viewport_height: u16,
}

impl Default for TranscriptState {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            stick_to_bottom: true,
            content_height: 0,
            viewport_height: 0,
        }
    }

    /// Re-engage auto-scroll once the user scrolls back to the end.
    fn repin_if_at_bottom(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y >= max_y {
            self.stick_to_bottom = true;
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

impl EventHandler for TranscriptState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.stick_to_bottom = false;
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.repin_if_at_bottom();
            }
            _ => {}
        }
        None
    }
}

pub struct Transcript<'a> {
    pub state: &'a mut TranscriptState,
    pub submissions: &'a [Submission],
}

/// Lines for one submission: an `#id` header, then the text wrapped to `width`.
pub fn submission_lines(submission: &Submission, width: u16) -> Vec<Line<'static>> {
    let header = Line::from(Span::styled(
        format!("#{}", submission.id),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::BOLD),
    ));

    let mut lines = vec![header];
    if submission.text.is_empty() {
        lines.push(Line::from(Span::styled(
            "(empty)",
            Style::default().add_modifier(Modifier::DIM),
        )));
        return lines;
    }

    let options = textwrap::Options::new(width.max(1) as usize).break_words(true);
    for logical in submission.text.split('\n') {
        if logical.is_empty() {
            lines.push(Line::default());
            continue;
        }
        for wrapped in textwrap::wrap(logical, &options) {
            lines.push(Line::raw(wrapped.into_owned()));
        }
    }
    lines
}

impl Component for Transcript<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        // Leave a column for the scrollbar
        let content_width = area.width.saturating_sub(1);

        let lines: Vec<Line<'static>> = self
            .submissions
            .iter()
            .flat_map(|s| {
                let mut lines = submission_lines(s, content_width);
                lines.push(Line::default());
                lines
            })
            .collect();
        let content_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);

        self.state.content_height = content_height;
        self.state.viewport_height = area.height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, content_height),
        );

        if self.state.stick_to_bottom {
            self.state.scroll_state.scroll_to_bottom();
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}
