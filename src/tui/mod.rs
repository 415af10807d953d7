//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the widget, and
//! translates terminal events into `core::Action` values. It also plays the
//! host: emitted values go to a `ValueSink` and into the on-screen transcript.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps until an event arrives (up to 500ms),
//! drains every pending event, and redraws once.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableFocusChange, DisableMouseCapture, EnableBracketedPaste,
    EnableFocusChange, EnableMouseCapture, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::InputState;
use crate::core::submission::Submission;
use crate::host::ValueSink;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, TranscriptState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the widget's core state)
pub struct TuiState {
    pub input_box: InputBox,
    pub transcript: TranscriptState,
    /// Values handed to the host so far, shown in the transcript
    pub submissions: Vec<Submission>,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            transcript: TranscriptState::new(),
            submissions: Vec::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        // Kitty keyboard protocol lets Ctrl+Enter arrive as its own key; terminals
        // without it ignore the request and send Ctrl+J instead
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            EnableFocusChange,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, focus change, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableFocusChange,
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Route one terminal event. Returns `false` when the widget asked to quit.
fn handle_event<S: ValueSink>(
    event: &TuiEvent,
    state: &mut InputState,
    tui: &mut TuiState,
    sink: &mut S,
) -> bool {
    match event {
        // Resize just needs a redraw
        TuiEvent::Resize => return true,
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.transcript.handle_event(event);
            return true;
        }
        _ => {}
    }

    let Some(action) = tui.input_box.handle_event(event) else {
        return true;
    };

    match update(state, action) {
        Effect::None => true,
        Effect::Quit => false,
        Effect::Emit(submission) => {
            // Fire-and-forget: a failing sink must not take the widget down
            if let Err(e) = sink.set_value(&submission) {
                warn!("Failed to deliver submission {}: {}", submission.id, e);
            }
            debug!("History now holds {} entries", state.history.len());
            tui.input_box.reset_scroll();
            tui.transcript.stick_to_bottom = true;
            tui.submissions.push(submission);
            true
        }
    }
}

fn event_loop<S: ValueSink>(
    terminal: &mut DefaultTerminal,
    config: &ResolvedConfig,
    sink: &mut S,
) -> io::Result<()> {
    let mut state = InputState::new();
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &state, config, &mut tui))?;
            needs_redraw = false;
        }

        let Some(first_event) = poll_event_timeout(Duration::from_millis(500))? else {
            continue;
        };
        needs_redraw = true;

        // Process first event + drain ALL pending events before next draw
        let mut pending = Some(first_event);
        while let Some(event) = pending {
            if !handle_event(&event, &mut state, &mut tui, sink) {
                info!("Quit requested after {} submissions", state.history.len());
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}

/// Run the widget in the terminal until the user quits, then hand the sink back.
pub fn run<S: ValueSink>(config: ResolvedConfig, mut sink: S) -> io::Result<S> {
    info!(
        "Starting input box (min_lines={}, max_lines={})",
        config.min_lines, config.max_lines
    );

    let mut terminal = ratatui::init();
    let result = TerminalModeGuard::new()
        .and_then(|_guard| event_loop(&mut terminal, &config, &mut sink));
    ratatui::restore();

    result.map(|()| sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::Motion;
    use crate::host::JsonLinesSink;

    fn feed(events: &[TuiEvent]) -> (InputState, TuiState, Vec<u8>) {
        let mut state = InputState::new();
        let mut tui = TuiState::new();
        let mut sink = JsonLinesSink::new(Vec::new());
        for event in events {
            handle_event(event, &mut state, &mut tui, &mut sink);
        }
        (state, tui, sink.into_inner())
    }

    fn typed(text: &str) -> Vec<TuiEvent> {
        text.chars().map(TuiEvent::InputChar).collect()
    }

    #[test]
    fn submit_reaches_sink_and_transcript() {
        let mut events = typed("ls -la");
        events.push(TuiEvent::Submit);
        let (state, tui, out) = feed(&events);

        assert!(state.text.is_empty());
        assert_eq!(tui.submissions.len(), 1);
        assert_eq!(tui.submissions[0].text, "ls -la");

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["text"], "ls -la");
        assert!(value["id"].is_i64());
    }

    #[test]
    fn keystrokes_do_not_emit() {
        let mut events = typed("abc");
        events.push(TuiEvent::Indent);
        events.push(TuiEvent::Move(Motion::Left, true));
        let (state, tui, out) = feed(&events);
        assert_eq!(state.text, "abc    ");
        assert!(tui.submissions.is_empty());
        assert!(out.is_empty());
    }

    #[test]
    fn history_recall_through_terminal_events() {
        let mut events = typed("a");
        events.push(TuiEvent::Submit);
        events.extend(typed("b"));
        events.push(TuiEvent::Submit);
        events.extend(typed("xyz"));
        events.push(TuiEvent::HistoryOlder);
        let (state, _, _) = feed(&events);
        assert_eq!(state.text, "b");

        events.push(TuiEvent::HistoryNewer);
        let (state, _, _) = feed(&events);
        assert_eq!(state.text, "xyz");
    }

    #[test]
    fn focus_events_toggle_focus() {
        let (state, _, _) = feed(&[TuiEvent::FocusLost]);
        assert!(!state.focused);
        let (state, _, _) = feed(&[TuiEvent::FocusLost, TuiEvent::FocusGained]);
        assert!(state.focused);
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut state = InputState::new();
        let mut tui = TuiState::new();
        let mut sink = JsonLinesSink::new(Vec::new());
        assert!(handle_event(&TuiEvent::Resize, &mut state, &mut tui, &mut sink));
        assert!(!handle_event(&TuiEvent::Quit, &mut state, &mut tui, &mut sink));
    }
}
