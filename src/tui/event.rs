use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::core::action::Motion;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Submit, // Ctrl+Enter (or Ctrl+J, which is what most terminals send for it)

    // Editing (forwarded to the InputBox)
    InputChar(char),
    Paste(String), // Bracketed paste - preserves newlines
    Backspace,
    Delete,
    Indent,  // Tab
    Outdent, // Shift+Tab
    Move(Motion, bool), // motion, extend selection
    SelectAll,
    HistoryOlder, // Ctrl+Up
    HistoryNewer, // Ctrl+Down

    // Host-side events
    MouseClick(u16, u16),
    ScrollUp,
    ScrollDown,
    FocusGained,
    FocusLost,
    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: Duration) -> io::Result<Option<TuiEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(map_event(event::read()?))
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> io::Result<Option<TuiEvent>> {
    poll_event_timeout(Duration::ZERO)
}

pub fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            map_key(key_event)
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseClick(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::FocusGained => Some(TuiEvent::FocusGained),
        Event::FocusLost => Some(TuiEvent::FocusLost),
        Event::Resize(_, _) => Some(TuiEvent::Resize),
    }
}

fn map_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Keyboard enhancement reports releases too; only presses and repeats edit
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);
    // AltGr arrives as Ctrl+Alt on Windows
    let alt_gr = ctrl && alt;
    let ctrl_only = ctrl && !alt;

    let motion = |motion: Motion| Some(TuiEvent::Move(motion, shift));

    match key_event.code {
        KeyCode::Char('c') if ctrl_only => Some(TuiEvent::Quit),
        KeyCode::Char('a') if ctrl_only => Some(TuiEvent::SelectAll),
        KeyCode::Char('j') if ctrl_only => Some(TuiEvent::Submit),
        KeyCode::Enter if ctrl => Some(TuiEvent::Submit),
        KeyCode::Up if ctrl => Some(TuiEvent::HistoryOlder),
        KeyCode::Down if ctrl => Some(TuiEvent::HistoryNewer),
        KeyCode::Esc => Some(TuiEvent::Quit),

        KeyCode::Tab => Some(TuiEvent::Indent),
        KeyCode::BackTab => Some(TuiEvent::Outdent),
        KeyCode::Enter => Some(TuiEvent::InputChar('\n')),
        KeyCode::Char(c) if alt_gr || (!ctrl && !alt) => Some(TuiEvent::InputChar(c)),
        KeyCode::Backspace => Some(TuiEvent::Backspace),
        KeyCode::Delete => Some(TuiEvent::Delete),

        KeyCode::Left if ctrl => motion(Motion::WordLeft),
        KeyCode::Right if ctrl => motion(Motion::WordRight),
        KeyCode::Home if ctrl => motion(Motion::BufferStart),
        KeyCode::End if ctrl => motion(Motion::BufferEnd),
        KeyCode::Left => motion(Motion::Left),
        KeyCode::Right => motion(Motion::Right),
        KeyCode::Up => motion(Motion::Up),
        KeyCode::Down => motion(Motion::Down),
        KeyCode::Home => motion(Motion::LineStart),
        KeyCode::End => motion(Motion::LineEnd),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Option<TuiEvent> {
        map_event(Event::Key(KeyEvent::new(code, modifiers)))
    }

    #[test]
    fn history_keys_need_ctrl() {
        assert_eq!(
            key(KeyCode::Up, KeyModifiers::CONTROL),
            Some(TuiEvent::HistoryOlder)
        );
        assert_eq!(
            key(KeyCode::Down, KeyModifiers::CONTROL),
            Some(TuiEvent::HistoryNewer)
        );
        assert_eq!(
            key(KeyCode::Up, KeyModifiers::NONE),
            Some(TuiEvent::Move(Motion::Up, false))
        );
    }

    #[test]
    fn enter_inserts_newline_ctrl_enter_submits() {
        assert_eq!(
            key(KeyCode::Enter, KeyModifiers::NONE),
            Some(TuiEvent::InputChar('\n'))
        );
        assert_eq!(
            key(KeyCode::Enter, KeyModifiers::CONTROL),
            Some(TuiEvent::Submit)
        );
        assert_eq!(
            key(KeyCode::Char('j'), KeyModifiers::CONTROL),
            Some(TuiEvent::Submit)
        );
    }

    #[test]
    fn tab_and_back_tab() {
        assert_eq!(key(KeyCode::Tab, KeyModifiers::NONE), Some(TuiEvent::Indent));
        assert_eq!(
            key(KeyCode::BackTab, KeyModifiers::SHIFT),
            Some(TuiEvent::Outdent)
        );
    }

    #[test]
    fn shift_extends_selection() {
        assert_eq!(
            key(KeyCode::Left, KeyModifiers::SHIFT),
            Some(TuiEvent::Move(Motion::Left, true))
        );
        assert_eq!(
            key(KeyCode::Right, KeyModifiers::CONTROL | KeyModifiers::SHIFT),
            Some(TuiEvent::Move(Motion::WordRight, true))
        );
    }

    #[test]
    fn shifted_chars_are_typed() {
        assert_eq!(
            key(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(TuiEvent::InputChar('A'))
        );
        assert_eq!(key(KeyCode::Char('x'), KeyModifiers::ALT), None);
    }

    #[test]
    fn alt_gr_chars_are_typed() {
        let alt_gr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        assert_eq!(
            key(KeyCode::Char('@'), alt_gr),
            Some(TuiEvent::InputChar('@'))
        );
        assert_eq!(
            key(KeyCode::Char('{'), alt_gr),
            Some(TuiEvent::InputChar('{'))
        );
        // letters under AltGr are not mistaken for Ctrl bindings
        assert_eq!(
            key(KeyCode::Char('c'), alt_gr),
            Some(TuiEvent::InputChar('c'))
        );
        assert_eq!(
            key(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(TuiEvent::Quit)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn focus_events() {
        assert_eq!(map_event(Event::FocusLost), Some(TuiEvent::FocusLost));
        assert_eq!(map_event(Event::FocusGained), Some(TuiEvent::FocusGained));
    }
}
