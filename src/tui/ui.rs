use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::config::ResolvedConfig;
use crate::core::presentation::derive;
use crate::core::state::InputState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{InputBox, StatusBar, Transcript};

/// Split the screen: transcript on top, the input box sized to its content, hints last.
pub fn layout(area: Rect, input_height: u16) -> [Rect; 3] {
    use Constraint::{Length, Min};
    Layout::vertical([Min(0), Length(input_height), Length(1)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, state: &InputState, config: &ResolvedConfig, tui: &mut TuiState) {
    let presentation = derive(state, config, &config.theme);
    let input_height = InputBox::calculate_height(&presentation);
    let [transcript_area, input_area, status_area] = layout(frame.area(), input_height);

    Transcript {
        state: &mut tui.transcript,
        submissions: &tui.submissions,
    }
    .render(frame, transcript_area);

    tui.input_box
        .view(state, presentation)
        .render(frame, input_area);

    StatusBar::new(
        state.history.len(),
        state.history_cursor.position,
        config.theme.secondary_background,
    )
    .render(frame, status_area);
}
