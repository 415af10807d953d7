//! # Presentation Derivation
//!
//! Pure `(state, config, theme) → Presentation`. The renderer consumes the
//! result; nothing here touches the terminal.
//!
//! Height follows the web widget it models: 21px per line plus 16px padding
//! top and bottom, with the line count clamped to `[min_lines, max_lines]`.
//! Terminal hosts use `visible_lines` instead of pixels.

use crate::core::config::ResolvedConfig;
use crate::core::state::InputState;
use crate::core::text::line_count;
use crate::core::theme::{Rgb, Theme, lighten, mix};

pub const HEIGHT_PER_LINE_PX: u32 = 21;
pub const PADDING_PX: u32 = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presentation {
    pub height_px: u32,
    /// Text rows shown before the box starts scrolling.
    pub visible_lines: u16,
    pub border_color: Rgb,
    pub background_color: Rgb,
    pub text_color: Rgb,
    /// Color of the send button glyph; tracks the border.
    pub button_color: Rgb,
}

pub fn derive(state: &InputState, config: &ResolvedConfig, theme: &Theme) -> Presentation {
    let lines = line_count(&state.text) as u32;
    let border_color = border_color(theme, state.focused);

    Presentation {
        height_px: box_height_px(lines, config.min_lines, config.max_lines),
        visible_lines: visible_lines(lines, config.min_lines, config.max_lines),
        border_color,
        background_color: background_color(theme),
        text_color: theme.text,
        button_color: border_color,
    }
}

/// `min(max(lines, min_lines) * 21, max_lines * 21) + 32`
pub fn box_height_px(lines: u32, min_lines: u16, max_lines: u16) -> u32 {
    let shown = lines.max(u32::from(min_lines));
    let content = (shown * HEIGHT_PER_LINE_PX).min(u32::from(max_lines) * HEIGHT_PER_LINE_PX);
    content + 2 * PADDING_PX
}

pub fn visible_lines(lines: u32, min_lines: u16, max_lines: u16) -> u16 {
    let shown = lines.max(u32::from(min_lines)).min(u32::from(max_lines));
    u16::try_from(shown).unwrap_or(max_lines)
}

/// Unfocused border: text color pulled 80% toward the background, then lifted slightly.
pub fn base_border_color(theme: &Theme) -> Rgb {
    let muted = mix(theme.text.to_srgb(), theme.background.to_srgb(), 80.0);
    Rgb::from_srgb(lighten(muted, 2.0))
}

pub fn border_color(theme: &Theme, focused: bool) -> Rgb {
    if focused {
        theme.primary
    } else {
        base_border_color(theme)
    }
}

/// Background with a faint tint of text and accent over the theme background.
pub fn background_color(theme: &Theme) -> Rgb {
    let tinted = mix(theme.primary.to_srgb(), theme.background.to_srgb(), 99.0);
    let tinted = mix(theme.text.to_srgb(), tinted, 99.0);
    Rgb::from_srgb(lighten(tinted, 0.5))
}
