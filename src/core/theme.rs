//! # Theme
//!
//! The host hands the widget a palette (`backgroundColor`, `textColor`,
//! `primaryColor`). Colors may be hex (`#0e1117`, `#fff`) or CSS names
//! (`black`, `red`). Anything missing or unreadable falls back to the
//! matching field of [`Theme::default`], which is a plain dark theme.
//!
//! Blending helpers mirror the usual web color utilities: `mix` is a
//! straight per-channel interpolation in sRGB, `lighten` adds to HSL lightness.
//! Chains of blends stay in `Srgb<f32>` and round to 8 bits once at the end.

use log::warn;
use palette::{FromColor, Hsl, Lighten, Mix, Srgb};
use serde::{Deserialize, Serialize};

/// Raw theme as delivered by the host; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    #[serde(rename = "backgroundColor", alias = "background_color")]
    pub background_color: Option<String>,
    #[serde(rename = "textColor", alias = "text_color")]
    pub text_color: Option<String>,
    #[serde(rename = "primaryColor", alias = "primary_color")]
    pub primary_color: Option<String>,
    #[serde(
        rename = "secondaryBackgroundColor",
        alias = "secondary_background_color"
    )]
    pub secondary_background_color: Option<String>,
    pub base: Option<String>,
}

/// An opaque sRGB color, 8 bits per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `#rgb` or a CSS color name.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let color: Srgb<u8> = if input.starts_with('#') {
            input.parse().ok()?
        } else {
            palette::named::from_str(&input.to_ascii_lowercase())?
        };
        Some(Self::from(color))
    }

    /// Blend toward `other`; `weight` is the share of `other` in percent (0-100).
    pub fn mix(self, other: Rgb, weight: f32) -> Rgb {
        Self::from_srgb(mix(self.to_srgb(), other.to_srgb(), weight))
    }

    /// Raise HSL lightness by `percent` points.
    pub fn lighten(self, percent: f32) -> Rgb {
        Self::from_srgb(lighten(self.to_srgb(), percent))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_srgb(self) -> Srgb<f32> {
        Srgb::new(self.r, self.g, self.b).into_format()
    }

    /// Round an unclamped float color to 8 bits per channel.
    pub fn from_srgb(color: Srgb<f32>) -> Self {
        let clamped = Srgb::new(
            color.red.clamp(0.0, 1.0),
            color.green.clamp(0.0, 1.0),
            color.blue.clamp(0.0, 1.0),
        );
        Self::from(clamped.into_format::<u8>())
    }
}

/// `weight` is the share of `to` in percent (0-100).
pub fn mix(from: Srgb<f32>, to: Srgb<f32>, weight: f32) -> Srgb<f32> {
    from.mix(to, (weight / 100.0).clamp(0.0, 1.0))
}

pub fn lighten(color: Srgb<f32>, percent: f32) -> Srgb<f32> {
    let hsl = Hsl::from_color(color);
    Srgb::from_color(hsl.lighten_fixed(percent / 100.0))
}

impl From<Srgb<u8>> for Rgb {
    fn from(color: Srgb<u8>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

/// Resolved theme with concrete colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Rgb,
    pub text: Rgb,
    pub primary: Rgb,
    pub secondary_background: Rgb,
}

impl Default for Theme {
    /// Dark theme used when the host supplies none: black background,
    /// white text, red accent, grey secondary background.
    fn default() -> Self {
        Self {
            background: Rgb::new(0, 0, 0),
            text: Rgb::new(255, 255, 255),
            primary: Rgb::new(255, 0, 0),
            secondary_background: Rgb::new(128, 128, 128),
        }
    }
}

impl Theme {
    /// Resolve a host theme, falling back per field to the default theme.
    pub fn from_config(config: Option<&ThemeConfig>) -> Self {
        let defaults = Self::default();
        let Some(config) = config else {
            return defaults;
        };

        Self {
            background: pick(
                "backgroundColor",
                config.background_color.as_deref(),
                defaults.background,
            ),
            text: pick("textColor", config.text_color.as_deref(), defaults.text),
            primary: pick(
                "primaryColor",
                config.primary_color.as_deref(),
                defaults.primary,
            ),
            secondary_background: pick(
                "secondaryBackgroundColor",
                config.secondary_background_color.as_deref(),
                defaults.secondary_background,
            ),
        }
    }
}

fn pick(field: &str, value: Option<&str>, fallback: Rgb) -> Rgb {
    match value {
        None => fallback,
        Some(raw) => Rgb::parse(raw).unwrap_or_else(|| {
            warn!("Unreadable theme color {field} = {raw:?}, using default");
            fallback
        }),
    }
}
