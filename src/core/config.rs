//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → host args → CLI flags.
//!
//! Config lives at `~/.inputbox/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The host args are the JSON object a host passes on every render:
//! `{"min_lines": 2, "max_lines": 10, "theme": {"primaryColor": "#ff4b4b"}}`.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::theme::{Theme, ThemeConfig};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct InputBoxConfig {
    #[serde(default)]
    pub widget: WidgetConfig,
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WidgetConfig {
    pub min_lines: Option<u16>,
    pub max_lines: Option<u16>,
}

/// Per-render arguments from the host, as JSON.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HostArgs {
    pub min_lines: Option<u16>,
    pub max_lines: Option<u16>,
    pub theme: Option<ThemeConfig>,
}

impl HostArgs {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(ConfigError::Json)
    }
}

/// Values passed on the command line (None = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub min_lines: Option<u16>,
    pub max_lines: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MIN_LINES: u16 = 1;
pub const DEFAULT_MAX_LINES: u16 = 20;
/// Ceiling for both line bounds; larger values are clamped with a warning.
pub const LINES_CAP: u16 = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub min_lines: u16,
    pub max_lines: u16,
    pub theme: Theme,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            min_lines: DEFAULT_MIN_LINES,
            max_lines: DEFAULT_MAX_LINES,
            theme: Theme::default(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Json(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Json(e) => write!(f, "host args parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.inputbox/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".inputbox").join("config.toml"))
}

/// Load config from `~/.inputbox/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `InputBoxConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<InputBoxConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(InputBoxConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(InputBoxConfig::default());
    }

    load_config_from(&path)
}

/// Parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<InputBoxConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: InputBoxConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r##"# InputBox Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → host args → CLI flags.

# [widget]
# min_lines = 1                      # Or set INPUTBOX_MIN_LINES
# max_lines = 20                     # Or set INPUTBOX_MAX_LINES

# [theme]
# backgroundColor = "#0e1117"        # Or set INPUTBOX_BACKGROUND_COLOR
# textColor = "#fafafa"              # Or set INPUTBOX_TEXT_COLOR
# primaryColor = "#ff4b4b"           # Or set INPUTBOX_PRIMARY_COLOR
"##;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Read a numeric env var, ignoring (with a warning) values that don't parse.
fn env_lines(env: &impl Fn(&str) -> Option<String>, name: &str) -> Option<u16> {
    let raw = env(name)?;
    match raw.trim().parse() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("Ignoring {}={:?}: {}", name, raw, e);
            None
        }
    }
}

fn cap_lines(name: &str, lines: u16) -> u16 {
    if lines > LINES_CAP {
        warn!("{name} ({lines}) above {LINES_CAP}, clamping");
    }
    lines.min(LINES_CAP)
}

/// Later layers win field by field.
fn merge_theme(layers: &[Option<&ThemeConfig>]) -> ThemeConfig {
    let mut merged = ThemeConfig::default();
    for layer in layers.iter().flatten() {
        if layer.background_color.is_some() {
            merged.background_color = layer.background_color.clone();
        }
        if layer.text_color.is_some() {
            merged.text_color = layer.text_color.clone();
        }
        if layer.primary_color.is_some() {
            merged.primary_color = layer.primary_color.clone();
        }
        if layer.secondary_background_color.is_some() {
            merged.secondary_background_color = layer.secondary_background_color.clone();
        }
        if layer.base.is_some() {
            merged.base = layer.base.clone();
        }
    }
    merged
}

/// Resolve the final config by collapsing: defaults → config file → env vars → host args → CLI.
pub fn resolve(config: &InputBoxConfig, host: Option<&HostArgs>, cli: CliOverrides) -> ResolvedConfig {
    resolve_with(config, host, cli, |name| std::env::var(name).ok())
}

/// [`resolve`] with an explicit environment lookup.
pub fn resolve_with(
    config: &InputBoxConfig,
    host: Option<&HostArgs>,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Lines: CLI → host → env → config → default
    let min_lines = cli
        .min_lines
        .or_else(|| host.and_then(|h| h.min_lines))
        .or_else(|| env_lines(&env, "INPUTBOX_MIN_LINES"))
        .or(config.widget.min_lines)
        .unwrap_or(DEFAULT_MIN_LINES)
        .max(1);
    let min_lines = cap_lines("min_lines", min_lines);

    let max_lines = cli
        .max_lines
        .or_else(|| host.and_then(|h| h.max_lines))
        .or_else(|| env_lines(&env, "INPUTBOX_MAX_LINES"))
        .or(config.widget.max_lines)
        .unwrap_or(DEFAULT_MAX_LINES);
    let max_lines = cap_lines("max_lines", max_lines);

    if max_lines < min_lines {
        warn!("max_lines ({max_lines}) below min_lines ({min_lines}), raising it");
    }
    let max_lines = max_lines.max(min_lines);

    let env_theme = ThemeConfig {
        background_color: env("INPUTBOX_BACKGROUND_COLOR"),
        text_color: env("INPUTBOX_TEXT_COLOR"),
        primary_color: env("INPUTBOX_PRIMARY_COLOR"),
        ..Default::default()
    };
    let theme = merge_theme(&[
        config.theme.as_ref(),
        Some(&env_theme),
        host.and_then(|h| h.theme.as_ref()),
    ]);

    // No theme anywhere → the default theme as a whole
    let theme = if theme == ThemeConfig::default() {
        Theme::default()
    } else {
        Theme::from_config(Some(&theme))
    };

    ResolvedConfig {
        min_lines,
        max_lines,
        theme,
    }
}
