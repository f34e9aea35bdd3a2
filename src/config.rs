//! Build configuration module.
//!
//! Handles loading, validating, and merging `folio.toml`. This file controls
//! how the site is *built*; what the site *says* lives in `config.json` and
//! is modelled by [`crate::model::SiteConfig`].
//!
//! ## Config File Location
//!
//! `folio.toml` is looked up in the working directory, or passed explicitly
//! with `--config`. Without one, stock defaults apply.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! source = "content"         # Directory or http(s) base URL holding the JSON
//! output = "dist"            # Where the generated site is written
//! assets_dir = "assets"      # Copied verbatim from a directory source
//! home_limit = 4             # Projects shown on the home showcase
//! default_sort = "newest"    # newest | oldest | a-z | z-a
//! fetch_timeout_secs = 10    # Per-request timeout for http sources
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"
//! border = "#e0e0e0"
//! accent = "#1f5eff"
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#7aa2ff"
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. User values
//! are merged key-by-key over the stock defaults. Unknown keys are rejected
//! to catch typos early.

use crate::filter::SortMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "folio.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Build configuration loaded from `folio.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Directory or base URL the three JSON documents are read from.
    pub source: String,
    /// Output directory for the generated site.
    pub output: String,
    /// Static assets directory inside a directory source.
    pub assets_dir: String,
    /// Number of projects on the home showcase.
    pub home_limit: usize,
    /// Sort applied before any user choice.
    pub default_sort: SortMode,
    /// Timeout for each HTTP fetch.
    pub fetch_timeout_secs: u64,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source: "content".to_string(),
            output: "dist".to_string(),
            assets_dir: "assets".to_string(),
            home_limit: 4,
            default_sort: SortMode::Newest,
            fetch_timeout_secs: 10,
            colors: ColorConfig::default(),
        }
    }
}

impl BuildConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_limit == 0 {
            return Err(ConfigError::Validation(
                "home_limit must be at least 1".into(),
            ));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "fetch_timeout_secs must be at least 1".into(),
            ));
        }
        if self.source.trim().is_empty() {
            return Err(ConfigError::Validation("source must not be empty".into()));
        }
        Ok(())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: ColorScheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    /// Meta lines, captions, inactive chips.
    pub text_muted: String,
    pub border: String,
    /// Active chips and links.
    pub accent: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#1f5eff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#7aa2ff".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    // BuildConfig contains only strings, integers and tables.
    toml::Value::try_from(BuildConfig::default())
        .unwrap_or_else(|_| toml::Value::Table(toml::map::Map::new()))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<BuildConfig, ConfigError> {
    let base = stock_defaults_value();
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: BuildConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load `folio.toml` from a directory; stock defaults if it is absent.
pub fn load_config(dir: &Path) -> Result<BuildConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return resolve_config(None);
    }
    load_config_file(&path)
}

/// Load an explicit config file. A missing file is an error here.
pub fn load_config_file(path: &Path) -> Result<BuildConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    resolve_config(Some(value))
}

/// Returns a fully-commented stock `folio.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Folio Build Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.

# Where config.json, projects.json and artists.json are read from.
# A directory path, or an http(s) base URL.
source = "content"

# Where the generated site is written.
output = "dist"

# Static assets (images, audio, fonts) copied from a directory source.
assets_dir = "assets"

# Number of projects shown on the home showcase. Must be at least 1.
home_limit = 4

# Initial project ordering: "newest", "oldest", "a-z" or "z-a".
default_sort = "newest"

# Timeout in seconds for each request when the source is a URL.
fetch_timeout_secs = 10

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
text = "#111111"
text_muted = "#666666"    # Meta lines, captions, inactive chips
border = "#e0e0e0"
accent = "#1f5eff"        # Active chips, links

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#0a0a0a"
text = "#eeeeee"
text_muted = "#999999"
border = "#333333"
accent = "#7aa2ff"
"##
}

impl ColorScheme {
    /// `(custom property, value)` pairs, in stylesheet order.
    fn properties(&self) -> [(&'static str, &str); 5] {
        [
            ("--color-bg", self.background.as_str()),
            ("--color-text", self.text.as_str()),
            ("--color-text-muted", self.text_muted.as_str()),
            ("--color-border", self.border.as_str()),
            ("--color-accent", self.accent.as_str()),
        ]
    }

    fn declarations(&self, indent: &str) -> String {
        self.properties()
            .iter()
            .map(|(name, value)| format!("{indent}{name}: {value};\n"))
            .collect()
    }
}

/// `:root` color variables for the light scheme, overridden under
/// `prefers-color-scheme: dark`.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        ":root {{\n{}}}\n\n@media (prefers-color-scheme: dark) {{\n    :root {{\n{}    }}\n}}",
        colors.light.declarations("    "),
        colors.dark.declarations("        "),
    )
}
