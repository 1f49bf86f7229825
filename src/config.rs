//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! the base layer; a `config.toml` in the content directory overrides any
//! subset of keys.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "Portfolio"
//! description = "Full-stack and mobile developer building production-grade web and iOS/Android apps."
//! base_path = "/"           # Prefix for every generated link
//! lang = "en"
//!
//! [author]
//! name = "Your Name"
//! headline = "Full-Stack & Mobile App Developer"
//! intro = "I build **production-grade systems** from the ground up."  # Markdown
//! email = "hello@example.com"
//! github = "https://github.com"
//! linkedin = "https://linkedin.com"
//!
//! [colors.light]
//! background = "#ffffff"
//! surface = "#f9fafb"       # Cards, content blocks
//! text = "#111827"
//! text_muted = "#4b5563"
//! border = "#e5e7eb"
//! accent = "#2563eb"        # Buttons, icons, primary tags
//! accent_text = "#ffffff"   # Text on accent backgrounds
//!
//! [colors.dark]
//! background = "#030712"
//! surface = "#111827"
//! text = "#ffffff"
//! text_muted = "#9ca3af"
//! border = "#1f2937"
//! accent = "#60a5fa"
//! accent_text = "#030712"
//!
//! [processing]
//! max_processes = 4         # Max parallel render workers (omit for auto = CPU cores)
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse; override just the values you want:
//!
//! ```toml
//! [author]
//! name = "Ada Lovelace"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Document metadata and deployment path.
    pub site: SiteMeta,
    /// Hero and footer content.
    pub author: AuthorConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
    /// Parallel rendering settings.
    pub processing: ProcessingConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if !self.site.base_path.starts_with('/') || !self.site.base_path.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_path must start and end with '/'".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }

    /// Absolute link to a site-relative path, honoring `site.base_path`.
    ///
    /// `href("")` is the home page; `href("apps/notes/")` a detail page.
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.site.base_path, path.trim_start_matches('/'))
    }
}

/// Document-level metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteMeta {
    /// Browser title of the home page; detail pages append it as a suffix.
    pub title: String,
    /// `<meta name="description">` of the home page.
    pub description: String,
    /// URL prefix the site is served under, e.g. `"/portfolio/"`.
    pub base_path: String,
    /// `<html lang>` attribute.
    pub lang: String,
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            title: "Portfolio".to_string(),
            description: "Full-stack and mobile developer building production-grade web and iOS/Android apps.".to_string(),
            base_path: "/".to_string(),
            lang: "en".to_string(),
        }
    }
}

/// Who the portfolio belongs to. Contact links are optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthorConfig {
    pub name: String,
    pub headline: String,
    /// Markdown rendered into the hero paragraph.
    pub intro: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Your Name".to_string(),
            headline: "Full-Stack & Mobile App Developer".to_string(),
            intro: "I'm a passionate developer who thrives on building **production-grade systems** \
                    from the ground up. With a strong sense of **ownership** and a problem-solving \
                    mindset, I transform complex challenges into elegant, scalable solutions."
                .to_string(),
            email: Some("hello@example.com".to_string()),
            github: Some("https://github.com".to_string()),
            linkedin: Some("https://linkedin.com".to_string()),
        }
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel page render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Color configuration for light and dark modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Light mode color scheme.
    pub light: ColorScheme,
    /// Dark mode color scheme.
    pub dark: ColorScheme,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            light: ColorScheme::default_light(),
            dark: ColorScheme::default_dark(),
        }
    }
}

/// Individual color scheme (light or dark).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    /// Page background.
    pub background: String,
    /// Raised surfaces: cards, content blocks, feature items.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (subtitles, meta labels, footer).
    pub text_muted: String,
    /// Border color.
    pub border: String,
    /// Buttons, section icons, primary tags.
    pub accent: String,
    /// Text drawn on top of `accent`.
    pub accent_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            surface: "#f9fafb".to_string(),
            text: "#111827".to_string(),
            text_muted: "#4b5563".to_string(),
            border: "#e5e7eb".to_string(),
            accent: "#2563eb".to_string(),
            accent_text: "#ffffff".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#030712".to_string(),
            surface: "#111827".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#9ca3af".to_string(),
            border: "#1f2937".to_string(),
            accent: "#60a5fa".to_string(),
            accent_text: "#030712".to_string(),
        }
    }
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::default_light()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
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

/// Load a `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Simple Folio Configuration
# ==========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at content/config.toml. Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Site metadata
# ---------------------------------------------------------------------------
[site]
# Browser title of the home page. Detail pages use "<project> | <title>".
title = "Portfolio"

# Description meta tag for the home page.
description = "Full-stack and mobile developer building production-grade web and iOS/Android apps."

# URL prefix the site is deployed under. Must start and end with "/".
# Use e.g. "/portfolio/" for a project page on a shared host.
base_path = "/"

# Language of the generated documents.
lang = "en"

# ---------------------------------------------------------------------------
# Author (hero section and footer)
# ---------------------------------------------------------------------------
[author]
name = "Your Name"
headline = "Full-Stack & Mobile App Developer"

# Markdown. Use **bold** to highlight phrases.
intro = "I'm a passionate developer who thrives on building **production-grade systems** from the ground up."

# Contact links shown in the footer. Remove a line to hide that link.
email = "hello@example.com"
github = "https://github.com"
linkedin = "https://linkedin.com"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#ffffff"
surface = "#f9fafb"       # Cards, content blocks
text = "#111827"
text_muted = "#4b5563"    # Subtitles, meta labels, footer
border = "#e5e7eb"
accent = "#2563eb"        # Buttons, icons, primary tags
accent_text = "#ffffff"   # Text on accent backgrounds

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#030712"
surface = "#111827"
text = "#ffffff"
text_muted = "#9ca3af"
border = "#1f2937"
accent = "#60a5fa"
accent_text = "#030712"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel page render workers.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
{light}
}}

@media (prefers-color-scheme: dark) {{
    :root {{
{dark}
    }}
}}"#,
        light = color_variables(&colors.light, "    "),
        dark = color_variables(&colors.dark, "        "),
    )
}

fn color_variables(scheme: &ColorScheme, indent: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-accent-text", &scheme.accent_text),
    ]
    .iter()
    .map(|(name, value)| format!("{indent}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}
