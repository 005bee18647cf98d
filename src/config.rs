//! Gallery configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults are
//! serialized to a TOML table, the user's `config.toml` (if any) is merged on
//! top, and the result is deserialized and validated.
//!
//! ## Config File Location
//!
//! Place `config.toml` in the project root, next to `captions.txt`:
//!
//! ```text
//! project/
//! ├── config.toml
//! ├── captions.txt
//! ├── dist/                    # Lightbox distribution
//! └── input/
//!     ├── intro.md
//!     └── images/
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "Art Gallery"     # <title> of the generated page
//! lang = "en"               # <html lang="...">
//!
//! [paths]                   # Relative to the project root
//! images = "input/images"
//! intro = "input/intro.md"
//! captions = "captions.txt"
//! lightbox = "dist"
//! assets = "assets"
//!
//! [images]
//! extensions = ["jpg", "jpeg", "png", "gif"]
//!
//! [theme]
//! column_min_width = "200px"
//! gap = "10px"
//! thumbnail_max_height = "200px"
//! intro_font = "sans-serif"
//! caption_font = "Arial, sans-serif"
//! ```
//!
//! Config files are sparse: override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
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

/// Gallery configuration loaded from `config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, also used in the `<title>` element.
    pub title: String,
    /// Value of the `lang` attribute on `<html>`.
    pub lang: String,
    /// Input locations, relative to the project root.
    pub paths: PathsConfig,
    /// Which files in the images folder belong to the gallery.
    pub images: ImagesConfig,
    /// Layout and typography of the generated page.
    pub theme: ThemeConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Art Gallery".to_string(),
            lang: "en".to_string(),
            paths: PathsConfig::default(),
            images: ImagesConfig::default(),
            theme: ThemeConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Validation("title must not be empty".into()));
        }
        let paths = [
            ("paths.images", &self.paths.images),
            ("paths.intro", &self.paths.intro),
            ("paths.captions", &self.paths.captions),
            ("paths.lightbox", &self.paths.lightbox),
            ("paths.assets", &self.paths.assets),
        ];
        for (key, value) in paths {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        if self.images.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "images.extensions must not be empty".into(),
            ));
        }
        for ext in &self.images.extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ConfigError::Validation(format!(
                    "images.extensions entry {ext:?} must be a bare extension like \"jpg\""
                )));
            }
        }
        Ok(())
    }
}

/// Input locations. Relative values are resolved against the project root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Folder holding the gallery images (required to exist at build time).
    pub images: String,
    /// Markdown introduction shown above the gallery.
    pub intro: String,
    /// Tab-separated caption file.
    pub captions: String,
    /// Lightbox2 distribution folder (`css/` and `js/` inside).
    pub lightbox: String,
    /// Extra static files copied verbatim to the output root.
    pub assets: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            images: "input/images".to_string(),
            intro: "input/intro.md".to_string(),
            captions: "captions.txt".to_string(),
            lightbox: "dist".to_string(),
            assets: "assets".to_string(),
        }
    }
}

impl PathsConfig {
    pub fn images_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.images)
    }

    pub fn intro_file(&self, root: &Path) -> PathBuf {
        root.join(&self.intro)
    }

    pub fn captions_file(&self, root: &Path) -> PathBuf {
        root.join(&self.captions)
    }

    pub fn lightbox_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.lightbox)
    }

    pub fn assets_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.assets)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    /// File extensions (without dot) treated as gallery images. Matched
    /// case-insensitively.
    pub extensions: Vec<String>,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            extensions: ["jpg", "jpeg", "png", "gif"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ImagesConfig {
    /// Whether `path` has one of the configured extensions.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| e.to_string_lossy())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(&ext))
            })
    }
}

/// Layout and typography settings, emitted as CSS custom properties.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Minimum grid column width; columns fill the row with `auto-fill`.
    pub column_min_width: String,
    /// Gap between grid cells.
    pub gap: String,
    /// Maximum thumbnail height inside a grid cell.
    pub thumbnail_max_height: String,
    /// Font stack for the intro text.
    pub intro_font: String,
    /// Font stack for Lightbox captions.
    pub caption_font: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            column_min_width: "200px".to_string(),
            gap: "10px".to_string(),
            thumbnail_max_height: "200px".to_string(),
            intro_font: "sans-serif".to_string(),
            caption_font: "Arial, sans-serif".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(SiteConfig::default())
        .map_err(|e| ConfigError::Validation(format!("stock defaults do not serialize: {e}")))
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

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
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

/// Load config from `config.toml` in the project root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    if overlay.is_some() {
        log::debug!("Loaded {}", root.join("config.toml").display());
    }
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Art Gallery Configuration
# =========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
# Unknown keys will cause an error.

# Title of the generated page.
title = "Art Gallery"

# Language declared on the <html> element.
lang = "en"

# ---------------------------------------------------------------------------
# Input paths (relative to the project root, or absolute)
# ---------------------------------------------------------------------------
[paths]
# Folder with the gallery images. Required.
images = "input/images"

# Markdown shown above the gallery. Skipped when missing.
intro = "input/intro.md"

# Tab-separated "filename<TAB>caption" lines. Order of lines is the order
# of the gallery; images without a caption follow, sorted by name.
captions = "captions.txt"

# Lightbox2 distribution: css/lightbox.min.css and
# js/lightbox-plus-jquery.min.js are copied to the output root.
lightbox = "dist"

# Extra static files (favicon, fonts) copied to the output root.
assets = "assets"

# ---------------------------------------------------------------------------
# Image selection
# ---------------------------------------------------------------------------
[images]
# Extensions (without the dot) picked up from the images folder.
extensions = ["jpg", "jpeg", "png", "gif"]

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
# Grid columns are at least this wide and share the remaining space.
column_min_width = "200px"

# Gap between grid cells (CSS value).
gap = "10px"

# Thumbnails are scaled down to at most this height.
thumbnail_max_height = "200px"

# Font stacks for the intro and for Lightbox captions.
intro_font = "sans-serif"
caption_font = "Arial, sans-serif"
"##
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --column-min-width: {column_min_width};
    --gallery-gap: {gap};
    --thumbnail-max-height: {thumbnail_max_height};
    --intro-font: {intro_font};
    --caption-font: {caption_font};
}}"#,
        column_min_width = theme.column_min_width,
        gap = theme.gap,
        thumbnail_max_height = theme.thumbnail_max_height,
        intro_font = theme.intro_font,
        caption_font = theme.caption_font,
    )
}
