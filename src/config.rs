//! Site configuration.
//!
//! Every setting has a stock default, so a site needs no configuration file
//! at all. A `config.toml` in the site root overrides individual values:
//!
//! ```toml
//! # Only change the footer and the accent colour
//! [brand]
//! footer = "© 2025 Riverside Youth Club"
//!
//! [colors]
//! accent = "#d97706"
//! ```
//!
//! ## Configuration Options
//!
//! ```toml
//! news_dir = "news"            # Programme folders live here
//! listing_file = "news.html"   # Aggregate listing page, relative to the root
//!
//! [programme]
//! description_file = "description.txt"
//! detail_file = "index.html"
//! placeholder = "No description available."
//!
//! [media]
//! image_extensions = ["jpg", "jpeg", "png", "gif", "webp", "svg"]
//! video_extensions = ["mp4", "webm", "mov", "avi", "mkv"]
//!
//! [brand]
//! name = "YMCA Matara"
//! tagline = "Sri Lanka"
//! logo_text = "YMCA"
//! home_href = "index.html"
//! listing_title = "News & Programmes"
//! listing_subtitle = "Stay updated with our latest activities and completed programmes"
//! listing_meta = "Latest news and programmes from YMCA Matara, Sri Lanka."
//! footer = "© 2024 YMCA Matara, Sri Lanka. Part of the World YMCA Movement."
//!
//! [colors]
//! primary = "#004a99"
//! primary_dark = "#003570"
//! accent = "#cc0000"
//! accent_dark = "#a30000"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::types::MediaKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path};
use thiserror::Error;

/// Name of the optional configuration file in the site root.
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration, passed explicitly to the scanner, renderer and build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding the programme folders, relative to the site root.
    pub news_dir: String,
    /// Listing page path, relative to the site root.
    pub listing_file: String,
    /// Reserved file names and fallback text inside programme folders.
    pub programme: ProgrammeConfig,
    /// Which files count as gallery media.
    pub media: MediaConfig,
    /// Text shown in the page chrome.
    pub brand: BrandConfig,
    /// Brand colours, injected as CSS custom properties.
    pub colors: ColorConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            news_dir: "news".to_string(),
            listing_file: "news.html".to_string(),
            programme: ProgrammeConfig::default(),
            media: MediaConfig::default(),
            brand: BrandConfig::default(),
            colors: ColorConfig::default(),
        }
    }
}

impl SiteConfig {
    /// Validate that paths and reserved names are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, value) in [
            ("news_dir", &self.news_dir),
            ("listing_file", &self.listing_file),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if !is_site_relative(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a path inside the site root, got '{value}'"
                )));
            }
        }
        if self.listing_file.ends_with(['/', '\\']) {
            return Err(ConfigError::Validation(
                "listing_file must name a file".into(),
            ));
        }
        for (key, name) in [
            ("programme.description_file", &self.programme.description_file),
            ("programme.detail_file", &self.programme.detail_file),
        ] {
            if name.is_empty() || name.contains(['/', '\\']) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain file name"
                )));
            }
        }
        if self.programme.description_file.to_lowercase()
            == self.programme.detail_file.to_lowercase()
        {
            return Err(ConfigError::Validation(
                "programme.description_file and programme.detail_file must differ".into(),
            ));
        }
        if self.media.image_extensions.is_empty() && self.media.video_extensions.is_empty() {
            return Err(ConfigError::Validation(
                "media must list at least one image or video extension".into(),
            ));
        }
        if let Some(ext) = self
            .media
            .image_extensions
            .iter()
            .find(|e| self.media.video_extensions.iter().any(|v| same_extension(e, v)))
        {
            return Err(ConfigError::Validation(format!(
                "extension '{ext}' is listed as both image and video"
            )));
        }
        Ok(())
    }

    /// Relative path from a detail page back to the site root, e.g. `../../`.
    pub fn detail_root_prefix(&self) -> String {
        "../".repeat(normal_depth(Path::new(&self.news_dir)) + 1)
    }

    /// Relative path from the listing page back to the site root: empty for
    /// `news.html`, `../` for `pages/news.html`.
    pub fn listing_root_prefix(&self) -> String {
        let depth = Path::new(&self.listing_file)
            .parent()
            .map(normal_depth)
            .unwrap_or(0);
        "../".repeat(depth)
    }
}

/// Count the directory levels a relative path descends.
fn normal_depth(path: &Path) -> usize {
    path.components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count()
}

/// A relative path that stays inside the site root: no root, drive prefix or
/// `..` component.
fn is_site_relative(value: &str) -> bool {
    !value.starts_with(['/', '\\'])
        && Path::new(value)
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

/// Reserved names inside each programme folder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgrammeConfig {
    /// Plain-text description shown on the detail page.
    pub description_file: String,
    /// Generated detail page, written inside the programme folder.
    pub detail_file: String,
    /// Shown when the description file is missing.
    pub placeholder: String,
}

impl Default for ProgrammeConfig {
    fn default() -> Self {
        Self {
            description_file: "description.txt".to_string(),
            detail_file: "index.html".to_string(),
            placeholder: "No description available.".to_string(),
        }
    }
}

impl ProgrammeConfig {
    /// Whether `name` is one of the reserved file names (case-insensitive).
    pub fn is_reserved(&self, name: &str) -> bool {
        name.to_lowercase() == self.description_file.to_lowercase()
            || name.to_lowercase() == self.detail_file.to_lowercase()
    }
}

/// Recognised media extensions, without the leading dot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MediaConfig {
    pub image_extensions: Vec<String>,
    pub video_extensions: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        let owned = |exts: &[&str]| -> Vec<String> {
            exts.iter().map(|e| e.to_string()).collect()
        };
        Self {
            image_extensions: owned(&["jpg", "jpeg", "png", "gif", "webp", "svg"]),
            video_extensions: owned(&["mp4", "webm", "mov", "avi", "mkv"]),
        }
    }
}

impl MediaConfig {
    /// Classify a file name by its extension, ignoring case.
    ///
    /// Returns `None` for names without an extension or with one that is
    /// in neither set.
    pub fn kind_of(&self, file_name: &str) -> Option<MediaKind> {
        let ext = Path::new(file_name).extension()?.to_string_lossy();
        if self.image_extensions.iter().any(|e| same_extension(e, &ext)) {
            Some(MediaKind::Image)
        } else if self.video_extensions.iter().any(|e| same_extension(e, &ext)) {
            Some(MediaKind::Video)
        } else {
            None
        }
    }
}

/// Compare extensions case-insensitively, tolerating a leading dot.
fn same_extension(a: &str, b: &str) -> bool {
    a.trim_start_matches('.')
        .to_lowercase()
        .eq(&b.trim_start_matches('.').to_lowercase())
}

/// Text used in the page chrome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrandConfig {
    /// Site name, shown next to the logo and in page titles.
    pub name: String,
    /// Small line under the site name.
    pub tagline: String,
    /// Short text inside the logo badge.
    pub logo_text: String,
    /// Home page link, relative to the site root.
    pub home_href: String,
    pub listing_title: String,
    pub listing_subtitle: String,
    /// `<meta name="description">` of the listing page.
    pub listing_meta: String,
    pub footer: String,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            name: "YMCA Matara".to_string(),
            tagline: "Sri Lanka".to_string(),
            logo_text: "YMCA".to_string(),
            home_href: "index.html".to_string(),
            listing_title: "News & Programmes".to_string(),
            listing_subtitle: "Stay updated with our latest activities and completed programmes"
                .to_string(),
            listing_meta: "Latest news and programmes from YMCA Matara, Sri Lanka.".to_string(),
            footer: "© 2024 YMCA Matara, Sri Lanka. Part of the World YMCA Movement.".to_string(),
        }
    }
}

/// Brand colours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub primary: String,
    pub primary_dark: String,
    pub accent: String,
    pub accent_dark: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            primary: "#004a99".to_string(),
            primary_dark: "#003570".to_string(),
            accent: "#cc0000".to_string(),
            accent_dark: "#a30000".to_string(),
        }
    }
}

// =============================================================================
// Loading
// =============================================================================

/// Load `config.toml` from the site root.
///
/// Missing file means stock defaults. Present values override defaults key by
/// key; unknown keys and invalid values are errors.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# newsroom configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory holding one folder per programme, relative to the site root.
news_dir = "news"

# Listing page with a card for every programme, relative to the site root.
listing_file = "news.html"

# ---------------------------------------------------------------------------
# Programme folders
# ---------------------------------------------------------------------------
[programme]
# Plain-text description, shown verbatim on the detail page.
description_file = "description.txt"

# Generated detail page, written inside each programme folder.
detail_file = "index.html"

# Shown when a programme has no description file.
placeholder = "No description available."

# ---------------------------------------------------------------------------
# Gallery media (extensions are matched case-insensitively)
# ---------------------------------------------------------------------------
[media]
image_extensions = ["jpg", "jpeg", "png", "gif", "webp", "svg"]
video_extensions = ["mp4", "webm", "mov", "avi", "mkv"]

# ---------------------------------------------------------------------------
# Page chrome
# ---------------------------------------------------------------------------
[brand]
name = "YMCA Matara"
tagline = "Sri Lanka"
logo_text = "YMCA"
home_href = "index.html"
listing_title = "News & Programmes"
listing_subtitle = "Stay updated with our latest activities and completed programmes"
listing_meta = "Latest news and programmes from YMCA Matara, Sri Lanka."
footer = "© 2024 YMCA Matara, Sri Lanka. Part of the World YMCA Movement."

# ---------------------------------------------------------------------------
# Colours
# ---------------------------------------------------------------------------
[colors]
primary = "#004a99"
primary_dark = "#003570"
accent = "#cc0000"
accent_dark = "#a30000"
"##
}

/// Generate CSS custom properties from the colour config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --brand-primary: {primary};
    --brand-primary-dark: {primary_dark};
    --brand-accent: {accent};
    --brand-accent-dark: {accent_dark};
}}"#,
        primary = colors.primary,
        primary_dark = colors.primary_dark,
        accent = colors.accent,
        accent_dark = colors.accent_dark,
    )
}
