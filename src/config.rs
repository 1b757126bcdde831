//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. Stock defaults
//! are overridden by an optional `config.toml` in the content root. The
//! config is loaded once per build, carried inside the scan manifest, and
//! read by the renderer; nothing else holds global state.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [site]
//! title = "My AI/ML Portfolio"           # <title> of the page
//! heading = "🚀 My AI/ML Project Portfolio"
//! tagline = "Welcome! Explore my best **project demos**, ..."  # markdown
//! author = "Your Name"                   # footer credit
//! lang = "en"
//! default_tab = "videos"                 # videos | images | certificates
//!
//! [videos]
//! heading = "🚀 AI/ML Project Showcase"
//! intro = "Beautifully presented demos of my top projects ..."
//! title_prefix = "Project"               # "Project 1", "Project 2", ...
//! description = "This is a short description of the project. ..."
//! tech_stack = ["Python", "Streamlit", ...]
//! github_url = "https://github.com/your_project"
//! demo_url = "https://yourliveproject.com"
//!
//! [images]
//! heading = "🧠 AI/ML Project Snapshots"
//! caption_prefix = "Project Image"
//! row_width = 2                          # cards per row, at least 1
//! closing_note = "These visuals highlight key moments of my AI/ML work."
//!
//! [certificates]
//! heading = "📜 Certifications"
//!
//! [animations]
//! banner = "assets/animations/banner.json"
//! card = "assets/animations/animation.json"
//!
//! [theme]
//! max_width = "72rem"
//! grid_gap = "1.5rem"
//! card_radius = "15px"
//!
//! [colors.light]
//! background = "#e0eafc"
//! ...
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse: override just the values you want:
//!
//! ```toml
//! [site]
//! author = "Ada Lovelace"
//! ```
//!
//! Unknown keys are rejected to catch typos early. Theme and color values
//! go straight into the page's `<style>` block, so they may not contain
//! `<`, `>`, braces or semicolons.

use crate::assets::Tab;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
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
/// All fields have defaults matching a ready-to-publish placeholder
/// portfolio. User config files need only specify what they change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Page title, header, footer, and default tab.
    pub site: SiteSection,
    /// Videos tab text and per-card placeholders.
    pub videos: VideosConfig,
    /// Images tab text and grid width.
    pub images: ImagesConfig,
    /// Certificates tab text.
    pub certificates: CertificatesConfig,
    /// Optional animation descriptor locations.
    pub animations: AnimationsConfig,
    /// Layout sizes.
    pub theme: ThemeConfig,
    /// Color schemes for light and dark modes.
    pub colors: ColorConfig,
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images.row_width == 0 {
            return Err(ConfigError::Validation(
                "images.row_width must be at least 1".into(),
            ));
        }
        if self.site.title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site.title must not be empty".into(),
            ));
        }
        if Tab::from_slug(&self.site.default_tab).is_none() {
            return Err(ConfigError::Validation(format!(
                "site.default_tab must be one of videos, images, certificates (got {:?})",
                self.site.default_tab
            )));
        }
        for (key, value) in self.css_values() {
            if value.contains(['<', '>', '{', '}', ';']) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a plain CSS value (got {value:?})"
                )));
            }
        }
        Ok(())
    }

    /// Config values written verbatim into the page stylesheet, keyed by
    /// their TOML path.
    fn css_values(&self) -> Vec<(String, &str)> {
        let mut values = vec![
            ("theme.max_width".to_string(), self.theme.max_width.as_str()),
            ("theme.grid_gap".to_string(), self.theme.grid_gap.as_str()),
            ("theme.card_radius".to_string(), self.theme.card_radius.as_str()),
        ];
        for (mode, scheme) in [("light", &self.colors.light), ("dark", &self.colors.dark)] {
            for (field, value) in scheme.fields() {
                values.push((format!("colors.{mode}.{field}"), value));
            }
        }
        values
    }

    /// The tab shown when the page opens. Falls back to videos for a
    /// config that skipped validation.
    pub fn default_tab(&self) -> Tab {
        Tab::from_slug(&self.site.default_tab).unwrap_or(Tab::Videos)
    }

    /// Images per grid row.
    pub fn row_width(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.images.row_width).unwrap_or(NonZeroUsize::MIN)
    }

    /// Heading shown at the top of a tab.
    pub fn tab_heading(&self, tab: Tab) -> &str {
        match tab {
            Tab::Videos => &self.videos.heading,
            Tab::Images => &self.images.heading,
            Tab::Certificates => &self.certificates.heading,
        }
    }
}

/// Page-level settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteSection {
    /// Document `<title>`.
    pub title: String,
    /// Large heading in the page header.
    pub heading: String,
    /// Line under the heading. Inline markdown.
    pub tagline: String,
    /// Name in the footer credit.
    pub author: String,
    /// `lang` attribute of the document.
    pub lang: String,
    /// Slug of the tab selected on `index.html`.
    pub default_tab: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "My AI/ML Portfolio".to_string(),
            heading: "🚀 My AI/ML Project Portfolio".to_string(),
            tagline: "Welcome! Explore my best **project demos**, **certificates**, and **visual highlights**.".to_string(),
            author: "Your Name".to_string(),
            lang: "en".to_string(),
            default_tab: "videos".to_string(),
        }
    }
}

/// Videos tab settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VideosConfig {
    pub heading: String,
    /// Muted line under the heading.
    pub intro: String,
    /// Card titles read `"{title_prefix} {n}"`.
    pub title_prefix: String,
    /// Placeholder used when a video has no sidecar description.
    pub description: String,
    /// Badges shown on every video card.
    pub tech_stack: Vec<String>,
    pub github_url: String,
    pub demo_url: String,
}

impl Default for VideosConfig {
    fn default() -> Self {
        Self {
            heading: "🚀 AI/ML Project Showcase".to_string(),
            intro: "Beautifully presented demos of my top projects in AI, Data Science & Automation.".to_string(),
            title_prefix: "Project".to_string(),
            description: "This is a short description of the project. It tackles a real-world problem using automation by Gen AI.".to_string(),
            tech_stack: ["Python", "Streamlit", "TensorFlow", "Pandas", "N8N", "Api", "openAi"]
                .into_iter()
                .map(String::from)
                .collect(),
            github_url: "https://github.com/your_project".to_string(),
            demo_url: "https://yourliveproject.com".to_string(),
        }
    }
}

/// Images tab settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ImagesConfig {
    pub heading: String,
    /// Captions read `"{caption_prefix} {n}"`.
    pub caption_prefix: String,
    /// Cards per grid row. Must be at least 1.
    pub row_width: usize,
    /// Note shown under the grid when it has at least one image.
    pub closing_note: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            heading: "🧠 AI/ML Project Snapshots".to_string(),
            caption_prefix: "Project Image".to_string(),
            row_width: 2,
            closing_note: "These visuals highlight key moments of my AI/ML work.".to_string(),
        }
    }
}

/// Certificates tab settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CertificatesConfig {
    pub heading: String,
}

impl Default for CertificatesConfig {
    fn default() -> Self {
        Self {
            heading: "📜 Certifications".to_string(),
        }
    }
}

/// Locations of optional animation descriptors, relative to the content root.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationsConfig {
    /// Shown once at the top of the videos tab.
    pub banner: String,
    /// Shown inside every video card.
    pub card: String,
}

impl Default for AnimationsConfig {
    fn default() -> Self {
        Self {
            banner: "assets/animations/banner.json".to_string(),
            card: "assets/animations/animation.json".to_string(),
        }
    }
}

/// Layout settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Maximum width of the page content (CSS value).
    pub max_width: String,
    /// Gap between cards in a row and between rows (CSS value).
    pub grid_gap: String,
    /// Corner radius of cards and media (CSS value).
    pub card_radius: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            max_width: "72rem".to_string(),
            grid_gap: "1.5rem".to_string(),
            card_radius: "15px".to_string(),
        }
    }
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
    /// Card background.
    pub surface: String,
    /// Primary text color.
    pub text: String,
    /// Secondary text (intro lines, captions, footer).
    pub text_muted: String,
    /// Card and rule borders.
    pub border: String,
    /// Project titles, highlighted tagline words, active tab.
    pub accent: String,
    /// Tech badge background.
    pub badge_bg: String,
    /// Tech badge text.
    pub badge_text: String,
}

impl ColorScheme {
    pub fn default_light() -> Self {
        Self {
            background: "#e0eafc".to_string(),
            surface: "#f9f9f9".to_string(),
            text: "#1a1a1a".to_string(),
            text_muted: "#666666".to_string(),
            border: "#d5dbe5".to_string(),
            accent: "#1f77b4".to_string(),
            badge_bg: "#e0f7fa".to_string(),
            badge_text: "#00796b".to_string(),
        }
    }

    pub fn default_dark() -> Self {
        Self {
            background: "#10141c".to_string(),
            surface: "#1b2130".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#9aa3b2".to_string(),
            border: "#2c3445".to_string(),
            accent: "#6c9fff".to_string(),
            badge_bg: "#123a3f".to_string(),
            badge_text: "#7fe0d4".to_string(),
        }
    }
}

impl ColorScheme {
    fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("background", self.background.as_str()),
            ("surface", self.surface.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("border", self.border.as_str()),
            ("accent", self.accent.as_str()),
            ("badge_bg", self.badge_bg.as_str()),
            ("badge_text", self.badge_text.as_str()),
        ]
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
/// This is the base layer user overrides are merged onto.
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

/// Load config from `config.toml` in the content root.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Showcase Configuration
# ======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Place this file at the root of the content directory, next to assets/.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Page
# ---------------------------------------------------------------------------
[site]
# Document <title>.
title = "My AI/ML Portfolio"

# Large heading at the top of the page.
heading = "🚀 My AI/ML Project Portfolio"

# Line under the heading. Inline markdown: **bold** words are highlighted.
tagline = "Welcome! Explore my best **project demos**, **certificates**, and **visual highlights**."

# Footer credit: "Made with ❤️ by <author>".
author = "Your Name"

# Document language.
lang = "en"

# Tab selected when index.html opens: videos, images, or certificates.
default_tab = "videos"

# ---------------------------------------------------------------------------
# Videos tab (assets/videos/*.mp4)
# ---------------------------------------------------------------------------
[videos]
heading = "🚀 AI/ML Project Showcase"
intro = "Beautifully presented demos of my top projects in AI, Data Science & Automation."

# Card titles read "<title_prefix> 1", "<title_prefix> 2", ...
title_prefix = "Project"

# Used for every video without a sidecar <name>.txt description.
description = "This is a short description of the project. It tackles a real-world problem using automation by Gen AI."

# Badges shown on every video card.
tech_stack = ["Python", "Streamlit", "TensorFlow", "Pandas", "N8N", "Api", "openAi"]

# Link buttons on every video card.
github_url = "https://github.com/your_project"
demo_url = "https://yourliveproject.com"

# ---------------------------------------------------------------------------
# Images tab (assets/images/*.png|jpg|jpeg)
# ---------------------------------------------------------------------------
[images]
heading = "🧠 AI/ML Project Snapshots"

# Captions read "<caption_prefix> 1", "<caption_prefix> 2", ...
caption_prefix = "Project Image"

# Images per row. Must be at least 1.
row_width = 2

# Shown under the grid when there is at least one image.
closing_note = "These visuals highlight key moments of my AI/ML work."

# ---------------------------------------------------------------------------
# Certificates tab (assets/certificates/*.png|jpg|jpeg|pdf)
# ---------------------------------------------------------------------------
[certificates]
heading = "📜 Certifications"

# ---------------------------------------------------------------------------
# Animations (optional JSON descriptors; missing files are ignored)
# ---------------------------------------------------------------------------
[animations]
banner = "assets/animations/banner.json"
card = "assets/animations/animation.json"

# ---------------------------------------------------------------------------
# Theme / layout
# ---------------------------------------------------------------------------
[theme]
max_width = "72rem"
grid_gap = "1.5rem"
card_radius = "15px"

# ---------------------------------------------------------------------------
# Colors - Light mode (prefers-color-scheme: light)
# ---------------------------------------------------------------------------
[colors.light]
background = "#e0eafc"
surface = "#f9f9f9"
text = "#1a1a1a"
text_muted = "#666666"
border = "#d5dbe5"
accent = "#1f77b4"
badge_bg = "#e0f7fa"
badge_text = "#00796b"

# ---------------------------------------------------------------------------
# Colors - Dark mode (prefers-color-scheme: dark)
# ---------------------------------------------------------------------------
[colors.dark]
background = "#10141c"
surface = "#1b2130"
text = "#eeeeee"
text_muted = "#9aa3b2"
border = "#2c3445"
accent = "#6c9fff"
badge_bg = "#123a3f"
badge_text = "#7fe0d4"
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
        light = color_vars(&colors.light, "    "),
        dark = color_vars(&colors.dark, "        "),
    )
}

fn color_vars(scheme: &ColorScheme, pad: &str) -> String {
    [
        ("--color-bg", &scheme.background),
        ("--color-surface", &scheme.surface),
        ("--color-text", &scheme.text),
        ("--color-text-muted", &scheme.text_muted),
        ("--color-border", &scheme.border),
        ("--color-accent", &scheme.accent),
        ("--color-badge-bg", &scheme.badge_bg),
        ("--color-badge-text", &scheme.badge_text),
    ]
    .iter()
    .map(|(name, value)| format!("{pad}{name}: {value};"))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Generate CSS custom properties from theme config.
pub fn generate_theme_css(theme: &ThemeConfig) -> String {
    format!(
        r#":root {{
    --max-width: {max_width};
    --grid-gap: {grid_gap};
    --card-radius: {card_radius};
}}"#,
        max_width = theme.max_width,
        grid_gap = theme.grid_gap,
        card_radius = theme.card_radius,
    )
}
