//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan manifest, copies every
//! asset into the output directory, and writes the rendered pages.
//!
//! ## Generated Pages
//!
//! - **Index page** (`/index.html`): opens on the configured default tab
//! - **Tab pages** (`/videos.html`, `/images.html`, `/certificates.html`):
//!   the same page opened on that tab, for deep links
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! ├── videos.html
//! ├── images.html
//! ├── certificates.html
//! └── assets/
//!     ├── videos/010-face-mask.mp4
//!     ├── images/dashboard.png
//!     └── certificates/cert1.pdf
//! ```
//!
//! ## Asset Copies
//!
//! Every asset is read whole into memory and written back out byte for byte
//! at the same relative path, so links and download buttons in the page
//! resolve next to `index.html` and a download yields the original file.
//! There is no streaming and no size limit. A source file that cannot be
//! read marks only that asset as failed; its card renders as an error
//! block. Failing to write into the output directory aborts the build.
//!
//! ## CSS
//!
//! `static/style.css` is embedded at compile time and prefixed with the
//! color and layout custom properties generated from the config.

use crate::assets::Tab;
use crate::config;
use crate::render::{self, NavState};
use crate::scan::Manifest;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// What the generate stage wrote.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Pages written, relative to the output directory.
    pub pages: Vec<String>,
    pub copied: Vec<CopiedAsset>,
    pub failed: Vec<FailedAsset>,
}

#[derive(Debug)]
pub struct CopiedAsset {
    pub path: String,
    pub bytes: usize,
}

#[derive(Debug)]
pub struct FailedAsset {
    pub path: String,
    pub reason: String,
}

/// Generate the site from a manifest file written by the scan stage.
pub fn generate(
    manifest_path: &Path,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let manifest_content = fs::read_to_string(manifest_path)?;
    let manifest: Manifest = serde_json::from_str(&manifest_content)?;
    generate_site(manifest, source_root, output_dir)
}

/// Generate the site from an in-memory manifest.
pub fn generate_site(
    mut manifest: Manifest,
    source_root: &Path,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    let mut report = GenerateReport::default();

    fs::create_dir_all(output_dir)?;

    for listing in &mut manifest.tabs {
        for asset in &mut listing.assets {
            if let Some(problem) = &asset.problem {
                report.failed.push(FailedAsset {
                    path: asset.path.clone(),
                    reason: problem.clone(),
                });
                continue;
            }
            // Whole file in memory: the copy must be byte-identical
            let bytes = match fs::read(source_root.join(&asset.path)) {
                Ok(bytes) => bytes,
                Err(e) => {
                    let reason = format!("cannot read file: {e}");
                    report.failed.push(FailedAsset {
                        path: asset.path.clone(),
                        reason: reason.clone(),
                    });
                    asset.problem = Some(reason);
                    continue;
                }
            };
            let dest = output_dir.join(&asset.path);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&dest, &bytes)?;
            report.copied.push(CopiedAsset {
                path: asset.path.clone(),
                bytes: bytes.len(),
            });
        }
    }

    let css = site_css(&manifest.config);

    let default_tab = manifest.config.default_tab();
    let pages = std::iter::once(("index.html".to_string(), default_tab))
        .chain(Tab::ALL.map(|tab| (format!("{}.html", tab.slug()), tab)));

    for (file_name, active) in pages {
        let page = render::render_page(&manifest, &css, NavState { active });
        fs::write(output_dir.join(&file_name), page.into_string())?;
        report.pages.push(file_name);
    }

    Ok(report)
}

/// Full stylesheet: generated custom properties, then the static rules.
pub fn site_css(config: &config::SiteConfig) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    )
}

// ============================================================================
// Tests
// ============================================================================
