//! Asset discovery: tabs, asset kinds, and the directory lister.
//!
//! Every tab of the portfolio is backed by one flat directory under the
//! content root:
//!
//! ```text
//! assets/
//! ├── videos/          # *.mp4                     → Videos tab
//! ├── images/          # *.png, *.jpg, *.jpeg      → Images tab
//! └── certificates/    # *.png, *.jpg, *.jpeg, *.pdf → Certificates tab
//! ```
//!
//! [`list_assets`] is the only place that touches these directories during
//! discovery. It never recurses, matches extensions case-insensitively, and
//! sorts by file name. A directory that does not exist is a normal outcome
//! (`found == false`), not an error.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::Path;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4"];
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];
pub const CERTIFICATE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "pdf"];

/// One of the three independent sections of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    Videos,
    Images,
    Certificates,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 3] = [Tab::Videos, Tab::Images, Tab::Certificates];

    /// URL-safe name, also the deep-link page name (`images.html`).
    pub fn slug(self) -> &'static str {
        match self {
            Tab::Videos => "videos",
            Tab::Images => "images",
            Tab::Certificates => "certificates",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Directory relative to the content root, `/`-separated.
    pub fn dir(self) -> String {
        format!("assets/{}", self.slug())
    }

    pub fn extensions(self) -> ExtensionSet {
        match self {
            Tab::Videos => ExtensionSet::new(VIDEO_EXTENSIONS),
            Tab::Images => ExtensionSet::new(IMAGE_EXTENSIONS),
            Tab::Certificates => ExtensionSet::new(CERTIFICATE_EXTENSIONS),
        }
    }

    /// Label shown on the tab bar.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Videos => "🎥 Project Videos",
            Tab::Images => "📸 Project Images",
            Tab::Certificates => "📜 Certificates",
        }
    }

    /// Human name of the folder, used in "folder not found" banners.
    pub fn folder_noun(self) -> &'static str {
        match self {
            Tab::Videos => "Video",
            Tab::Images => "Image",
            Tab::Certificates => "Certificate",
        }
    }
}

/// What a file is, which decides how its card renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    Video,
    Image,
    CertificateImage,
    CertificatePdf,
}

impl AssetKind {
    /// Classify a listed file name within a tab.
    pub fn classify(tab: Tab, name: &str) -> AssetKind {
        match tab {
            Tab::Videos => AssetKind::Video,
            Tab::Images => AssetKind::Image,
            Tab::Certificates if extension_of(name).as_deref() == Some("pdf") => {
                AssetKind::CertificatePdf
            }
            Tab::Certificates => AssetKind::CertificateImage,
        }
    }

    /// The card embeds the asset itself (player or picture).
    pub fn has_preview_media(self) -> bool {
        !matches!(self, AssetKind::CertificatePdf)
    }

    /// The card offers the raw file for download under its own name.
    pub fn has_download_action(self) -> bool {
        matches!(self, AssetKind::CertificateImage | AssetKind::CertificatePdf)
    }

    /// The card links out to project pages.
    pub fn has_external_links(self) -> bool {
        matches!(self, AssetKind::Video)
    }

    /// Whether the file is a raster image the decoder should inspect.
    pub fn is_image(self) -> bool {
        matches!(self, AssetKind::Image | AssetKind::CertificateImage)
    }
}

/// A discovered file. Identity is `path`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// File name, e.g. `cert1.pdf`.
    pub name: String,
    pub kind: AssetKind,
    /// Path relative to the content root, `/`-separated: `assets/certificates/cert1.pdf`.
    pub path: String,
    /// Display title from the file stem.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Sidecar description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Pixel size for image kinds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<(u32, u32)>,
    /// Why this asset cannot be shown, if it cannot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
}

/// Case-folded set of accepted extensions (no leading dot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    exts: BTreeSet<String>,
}

impl ExtensionSet {
    pub fn new(exts: &[&str]) -> Self {
        Self {
            exts: exts
                .iter()
                .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Whether `file_name` ends in one of the accepted extensions.
    pub fn matches(&self, file_name: &str) -> bool {
        extension_of(file_name).is_some_and(|ext| self.exts.contains(&ext))
    }
}

fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
}

/// Result of listing one asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AssetListing {
    /// Matching file names, ascending.
    pub names: Vec<String>,
    /// Whether the directory existed.
    pub found: bool,
}

impl AssetListing {
    pub fn missing() -> Self {
        Self::default()
    }
}

/// List the files in `dir` whose extension is in `accepted`, sorted by name.
///
/// A missing directory yields an empty listing with `found == false`.
/// Any other failure to open the directory is returned to the caller.
/// Entries that vanish mid-listing or have non-UTF-8 names are skipped.
pub fn list_assets(dir: &Path, accepted: &ExtensionSet) -> io::Result<AssetListing> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(AssetListing::missing()),
        Err(e) => return Err(e),
    };

    let mut names: Vec<String> = entries
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter_map(|e| e.file_name().into_string().ok())
        .filter(|name| accepted.matches(name))
        .collect();

    names.sort();
    Ok(AssetListing { names, found: true })
}
