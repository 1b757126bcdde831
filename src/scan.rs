//! Filesystem scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Lists the three asset directories, reads
//! per-asset metadata, loads optional animations and the site config, and
//! produces a [`Manifest`] the generate stage consumes.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root (--source)
//! ├── config.toml                  # Site configuration (optional)
//! └── assets/
//!     ├── videos/
//!     │   ├── 010-face-mask.mp4    # Video card ("Project 1", subtitle "face mask")
//!     │   └── 010-face-mask.txt    # Sidecar description (optional)
//!     ├── images/
//!     │   ├── dashboard.png        # Image card ("Project Image 1")
//!     │   └── pipeline.jpg
//!     ├── certificates/
//!     │   ├── cert1.pdf            # Link + download
//!     │   └── ml-course.png        # Preview + download
//!     └── animations/
//!         ├── banner.json          # Optional
//!         └── animation.json       # Optional
//! ```
//!
//! ## Failure Policy
//!
//! Each tab is scanned independently and never fails the scan:
//!
//! - directory absent → [`DirStatus::Missing`], zero assets
//! - directory unreadable → [`DirStatus::Unreadable`] with the I/O message
//! - image that does not decode → asset kept, [`Asset::problem`] set
//! - animation missing → omitted silently
//! - animation malformed → omitted, a line added to [`Manifest::warnings`]
//!
//! Only a bad `config.toml` or a missing content root abort the scan.

use crate::animation::{self, Animations};
use crate::assets::{self, Asset, AssetKind, Tab};
use crate::config::{self, SiteConfig};
use crate::metadata::{self, MetadataError};
use crate::naming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Content directory not found: {0}")]
    MissingRoot(PathBuf),
}

/// Manifest output from the scan stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub tabs: Vec<TabListing>,
    #[serde(default)]
    pub animations: Animations,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    pub config: SiteConfig,
}

impl Manifest {
    pub fn tab(&self, tab: Tab) -> Option<&TabListing> {
        self.tabs.iter().find(|t| t.tab == tab)
    }
}

/// Whether a tab's directory could be listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DirStatus {
    Found,
    Missing,
    Unreadable { message: String },
}

/// Everything discovered for one tab.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabListing {
    pub tab: Tab,
    /// Directory relative to the content root, e.g. `assets/images`.
    pub dir: String,
    pub status: DirStatus,
    pub assets: Vec<Asset>,
}

pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    // Load site config (uses defaults if config.toml doesn't exist)
    let config = config::load_config(root)?;

    let tabs = Tab::ALL.iter().map(|&tab| scan_tab(root, tab)).collect();

    let mut warnings = Vec::new();
    let mut load = |rel: &str| match animation::load_animation(root, rel) {
        Ok(found) => found,
        Err(e) => {
            warnings.push(e.to_string());
            None
        }
    };
    let animations = Animations {
        banner: load(&config.animations.banner),
        card: load(&config.animations.card),
    };

    Ok(Manifest {
        tabs,
        animations,
        warnings,
        config,
    })
}

/// List one tab's directory and build its assets.
pub fn scan_tab(root: &Path, tab: Tab) -> TabListing {
    let dir = tab.dir();
    let (status, names) = match assets::list_assets(&root.join(&dir), &tab.extensions()) {
        Ok(listing) if listing.found => (DirStatus::Found, listing.names),
        Ok(_) => (DirStatus::Missing, Vec::new()),
        Err(e) => (
            DirStatus::Unreadable {
                message: e.to_string(),
            },
            Vec::new(),
        ),
    };

    let assets = names
        .iter()
        .map(|name| build_asset(root, tab, &dir, name))
        .collect();

    TabListing {
        tab,
        dir,
        status,
        assets,
    }
}

fn build_asset(root: &Path, tab: Tab, dir: &str, name: &str) -> Asset {
    let kind = AssetKind::classify(tab, name);
    let path = format!("{dir}/{name}");
    let full = root.join(&path);

    let (dimensions, problem) = if kind.is_image() {
        match metadata::read_dimensions(&full) {
            Ok(dims) => (Some(dims), None),
            Err(MetadataError::Image { source, .. }) => {
                (None, Some(format!("cannot decode image: {source}")))
            }
        }
    } else {
        (None, None)
    };

    Asset {
        name: name.to_string(),
        kind,
        title: naming::display_title(name),
        description: metadata::read_sidecar(&full),
        dimensions,
        problem,
        path,
    }
}
