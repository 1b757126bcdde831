//! Shared test utilities for the showcase test suite.
//!
//! Provides a content-tree builder and manifest lookups that panic with a
//! clear message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_content();
//! let manifest = scan(tmp.path()).unwrap();
//!
//! let cert = find_asset(&manifest, Tab::Certificates, "cert1.pdf");
//! assert_eq!(cert.path, "assets/certificates/cert1.pdf");
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::assets::{Asset, Tab};
use crate::scan::Manifest;

/// Bytes of the sample PDF certificate written by [`setup_content`].
pub const CERT_PDF_BYTES: &[u8] = b"%PDF-1.4\n% sample certificate\n%%EOF\n";

// =========================================================================
// Content setup
// =========================================================================

/// Build a small but complete content tree in a temp directory.
///
/// ```text
/// assets/videos/010-face-mask.mp4 (+ .txt sidecar), 020-chatbot.mp4
/// assets/images/a.png .. e.png     (five 8x6 PNGs)
/// assets/certificates/cert1.pdf, ml-course.png
/// assets/animations/banner.json
/// ```
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    write_asset(root, "assets/videos/010-face-mask.mp4", b"\x00\x00\x00\x18ftypmp42");
    write_asset(
        root,
        "assets/videos/010-face-mask.txt",
        b"Realtime face mask detection with a webcam.",
    );
    write_asset(root, "assets/videos/020-chatbot.mp4", b"\x00\x00\x00\x18ftypmp42");

    for name in ["a", "b", "c", "d", "e"] {
        write_png(root, &format!("assets/images/{name}.png"), 8, 6);
    }

    write_asset(root, "assets/certificates/cert1.pdf", CERT_PDF_BYTES);
    write_png(root, "assets/certificates/ml-course.png", 10, 7);

    write_asset(
        root,
        "assets/animations/banner.json",
        br#"{"v":"5.7.4","fr":30,"w":200,"h":200,"layers":[]}"#,
    );

    tmp
}

/// Write `bytes` to `root/rel`, creating parent directories.
pub fn write_asset(root: &Path, rel: &str, bytes: &[u8]) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}

/// Write a blank PNG of the given size to `root/rel`.
pub fn write_png(root: &Path, rel: &str, width: u32, height: u32) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    image::RgbImage::new(width, height).save(path).unwrap();
}

// =========================================================================
// Manifest lookups, panicking with a clear message on miss
// =========================================================================

/// Find an asset by file name within a tab. Panics if not found.
pub fn find_asset<'a>(manifest: &'a Manifest, tab: Tab, name: &str) -> &'a Asset {
    let listing = manifest
        .tab(tab)
        .unwrap_or_else(|| panic!("tab '{}' missing from manifest", tab.slug()));
    listing
        .assets
        .iter()
        .find(|a| a.name == name)
        .unwrap_or_else(|| {
            let names: Vec<&str> = listing.assets.iter().map(|a| a.name.as_str()).collect();
            panic!(
                "asset '{name}' not found in tab '{}'. Available: {names:?}",
                tab.slug()
            )
        })
}

/// All asset names of a tab, in listing order.
pub fn asset_names(manifest: &Manifest, tab: Tab) -> Vec<&str> {
    manifest
        .tab(tab)
        .map(|t| t.assets.iter().map(|a| a.name.as_str()).collect())
        .unwrap_or_default()
}
