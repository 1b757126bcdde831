//! Per-asset metadata: sidecar descriptions and image dimensions.
//!
//! ## Descriptions
//!
//! Any asset may carry a description in a sidecar text file with the same
//! stem: `assets/videos/010-face-mask.txt` next to `010-face-mask.mp4`.
//! Plain text, no special format. Files that differ only by extension
//! (`cert.pdf`, `cert.png`) share the stem sidecar; give one of them its own
//! description with a full-name sidecar such as `cert.pdf.txt`. When there is
//! no sidecar, video cards fall back to the placeholder description from
//! `[videos] description`.
//!
//! ```text
//! description: resolve(&[sidecar_text, config_placeholder])
//! ```
//!
//! ## Dimensions
//!
//! Image and certificate-image cards carry `width`/`height` attributes so the
//! browser reserves layout space before the file arrives. Only the image
//! header is decoded; a file the decoder rejects is reported per asset and
//! never aborts the build.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("cannot read image {path}: {source}")]
    Image {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Resolve a metadata field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-empty value, trimmed.
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// Read a sidecar `.txt` file for an asset.
///
/// Given `assets/certificates/cert.pdf`, looks for `cert.pdf.txt` first and
/// then `cert.txt`, returning the first one with content, trimmed. The
/// stem form is shared by every asset with that stem (`cert.pdf` and
/// `cert.png` both read `cert.txt`); the full-name form belongs to one file.
pub fn read_sidecar(asset_path: &Path) -> Option<String> {
    let read = |path: PathBuf| fs::read_to_string(path).ok();

    let by_name = asset_path.file_name().and_then(|name| {
        let mut sidecar = name.to_os_string();
        sidecar.push(".txt");
        read(asset_path.with_file_name(sidecar))
    });
    let by_stem = read(asset_path.with_extension("txt"));

    resolve(&[by_name.as_deref(), by_stem.as_deref()])
}

/// Decode just enough of an image to learn its pixel dimensions.
pub fn read_dimensions(image_path: &Path) -> Result<(u32, u32), MetadataError> {
    image::image_dimensions(image_path).map_err(|source| MetadataError::Image {
        path: image_path.display().to_string(),
        source,
    })
}
