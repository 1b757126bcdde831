//! Optional animation descriptors.
//!
//! The videos tab can show a banner animation and a small animation inside
//! every project card. Both are JSON documents (Lottie exports) that the page
//! embeds verbatim for a client-side player; this crate never interprets them
//! beyond checking they parse.
//!
//! Absence is normal: [`load_animation`] returns `Ok(None)` for a missing file
//! so callers can omit the element without a message. A file that exists but
//! cannot be read or parsed is an `Err`, which the scan stage turns into a
//! warning line instead of failing the build.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimationError {
    #[error("cannot read animation {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("animation {path} is not valid JSON: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A parsed animation descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    /// Path relative to the content root, as configured.
    pub path: String,
    pub data: serde_json::Value,
}

/// The animations a page can use. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animations {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<Animation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Animation>,
}

/// Load the descriptor at `root/rel_path`.
pub fn load_animation(root: &Path, rel_path: &str) -> Result<Option<Animation>, AnimationError> {
    let full = root.join(rel_path);
    let content = match fs::read_to_string(&full) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(AnimationError::Io {
                path: rel_path.to_string(),
                source,
            });
        }
    };
    let data = serde_json::from_str(&content).map_err(|source| AnimationError::Json {
        path: rel_path.to_string(),
        source,
    })?;
    Ok(Some(Animation {
        path: rel_path.to_string(),
        data,
    }))
}
