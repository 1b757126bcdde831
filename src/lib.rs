//! # Showcase
//!
//! A static site generator for a personal project portfolio. Drop project
//! videos, screenshots and certificates into three folders and get one page
//! with a tab per folder.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  manifest.json    (filesystem → structured data)
//! 2. Generate  manifest  →  dist/            (HTML page + copied assets)
//! ```
//!
//! The manifest is human-readable JSON, so a scan can be inspected before
//! anything is written to the output directory. Each tab goes through the
//! same three steps, independently of the others:
//!
//! ```text
//! list files (assets)  →  group into rows (grid)  →  one card per file (render)
//! ```
//!
//! A missing or unreadable folder only affects its own tab.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1: lists each tab's folder, reads metadata, loads animations |
//! | [`generate`] | Stage 2: copies assets byte for byte and writes the pages |
//! | [`render`] | Maud components: page chrome, CSS-only tabs, cards |
//! | [`assets`] | Tabs, asset kinds, and the extension-filtered directory lister |
//! | [`grid`] | Splits an ordered list into fixed-width rows |
//! | [`config`] | `config.toml` loading, validation, and CSS generation |
//! | [`animation`] | Optional JSON animation descriptors |
//! | [`naming`] | `NNN-name` file name convention parser |
//! | [`metadata`] | Sidecar descriptions and image dimensions |
//! | [`output`] | CLI output formatting for both stages |
//!
//! # No JavaScript
//!
//! Tabs are radio inputs styled with `:checked` selectors. Every tab also gets
//! its own page (`images.html`, ...) opened on that tab, so tabs can be linked
//! directly. Animation descriptors are embedded as inert JSON for a player to
//! pick up; nothing in the generated site executes them.

pub mod animation;
pub mod assets;
pub mod config;
pub mod generate;
pub mod grid;
pub mod metadata;
pub mod naming;
pub mod output;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
