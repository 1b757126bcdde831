//! CLI output formatting for both pipeline stages.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each tab leads with
//! its label and asset count, each asset with its positional index and
//! title; filesystem paths follow as indented `Source:` context lines. The
//! scan report reads as a content inventory while still letting users trace
//! every card back to a file.
//!
//! # Output Format
//!
//! ## Scan
//!
//! ```text
//! Project Videos (2 files)
//!     001 face mask
//!         Source: assets/videos/010-face-mask.mp4
//!         Description: Realtime face mask detection with a webcam.
//!     002 (020.mp4)
//!         Source: assets/videos/020.mp4
//! Project Images: folder not found (assets/images)
//! Certificates (1 file)
//!     001 cert1
//!         Source: assets/certificates/cert1.pdf
//!
//! Animations
//!     banner: assets/animations/banner.json
//!
//! Config
//!     config.toml
//! ```
//!
//! ## Generate
//!
//! ```text
//! Pages
//!     index.html
//!     videos.html
//! Copied 9 assets (1.2 MB)
//! Failed
//!     assets/images/broken.png: cannot decode image: ...
//! ```
//!
//! # Architecture
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for testability
//! and a `print_*` wrapper that writes to stdout. Format functions are pure
//! apart from checking whether the content root has a `config.toml`.

use crate::assets::Asset;
use crate::generate::GenerateReport;
use crate::scan::{DirStatus, Manifest, TabListing};
use std::path::Path;

// ============================================================================
// Shared display helpers
// ============================================================================

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Asset line: titled assets show the title, untitled show the file name in parens.
///
/// ```text
/// 001 face mask        // titled
/// 002 (020.mp4)        // untitled: the file name is the identity
/// ```
fn asset_line(index: usize, asset: &Asset) -> String {
    match &asset.title {
        Some(t) if !t.is_empty() => format!("{} {}", format_index(index), t),
        _ => format!("{} ({})", format_index(index), asset.name),
    }
}

/// Truncate text to `max` characters, appending `...` if truncated.
fn truncate_desc(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{cut}...")
    }
}

/// Human-readable byte count.
fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} B")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

// ============================================================================
// Stage 1: Scan output
// ============================================================================

fn tab_lines(listing: &TabListing) -> Vec<String> {
    let name = listing.tab.label().split_once(' ').map_or(listing.tab.label(), |(_, n)| n);
    let mut lines = Vec::new();

    match &listing.status {
        DirStatus::Missing => {
            lines.push(format!("{name}: folder not found ({})", listing.dir));
            return lines;
        }
        DirStatus::Unreadable { message } => {
            lines.push(format!("{name}: cannot read {} ({message})", listing.dir));
            return lines;
        }
        DirStatus::Found => {}
    }

    lines.push(format!(
        "{name} ({})",
        plural(listing.assets.len(), "file", "files")
    ));

    for (i, asset) in listing.assets.iter().enumerate() {
        lines.push(format!("{}{}", indent(1), asset_line(i + 1, asset)));
        lines.push(format!("{}Source: {}", indent(2), asset.path));

        if let Some(desc) = &asset.description {
            lines.push(format!("{}Description: {}", indent(2), truncate_desc(desc, 60)));
        }
        if let Some(problem) = &asset.problem {
            lines.push(format!("{}Problem: {}", indent(2), problem));
        }
    }
    lines
}

/// Format scan stage output showing the discovered portfolio content.
pub fn format_scan_output(manifest: &Manifest, source_root: &Path) -> Vec<String> {
    let mut lines = Vec::new();

    for listing in &manifest.tabs {
        lines.extend(tab_lines(listing));
    }

    let animations = [
        ("banner", manifest.animations.banner.as_ref()),
        ("card", manifest.animations.card.as_ref()),
    ];
    if animations.iter().any(|(_, a)| a.is_some()) {
        lines.push(String::new());
        lines.push("Animations".to_string());
        for (role, anim) in animations {
            if let Some(anim) = anim {
                lines.push(format!("{}{}: {}", indent(1), role, anim.path));
            }
        }
    }

    if !manifest.warnings.is_empty() {
        lines.push(String::new());
        lines.push("Warnings".to_string());
        for warning in &manifest.warnings {
            lines.push(format!("{}{}", indent(1), warning));
        }
    }

    lines.push(String::new());
    lines.push("Config".to_string());
    if source_root.join("config.toml").exists() {
        lines.push(format!("{}config.toml", indent(1)));
    } else {
        lines.push(format!("{}(defaults)", indent(1)));
    }

    lines
}

/// Print scan output to stdout.
pub fn print_scan_output(manifest: &Manifest, source_root: &Path) {
    for line in format_scan_output(manifest, source_root) {
        println!("{}", line);
    }
}

// ============================================================================
// Stage 2: Generate output
// ============================================================================

/// Format generate stage output: pages written, bytes copied, failures.
pub fn format_generate_output(report: &GenerateReport) -> Vec<String> {
    let mut lines = vec!["Pages".to_string()];
    for page in &report.pages {
        lines.push(format!("{}{}", indent(1), page));
    }

    let total: usize = report.copied.iter().map(|c| c.bytes).sum();
    lines.push(format!(
        "Copied {} ({})",
        plural(report.copied.len(), "asset", "assets"),
        format_bytes(total)
    ));

    if !report.failed.is_empty() {
        lines.push("Failed".to_string());
        for failed in &report.failed {
            lines.push(format!("{}{}: {}", indent(1), failed.path, failed.reason));
        }
    }
    lines
}

/// Print generate output to stdout.
pub fn print_generate_output(report: &GenerateReport) {
    for line in format_generate_output(report) {
        println!("{}", line);
    }
}
