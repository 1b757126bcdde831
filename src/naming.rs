//! Display titles from asset file names.
//!
//! Asset files are named however the author exported them: `010-face-mask.mp4`,
//! `chatbot_demo.mp4`, `Certificate of Completion.pdf`. Cards still lead with
//! their ordinal ("Project 3"), but the file name carries a human title that
//! the renderer shows as a subtitle and uses for `alt` text.
//!
//! ## Rules
//!
//! - An optional numeric prefix followed by `-` or `_` is an ordering hint
//!   and is stripped: `010-face-mask` → "face mask".
//! - Dashes and underscores become spaces, runs collapse to one space.
//! - A stem that is only a number has no title.

/// Title words of a file stem, with any `NNN-` ordering prefix removed.
///
/// - `"010-face-mask"` → `"face mask"`
/// - `"chatbot_demo"` → `"chatbot demo"`
/// - `"001"` → `""`
/// - `"3d-render"` → `"3d render"` (no separator after the digits)
fn title_from_stem(stem: &str) -> String {
    let digits = stem.chars().take_while(|c| c.is_ascii_digit()).count();
    let rest = &stem[digits..];

    let title_part = if digits == 0 {
        stem
    } else if rest.is_empty() {
        ""
    } else if let Some(after) = rest.strip_prefix(['-', '_']) {
        after
    } else {
        // "3d-render": digits are part of the name
        stem
    };

    humanize(title_part)
}

/// Display title for a file name, extension dropped. `None` when the stem
/// carries no words.
pub fn display_title(file_name: &str) -> Option<String> {
    let stem = std::path::Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let title = title_from_stem(&stem);
    (!title.is_empty()).then_some(title)
}

fn humanize(raw: &str) -> String {
    raw.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
