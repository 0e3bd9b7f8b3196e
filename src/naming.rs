//! Display titles derived from folder and file names.
//!
//! Programme folders double as their titles: `youth-camp` is shown as
//! "Youth Camp". The same rule labels gallery images, using the file stem:
//!
//! - `youth-camp/` → "Youth Camp"
//! - `beach_clean-up/` → "Beach Clean Up"
//! - `group-photo_2024.jpg` → "Group Photo 2024"

use std::path::Path;

/// Convert a folder name into a display title.
///
/// Every `-` and `_` becomes a single space, then each whitespace-delimited
/// word gets its first character uppercased and the rest lowercased.
/// Runs of whitespace are kept as they are.
pub fn folder_to_title(name: &str) -> String {
    let spaced: String = name
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect();
    title_case(&spaced)
}

/// Accessibility label for a media file: the title of its stem.
///
/// `001-opening_day.JPG` → "001 Opening Day"
pub fn media_label(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    folder_to_title(&stem)
}

fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}
