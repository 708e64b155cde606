//! Content extractor: keeps the likely-relevant lines of a cleaned blob and
//! bounds their volume.

/// Lines shorter than this many characters are treated as UI chrome rather
/// than content and dropped.
pub const MIN_CONTENT_LINE_CHARS: usize = 50;

/// At most this many surviving lines are kept, in original order.
pub const MAX_CONTENT_LINES: usize = 45;

/// Leading words that mark a line as navigation or menu boilerplate.
const NAV_LINE_MARKERS: &[&str] = &["home", "menu", "navigation", "contact", "privacy", "cookies"];

/// Reduce a cleaned text blob to its main content.
///
/// Splits on newlines, trims each line, drops empties, drops lines that start
/// with a navigation marker or fall under the minimum length, keeps the first
/// [`MAX_CONTENT_LINES`] survivors, and joins them with single spaces.
///
/// Returns an empty string when nothing survives; that is not an error.
pub fn extract_main_content(raw: &str) -> String {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_nav_line(line))
        .filter(|line| line.chars().count() >= MIN_CONTENT_LINE_CHARS)
        .take(MAX_CONTENT_LINES)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a trimmed line begins with one of the navigation markers,
/// case-insensitively.
fn is_nav_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    NAV_LINE_MARKERS
        .iter()
        .any(|marker| lowered.starts_with(marker))
}
