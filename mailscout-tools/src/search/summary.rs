//! Summary builder: joins normalized snippets into a single capped string.

use super::types::SearchRecord;

/// Summary returned when a search produced no usable content. Also the exact
/// summary of an empty result set.
pub const NO_RESULTS_SUMMARY: &str = "No relevant results found.";

/// Marker appended when the joined snippets were cut at the cap.
const TRUNCATION_MARKER: &str = "...";

/// Join the snippets of `records` in order, separated by single spaces, and
/// truncate the result to `cap` bytes (respecting character boundaries).
///
/// The truncation marker is appended only when truncation actually occurred.
/// An empty concatenation yields [`NO_RESULTS_SUMMARY`], never a bare marker.
pub fn build_summary(records: &[SearchRecord], cap: usize) -> String {
    let joined = records
        .iter()
        .map(|record| record.snippet.trim())
        .filter(|snippet| !snippet.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if joined.is_empty() {
        return NO_RESULTS_SUMMARY.to_owned();
    }

    truncate_to_cap(&joined, cap)
}

/// Truncate to `cap` bytes at a character boundary, marking the cut.
fn truncate_to_cap(text: &str, cap: usize) -> String {
    if text.len() <= cap {
        return text.to_owned();
    }

    let mut end = cap;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }

    let mut truncated = text[..end].to_owned();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(snippet: &str) -> SearchRecord {
        SearchRecord {
            title: "t".into(),
            url: "https://example.com".into(),
            snippet: snippet.into(),
        }
    }

    #[test]
    fn empty_records_yield_placeholder() {
        assert_eq!(build_summary(&[], 3500), NO_RESULTS_SUMMARY);
    }

    #[test]
    fn all_empty_snippets_yield_placeholder() {
        let records = vec![record(""), record("   ")];
        assert_eq!(build_summary(&records, 3500), NO_RESULTS_SUMMARY);
    }

    #[test]
    fn joins_snippets_in_order_with_single_spaces() {
        let records = vec![record("alpha"), record("beta"), record("gamma")];
        assert_eq!(build_summary(&records, 3500), "alpha beta gamma");
    }

    #[test]
    fn empty_snippets_do_not_leave_double_spaces() {
        let records = vec![record("alpha"), record(""), record("gamma")];
        assert_eq!(build_summary(&records, 3500), "alpha gamma");
    }

    #[test]
    fn no_marker_when_under_the_cap() {
        let records = vec![record("short summary")];
        let summary = build_summary(&records, 3500);
        assert_eq!(summary, "short summary");
        assert!(!summary.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncates_at_the_cap_and_appends_marker() {
        let records = vec![record(&"x".repeat(100))];
        let summary = build_summary(&records, 40);
        assert_eq!(summary.len(), 40 + TRUNCATION_MARKER.len());
        assert!(summary.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // Cap falls inside a multibyte character; the cut moves back to the
        // previous boundary instead of panicking.
        let records = vec![record(&"é".repeat(50))];
        let summary = build_summary(&records, 33);
        assert!(summary.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn placeholder_is_never_truncated_to_a_bare_marker() {
        // Even an absurdly small cap does not mangle the empty-result path.
        assert_eq!(build_summary(&[], 1), NO_RESULTS_SUMMARY);
    }
}
