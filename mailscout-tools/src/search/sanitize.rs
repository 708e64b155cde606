//! Text sanitizer: strips boilerplate phrases, URLs, and excess whitespace.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// Boilerplate phrases removed from raw content, case-insensitively. The list
/// can grow without changing the sanitizer contract.
const BOILERPLATE_PATTERNS: &[&str] = &[
    r"\s*Navigation\s*",
    r"Back\s*to\s*top\s*",
    r"Related\s*Articles",
    r"Footer",
];

static BOILERPLATE_RE: Lazy<Regex> = Lazy::new(|| {
    RegexBuilder::new(&BOILERPLATE_PATTERNS.join("|"))
        .case_insensitive(true)
        .build()
        .expect("boilerplate patterns are valid")
});

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

static MULTI_WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s{2,}").expect("whitespace pattern is valid"));

/// Clean a raw content blob: remove URLs and known boilerplate phrases,
/// collapse whitespace runs into single spaces, and trim.
///
/// Pure and idempotent; empty input maps to an empty string.
pub fn sanitize(text: &str) -> String {
    let mut cleaned = text.to_owned();

    // A removal can splice the surrounding text into a fresh match (e.g. a
    // stripped URL leaving "Foo" + "ter" adjacent). Iterate to a fixpoint so
    // a second sanitize pass is a no-op. Every replacement strictly shrinks
    // the string, so this terminates.
    loop {
        let stripped = BOILERPLATE_RE
            .replace_all(&URL_RE.replace_all(&cleaned, ""), "")
            .into_owned();
        if stripped == cleaned {
            break;
        }
        cleaned = stripped;
    }

    MULTI_WHITESPACE_RE
        .replace_all(&cleaned, " ")
        .trim()
        .to_owned()
}
