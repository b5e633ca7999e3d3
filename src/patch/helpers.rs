//! Line matchers for the patch grammar.

use regex::Regex;
use std::sync::LazyLock;

/// `diff --git a<path> b<path>`; each capture keeps its leading `/`.
static DIFF_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^diff --git a(.*) b(.*)$").expect("valid diff header regex"));

/// `@@ -X[,Y] +A[,B] @@`, capturing the two optional counts.
static HUNK_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@@ -\d+(?:,(\d+))? \+\d+(?:,(\d+))? @@").expect("valid hunk header regex")
});

static BINARY_SECTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:delta|literal) \d+").expect("valid binary section regex"));

/// One line of base85 payload: a length character followed by data.
static BINARY_PAYLOAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]\S+").expect("valid binary payload regex"));

pub(super) const BINARY_PATCH_HEADER: &str = "GIT binary patch";
pub(super) const NO_NEWLINE_MARKER: &str = "\\ No newline at end of file";
pub(super) const SIGNATURE_DELIMITER: &str = "-- ";

/// Parse a `diff --git` line.
///
/// Returns the two paths with the `a`/`b` prefix character removed, or None
/// if the line is not a diff header.
pub(super) fn parse_diff_header(line: &str) -> Option<(&str, &str)> {
    let caps = DIFF_HEADER.captures(line)?;
    let old = caps.get(1)?.as_str();
    let new = caps.get(2)?.as_str();
    Some((old, new))
}

/// Parse an ascii hunk header.
///
/// Returns `(deleted, added)`: the old and new line counts, each defaulting
/// to 1 when the header omits it.
pub(super) fn parse_hunk_header(line: &str) -> Option<(i64, i64)> {
    let caps = HUNK_HEADER.captures(line)?;
    let deleted = parse_count(caps.get(1).map(|m| m.as_str()))?;
    let added = parse_count(caps.get(2).map(|m| m.as_str()))?;
    Some((deleted, added))
}

fn parse_count(count: Option<&str>) -> Option<i64> {
    match count {
        Some(digits) => digits.parse().ok(),
        None => Some(1),
    }
}

pub(super) fn is_binary_section(line: &str) -> bool {
    BINARY_SECTION.is_match(line)
}

pub(super) fn is_binary_payload(line: &str) -> bool {
    BINARY_PAYLOAD.is_match(line)
}

/// Shell scripts keep LF endings inside their hunks.
pub(super) fn wants_lf(path: &str) -> bool {
    path.ends_with(".sh")
}
