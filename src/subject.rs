//! Patch file naming from mailing-list subjects.
//!
//! Subjects such as `[edk2-devel] [PATCH v2 3/7] Fix the thing.` become
//! `0003-Fix-the-thing.patch`, the same shape `git format-patch` produces.

use regex::Regex;
use std::sync::LazyLock;

/// Optional `[list]` tag, a `[... PATCH ...]` tag, then the title with
/// trailing periods and whitespace stripped.
static SUBJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:\[(?P<list>[^\]]*)\]\s*)?\[(?P<tag>[^\]]*\bPATCH\b[^\]]*)\]\s*(?P<title>.*?)[\s.]*$",
    )
    .expect("valid patch subject regex")
});

static VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[vV]\d+$").expect("valid version regex"));

static SERIES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,9})/(\d{1,9})$").expect("valid series regex"));

/// Characters that are not allowed in the derived file name.
const RESERVED: &[char] = &['\\', '/', '*', '|', '"', '<', '>', ':', '#', '?'];

/// The parts of a `[PATCH ...]` subject.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchSubject {
    /// Mailing list tag, e.g. `edk2-devel`.
    pub list: Option<String>,
    /// Version token as written, e.g. `v2`.
    pub version: Option<String>,
    /// Position in the series (`3` in `3/7`).
    pub index: Option<u32>,
    /// Series length (`7` in `3/7`).
    pub total: Option<u32>,
    pub title: String,
}

/// Parse a mailing-list patch subject.
///
/// Returns None when the subject carries no `[PATCH ...]` tag.
pub fn parse_patch_subject(subject: &str) -> Option<PatchSubject> {
    let caps = SUBJECT.captures(subject)?;

    let mut version = None;
    let mut series = None;
    for token in caps["tag"].split_whitespace() {
        if VERSION.is_match(token) {
            version = Some(token.to_string());
        } else if let Some(m) = SERIES.captures(token) {
            let index: u32 = m[1].parse().ok()?;
            let total: u32 = m[2].parse().ok()?;
            series = Some((index, total));
        }
    }

    Some(PatchSubject {
        list: caps.name("list").map(|m| m.as_str().to_string()),
        version,
        index: series.map(|(index, _)| index),
        total: series.map(|(_, total)| total),
        title: caps["title"].to_string(),
    })
}

/// Derive a file name for the patch carried by a mail with `subject`.
///
/// Failed recognitions get a `.warning` marker before the extension so they
/// stand out for manual review.
///
/// # Example
///
/// ```
/// use mailpatch::subject::derive_name;
///
/// let subject = "[edk2-devel] [PATCH V2 2/5] Add FooLib support.";
/// assert_eq!(derive_name(subject, true), "0002-Add-FooLib-support.patch");
/// assert_eq!(derive_name(subject, false), "0002-Add-FooLib-support.warning.patch");
/// ```
pub fn derive_name(subject: &str, success: bool) -> String {
    let stem = match parse_patch_subject(subject) {
        Some(parsed) => format!("{:04}-{}", parsed.index.unwrap_or(1), parsed.title),
        None => subject.to_string(),
    };

    let mut name = sanitize_stem(&stem);
    if !success {
        name.push_str(".warning");
    }
    name.push_str(".patch");
    name
}

/// Replace non-ASCII and reserved characters with spaces, then turn every
/// run of spaces into a single hyphen.
pub(crate) fn sanitize_stem(stem: &str) -> String {
    let mut result = String::with_capacity(stem.len());
    let mut in_space_run = false;

    for c in stem.chars() {
        let c = if !c.is_ascii() || RESERVED.contains(&c) {
            ' '
        } else {
            c
        };

        if c == ' ' {
            if !in_space_run {
                result.push('-');
                in_space_run = true;
            }
        } else {
            result.push(c);
            in_space_run = false;
        }
    }

    result
}
