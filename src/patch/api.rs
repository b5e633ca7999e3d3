//! Public API for patch recognition.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::recognizer::Scanner;

/// Position of the recognizer within the patch grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseState {
    /// Nothing recognized yet; waiting for a `diff --git` line.
    Start,
    /// Just consumed a `diff --git a/<path> b/<path>` line.
    FileHeader,
    /// Just consumed `@@ ... @@`, `GIT binary patch`, or a `delta`/`literal` line.
    HunkHeader,
    /// Inside the body of a hunk.
    Hunk,
    /// A hunk has just been completed.
    HunkEnd,
    /// The `-- ` signature delimiter was seen after a complete hunk.
    End,
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ParseState::Start => "start",
            ParseState::FileHeader => "file header",
            ParseState::HunkHeader => "hunk header",
            ParseState::Hunk => "hunk",
            ParseState::HunkEnd => "hunk end",
            ParseState::End => "end",
        };
        f.write_str(name)
    }
}

/// Flavor of the hunk currently being read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HunkKind {
    /// Unified diff text hunk (`@@ -X,Y +A,B @@`).
    #[default]
    Ascii,
    /// `GIT binary patch` hunk with `literal`/`delta` sections.
    Binary,
}

/// Terminator appended to an emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Crlf,
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// A reason the reconstructed patch cannot be trusted.
///
/// Line numbers are 1-based positions in the mail body.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// The `a/` and `b/` halves of a diff header name different files.
    #[error("line {line}: diff header paths differ ('{old}' vs '{new}')")]
    PathMismatch {
        line: usize,
        old: String,
        new: String,
    },

    /// A `delta`/`literal` section appeared in a hunk that is not binary.
    #[error("line {line}: binary section inside an ascii hunk")]
    HunkModeConflict { line: usize },

    /// A hunk carried more lines than its header announced.
    #[error(
        "line {line}: hunk line count exceeded (remaining added {remaining_added}, remaining deleted {remaining_deleted})"
    )]
    CounterUnderflow {
        line: usize,
        remaining_added: i64,
        remaining_deleted: i64,
    },

    /// Input ended before the signature delimiter closed the patch.
    #[error("input ended in state '{state}' before the signature delimiter")]
    Incomplete { state: ParseState },
}

/// Outcome of running the recognizer over a mail body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recognition {
    /// True only when the body ended in [`ParseState::End`] with no violations.
    pub success: bool,
    /// Best-effort patch text, with mixed line endings.
    pub patch: String,
    /// Every violation recorded during the scan, in input order.
    pub violations: Vec<Violation>,
}

/// Recognize a patch in a mail body and report every violation found.
///
/// Never fails: a malformed or truncated body still yields a reconstructed
/// patch, with `success` set to false.
pub fn recognize(body: &str) -> Recognition {
    let body = body.replace('\u{a0}', " ");

    let mut scanner = Scanner::new();
    for (idx, line) in body.lines().enumerate() {
        scanner.feed(idx + 1, line);
    }
    scanner.finish()
}

/// Recognize a patch in a mail body.
///
/// Returns `(success, patch_text)`. The text is returned even when `success`
/// is false; callers are expected to flag it rather than discard it.
///
/// # Example
///
/// ```
/// let body = "diff --git a/README b/README\n\
///             --- a/README\n\
///             +++ b/README\n\
///             @@ -1 +1 @@\n\
///             -old\n\
///             +new\n\
///             -- \n\
///             2.43.0\n";
/// let (success, patch) = mailpatch::patch::convert_to_patch(body);
/// assert!(success);
/// assert!(patch.starts_with("diff --git a/README b/README\r\n"));
/// ```
pub fn convert_to_patch(body: &str) -> (bool, String) {
    let recognition = recognize(body);
    (recognition.success, recognition.patch)
}
