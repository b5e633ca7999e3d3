//! The line-driven state machine behind [`recognize`](super::recognize).
//!
//! Each input line is first classified into the single [`Rule`] that fires
//! for it given the current state, then applied. Classification is a pure
//! function of `(state, hunk kind, line)`, so every row of the transition
//! table can be checked in isolation.

use super::api::{HunkKind, LineEnding, ParseState, Recognition, Violation};
use super::helpers::{
    is_binary_payload, is_binary_section, parse_diff_header, parse_hunk_header, wants_lf,
    BINARY_PATCH_HEADER, NO_NEWLINE_MARKER, SIGNATURE_DELIMITER,
};

/// The transition that fires for one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Rule<'a> {
    /// Blank line injected by the mail client inside an ascii hunk.
    Artifact,
    /// `diff --git a<old> b<new>`.
    FileHeader { old: &'a str, new: &'a str },
    /// `@@ -X,Y +A,B @@` with its (deleted, added) counts.
    AsciiHunkHeader { deleted: i64, added: i64 },
    /// `GIT binary patch`.
    BinaryHunkHeader,
    /// `literal <n>` or `delta <n>`.
    BinarySection,
    /// Any line inside a hunk.
    HunkLine,
    /// `-- ` after a complete hunk.
    Signature,
    /// No rule applies; the line is copied through.
    Passthrough,
}

/// What to do with the line after a rule has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Emission {
    Drop,
    Append(LineEnding),
}

/// Pick the rule for `line`. Rules are tried in priority order and only the
/// first one eligible in `state` fires.
pub(super) fn classify<'a>(state: ParseState, hunk: HunkKind, line: &'a str) -> Rule<'a> {
    use ParseState::*;

    if line.is_empty() && hunk == HunkKind::Ascii && matches!(state, Hunk | HunkEnd) {
        return Rule::Artifact;
    }

    if matches!(state, Start | HunkEnd)
        && let Some((old, new)) = parse_diff_header(line)
    {
        return Rule::FileHeader { old, new };
    }

    if matches!(state, FileHeader | HunkEnd) {
        if let Some((deleted, added)) = parse_hunk_header(line) {
            return Rule::AsciiHunkHeader { deleted, added };
        }
        if line == BINARY_PATCH_HEADER {
            return Rule::BinaryHunkHeader;
        }
    }

    if matches!(state, HunkHeader | HunkEnd) && is_binary_section(line) {
        return Rule::BinarySection;
    }

    if matches!(state, HunkHeader | Hunk) {
        return Rule::HunkLine;
    }

    if state == HunkEnd && line == SIGNATURE_DELIMITER {
        return Rule::Signature;
    }

    Rule::Passthrough
}

/// Mutable scan state for one recognizer run.
pub(super) struct Scanner {
    state: ParseState,
    hunk: HunkKind,
    remaining_added: i64,
    remaining_deleted: i64,
    current_path: String,
    violations: Vec<Violation>,
    patch: String,
}

impl Scanner {
    pub(super) fn new() -> Self {
        Self {
            state: ParseState::Start,
            hunk: HunkKind::Ascii,
            remaining_added: 0,
            remaining_deleted: 0,
            current_path: String::new(),
            violations: Vec::new(),
            patch: String::new(),
        }
    }

    /// Process one input line (without its terminator).
    pub(super) fn feed(&mut self, line_number: usize, line: &str) {
        let rule = classify(self.state, self.hunk, line);
        if let Emission::Append(ending) = self.apply(line_number, rule, line) {
            self.patch.push_str(&line.replace('\u{a0}', " "));
            self.patch.push_str(ending.as_str());
        }
    }

    pub(super) fn finish(mut self) -> Recognition {
        if self.state != ParseState::End {
            self.record(Violation::Incomplete { state: self.state });
        }

        Recognition {
            success: self.violations.is_empty(),
            patch: self.patch,
            violations: self.violations,
        }
    }

    #[cfg(test)]
    pub(super) fn state(&self) -> ParseState {
        self.state
    }

    #[cfg(test)]
    pub(super) fn remaining(&self) -> (i64, i64) {
        (self.remaining_added, self.remaining_deleted)
    }

    fn apply(&mut self, line_number: usize, rule: Rule<'_>, line: &str) -> Emission {
        match rule {
            Rule::Artifact => Emission::Drop,
            Rule::FileHeader { old, new } => {
                self.state = ParseState::FileHeader;
                if old != new {
                    self.record(Violation::PathMismatch {
                        line: line_number,
                        old: old.to_string(),
                        new: new.to_string(),
                    });
                }
                self.current_path = old.to_string();
                Emission::Append(LineEnding::Crlf)
            }
            Rule::AsciiHunkHeader { deleted, added } => {
                self.state = ParseState::HunkHeader;
                self.hunk = HunkKind::Ascii;
                self.remaining_deleted = deleted;
                self.remaining_added = added;
                Emission::Append(LineEnding::Crlf)
            }
            Rule::BinaryHunkHeader => {
                self.state = ParseState::HunkHeader;
                self.hunk = HunkKind::Binary;
                Emission::Append(LineEnding::Lf)
            }
            Rule::BinarySection => {
                self.state = ParseState::HunkHeader;
                if self.hunk != HunkKind::Binary {
                    self.record(Violation::HunkModeConflict { line: line_number });
                }
                Emission::Append(LineEnding::Lf)
            }
            Rule::HunkLine => {
                self.state = ParseState::Hunk;
                match self.hunk {
                    HunkKind::Ascii => self.ascii_line(line_number, line),
                    HunkKind::Binary => self.binary_line(line),
                }
            }
            Rule::Signature => {
                self.state = ParseState::End;
                Emission::Append(LineEnding::Crlf)
            }
            Rule::Passthrough => Emission::Append(LineEnding::Crlf),
        }
    }

    fn ascii_line(&mut self, line_number: usize, line: &str) -> Emission {
        let ending = if wants_lf(&self.current_path) {
            LineEnding::Lf
        } else {
            LineEnding::Crlf
        };

        if line.is_empty() || line == NO_NEWLINE_MARKER {
            return Emission::Append(ending);
        }

        if line.starts_with(' ') || line.starts_with('+') {
            self.remaining_added -= 1;
        }
        if line.starts_with(' ') || line.starts_with('-') {
            self.remaining_deleted -= 1;
        }

        if self.remaining_added == 0 && self.remaining_deleted == 0 {
            self.state = ParseState::HunkEnd;
        } else if self.remaining_added < 0 || self.remaining_deleted < 0 {
            self.record(Violation::CounterUnderflow {
                line: line_number,
                remaining_added: self.remaining_added,
                remaining_deleted: self.remaining_deleted,
            });
        }

        Emission::Append(ending)
    }

    /// The first line that is not payload closes the hunk but is still
    /// emitted here; it is not re-examined as a header or signature.
    fn binary_line(&mut self, line: &str) -> Emission {
        if !is_binary_payload(line) {
            self.state = ParseState::HunkEnd;
        }
        Emission::Append(LineEnding::Lf)
    }

    fn record(&mut self, violation: Violation) {
        log::debug!("patch recognizer: {}", violation);
        self.violations.push(violation);
    }
}
