//! Recovery of git patches from mail bodies.
//!
//! Mail clients mangle inline patches in a handful of predictable ways:
//! - ordinary spaces replaced by non-breaking spaces
//! - blank lines injected between the lines of a hunk
//! - line endings normalized to whatever the client prefers
//!
//! The recognizer walks the body line by line through a small state machine
//! (file header, hunk header, hunk body, hunk end, signature) and rebuilds the
//! patch text, keeping the hunk line counts honest so that a damaged or
//! truncated patch is reported rather than silently written out.
//!
//! Both ascii (unified diff) hunks and `GIT binary patch` hunks are supported.

mod api;
mod helpers;
mod recognizer;


// Re-export public API
pub use api::{convert_to_patch, recognize, HunkKind, LineEnding, ParseState, Recognition, Violation};
