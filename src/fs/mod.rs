//! Filesystem utilities for mailpatch.
//!
//! Patch files are written atomically so an interrupted run never leaves a
//! half-written patch behind under its final name.

pub mod atomic;

pub use atomic::atomic_write;
