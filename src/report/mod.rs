//! Reporting: formatted per-bucket terminal output.

pub mod format;

pub use format::*;
