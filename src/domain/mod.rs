//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the fixed rating-bucket table and classifier
//! - the problem record as received from the problemset API

pub mod types;

pub use types::*;
