//! # topic
//!
//! Parsing utilities for delimited dataset **topic** files.
//! Use `topic::parse::from_file(...)` to create a `Topic`.
//! Helper routines are in `topic::support` (header normalization, line tokenizing).

pub mod parse;
pub(crate) mod support;
