//! # types
//!
//! `types` is the module containing all the useful public structs of the crate

pub mod errors;
pub mod message;
pub mod record_time;
pub mod schema;
pub mod topic;
pub mod widths;
