//! # topic_tools
//!
//! Rust utilities for parsing and printing **delimited dataset topic** logs.
//!
//! ## Highlights
//! - **Topic parser**: load one recorded channel from a delimited file into a [`Topic`].
//! - **Header normalization**: the timestamp column and the header triple
//!   (`header.seq` / `header.stamp` / `header.frame_id`) are recognized and the
//!   field prefix is stripped from display labels.
//! - **Aligned printing**: per-column maximum widths are tracked in the same
//!   pass as parsing, so `Topic::print` renders an aligned table directly.
//! - **Schema injection**: reserved markers and the delimiter live in a
//!   [`TopicSchema`], so alternate dataset layouts reuse the same parser.
//! - **Fault topics**: topics named with the fault prefix are flagged on load.
//!

pub mod topic;
#[doc(hidden)]
pub mod types;

// Top-level re-exports (appear under Crate Items → Structs)
#[doc(inline)]
pub use crate::types::{
    errors::TopicLoadError,
    message::{Message, MessageHeader},
    record_time::RecordTime,
    schema::{ColumnKind, TopicSchema},
    topic::Topic,
    widths::{ColumnWidths, RowWidths},
};
