use serde_derive::{Deserialize, Serialize};

use crate::types::record_time::RecordTime;
use crate::types::schema::ColumnKind;
use crate::types::widths::{ColumnWidths, RowWidths};

/// The per-row metadata triple some topics carry: sequence id, stamp and
/// frame id.
///
/// Cells are kept as they appeared in the file for rendering; the sequence id
/// is additionally parsed (`seq`, 0 when the cell is empty or malformed).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageHeader {
    /// Parsed sequence id; 0 when the cell did not parse.
    pub seq: u64,

    /// Sequence-id cell as read from the file.
    pub seq_text: String,

    /// Stamp cell, nanoseconds since the Unix epoch.
    pub stamp: RecordTime,

    /// Frame-id cell, a free-form coordinate-frame name.
    pub frame_id: String,
}

impl MessageHeader {
    /// Resets all fields to their default values.
    pub fn clear(&mut self) {
        self.seq = 0;
        self.seq_text.clear();
        self.stamp.clear();
        self.frame_id.clear();
    }
}

/// One parsed row of a topic file.
///
/// A `Message` holds the recording timestamp, the header triple (left at
/// defaults when the topic has none) and the generic field cells in column
/// order. Rendering is width-parameterized so a whole topic prints as an
/// aligned table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// The `%time` recording timestamp of this row.
    pub time: RecordTime,

    /// The header triple, when the topic carries one.
    pub header: MessageHeader,

    /// Generic field cells, same order as the topic's field labels.
    pub fields: Vec<String>,
}

impl Message {
    /// Converts one row's tokens into a message, using the per-column
    /// classification derived from the header row.
    ///
    /// Also reports the minimum display widths this row requires, which the
    /// loader folds into the topic-wide [`ColumnWidths`]. `tokens` and
    /// `kinds` are expected to have equal length; extra entries on either
    /// side are ignored.
    pub fn from_tokens(tokens: &[String], kinds: &[ColumnKind]) -> (Self, RowWidths) {
        let mut msg = Message::default();
        let mut widths = RowWidths::default();

        for (token, kind) in tokens.iter().zip(kinds.iter()) {
            match kind {
                ColumnKind::Timestamp => {
                    msg.time = RecordTime::from_token(token);
                }
                ColumnKind::HeaderSeq => {
                    msg.header.seq = token.trim().parse().unwrap_or(0);
                    msg.header.seq_text = token.clone();
                    widths.seq = token.chars().count();
                }
                ColumnKind::HeaderStamp => {
                    msg.header.stamp = RecordTime::from_token(token);
                    widths.stamp = token.chars().count();
                }
                ColumnKind::HeaderFrameId => {
                    msg.header.frame_id = token.clone();
                    widths.frame_id = token.chars().count();
                }
                ColumnKind::Field => {
                    widths.fields.push(token.chars().count());
                    msg.fields.push(token.clone());
                }
            }
        }

        (msg, widths)
    }

    /// Renders this message as one table line: the formatted timestamp,
    /// then (when `has_header` is set) the triple cells, then the generic
    /// fields, each right-aligned to its tracked width and separated by
    /// `separator`. No leading or trailing separator is emitted; the caller
    /// wraps the line.
    pub fn to_table_row(&self, widths: &ColumnWidths, has_header: bool, separator: &str) -> String {
        let mut line = self.time.to_display_string();

        if has_header {
            line.push_str(separator);
            line.push_str(&format!("{:>1$}", self.header.seq_text, widths.seq));
            line.push_str(separator);
            line.push_str(&format!("{:>1$}", self.header.stamp.text, widths.stamp));
            line.push_str(separator);
            line.push_str(&format!("{:>1$}", self.header.frame_id, widths.frame_id));
        }

        for (i, field) in self.fields.iter().enumerate() {
            let width = widths.fields.get(i).copied().unwrap_or(0);
            line.push_str(separator);
            line.push_str(&format!("{field:>width$}"));
        }

        line
    }

    /// Resets all fields to their default values.
    pub fn clear(&mut self) {
        self.time.clear();
        self.header.clear();
        self.fields.clear();
    }
}
