use serde_derive::{Deserialize, Serialize};

/// Reserved strings and the delimiter that describe how a topic file is laid out.
///
/// A `TopicSchema` is injected into the loader instead of living as free
/// constants, so the same parsing code can be pointed at datasets with a
/// different field prefix or timestamp marker. The [`Default`] value carries
/// the layout used by the recorded flight datasets:
///
/// - delimiter `,`
/// - timestamp column `%time`
/// - field prefix `field.` (stripped from display labels)
/// - header-triple columns `field.header.seq`, `field.header.stamp`,
///   `field.header.frame_id`
/// - fault topics named with the `failure_status` prefix
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSchema {
    /// Single character separating the fields of a line. No quoting/escaping.
    pub delimiter: char,

    /// Raw label of the column holding the recording timestamp.
    pub timestamp_marker: String,

    /// Prefix stripped from raw column labels to obtain display labels.
    pub field_prefix: String,

    /// Suffix (after `field_prefix`) of the sequence-id header column.
    pub header_seq_suffix: String,

    /// Suffix (after `field_prefix`) of the stamp header column.
    pub header_stamp_suffix: String,

    /// Suffix (after `field_prefix`) of the frame-id header column.
    pub header_frame_id_suffix: String,

    /// Topics whose logical name starts with this are fault topics.
    pub fault_topic_prefix: String,
}

impl Default for TopicSchema {
    fn default() -> Self {
        Self {
            delimiter: ',',
            timestamp_marker: "%time".to_string(),
            field_prefix: "field.".to_string(),
            header_seq_suffix: "header.seq".to_string(),
            header_stamp_suffix: "header.stamp".to_string(),
            header_frame_id_suffix: "header.frame_id".to_string(),
            fault_topic_prefix: "failure_status".to_string(),
        }
    }
}

impl TopicSchema {
    /// Full raw label of the sequence-id header column (prefix + suffix).
    pub fn header_seq_marker(&self) -> String {
        format!("{}{}", self.field_prefix, self.header_seq_suffix)
    }

    /// Full raw label of the stamp header column (prefix + suffix).
    pub fn header_stamp_marker(&self) -> String {
        format!("{}{}", self.field_prefix, self.header_stamp_suffix)
    }

    /// Full raw label of the frame-id header column (prefix + suffix).
    pub fn header_frame_id_marker(&self) -> String {
        format!("{}{}", self.field_prefix, self.header_frame_id_suffix)
    }
}

/// Classification of one raw header column, produced once per load by the
/// header normalizer and consumed when converting row tokens to a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    /// The `%time` recording-timestamp column. Not a display field.
    Timestamp,
    /// The `header.seq` column of the header triple.
    HeaderSeq,
    /// The `header.stamp` column of the header triple.
    HeaderStamp,
    /// The `header.frame_id` column of the header triple.
    HeaderFrameId,
    /// Any other column; rendered as a generic field.
    Field,
}
