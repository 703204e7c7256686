use crate::types::schema::{ColumnKind, TopicSchema};

/// The interpretation of a topic file's header row.
///
/// `kinds` has one entry per raw column; `field_labels` lists only the
/// generic-field columns, prefix-stripped, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct HeaderLayout {
    pub kinds: Vec<ColumnKind>,
    pub field_labels: Vec<String>,
    pub has_header: bool,
}

/// Partitions the raw header labels into the timestamp column, the header
/// triple and the generic fields.
///
/// - A label equal to the timestamp marker is classified [`ColumnKind::Timestamp`]
///   and gets no display label.
/// - A label equal to one of the three prefixed triple markers is classified
///   accordingly and sets `has_header`; a single triple column is enough
///   (the topic is then rendered with all three triple columns, missing ones
///   at their defaults).
/// - Anything else is a generic field; the field prefix is stripped when
///   present, otherwise the raw label is used unchanged.
///
/// Duplicate labels are kept positionally; nothing is merged.
pub(crate) fn normalize(raw_labels: &[String], schema: &TopicSchema) -> HeaderLayout {
    let seq_marker = schema.header_seq_marker();
    let stamp_marker = schema.header_stamp_marker();
    let frame_id_marker = schema.header_frame_id_marker();

    let mut layout = HeaderLayout::default();
    for label in raw_labels {
        if *label == schema.timestamp_marker {
            layout.kinds.push(ColumnKind::Timestamp);
        } else if *label == seq_marker {
            layout.kinds.push(ColumnKind::HeaderSeq);
            layout.has_header = true;
        } else if *label == stamp_marker {
            layout.kinds.push(ColumnKind::HeaderStamp);
            layout.has_header = true;
        } else if *label == frame_id_marker {
            layout.kinds.push(ColumnKind::HeaderFrameId);
            layout.has_header = true;
        } else {
            layout.kinds.push(ColumnKind::Field);
            match label.strip_prefix(&schema.field_prefix) {
                Some(stripped) => layout.field_labels.push(stripped.to_string()),
                None => layout.field_labels.push(label.clone()),
            }
        }
    }
    layout
}
