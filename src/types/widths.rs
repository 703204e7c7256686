//! Running column-width bookkeeping for aligned table printing.
//!
//! Widths are collected in a single pass while rows are parsed, then raised
//! once to the printed length of each column label, so the eventual table is
//! aligned without re-reading the data.

use serde_derive::{Deserialize, Serialize};

/// The minimum display widths one parsed row requires.
///
/// Produced by [`Message::from_tokens`](crate::Message::from_tokens) and
/// folded into a [`ColumnWidths`] by the loader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowWidths {
    /// Printed width of the sequence-id cell.
    pub seq: usize,

    /// Printed width of the header-stamp cell.
    pub stamp: usize,

    /// Printed width of the frame-id cell.
    pub frame_id: usize,

    /// Printed width of each generic field cell, in column order.
    pub fields: Vec<usize>,
}

/// Maximum column widths observed across a whole topic.
///
/// Widths only grow during a load: each row raises them via
/// [`observe_row`](Self::observe_row), and after the last row
/// [`finalize_with_labels`](Self::finalize_with_labels) raises them once more
/// to the printed length of each column's label so header labels are never
/// wider than the column they sit over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidths {
    /// Width of the sequence-id column.
    pub seq: usize,

    /// Width of the header-stamp column.
    pub stamp: usize,

    /// Width of the frame-id column.
    pub frame_id: usize,

    /// Width of each generic field column, in label order.
    pub fields: Vec<usize>,
}

impl ColumnWidths {
    /// Folds one row's widths in: scalars take the running maximum, field
    /// widths extend the vector when the index is new and take the maximum
    /// otherwise.
    pub fn observe_row(&mut self, row: &RowWidths) {
        self.seq = self.seq.max(row.seq);
        self.stamp = self.stamp.max(row.stamp);
        self.frame_id = self.frame_id.max(row.frame_id);
        for (i, &width) in row.fields.iter().enumerate() {
            if i == self.fields.len() {
                self.fields.push(width);
            } else {
                self.fields[i] = self.fields[i].max(width);
            }
        }
    }

    /// Raises every width to at least the printed length of its label.
    ///
    /// Must run exactly once per load, after the last row and before any
    /// print. Field entries missing after a zero-row load are created here,
    /// so `fields.len() == field_labels.len()` holds on every loaded topic.
    pub fn finalize_with_labels(
        &mut self,
        field_labels: &[String],
        seq_label: &str,
        stamp_label: &str,
        frame_id_label: &str,
    ) {
        self.seq = self.seq.max(seq_label.chars().count());
        self.stamp = self.stamp.max(stamp_label.chars().count());
        self.frame_id = self.frame_id.max(frame_id_label.chars().count());
        for (i, label) in field_labels.iter().enumerate() {
            let label_width = label.chars().count();
            if i == self.fields.len() {
                self.fields.push(label_width);
            } else {
                self.fields[i] = self.fields[i].max(label_width);
            }
        }
    }

    /// Resets all widths to zero.
    pub fn clear(&mut self) {
        self.seq = 0;
        self.stamp = 0;
        self.frame_id = 0;
        self.fields.clear();
    }
}
