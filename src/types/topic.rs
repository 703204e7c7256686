use serde_derive::{Deserialize, Serialize};

use crate::types::message::Message;
use crate::types::schema::TopicSchema;
use crate::types::widths::ColumnWidths;

/// Display label of the index column.
pub(crate) const HDR_INDEX: &str = "Index";
/// Display label of the recording-timestamp column.
pub(crate) const HDR_DATETIME: &str = "Date/Time Stamp";
/// Display label of the sequence-id column.
pub(crate) const HDR_SEQ: &str = "SeqID";
/// Display label of the header-stamp column.
pub(crate) const HDR_STAMP: &str = "Time Stamp";
/// Display label of the frame-id column.
pub(crate) const HDR_FRAME: &str = "Frame";

/// One dataset channel: the messages loaded from a single delimited file plus
/// the display geometry needed to print them as an aligned table.
///
/// A `Topic` is created empty (or via [`topic::parse::from_file`]) and filled
/// by [`read_from_file`](Self::read_from_file). Most queries are meaningless
/// before a successful load; they return their defined "not initialized"
/// result (0 printed lines) until one completes.
///
/// [`topic::parse::from_file`]: crate::topic::parse::from_file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Logical topic name, e.g. `"failure_status_engines"`. Preserved across
    /// reloads; only [`clear`](Self::clear) empties it.
    pub name: String,

    /// Path of the loaded file. Empty until a load has started.
    pub file_name: String,

    /// Normalized field labels, derived once from the header row.
    pub field_labels: Vec<String>,

    /// Parsed rows in file order.
    pub messages: Vec<Message>,

    /// Reserved strings and delimiter used to interpret the file.
    pub schema: TopicSchema,

    pub(crate) widths: ColumnWidths,
    pub(crate) has_header: bool,
    pub(crate) is_initialized: bool,
    pub(crate) is_fault_topic: bool,
}

impl Default for Topic {
    fn default() -> Self {
        Self::new("N/A", TopicSchema::default())
    }
}

impl Topic {
    /// Creates an empty topic with the given logical name and schema.
    pub fn new(name: &str, schema: TopicSchema) -> Self {
        Self {
            name: name.to_string(),
            file_name: String::new(),
            field_labels: Vec::new(),
            messages: Vec::new(),
            schema,
            widths: ColumnWidths::default(),
            has_header: false,
            is_initialized: false,
            is_fault_topic: false,
        }
    }

    /// Loads a topic file into this topic.
    ///
    /// Any previously loaded data is cleared first; the logical name is
    /// preserved across the reset. See [`topic::parse::load`] for the format
    /// and error semantics.
    ///
    /// [`topic::parse::load`]: crate::topic::parse
    pub fn read_from_file(&mut self, path: &str) -> Result<(), crate::TopicLoadError> {
        crate::topic::parse::load(self, path)
    }

    /// Returns whether a load has completed on this topic.
    pub fn is_initialized(&self) -> bool {
        self.is_initialized
    }

    /// Returns whether the topic's name carries the fault-topic prefix.
    /// Recomputed from the name on every completed load.
    pub fn is_fault_topic(&self) -> bool {
        self.is_fault_topic
    }

    /// Returns whether the header row carried any of the header-triple
    /// columns (sequence id, stamp, frame id).
    pub fn has_header_field(&self) -> bool {
        self.has_header
    }

    /// The tracked per-column display widths.
    pub fn column_widths(&self) -> &ColumnWidths {
        &self.widths
    }

    /// Renders the label line of the table, or `None` when the topic is not
    /// initialized or has no messages (the timestamp-column width comes from
    /// the first message's formatted timestamp).
    pub fn header_line(&self, field_separator: &str) -> Option<String> {
        if !self.is_initialized || self.messages.is_empty() {
            return None;
        }

        let len_datetime = self.messages[0].time.to_display_string().chars().count();

        let mut line = String::new();
        line.push_str(field_separator);
        line.push_str(HDR_INDEX);
        line.push_str(field_separator);
        line.push_str(&format!("{HDR_DATETIME:>len_datetime$}"));

        if self.has_header {
            line.push_str(field_separator);
            line.push_str(&format!("{:>1$}", HDR_SEQ, self.widths.seq));
            line.push_str(field_separator);
            line.push_str(&format!("{:>1$}", HDR_STAMP, self.widths.stamp));
            line.push_str(field_separator);
            line.push_str(&format!("{:>1$}", HDR_FRAME, self.widths.frame_id));
        }

        for (i, label) in self.field_labels.iter().enumerate() {
            let width = self.widths.fields.get(i).copied().unwrap_or(0);
            line.push_str(field_separator);
            line.push_str(&format!("{label:>width$}"));
        }

        line.push_str(field_separator);
        Some(line)
    }

    /// Renders message `index` as one table line (index column included), or
    /// `None` when the topic is not initialized or the index is out of range.
    pub fn message_line(&self, index: usize, field_separator: &str) -> Option<String> {
        if !self.is_initialized {
            return None;
        }
        let msg = self.messages.get(index)?;

        let mut line = String::new();
        line.push_str(field_separator);
        line.push_str(&format!("{:>width$}", index, width = HDR_INDEX.len()));
        line.push_str(field_separator);
        line.push_str(&msg.to_table_row(&self.widths, self.has_header, field_separator));
        line.push_str(field_separator);
        Some(line)
    }

    /// Prints the topic header line to stdout and returns its character
    /// length, so the caller can draw a rule of matching width. Returns 0
    /// when there is nothing to print.
    pub fn print_header(&self, field_separator: &str) -> usize {
        match self.header_line(field_separator) {
            Some(line) => {
                println!("{line}");
                line.chars().count()
            }
            None => 0,
        }
    }

    /// Prints up to `n_messages` messages starting at `n_start`, preceded by
    /// the header line and a dash rule. Returns the number of message lines
    /// printed.
    ///
    /// A negative `n_start` prints nothing and returns 0; a negative
    /// `n_messages` means "all remaining from `n_start`". The range is
    /// clamped to the message count.
    pub fn print(&self, n_start: isize, n_messages: isize, field_separator: &str) -> usize {
        if n_start < 0 || !self.is_initialized {
            return 0;
        }

        let start = n_start as usize;
        let count = if n_messages < 0 {
            self.messages.len()
        } else {
            n_messages as usize
        };

        let header_length = self.print_header(field_separator);
        if header_length > 0 {
            println!("{}", "-".repeat(header_length));
        }

        let end = start.saturating_add(count).min(self.messages.len());
        let mut printed = 0;
        for i in start..end {
            if let Some(line) = self.message_line(i, field_separator) {
                println!("{line}");
                printed += 1;
            }
        }
        printed
    }

    /// Resets every field to its empty default, including the name and the
    /// initialization flag. The schema is configuration, not data, and is
    /// kept.
    pub fn clear(&mut self) {
        self.name.clear();
        self.file_name.clear();
        self.field_labels.clear();
        self.messages.clear();
        self.widths.clear();
        self.has_header = false;
        self.is_initialized = false;
        self.is_fault_topic = false;
    }

    /// Recomputes the fault classification from the current name. A name
    /// shorter than the fault prefix is never a fault topic.
    pub(crate) fn classify_fault(&mut self) {
        self.is_fault_topic = self.name.len() >= self.schema.fault_topic_prefix.len()
            && self.name.starts_with(&self.schema.fault_topic_prefix);
    }

    /// Raises the tracked widths to the label widths. Runs exactly once per
    /// load, after the last row.
    pub(crate) fn finalize_widths(&mut self) {
        self.widths
            .finalize_with_labels(&self.field_labels, HDR_SEQ, HDR_STAMP, HDR_FRAME);
    }
}
