use std::fs::File;
use std::io::{BufRead, BufReader};

use tracing::{debug, warn};

use crate::topic::support::{header, line};
use crate::types::errors::TopicLoadError;
use crate::types::message::Message;
use crate::types::schema::TopicSchema;
use crate::types::topic::Topic;

/// Parses a delimited topic file and builds a [`Topic`].
///
/// The function reads the file **line by line**: the first line is the header
/// row, every following line is one data row. Header labels are normalized
/// (timestamp column dropped, header-triple columns detected, field prefix
/// stripped), each row is converted to a [`Message`], and the per-column
/// display widths are folded in on the fly so the topic can be printed as an
/// aligned table without a second pass.
///
/// # Parameters
/// - `path`: Path to the topic file.
/// - `topic_name`: Logical name of the topic; also decides the fault
///   classification against `schema.fault_topic_prefix`.
/// - `schema`: Reserved strings and delimiter; [`TopicSchema::default`] is
///   the recorded-dataset layout.
///
/// # Returns
/// - `Ok(Topic)` on success, with messages in file order.
/// - `Err(TopicLoadError)` when the file cannot be opened or is malformed.
///
/// # Errors
/// - [`TopicLoadError::OpenFile`] / [`TopicLoadError::Read`] on I/O failures.
/// - [`TopicLoadError::MissingHeader`] when the file has no first line.
/// - [`TopicLoadError::RowOverflow`] when a row has more fields than the
///   header. Note that with this entry point the partially loaded topic is
///   dropped with the error; use [`Topic::read_from_file`] to keep the rows
///   read before the overflow.
///
/// # Behavior & Invariants
/// - Rows with **fewer** fields than the header are right-padded with empty
///   strings; only an over-long row is an error.
/// - After a completed load, `field_labels.len()` equals the number of
///   tracked field widths, including for zero-row files.
pub fn from_file(path: &str, topic_name: &str, schema: TopicSchema) -> Result<Topic, TopicLoadError> {
    let mut topic = Topic::new(topic_name, schema);
    topic.read_from_file(path)?;
    Ok(topic)
}

/// Loads `path` into `topic`, replacing any previous content.
///
/// The topic is cleared first; only the logical name survives the reset. On
/// a row overflow the rows already parsed are kept, the topic is finalized
/// as initialized, and the error is returned so the caller learns the load
/// was cut short. On any other error the topic stays uninitialized.
pub(crate) fn load(topic: &mut Topic, path: &str) -> Result<(), TopicLoadError> {
    let topic_name = topic.name.clone();
    topic.clear();
    topic.name = topic_name;
    topic.file_name = path.to_string();

    let file = File::open(path).map_err(|source| TopicLoadError::OpenFile {
        path: path.to_string(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    // header row
    let raw_labels = match lines.next() {
        Some(Ok(header_line)) => {
            line::tokenize(header_line.trim_end_matches('\r'), topic.schema.delimiter)
        }
        Some(Err(source)) => {
            return Err(TopicLoadError::Read {
                path: path.to_string(),
                source,
            });
        }
        None => {
            return Err(TopicLoadError::MissingHeader {
                path: path.to_string(),
            });
        }
    };
    let layout = header::normalize(&raw_labels, &topic.schema);

    // data rows
    let mut line_number: usize = 0;
    let mut overflow_row: Option<usize> = None;
    for data_line in lines {
        let data_line = data_line.map_err(|source| TopicLoadError::Read {
            path: path.to_string(),
            source,
        })?;
        line_number += 1;

        let mut tokens = line::tokenize(data_line.trim_end_matches('\r'), topic.schema.delimiter);

        // a row may omit trailing fields; treat them as empty cells
        while tokens.len() < raw_labels.len() {
            tokens.push(String::new());
        }

        // an over-long row is unrecoverable; keep what was read so far
        if tokens.len() > raw_labels.len() {
            warn!(
                path,
                row = line_number,
                "row has more fields than the header, stopping"
            );
            overflow_row = Some(line_number);
            break;
        }

        let (msg, row_widths) = Message::from_tokens(&tokens, &layout.kinds);
        topic.widths.observe_row(&row_widths);
        topic.messages.push(msg);
    }

    topic.field_labels = layout.field_labels;
    topic.has_header = layout.has_header;
    topic.finalize_widths();
    topic.classify_fault();
    topic.is_initialized = true;

    debug!(
        path,
        name = topic.name.as_str(),
        messages = topic.messages.len(),
        fields = topic.field_labels.len(),
        has_header = topic.has_header,
        "topic loaded"
    );

    match overflow_row {
        Some(row) => Err(TopicLoadError::RowOverflow {
            path: path.to_string(),
            row,
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_topic(dir: &TempDir, name: &str, content: &str) -> String {
        let path = Path::new(dir.path()).join(name);
        fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    const EXAMPLE: &str = "\
%time,field.header.seq,field.header.stamp,field.header.frame_id,field.x
100,1,500,odom,3.14
";

    #[test]
    fn loads_example_topic() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "position.csv", EXAMPLE);

        let topic = from_file(&path, "position", TopicSchema::default()).unwrap();

        assert!(topic.is_initialized());
        assert!(topic.has_header_field());
        assert!(!topic.is_fault_topic());
        assert_eq!(topic.file_name, path);
        assert_eq!(topic.field_labels, vec!["x".to_string()]);
        assert_eq!(topic.messages.len(), 1);

        let msg = &topic.messages[0];
        assert_eq!(msg.header.seq, 1);
        assert_eq!(msg.header.stamp.text, "500");
        assert_eq!(msg.header.frame_id, "odom");
        assert_eq!(msg.fields, vec!["3.14".to_string()]);
    }

    #[test]
    fn labels_and_field_widths_stay_in_sync() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "t.csv", EXAMPLE);
        let topic = from_file(&path, "position", TopicSchema::default()).unwrap();

        assert_eq!(
            topic.field_labels.len(),
            topic.column_widths().fields.len()
        );
    }

    #[test]
    fn under_length_rows_are_padded_with_empty_cells() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(
            &dir,
            "t.csv",
            "%time,field.a,field.b\n100,7\n200\n",
        );
        let topic = from_file(&path, "t", TopicSchema::default()).unwrap();

        assert_eq!(topic.messages.len(), 2);
        assert_eq!(topic.messages[0].fields, vec!["7".to_string(), String::new()]);
        assert_eq!(topic.messages[1].fields, vec![String::new(), String::new()]);
    }

    #[test]
    fn row_overflow_keeps_parsed_rows_and_reports_row_number() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(
            &dir,
            "t.csv",
            "%time,field.a\n100,1\n200,2,extra\n300,3\n",
        );

        let mut topic = Topic::new("t", TopicSchema::default());
        let err = topic.read_from_file(&path).unwrap_err();

        match err {
            TopicLoadError::RowOverflow { row, .. } => assert_eq!(row, 2),
            other => panic!("expected RowOverflow, got {other:?}"),
        }
        // partial success: the first row survives and the topic is usable
        assert!(topic.is_initialized());
        assert_eq!(topic.messages.len(), 1);
        assert_eq!(topic.messages[0].fields, vec!["1".to_string()]);
    }

    #[test]
    fn missing_file_reports_open_error() {
        let err = from_file("/no/such/topic.csv", "t", TopicSchema::default()).unwrap_err();
        assert!(matches!(err, TopicLoadError::OpenFile { .. }));
    }

    #[test]
    fn empty_file_reports_missing_header() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "empty.csv", "");

        let mut topic = Topic::new("t", TopicSchema::default());
        let err = topic.read_from_file(&path).unwrap_err();

        assert!(matches!(err, TopicLoadError::MissingHeader { .. }));
        assert!(!topic.is_initialized());
    }

    #[test]
    fn header_only_file_loads_with_zero_messages() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "t.csv", "%time,field.roll,field.pitch\n");
        let topic = from_file(&path, "t", TopicSchema::default()).unwrap();

        assert!(topic.is_initialized());
        assert!(topic.messages.is_empty());
        assert_eq!(topic.field_labels.len(), 2);
        // widths are seeded from the labels even without data rows
        assert_eq!(topic.column_widths().fields, vec![4, 5]);
        assert_eq!(topic.print_header(" | "), 0);
    }

    #[test]
    fn fault_topic_is_classified_from_its_name() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "f.csv", "%time,field.status\n100,ok\n");

        let fault = from_file(&path, "failure_status_engines", TopicSchema::default()).unwrap();
        assert!(fault.is_fault_topic());

        let nominal = from_file(&path, "velocity", TopicSchema::default()).unwrap();
        assert!(!nominal.is_fault_topic());
    }

    #[test]
    fn reload_preserves_name_and_replaces_content() {
        let dir = TempDir::new().unwrap();
        let first = write_topic(&dir, "a.csv", "%time,field.a\n100,1\n200,2\n");
        let second = write_topic(&dir, "b.csv", "%time,field.b\n300,9\n");

        let mut topic = from_file(&first, "chan", TopicSchema::default()).unwrap();
        assert_eq!(topic.messages.len(), 2);

        topic.read_from_file(&second).unwrap();
        assert_eq!(topic.name, "chan");
        assert_eq!(topic.file_name, second);
        assert_eq!(topic.messages.len(), 1);
        assert_eq!(topic.field_labels, vec!["b".to_string()]);
    }

    #[test]
    fn reloading_the_same_file_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "t.csv", EXAMPLE);

        let mut topic = from_file(&path, "position", TopicSchema::default()).unwrap();
        let messages = topic.messages.clone();
        let widths = topic.column_widths().clone();

        topic.read_from_file(&path).unwrap();
        assert_eq!(topic.messages, messages);
        assert_eq!(topic.column_widths(), &widths);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "t.csv", "%time,field.a\r\n100,1\r\n");
        let topic = from_file(&path, "t", TopicSchema::default()).unwrap();

        assert_eq!(topic.field_labels, vec!["a".to_string()]);
        assert_eq!(topic.messages[0].fields, vec!["1".to_string()]);
    }

    #[test]
    fn blank_data_line_becomes_an_all_empty_row() {
        let dir = TempDir::new().unwrap();
        let path = write_topic(&dir, "t.csv", "%time,field.a\n100,1\n\n");
        let topic = from_file(&path, "t", TopicSchema::default()).unwrap();

        assert_eq!(topic.messages.len(), 2);
        assert_eq!(topic.messages[1].fields, vec![String::new()]);
    }
}
