use topic_tools::{TopicSchema, topic::parse};

fn main() {
    let mut args = std::env::args().skip(1);
    let path = match args.next() {
        Some(p) => p,
        None => {
            eprintln!("usage: read_topic <topic-file> [topic-name]");
            std::process::exit(2);
        }
    };
    let name = args.next().unwrap_or_else(|| "N/A".to_string());

    match parse::from_file(&path, &name, TopicSchema::default()) {
        Ok(topic) => {
            println!("Topic: {}", topic.name);
            println!("File: {}", topic.file_name);
            println!("Messages: {}", topic.messages.len());
            println!("Fields: {:?}", topic.field_labels);
            println!("Fault topic: {}", topic.is_fault_topic());
            println!();

            // print the first 10 messages as an aligned table
            topic.print(0, 10, " | ");
        }
        Err(e) => eprintln!("Error: {}", e),
    }
}
