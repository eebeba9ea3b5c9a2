use colored::Colorize;
use strprobe::api::{CmdMessage, MessageLevel};
use strprobe::model::{AnalyzedEntry, PropertyRecord};

const ID_PREFIX_LEN: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_entries(entries: &[AnalyzedEntry]) {
    if entries.is_empty() {
        println!("No entries found.");
        return;
    }
    for entry in entries {
        let marker = if entry.properties.is_palindrome {
            "⟲".magenta()
        } else {
            " ".normal()
        };
        println!(
            "{} {} {:>4} ch {:>3} w  {}",
            short_id(&entry.id).yellow(),
            marker,
            entry.properties.length,
            entry.properties.word_count,
            entry.value
        );
    }
}

pub(super) fn print_full_entry(entry: &AnalyzedEntry) {
    println!("{} {}", "id:".dimmed(), entry.id.yellow());
    println!("{} {}", "value:".dimmed(), entry.value.bold());
    println!("{} {}", "created:".dimmed(), entry.created_at);
    print_properties(&entry.properties);
}

pub(super) fn print_properties(props: &PropertyRecord) {
    println!("{} {}", "length:".dimmed(), props.length);
    println!("{} {}", "palindrome:".dimmed(), props.is_palindrome);
    println!("{} {}", "unique characters:".dimmed(), props.unique_characters);
    println!("{} {}", "word count:".dimmed(), props.word_count);
    println!("{} {}", "content hash:".dimmed(), props.content_hash);
    let freq: Vec<String> = props
        .character_frequency_map
        .iter()
        .map(|(c, n)| format!("{c:?}×{n}"))
        .collect();
    println!("{} {}", "frequencies:".dimmed(), freq.join(" "));
}

fn short_id(id: &str) -> &str {
    &id[..id.len().min(ID_PREFIX_LEN)]
}
