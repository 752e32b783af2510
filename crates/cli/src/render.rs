//! Text shown to the user after a remember or recall.

use memorybox_memory::MemoryRecord;

pub const SAVED_TITLE: &str = "Added memory!";
pub const FOUND_TITLE: &str = "We found your memory";
pub const NOT_FOUND_TITLE: &str = "No memory found";
pub const NOT_CAUGHT: &str = "We didn't catch what you said";

pub fn remembered(record: &MemoryRecord) -> String {
    format!("{SAVED_TITLE}\nYou said: {}\n", record.text)
}

/// 1-based numbered list, one memory per line.
pub fn numbered(records: &[MemoryRecord]) -> String {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| format!("{}. {}\n", i + 1, record.text))
        .collect()
}

pub fn recalled(query: &str, records: &[MemoryRecord]) -> String {
    if records.is_empty() {
        return format!("{NOT_FOUND_TITLE}\nFor phrase: {query}\n");
    }
    format!("{FOUND_TITLE}\n{}", numbered(records))
}
