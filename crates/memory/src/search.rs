//! Keyword matching over stored memories.
//!
//! A record matches when its tokenized text shares at least one token with the
//! query. There is no scoring: results keep the order of the input records.

use std::collections::HashSet;

use crate::{schema::MemoryRecord, tokenizer::tokenize};

/// Whether `record` shares any token with `query_tokens`.
pub fn matches(query_tokens: &[String], record: &MemoryRecord) -> bool {
    let wanted: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
    record_matches(&wanted, record)
}

/// Return every record sharing a token with the query, in input order.
///
/// An empty query matches nothing.
pub fn search(query_tokens: &[String], records: &[MemoryRecord]) -> Vec<MemoryRecord> {
    if query_tokens.is_empty() {
        return Vec::new();
    }

    let wanted: HashSet<&str> = query_tokens.iter().map(String::as_str).collect();
    records
        .iter()
        .filter(|record| record_matches(&wanted, record))
        .cloned()
        .collect()
}

fn record_matches(wanted: &HashSet<&str>, record: &MemoryRecord) -> bool {
    tokenize(&record.text)
        .iter()
        .any(|token| wanted.contains(token.as_str()))
}
