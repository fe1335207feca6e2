//! Client-side question search.
//!
//! Case-insensitive substring filtering over an in-memory record list.

use crate::model::Record;

/// Filter records by a free-text query.
///
/// # Arguments
/// * `records` - Records to search
/// * `query` - Raw query text as typed
///
/// # Returns
/// * `Vec<Record>` - Matching records in their original order
///
/// # Details
/// The query is trimmed and lower-cased, then matched as a substring of the
/// lower-cased title, body or category. An empty or whitespace-only query
/// matches nothing.
pub fn filter(records: &[Record], query: &str) -> Vec<Record> {
    let query_lower = query.trim().to_lowercase();
    if query_lower.is_empty() {
        return Vec::new();
    }

    let mut filtered: Vec<Record> = records.to_vec();
    filtered.retain(|record| matches(record, &query_lower));
    filtered
}

/// Whether a record matches an already normalized query.
fn matches(record: &Record, query_lower: &str) -> bool {
    record.title.to_lowercase().contains(query_lower)
        || record.body.to_lowercase().contains(query_lower)
        || record.category.to_lowercase().contains(query_lower)
}
