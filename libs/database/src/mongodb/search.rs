//! Free-text search filters and write-error classification.

use mongodb::bson::{Document, doc};
use mongodb::error::{Error, ErrorKind, WriteFailure};

/// Server error code for a unique index violation.
pub const DUPLICATE_KEY_CODE: i32 = 11000;

/// Build a case-insensitive substring filter over `fields`.
///
/// Blank `query` yields an empty filter (matches everything). The term is
/// trimmed and escaped, so it is always matched literally.
///
/// ```ignore
/// let filter = search_filter("acme", &["razao_social", "email"]);
/// // { "$or": [ { "razao_social": { "$regex": "acme", "$options": "i" } },
/// //            { "email": { "$regex": "acme", "$options": "i" } } ] }
/// ```
pub fn search_filter(query: &str, fields: &[&str]) -> Document {
    let term = query.trim();
    if term.is_empty() || fields.is_empty() {
        return doc! {};
    }

    let pattern = regex::escape(term);
    let clauses: Vec<Document> = fields
        .iter()
        .map(|field| {
            let mut clause = Document::new();
            clause.insert(*field, doc! { "$regex": pattern.as_str(), "$options": "i" });
            clause
        })
        .collect();

    doc! { "$or": clauses }
}

/// Same as [`search_filter`] for an optional query parameter.
pub fn optional_search_filter(query: Option<&str>, fields: &[&str]) -> Document {
    query
        .map(|q| search_filter(q, fields))
        .unwrap_or_default()
}

/// True when `err` reports a unique index violation.
pub fn is_duplicate_key_error(err: &Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY_CODE,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}
