//! Custom extractors for Axum handlers.
//!
//! These never hand axum's default plain-text rejections to clients: path
//! failures become error envelopes, while body and query problems degrade
//! to defaults so the service layer can report missing fields.

pub mod lenient_json;
pub mod list_query;
pub mod object_id_path;

pub use lenient_json::LenientJson;
pub use list_query::{ListParams, ListQuery};
pub use object_id_path::ObjectIdPath;
