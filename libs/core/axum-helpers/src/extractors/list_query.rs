//! Query-string extractor for list endpoints.

use crate::pagination::PageRequest;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;
use std::convert::Infallible;
use utoipa::IntoParams;

/// Raw list query parameters, as documented in OpenAPI.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// Page number, 1-based (default 1)
    pub page: Option<String>,
    /// Page size, clamped to 1..=100 (default 10)
    pub limit: Option<String>,
    /// Case-insensitive substring to search for
    pub q: Option<String>,
}

/// Normalized list query. Never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub page: PageRequest,
    /// Trimmed search term, `None` when absent or blank
    pub search: Option<String>,
}

impl From<ListParams> for ListQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: PageRequest::from_raw(params.page.as_deref(), params.limit.as_deref()),
            search: params
                .q
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
        }
    }
}

impl<S> FromRequestParts<S> for ListQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<ListParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_else(|rejection| {
                tracing::debug!(%rejection, "Unreadable list query, using defaults");
                ListParams::default()
            });
        Ok(params.into())
    }
}
