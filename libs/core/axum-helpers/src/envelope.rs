//! Success envelopes shared by every resource.
//!
//! All responses carry an `ok` flag; failures use
//! [`ErrorResponse`](crate::errors::ErrorResponse).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `201 Created` with the new record's identifier.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub ok: bool,
    /// 24-character hex identifier
    #[schema(example = "665f1c2e9b1d4a3f2c8e7a10")]
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl ToString) -> Self {
        Self {
            ok: true,
            id: id.to_string(),
        }
    }
}

impl IntoResponse for CreatedResponse {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self)).into_response()
    }
}

/// `200 OK` acknowledgement for updates and deletes.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AckResponse {
    pub ok: bool,
    #[schema(example = "Company updated")]
    pub msg: String,
}

impl AckResponse {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            ok: true,
            msg: msg.into(),
        }
    }
}

impl IntoResponse for AckResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Page metadata echoed back on list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationSummary {
    pub page: u64,
    pub limit: u64,
    /// Count of all records matching the filter, ignoring pagination
    pub total: u64,
}

/// One page of records.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub ok: bool,
    pub data: Vec<T>,
    pub pagination: PaginationSummary,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>, pagination: PaginationSummary) -> Self {
        Self {
            ok: true,
            data,
            pagination,
        }
    }
}

impl<T: Serialize> IntoResponse for ListResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
