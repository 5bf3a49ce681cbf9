//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "A database error occurred",
        "error": "DATABASE_ERROR"
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - missing or malformed fields",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "Missing required fields: cnpj, email",
        "error": "VALIDATION_ERROR"
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - malformed identifier",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "Invalid ID",
        "error": "INVALID_ID"
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "Company not found",
        "error": "NOT_FOUND"
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Conflict - unique field already registered",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "CNPJ already registered",
        "error": "CONFLICT"
    })
)]
pub struct ConflictResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Service Unavailable",
    content_type = "application/json",
    example = json!({
        "ok": false,
        "msg": "MongoDB is not reachable",
        "error": "SERVICE_UNAVAILABLE"
    })
)]
pub struct ServiceUnavailableResponse(pub ErrorResponse);
