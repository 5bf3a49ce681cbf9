//! Default messages for error envelopes.

pub const VALIDATION_FAILED: &str = "Missing or invalid fields";
pub const INVALID_ID: &str = "Invalid ID";
pub const NOT_FOUND_RESOURCE: &str = "Resource not found";
pub const ROUTE_NOT_FOUND: &str = "The requested route does not exist";
pub const CONFLICT: &str = "Resource already exists";
pub const SERVICE_UNAVAILABLE: &str = "Service is temporarily unavailable";
pub const DB_ERROR: &str = "A database error occurred";
