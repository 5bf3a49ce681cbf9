//! HTTP middleware: CORS and security headers.
//!
//! ```ignore
//! use axum_helpers::http::{any_origin_cors_layer, security_headers};
//!
//! let app = Router::new()
//!     .layer(axum::middleware::from_fn(security_headers))
//!     .layer(any_origin_cors_layer());
//! ```

pub mod cors;
pub mod security;

pub use cors::any_origin_cors_layer;
pub use security::security_headers;
