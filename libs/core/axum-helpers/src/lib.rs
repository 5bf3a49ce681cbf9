//! # Axum Helpers
//!
//! Shared HTTP plumbing for the API services.
//!
//! ## Modules
//!
//! - **[`server`]**: Router assembly with API docs, graceful shutdown
//! - **[`http`]**: CORS and security headers
//! - **[`errors`]**: Error envelope and error codes
//! - **[`envelope`]**: Success envelopes (`created`, `ack`, `list`)
//! - **[`extractors`]**: ObjectId path, lenient JSON body, list query
//! - **[`pagination`]**: Page/limit normalization
//! - **[`input`]**: Numeric coercion and required-field checks
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_production_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let router = create_router::<ApiDoc>(Router::new());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(30), async {}).await?;
//! ```

pub mod envelope;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod input;
pub mod pagination;
pub mod server;

pub use envelope::{AckResponse, CreatedResponse, ListResponse, PaginationSummary};
pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{LenientJson, ListParams, ListQuery, ObjectIdPath};
pub use http::{any_origin_cors_layer, security_headers};
pub use input::{
    InputError, NumericInput, RequiredFields, coerce_float, coerce_integer, lenient_text,
};
pub use pagination::PageRequest;
pub use server::{ShutdownCoordinator, create_production_app, create_router};
