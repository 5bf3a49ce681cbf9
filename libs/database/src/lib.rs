//! Database library providing MongoDB connectors and query utilities
//!
//! # Features
//!
//! - `mongodb` (default) - MongoDB connector, health checks, search filters
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb::{self, MongoConfig};
//!
//! let config = MongoConfig::with_database("mongodb://localhost:27017", "ofertmatch");
//! let client = mongodb::connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//!
//! let filter = mongodb::search_filter("acme", &["razao_social", "cnpj"]);
//! ```

// Always available modules
pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;

// Re-export commonly used types
pub use common::{RetryConfig, retry_with_backoff};
