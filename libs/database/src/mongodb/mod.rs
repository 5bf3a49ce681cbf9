//! MongoDB connector and utilities
//!
//! Connection management, health checks and query helpers shared by the
//! domain repositories.

mod config;
mod connector;
mod health;
mod search;
mod stored;

pub use config::{DEFAULT_DATABASE, MongoConfig};
pub use connector::{MongoError, client_options, connect_from_config, connect_from_config_with_retry};
pub use health::{HealthStatus, check_health_detailed};
pub use search::{DUPLICATE_KEY_CODE, is_duplicate_key_error, optional_search_filter, search_filter};
pub use stored::{loose_f64, loose_i64, loose_opt_string, loose_string};

// Re-export MongoDB types for convenience
pub use mongodb::{Client, Collection, Database};
