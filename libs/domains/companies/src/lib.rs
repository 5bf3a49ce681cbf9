//! Companies Domain
//!
//! Company registry backed by the `empresas` collection. The CNPJ is unique
//! across companies.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Required-field validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB and in-memory implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, API view, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_companies::{handlers, MongoCompanyRepository, CompanyService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoCompanyRepository::new(client.database("ofertmatch"));
//! repository.init_indexes().await?;
//!
//! let router = handlers::router(CompanyService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{CompanyError, CompanyResult};
pub use handlers::ApiDoc;
pub use models::{Company, CompanyFilter, CompanyView, CreateCompany, UpdateCompany};
pub use mongodb::MongoCompanyRepository;
pub use repository::{CompanyRepository, InMemoryCompanyRepository};
pub use service::CompanyService;
