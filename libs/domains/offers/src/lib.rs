//! Offers Domain
//!
//! Promotional offers backed by the `ofertas` collection. An offer names its
//! product as free text and carries optional campaign dates.
//!
//! ```rust,no_run
//! use domain_offers::{handlers, MongoOfferRepository, OfferService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoOfferRepository::new(client.database("ofertmatch"));
//! let router = handlers::router(OfferService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{OfferError, OfferResult};
pub use handlers::ApiDoc;
pub use models::{CreateOffer, Offer, OfferChanges, OfferFilter, OfferView, UpdateOffer};
pub use mongodb::MongoOfferRepository;
pub use repository::{InMemoryOfferRepository, OfferRepository};
pub use service::OfferService;
