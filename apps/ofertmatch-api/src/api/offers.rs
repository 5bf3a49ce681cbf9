//! Offers API routes

use axum::Router;
use domain_offers::{MongoOfferRepository, OfferService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoOfferRepository::new(state.db.clone());
    handlers::router(OfferService::new(repository))
}
