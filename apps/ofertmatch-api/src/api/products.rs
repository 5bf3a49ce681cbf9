//! Products API routes

use axum::Router;
use domain_products::{MongoProductRepository, ProductService, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoProductRepository::new(state.db.clone());
    handlers::router(ProductService::new(repository))
}
