//! Companies API routes

use axum::Router;
use domain_companies::{CompanyService, MongoCompanyRepository, handlers};
use mongodb::Database;

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoCompanyRepository::new(state.db.clone());
    handlers::router(CompanyService::new(repository))
}

/// Create the unique `cnpj` index before serving.
pub async fn init_indexes(db: &Database) -> eyre::Result<()> {
    MongoCompanyRepository::new(db.clone())
        .init_indexes()
        .await
        .map_err(|e| eyre::eyre!("Failed to create company indexes: {}", e))
}
