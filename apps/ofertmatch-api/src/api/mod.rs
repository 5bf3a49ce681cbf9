//! API routes module
//!
//! Each resource is served under its English path and its Portuguese alias
//! (`/empresas`, `/produtos`, `/ofertas`).

pub mod companies;
pub mod health;
pub mod offers;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// All API routes. Nested under `/api` by `axum_helpers::create_router`.
pub fn routes(state: &AppState) -> Router {
    let companies = companies::router(state);
    let products = products::router(state);
    let offers = offers::router(state);

    Router::new()
        .nest("/companies", companies.clone())
        .nest("/empresas", companies)
        .nest("/products", products.clone())
        .nest("/produtos", products)
        .nest("/offers", offers.clone())
        .nest("/ofertas", offers)
        .merge(health::router(state.clone()))
}
