use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{any_origin_cors_layer, security_headers};
use axum::{Json, Router, middleware, routing::get};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa::OpenApi;

/// Where the raw OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Assemble the full application router.
///
/// - API routes nested under `/api`
/// - OpenAPI JSON at [`OPENAPI_JSON_PATH`], ReDoc at `/redoc`, Scalar at `/scalar`
/// - Envelope-shaped 404 fallback
/// - Request tracing, security headers, any-origin CORS
///
/// `apis` must already have its state applied.
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    use utoipa_redoc::{Redoc, Servable as RedocServable};
    use utoipa_scalar::{Scalar, Servable as ScalarServable};

    let spec = T::openapi();
    let spec_json = spec.clone();

    Router::new()
        .route(
            OPENAPI_JSON_PATH,
            get(move || {
                let spec = spec_json.clone();
                async move { Json(spec) }
            }),
        )
        .merge(Redoc::with_url("/redoc", spec.clone()))
        .merge(Scalar::with_url("/scalar", spec))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(any_origin_cors_layer())
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before cleanup starts; cleanup is
/// abandoned after `shutdown_timeout`.
///
/// # Errors
/// Fails if the listener cannot bind or the server loop errors.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let coordinator = ShutdownCoordinator::new();

    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;
    info!("Server starting on {}", listener.local_addr()?);

    let signal_watcher = coordinator.clone();
    tokio::spawn(async move { signal_watcher.wait_for_signal().await });

    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(coordinator.until_shutdown())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
