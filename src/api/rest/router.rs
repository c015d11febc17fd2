//! API Router configuration

use super::handlers;
use super::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the main API router
///
/// Client paths match the published contract verbatim, trailing slashes
/// and the `actualziar` spelling included.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health and status
        .route("/health", get(handlers::health_check))
        .route("/status", get(handlers::service_status))
        // Clients
        .route("/clientes/", get(handlers::list_clients))
        .route("/clientes/buscar/:id", get(handlers::find_client))
        .route("/clientes/crear/", post(handlers::create_client))
        .route("/clientes/actualziar/", put(handlers::update_client))
        .route("/clientes/borrar/:id/", delete(handlers::delete_client))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
