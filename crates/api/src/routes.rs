use crate::handlers;
use crate::middleware::require_api_key;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

/// Public routes at the root (`/ping`, the dyndns update paths) and the
/// admin API under `/api`.
pub fn create_api_routes(state: AppState) -> Router {
    let admin = Router::new()
        .merge(handlers::hosts::routes())
        .merge(handlers::aliases::routes())
        .merge(handlers::logs::routes())
        .route("/zones", get(handlers::get_zones))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .route("/ping", get(handlers::ping))
        .merge(handlers::update::routes())
        .nest("/api", admin)
        .with_state(state)
}
