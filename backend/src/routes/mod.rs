//! Route definitions for the marina API
//!
//! The home page, health probes, and login are public; everything else
//! sits behind the authentication gate.

use crate::auth::auth_gate;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use uuid::Uuid;

mod auth;
mod catways;
mod health;
mod reservations;
mod users;

#[cfg(test)]
mod auth_tests;
#[cfg(test)]
mod catways_tests;

pub use auth::auth_routes;
pub use catways::catway_routes;
pub use reservations::reservation_routes;
pub use users::user_routes;

/// Parse a path identifier, normalizing failures to one 400 contract
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw).map_err(|_| ApiError::MalformedIdentifier)
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Public home page
async fn home() -> &'static str {
    "Marina API v1 - sign in to manage catways and reservations"
}

/// API v1 routes: public login plus the gated entity routes
fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/users", users::user_routes())
        .nest("/catways", catways::catway_routes())
        .nest("/reservations", reservations::reservation_routes())
        .merge(auth::session_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_gate));

    Router::new().merge(auth::auth_routes()).merge(protected)
}
