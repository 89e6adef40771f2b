//! Reservation routes
//!
//! Creation lives under the catway-scoped routes; here a reservation can
//! only be listed, fetched, or deleted. There is no update route.

use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::ReservationService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use marina_shared::types::ReservationResponse;

/// Create reservation routes
pub fn reservation_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reservations))
        .route("/:id", get(get_reservation).delete(delete_reservation))
}

/// GET /api/v1/reservations
async fn list_reservations(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let reservations = ReservationService::list(state.db()).await?;
    Ok(Json(reservations))
}

/// GET /api/v1/reservations/:id
async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ReservationResponse>> {
    let id = parse_id(&id)?;
    let reservation = ReservationService::get(state.db(), id).await?;
    Ok(Json(reservation))
}

/// DELETE /api/v1/reservations/:id
async fn delete_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    ReservationService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
