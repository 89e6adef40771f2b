//! Catway routes, including the catway-scoped reservation operations

use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::{CatwayService, ReservationService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marina_shared::types::{
    CatwayResponse, CreateCatwayRequest, CreateReservationRequest, ReservationResponse,
    UpdateCatwayRequest,
};

/// Create catway routes
pub fn catway_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_catway).get(list_catways))
        .route(
            "/:id",
            get(get_catway).put(update_catway).delete(delete_catway),
        )
        .route(
            "/:id/reservations",
            post(create_reservation).get(list_reservations),
        )
}

/// POST /api/v1/catways
async fn create_catway(
    State(state): State<AppState>,
    Json(req): Json<CreateCatwayRequest>,
) -> ApiResult<(StatusCode, Json<CatwayResponse>)> {
    let catway = CatwayService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(catway)))
}

/// GET /api/v1/catways
async fn list_catways(State(state): State<AppState>) -> ApiResult<Json<Vec<CatwayResponse>>> {
    let catways = CatwayService::list(state.db()).await?;
    Ok(Json(catways))
}

/// GET /api/v1/catways/:id
async fn get_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CatwayResponse>> {
    let id = parse_id(&id)?;
    let catway = CatwayService::get(state.db(), id).await?;
    Ok(Json(catway))
}

/// PUT /api/v1/catways/:id
async fn update_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateCatwayRequest>,
) -> ApiResult<Json<CatwayResponse>> {
    let id = parse_id(&id)?;
    let catway = CatwayService::update(state.db(), id, req).await?;
    Ok(Json(catway))
}

/// DELETE /api/v1/catways/:id
async fn delete_catway(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    CatwayService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/catways/:id/reservations
async fn create_reservation(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<CreateReservationRequest>,
) -> ApiResult<(StatusCode, Json<ReservationResponse>)> {
    let id = parse_id(&id)?;
    let reservation = ReservationService::create_for_catway(state.db(), id, req).await?;
    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/v1/catways/:id/reservations
async fn list_reservations(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Vec<ReservationResponse>>> {
    let id = parse_id(&id)?;
    let reservations = ReservationService::list_for_catway(state.db(), id).await?;
    Ok(Json(reservations))
}
