//! User management routes

use crate::error::ApiResult;
use crate::routes::parse_id;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use marina_shared::types::{CreateUserRequest, UpdateUserRequest, UserProfile};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user).get(list_users))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// POST /api/v1/users
async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<UserProfile>)> {
    let profile = UserService::register(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/users
async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserProfile>>> {
    let profiles = UserService::list(state.db()).await?;
    Ok(Json(profiles))
}

/// GET /api/v1/users/:id
async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserProfile>> {
    let id = parse_id(&id)?;
    let profile = UserService::get_profile(state.db(), id).await?;
    Ok(Json(profile))
}

/// PUT /api/v1/users/:id
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateUserRequest>,
) -> ApiResult<Json<UserProfile>> {
    let id = parse_id(&id)?;
    let profile = UserService::update(state.db(), id, req).await?;
    Ok(Json(profile))
}

/// DELETE /api/v1/users/:id
async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    UserService::delete(state.db(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
