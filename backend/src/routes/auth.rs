//! Authentication routes
//!
//! Login issues the session token and hands it to the client in an
//! HTTP-only cookie scoped to the token lifetime. The token never
//! appears in a response body.

use crate::auth::{AuthSession, AUTH_COOKIE};
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use marina_shared::types::{LoginRequest, LoginResponse, UserProfile};

/// Public authentication routes (no session required)
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(login))
}

/// Session-bound authentication routes (behind the gate)
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
}

/// POST /api/v1/auth/login
///
/// Unknown email and wrong password produce the same 401; only the
/// success path sets the cookie.
async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let (user, token) =
        UserService::authenticate(state.db(), state.tokens(), &req.email, &req.password).await?;

    let ttl_secs = state.tokens().ttl_secs();
    let jar = jar.add(session_cookie(token, ttl_secs));

    Ok((
        jar,
        Json(LoginResponse {
            user,
            expires_in: ttl_secs,
        }),
    ))
}

/// POST /api/v1/auth/logout
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = Cookie::build((AUTH_COOKIE, "")).path("/").build();
    (jar.remove(removal), StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Returns the stored profile for the session's user, not the claim
/// copy, so renames show up without re-login.
async fn me(State(state): State<AppState>, session: AuthSession) -> ApiResult<Json<UserProfile>> {
    let profile = UserService::get_profile(state.db(), session.user_id).await?;
    Ok(Json(profile))
}

/// Build the HTTP-only session cookie with max-age equal to the TTL
fn session_cookie(token: String, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((AUTH_COOKIE, token))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(time::Duration::seconds(ttl_secs))
        .build()
}
