//! API request and response types

use crate::models::CatwayType;
use crate::validation::FieldError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<FieldError>>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response: the authenticated user's profile plus token metadata
///
/// The token itself travels in the `authToken` cookie, not the body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    /// Seconds until the session token expires
    pub expires_in: i64,
}

/// User profile response (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// User creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Partial user update; omitted fields keep their stored value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Re-hashed only when supplied
    #[serde(default)]
    pub password: Option<String>,
}

/// Catway creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCatwayRequest {
    pub catway_number: i32,
    pub catway_type: CatwayType,
    pub catway_state: String,
    pub boat_name: String,
}

/// Partial catway update; the number and type are immutable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCatwayRequest {
    #[serde(default)]
    pub catway_state: Option<String>,
    #[serde(default)]
    pub boat_name: Option<String>,
}

/// Catway response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatwayResponse {
    pub id: String,
    pub catway_number: i32,
    pub catway_type: CatwayType,
    pub catway_state: String,
    pub boat_name: String,
    pub created_at: DateTime<Utc>,
}

/// Reservation creation request (catway-scoped; the boat name is copied
/// from the referenced catway, never taken from the client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReservationRequest {
    pub client_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

/// Reservation response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationResponse {
    pub id: String,
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
