//! Reservation service: catway-scoped bookings

use crate::error::ApiError;
use crate::repositories::{CatwayRepository, CreateReservationFields, ReservationRepository};
use chrono::Utc;
use marina_shared::types::{CreateReservationRequest, ReservationResponse};
use marina_shared::validation::{
    validate_check_in, validate_check_out, validate_client_name, FieldErrors,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Reservation service
pub struct ReservationService;

impl ReservationService {
    /// Create a reservation against the catway's number
    ///
    /// The boat name is copied from the referenced catway, never taken
    /// from the request. The catway read and the reservation insert are
    /// separate statements with no transaction between them.
    pub async fn create_for_catway(
        pool: &PgPool,
        catway_id: Uuid,
        req: CreateReservationRequest,
    ) -> Result<ReservationResponse, ApiError> {
        let catway = CatwayRepository::find_by_id(pool, catway_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Catway not found".to_string()))?;

        let mut errors = FieldErrors::new();
        errors.check("client_name", validate_client_name(&req.client_name));
        errors.check("check_in", validate_check_in(req.check_in, Utc::now()));
        errors.check("check_out", validate_check_out(req.check_in, req.check_out));
        errors.finish().map_err(ApiError::Validation)?;

        let record = ReservationRepository::create(
            pool,
            CreateReservationFields {
                catway_number: catway.catway_number,
                client_name: req.client_name,
                boat_name: catway.boat_name,
                check_in: req.check_in,
                check_out: req.check_out,
            },
        )
        .await?;

        Ok(response_of(record))
    }

    /// List reservations for the catway's number
    pub async fn list_for_catway(
        pool: &PgPool,
        catway_id: Uuid,
    ) -> Result<Vec<ReservationResponse>, ApiError> {
        let catway = CatwayRepository::find_by_id(pool, catway_id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Catway not found".to_string()))?;

        let records =
            ReservationRepository::find_by_catway_number(pool, catway.catway_number).await?;

        Ok(records.into_iter().map(response_of).collect())
    }

    /// Get a reservation by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<ReservationResponse, ApiError> {
        let record = ReservationRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Reservation not found".to_string()))?;

        Ok(response_of(record))
    }

    /// List all reservations
    pub async fn list(pool: &PgPool) -> Result<Vec<ReservationResponse>, ApiError> {
        let records = ReservationRepository::find_all(pool).await?;
        Ok(records.into_iter().map(response_of).collect())
    }

    /// Delete a reservation by ID
    ///
    /// Reservations are never updated in place; delete and re-create is
    /// the only mutation path after booking.
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = ReservationRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Reservation not found".to_string()));
        }
        Ok(())
    }
}

/// Project a stored record onto the API response
fn response_of(record: crate::repositories::reservation::ReservationRecord) -> ReservationResponse {
    ReservationResponse {
        id: record.id.to_string(),
        catway_number: record.catway_number,
        client_name: record.client_name,
        boat_name: record.boat_name,
        check_in: record.check_in,
        check_out: record.check_out,
        created_at: record.created_at,
    }
}
