//! Catway service: docking-slot management

use crate::error::ApiError;
use crate::repositories::{CatwayRepository, CreateCatwayFields, UpdateCatwayFields};
use marina_shared::models::CatwayType;
use marina_shared::types::{CatwayResponse, CreateCatwayRequest, UpdateCatwayRequest};
use marina_shared::validation::{
    validate_boat_name, validate_catway_number, validate_catway_state, FieldErrors,
};
use sqlx::PgPool;
use uuid::Uuid;

/// Catway service for docking-slot operations
pub struct CatwayService;

impl CatwayService {
    /// Create a catway
    ///
    /// A reused catway number surfaces as a duplicate-key failure from
    /// the store's unique index.
    pub async fn create(pool: &PgPool, req: CreateCatwayRequest) -> Result<CatwayResponse, ApiError> {
        let mut errors = FieldErrors::new();
        errors.check("catway_number", validate_catway_number(req.catway_number));
        errors.check("catway_state", validate_catway_state(&req.catway_state));
        errors.check("boat_name", validate_boat_name(&req.boat_name));
        errors.finish().map_err(ApiError::Validation)?;

        let record = CatwayRepository::create(
            pool,
            CreateCatwayFields {
                catway_number: req.catway_number,
                catway_type: req.catway_type.to_string(),
                catway_state: req.catway_state,
                boat_name: req.boat_name,
            },
        )
        .await?;

        response_of(record)
    }

    /// Get a catway by ID
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<CatwayResponse, ApiError> {
        let record = CatwayRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Catway not found".to_string()))?;

        response_of(record)
    }

    /// List all catways
    pub async fn list(pool: &PgPool) -> Result<Vec<CatwayResponse>, ApiError> {
        let records = CatwayRepository::find_all(pool).await?;
        records.into_iter().map(response_of).collect()
    }

    /// Partial update of the state description and boat name
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        req: UpdateCatwayRequest,
    ) -> Result<CatwayResponse, ApiError> {
        let mut errors = FieldErrors::new();
        if let Some(state) = &req.catway_state {
            errors.check("catway_state", validate_catway_state(state));
        }
        if let Some(boat_name) = &req.boat_name {
            errors.check("boat_name", validate_boat_name(boat_name));
        }
        errors.finish().map_err(ApiError::Validation)?;

        let record = CatwayRepository::update(
            pool,
            id,
            UpdateCatwayFields {
                catway_state: req.catway_state,
                boat_name: req.boat_name,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Catway not found".to_string()))?;

        response_of(record)
    }

    /// Delete a catway by ID
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<(), ApiError> {
        let deleted = CatwayRepository::delete(pool, id).await?;
        if !deleted {
            return Err(ApiError::NotFound("Catway not found".to_string()));
        }
        Ok(())
    }
}

/// Project a stored record onto the API response
///
/// A type column that no longer parses means the stored data is corrupt;
/// that is an internal failure, not a client error.
fn response_of(record: crate::repositories::catway::CatwayRecord) -> Result<CatwayResponse, ApiError> {
    let catway_type = record
        .catway_type
        .parse::<CatwayType>()
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("Corrupt catway type: {}", e)))?;

    Ok(CatwayResponse {
        id: record.id.to_string(),
        catway_number: record.catway_number,
        catway_type,
        catway_state: record.catway_state,
        boat_name: record.boat_name,
        created_at: record.created_at,
    })
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
