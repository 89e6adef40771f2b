//! Reservation repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Reservation record from database
///
/// Linked to a catway by number, not by row ID; there is no foreign key,
/// so a reservation can outlive its catway.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ReservationRecord {
    pub id: Uuid,
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a reservation
#[derive(Debug, Clone)]
pub struct CreateReservationFields {
    pub catway_number: i32,
    pub client_name: String,
    pub boat_name: String,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
}

/// Reservation repository for database operations
pub struct ReservationRepository;

impl ReservationRepository {
    /// Create a new reservation
    pub async fn create(
        pool: &PgPool,
        fields: CreateReservationFields,
    ) -> Result<ReservationRecord, sqlx::Error> {
        sqlx::query_as::<_, ReservationRecord>(
            r#"
            INSERT INTO reservations (catway_number, client_name, boat_name, check_in, check_out)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, catway_number, client_name, boat_name, check_in, check_out, created_at
            "#,
        )
        .bind(fields.catway_number)
        .bind(fields.client_name)
        .bind(fields.boat_name)
        .bind(fields.check_in)
        .bind(fields.check_out)
        .fetch_one(pool)
        .await
    }

    /// Find reservation by ID
    pub async fn find_by_id(
        pool: &PgPool,
        id: Uuid,
    ) -> Result<Option<ReservationRecord>, sqlx::Error> {
        sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out, created_at
            FROM reservations
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// List all reservations, soonest check-in first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<ReservationRecord>, sqlx::Error> {
        sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out, created_at
            FROM reservations
            ORDER BY check_in ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// List reservations for one catway number
    pub async fn find_by_catway_number(
        pool: &PgPool,
        catway_number: i32,
    ) -> Result<Vec<ReservationRecord>, sqlx::Error> {
        sqlx::query_as::<_, ReservationRecord>(
            r#"
            SELECT id, catway_number, client_name, boat_name, check_in, check_out, created_at
            FROM reservations
            WHERE catway_number = $1
            ORDER BY check_in ASC
            "#,
        )
        .bind(catway_number)
        .fetch_all(pool)
        .await
    }

    /// Delete by ID; true if a row was removed
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reservations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
