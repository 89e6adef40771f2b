//! Catway repository for database operations

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

/// Catway record from database
///
/// The type column is stored as text and parsed into `CatwayType` at the
/// service layer.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CatwayRecord {
    pub id: Uuid,
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
    pub boat_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a catway
#[derive(Debug, Clone)]
pub struct CreateCatwayFields {
    pub catway_number: i32,
    pub catway_type: String,
    pub catway_state: String,
    pub boat_name: String,
}

/// Input for a partial catway update; number and type are immutable
#[derive(Debug, Clone, Default)]
pub struct UpdateCatwayFields {
    pub catway_state: Option<String>,
    pub boat_name: Option<String>,
}

/// Catway repository for database operations
pub struct CatwayRepository;

impl CatwayRepository {
    /// Create a new catway
    ///
    /// The unique index on catway_number raises a duplicate-key error for
    /// a reused number.
    pub async fn create(
        pool: &PgPool,
        fields: CreateCatwayFields,
    ) -> Result<CatwayRecord, sqlx::Error> {
        sqlx::query_as::<_, CatwayRecord>(
            r#"
            INSERT INTO catways (catway_number, catway_type, catway_state, boat_name)
            VALUES ($1, $2, $3, $4)
            RETURNING id, catway_number, catway_type, catway_state, boat_name,
                      created_at, updated_at
            "#,
        )
        .bind(fields.catway_number)
        .bind(fields.catway_type)
        .bind(fields.catway_state)
        .bind(fields.boat_name)
        .fetch_one(pool)
        .await
    }

    /// Find catway by ID
    pub async fn find_by_id(pool: &PgPool, id: Uuid) -> Result<Option<CatwayRecord>, sqlx::Error> {
        sqlx::query_as::<_, CatwayRecord>(
            r#"
            SELECT id, catway_number, catway_type, catway_state, boat_name,
                   created_at, updated_at
            FROM catways
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Find catway by its marina number
    pub async fn find_by_number(
        pool: &PgPool,
        catway_number: i32,
    ) -> Result<Option<CatwayRecord>, sqlx::Error> {
        sqlx::query_as::<_, CatwayRecord>(
            r#"
            SELECT id, catway_number, catway_type, catway_state, boat_name,
                   created_at, updated_at
            FROM catways
            WHERE catway_number = $1
            "#,
        )
        .bind(catway_number)
        .fetch_optional(pool)
        .await
    }

    /// List all catways ordered by number
    pub async fn find_all(pool: &PgPool) -> Result<Vec<CatwayRecord>, sqlx::Error> {
        sqlx::query_as::<_, CatwayRecord>(
            r#"
            SELECT id, catway_number, catway_type, catway_state, boat_name,
                   created_at, updated_at
            FROM catways
            ORDER BY catway_number ASC
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Partial field overwrite; returns None if the catway does not exist
    pub async fn update(
        pool: &PgPool,
        id: Uuid,
        fields: UpdateCatwayFields,
    ) -> Result<Option<CatwayRecord>, sqlx::Error> {
        sqlx::query_as::<_, CatwayRecord>(
            r#"
            UPDATE catways SET
                catway_state = COALESCE($2, catway_state),
                boat_name = COALESCE($3, boat_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, catway_number, catway_type, catway_state, boat_name,
                      created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(fields.catway_state)
        .bind(fields.boat_name)
        .fetch_optional(pool)
        .await
    }

    /// Delete by ID; true if a row was removed
    pub async fn delete(pool: &PgPool, id: Uuid) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM catways WHERE id = $1")
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
