//! Repository for the `locations` table.
//!
//! Locations are created lazily the first time a venue or artist names a
//! `(city, state)` pair and are never updated or deleted afterwards.

use gigboard_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::location::Location;

const COLUMNS: &str = "id, name, state, created_at, updated_at";

/// Provides the location registry and lookups.
pub struct LocationRepo;

impl LocationRepo {
    /// Resolve `(name, state)` to a location id, creating the row on first use.
    pub async fn resolve(pool: &PgPool, name: &str, state: &str) -> Result<DbId, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::resolve_in(&mut *conn, name, state).await
    }

    /// Resolve within an existing connection or transaction.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING` against
    /// `uq_locations_name_state`; if a concurrent request created the pair
    /// first, the committed row is re-read instead of inserting a duplicate.
    pub async fn resolve_in(
        conn: &mut PgConnection,
        name: &str,
        state: &str,
    ) -> Result<DbId, sqlx::Error> {
        if let Some(id) = Self::find_id(&mut *conn, name, state).await? {
            return Ok(id);
        }

        let inserted: Option<(DbId,)> = sqlx::query_as(
            "INSERT INTO locations (name, state) VALUES ($1, $2) \
             ON CONFLICT (name, state) DO NOTHING \
             RETURNING id",
        )
        .bind(name)
        .bind(state)
        .fetch_optional(&mut *conn)
        .await?;

        match inserted {
            Some((id,)) => {
                tracing::debug!(location_id = id, city = name, state, "Created location");
                Ok(id)
            }
            None => Self::find_id(&mut *conn, name, state)
                .await?
                .ok_or(sqlx::Error::RowNotFound),
        }
    }

    async fn find_id(
        conn: &mut PgConnection,
        name: &str,
        state: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM locations WHERE name = $1 AND state = $2")
                .bind(name)
                .bind(state)
                .fetch_optional(conn)
                .await?;
        Ok(row.map(|(id,)| id))
    }

    /// Find a location by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Locations with at least one venue, ordered by state, then city.
    pub async fn list_with_venues(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM locations l \
             WHERE EXISTS (SELECT 1 FROM venues v WHERE v.location_id = l.id) \
             ORDER BY state, name, id"
        );
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Locations with at least one artist, ordered by state, then city.
    pub async fn list_with_artists(pool: &PgPool) -> Result<Vec<Location>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM locations l \
             WHERE EXISTS (SELECT 1 FROM artists a WHERE a.location_id = l.id) \
             ORDER BY state, name, id"
        );
        sqlx::query_as::<_, Location>(&query).fetch_all(pool).await
    }

    /// Total number of locations.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM locations")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
