//! Repository for the `venues` table.

use gigboard_core::search::contains_pattern;
use gigboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::common::SummaryRow;
use crate::models::venue::{Venue, VenueForm};
use crate::repositories::LocationRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, address, phone, website, image_link, facebook_link, genres, \
    seeking_talent, seeking_description, location_id, created_at, updated_at";

/// Summary projection with city and upcoming-show count. `$1` is "now".
const SUMMARY_SELECT: &str = "SELECT v.id, v.name, v.location_id, l.name AS city, l.state, \
        COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
     FROM venues v \
     JOIN locations l ON l.id = v.location_id \
     LEFT JOIN shows s ON s.venue_id = v.id";

/// Provides CRUD and search operations for venues.
pub struct VenueRepo;

impl VenueRepo {
    /// Insert a new venue, resolving its location in the same transaction.
    pub async fn create(pool: &PgPool, input: &VenueForm) -> Result<Venue, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location_id = LocationRepo::resolve_in(&mut *tx, &input.city, &input.state).await?;

        let query = format!(
            "INSERT INTO venues (name, address, phone, website, image_link, facebook_link, \
                genres, seeking_talent, seeking_description, location_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(location_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(venue)
    }

    /// Find a venue by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Venue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM venues WHERE id = $1");
        sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every venue with its city and upcoming-show count, by name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<SummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY v.id, l.id ORDER BY v.name, v.id");
        sqlx::query_as::<_, SummaryRow>(&query)
            .bind(now)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on name. An empty term matches all.
    pub async fn search(
        pool: &PgPool,
        term: &str,
        now: Timestamp,
    ) -> Result<Vec<SummaryRow>, sqlx::Error> {
        let query = format!(
            "{SUMMARY_SELECT} \
             WHERE v.name ILIKE $2 ESCAPE '\\' \
             GROUP BY v.id, l.id ORDER BY v.name, v.id"
        );
        sqlx::query_as::<_, SummaryRow>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of a venue, re-resolving its location.
    ///
    /// Returns `None` (and writes nothing) if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &VenueForm,
    ) -> Result<Option<Venue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location_id = LocationRepo::resolve_in(&mut *tx, &input.city, &input.state).await?;

        let query = format!(
            "UPDATE venues SET \
                name = $2, \
                address = $3, \
                phone = $4, \
                website = $5, \
                image_link = $6, \
                facebook_link = $7, \
                genres = $8, \
                seeking_talent = $9, \
                seeking_description = $10, \
                location_id = $11 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let venue = sqlx::query_as::<_, Venue>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_talent)
            .bind(&input.seeking_description)
            .bind(location_id)
            .fetch_optional(&mut *tx)
            .await?;

        // Dropping an uncommitted transaction rolls back the location insert.
        if venue.is_some() {
            tx.commit().await?;
        }
        Ok(venue)
    }

    /// Delete a venue by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if the venue still has shows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM venues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of venues.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM venues")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
