//! Repository for the `artists` table.

use gigboard_core::search::contains_pattern;
use gigboard_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::artist::{Artist, ArtistForm};
use crate::models::common::SummaryRow;
use crate::repositories::LocationRepo;

const COLUMNS: &str = "id, name, phone, website, image_link, facebook_link, genres, \
    seeking_venue, seeking_description, location_id, created_at, updated_at";

/// Summary projection with city and upcoming-show count. `$1` is "now".
const SUMMARY_SELECT: &str = "SELECT a.id, a.name, a.location_id, l.name AS city, l.state, \
        COUNT(s.id) FILTER (WHERE s.start_time >= $1) AS num_upcoming_shows \
     FROM artists a \
     JOIN locations l ON l.id = a.location_id \
     LEFT JOIN shows s ON s.artist_id = a.id";

/// Provides CRUD and search operations for artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// Insert a new artist, resolving its location in the same transaction.
    pub async fn create(pool: &PgPool, input: &ArtistForm) -> Result<Artist, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location_id = LocationRepo::resolve_in(&mut *tx, &input.city, &input.state).await?;

        let query = format!(
            "INSERT INTO artists (name, phone, website, image_link, facebook_link, genres, \
                seeking_venue, seeking_description, location_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(location_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(artist)
    }

    /// Find an artist by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM artists WHERE id = $1");
        sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every artist with its city and upcoming-show count, by name.
    pub async fn list_summaries(
        pool: &PgPool,
        now: Timestamp,
    ) -> Result<Vec<SummaryRow>, sqlx::Error> {
        let query = format!("{SUMMARY_SELECT} GROUP BY a.id, l.id ORDER BY a.name, a.id");
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
             WHERE a.name ILIKE $2 ESCAPE '\\' \
             GROUP BY a.id, l.id ORDER BY a.name, a.id"
        );
        sqlx::query_as::<_, SummaryRow>(&query)
            .bind(now)
            .bind(contains_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable field of an artist, re-resolving its location.
    ///
    /// Returns `None` (and writes nothing) if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ArtistForm,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let location_id = LocationRepo::resolve_in(&mut *tx, &input.city, &input.state).await?;

        let query = format!(
            "UPDATE artists SET \
                name = $2, \
                phone = $3, \
                website = $4, \
                image_link = $5, \
                facebook_link = $6, \
                genres = $7, \
                seeking_venue = $8, \
                seeking_description = $9, \
                location_id = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let artist = sqlx::query_as::<_, Artist>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.image_link)
            .bind(&input.facebook_link)
            .bind(&input.genres)
            .bind(input.seeking_venue)
            .bind(&input.seeking_description)
            .bind(location_id)
            .fetch_optional(&mut *tx)
            .await?;

        if artist.is_some() {
            tx.commit().await?;
        }
        Ok(artist)
    }

    /// Delete an artist by ID. Returns `true` if a row was removed.
    ///
    /// Fails with a foreign-key violation if the artist still has shows.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM artists WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of artists.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM artists")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
