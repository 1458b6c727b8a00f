//! Repository for the `shows` table.

use gigboard_core::shows::ShowEntry;
use gigboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::show::{CounterpartRow, CreateShow, Show, ShowListing};

const COLUMNS: &str = "id, start_time, venue_id, artist_id, created_at, updated_at";

/// Show joined with both parties.
const LISTING_SELECT: &str = "SELECT s.id, s.start_time, \
        s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, \
        s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link \
     FROM shows s \
     JOIN venues v ON v.id = s.venue_id \
     JOIN artists a ON a.id = s.artist_id";

/// Provides create and read operations for shows. Shows are immutable.
pub struct ShowRepo;

impl ShowRepo {
    /// Insert a new show, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateShow) -> Result<Show, sqlx::Error> {
        let query = format!(
            "INSERT INTO shows (start_time, venue_id, artist_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Show>(&query)
            .bind(input.start_time)
            .bind(input.venue_id)
            .bind(input.artist_id)
            .fetch_one(pool)
            .await
    }

    /// Find a show joined with both parties.
    pub async fn find_listing(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} WHERE s.id = $1");
        sqlx::query_as::<_, ShowListing>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every show with both parties, soonest first.
    pub async fn list_listings(pool: &PgPool) -> Result<Vec<ShowListing>, sqlx::Error> {
        let query = format!("{LISTING_SELECT} ORDER BY s.start_time, s.id");
        sqlx::query_as::<_, ShowListing>(&query)
            .fetch_all(pool)
            .await
    }

    /// All shows at a venue, each projected to its artist.
    pub async fn list_for_venue(
        pool: &PgPool,
        venue_id: DbId,
    ) -> Result<Vec<ShowEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CounterpartRow>(
            "SELECT s.id, s.start_time, a.id AS counterpart_id, \
                a.name AS counterpart_name, a.image_link AS counterpart_image_link \
             FROM shows s \
             JOIN artists a ON a.id = s.artist_id \
             WHERE s.venue_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(venue_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(CounterpartRow::into_artist_entry).collect())
    }

    /// All shows by an artist, each projected to its venue.
    pub async fn list_for_artist(
        pool: &PgPool,
        artist_id: DbId,
    ) -> Result<Vec<ShowEntry>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CounterpartRow>(
            "SELECT s.id, s.start_time, v.id AS counterpart_id, \
                v.name AS counterpart_name, v.image_link AS counterpart_image_link \
             FROM shows s \
             JOIN venues v ON v.id = s.venue_id \
             WHERE s.artist_id = $1 \
             ORDER BY s.start_time, s.id",
        )
        .bind(artist_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(CounterpartRow::into_venue_entry).collect())
    }

    /// Number of shows booked at a venue.
    pub async fn count_for_venue(pool: &PgPool, venue_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE venue_id = $1")
            .bind(venue_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Number of shows booked for an artist.
    pub async fn count_for_artist(pool: &PgPool, artist_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shows WHERE artist_id = $1")
            .bind(artist_id)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
