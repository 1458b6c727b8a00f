//! Columns and read models shared by several tables.

use gigboard_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Creation and modification times, populated by the database
/// (`DEFAULT NOW()` plus the `set_updated_at` trigger).
///
/// Embedded in entity rows with `#[sqlx(flatten)]` / `#[serde(flatten)]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromRow, Serialize)]
pub struct RecordTimestamps {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A listed venue or artist with its city and upcoming-show count, as
/// returned by list and search queries.
#[derive(Debug, Clone, FromRow)]
pub struct SummaryRow {
    pub id: DbId,
    pub name: String,
    pub location_id: DbId,
    pub city: String,
    pub state: String,
    pub num_upcoming_shows: i64,
}
