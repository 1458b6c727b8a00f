//! Location entity model.

use gigboard_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::common::RecordTimestamps;

/// A row from the `locations` table. `(name, state)` is unique.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Location {
    pub id: DbId,
    /// City name.
    pub name: String,
    /// Two-letter state code.
    pub state: String,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: RecordTimestamps,
}
