//! Show (booking) entity model, form DTO and joined read models.

use gigboard_core::error::CoreError;
use gigboard_core::shows::{Counterpart, ShowEntry};
use gigboard_core::types::{DbId, Timestamp};
use gigboard_core::validation::validate_form;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::common::RecordTimestamps;

/// A show row from the `shows` table. Shows have no update path.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Show {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub artist_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: RecordTimestamps,
}

/// Submitted show form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ShowForm {
    #[validate(required(message = "This field is required."))]
    pub artist_id: Option<DbId>,
    #[validate(required(message = "This field is required."))]
    pub venue_id: Option<DbId>,
    /// Defaults to the submission time when omitted.
    pub start_time: Option<Timestamp>,
}

/// Validated input for inserting a show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateShow {
    pub artist_id: DbId,
    pub venue_id: DbId,
    pub start_time: Timestamp,
}

impl ShowForm {
    /// Validate the form and fill in `start_time` with `now` if absent.
    pub fn into_create(self, now: Timestamp) -> Result<CreateShow, CoreError> {
        validate_form(&self)?;
        // Both ids are `required` above.
        let (Some(artist_id), Some(venue_id)) = (self.artist_id, self.venue_id) else {
            return Err(CoreError::Internal(
                "validated show form is missing an id".to_string(),
            ));
        };
        Ok(CreateShow {
            artist_id,
            venue_id,
            start_time: self.start_time.unwrap_or(now),
        })
    }
}

/// A show joined with both parties, as shown on the `/shows` listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ShowListing {
    pub id: DbId,
    pub start_time: Timestamp,
    pub venue_id: DbId,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub artist_id: DbId,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
}

/// A show joined with the party opposite the one being viewed.
#[derive(Debug, Clone, FromRow)]
pub struct CounterpartRow {
    pub id: DbId,
    pub start_time: Timestamp,
    pub counterpart_id: DbId,
    pub counterpart_name: String,
    pub counterpart_image_link: Option<String>,
}

impl CounterpartRow {
    /// Project as seen from a venue: the counterpart is the artist.
    pub fn into_artist_entry(self) -> ShowEntry {
        ShowEntry {
            id: self.id,
            start_time: self.start_time,
            counterpart: Counterpart::Artist {
                artist_id: self.counterpart_id,
                artist_name: self.counterpart_name,
                artist_image_link: self.counterpart_image_link,
            },
        }
    }

    /// Project as seen from an artist: the counterpart is the venue.
    pub fn into_venue_entry(self) -> ShowEntry {
        ShowEntry {
            id: self.id,
            start_time: self.start_time,
            counterpart: Counterpart::Venue {
                venue_id: self.counterpart_id,
                venue_name: self.counterpart_name,
                venue_image_link: self.counterpart_image_link,
            },
        }
    }
}
