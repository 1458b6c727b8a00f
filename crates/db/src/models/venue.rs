//! Venue entity model and form DTO.

use gigboard_core::types::DbId;
use gigboard_core::validation::{
    genre_list, normalize_list, normalize_optional, not_blank, state_code,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::common::RecordTimestamps;
use crate::models::location::Location;

/// A venue row from the `venues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Venue {
    pub id: DbId,
    pub name: String,
    pub address: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub location_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: RecordTimestamps,
}

/// Submitted venue form, used for both create and edit.
///
/// Edit replaces every mutable field, so the same shape serves both. Missing
/// keys deserialize to empty values and are reported by validation rather
/// than rejected by the JSON extractor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct VenueForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(custom(function = "state_code"))]
    pub state: String,
    #[validate(custom(function = "not_blank"))]
    pub address: String,
    pub phone: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub image_link: Option<String>,
    #[validate(custom(function = "genre_list"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Invalid URL."))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

impl VenueForm {
    /// Trim text fields and turn blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            address: self.address.trim().to_string(),
            phone: normalize_optional(self.phone),
            image_link: normalize_optional(self.image_link),
            genres: normalize_list(self.genres),
            facebook_link: normalize_optional(self.facebook_link),
            website: normalize_optional(self.website),
            seeking_talent: self.seeking_talent,
            seeking_description: normalize_optional(self.seeking_description),
        }
    }

    /// Prefill the edit form from a stored venue and its location.
    pub fn from_venue(venue: &Venue, location: &Location) -> Self {
        Self {
            name: venue.name.clone(),
            city: location.name.clone(),
            state: location.state.clone(),
            address: venue.address.clone(),
            phone: venue.phone.clone(),
            image_link: venue.image_link.clone(),
            genres: venue.genres.clone(),
            facebook_link: venue.facebook_link.clone(),
            website: venue.website.clone(),
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description.clone(),
        }
    }
}
