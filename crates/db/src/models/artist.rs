//! Artist entity model and form DTO.

use gigboard_core::types::DbId;
use gigboard_core::validation::{
    genre_list, normalize_list, normalize_optional, not_blank, state_code,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::common::RecordTimestamps;
use crate::models::location::Location;

/// An artist row from the `artists` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Artist {
    pub id: DbId,
    pub name: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub location_id: DbId,
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub timestamps: RecordTimestamps,
}

/// Submitted artist form, used for both create and edit.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ArtistForm {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(custom(function = "not_blank"))]
    pub city: String,
    #[validate(custom(function = "state_code"))]
    pub state: String,
    pub phone: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub image_link: Option<String>,
    #[validate(custom(function = "genre_list"))]
    pub genres: Vec<String>,
    #[validate(url(message = "Invalid URL."))]
    pub facebook_link: Option<String>,
    #[validate(url(message = "Invalid URL."))]
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

impl ArtistForm {
    /// Trim text fields and turn blank optional fields into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            state: self.state.trim().to_string(),
            phone: normalize_optional(self.phone),
            image_link: normalize_optional(self.image_link),
            genres: normalize_list(self.genres),
            facebook_link: normalize_optional(self.facebook_link),
            website: normalize_optional(self.website),
            seeking_venue: self.seeking_venue,
            seeking_description: normalize_optional(self.seeking_description),
        }
    }

    /// Prefill the edit form from a stored artist and its location.
    pub fn from_artist(artist: &Artist, location: &Location) -> Self {
        Self {
            name: artist.name.clone(),
            city: location.name.clone(),
            state: location.state.clone(),
            phone: artist.phone.clone(),
            image_link: artist.image_link.clone(),
            genres: artist.genres.clone(),
            facebook_link: artist.facebook_link.clone(),
            website: artist.website.clone(),
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description.clone(),
        }
    }
}
