//! Display-ready projections of stored records.
//!
//! Detail views combine an entity with its location's city/state and the
//! upcoming/past split of its shows. A missing related row is an internal
//! error, not a recoverable condition.

use gigboard_core::error::CoreError;
use gigboard_core::grouping::{group_by_city, CityKey};
use gigboard_core::shows::{self, ShowSplit};
use gigboard_core::types::{DbId, Timestamp};
use gigboard_db::models::artist::Artist;
use gigboard_db::models::common::SummaryRow;
use gigboard_db::models::location::Location;
use gigboard_db::models::venue::Venue;
use gigboard_db::repositories::{ArtistRepo, LocationRepo, ShowRepo, VenueRepo};
use gigboard_db::DbPool;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/* --------------------------------------------------------------------------
   Detail views
   -------------------------------------------------------------------------- */

/// A venue with its city and show split.
#[derive(Debug, Clone, Serialize)]
pub struct VenueDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub address: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowSplit,
    pub num_upcoming_shows: usize,
}

impl VenueDetail {
    pub fn new(venue: Venue, location: &Location, shows: ShowSplit) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            genres: venue.genres,
            address: venue.address,
            city: location.name.clone(),
            state: location.state.clone(),
            phone: venue.phone,
            website: venue.website,
            facebook_link: venue.facebook_link,
            seeking_talent: venue.seeking_talent,
            seeking_description: venue.seeking_description,
            image_link: venue.image_link,
            num_upcoming_shows: shows.upcoming_shows_count,
            shows,
        }
    }
}

/// An artist with its city and show split.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistDetail {
    pub id: DbId,
    pub name: String,
    pub genres: Vec<String>,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub facebook_link: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub image_link: Option<String>,
    #[serde(flatten)]
    pub shows: ShowSplit,
    pub num_upcoming_shows: usize,
}

impl ArtistDetail {
    pub fn new(artist: Artist, location: &Location, shows: ShowSplit) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            genres: artist.genres,
            city: location.name.clone(),
            state: location.state.clone(),
            phone: artist.phone,
            website: artist.website,
            facebook_link: artist.facebook_link,
            seeking_venue: artist.seeking_venue,
            seeking_description: artist.seeking_description,
            image_link: artist.image_link,
            num_upcoming_shows: shows.upcoming_shows_count,
            shows,
        }
    }
}

/// Fetch the location a venue or artist points at.
async fn required_location(pool: &DbPool, location_id: DbId) -> AppResult<Location> {
    LocationRepo::find_by_id(pool, location_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Location {location_id} referenced but missing"
            )))
        })
}

/// Serialize an already-loaded venue.
pub async fn venue_detail(pool: &DbPool, venue: Venue, now: Timestamp) -> AppResult<VenueDetail> {
    let location = required_location(pool, venue.location_id).await?;
    let split = shows::aggregate(ShowRepo::list_for_venue(pool, venue.id).await?, now);
    Ok(VenueDetail::new(venue, &location, split))
}

/// Load and serialize a venue by id, 404 if absent.
pub async fn load_venue_detail(pool: &DbPool, id: DbId, now: Timestamp) -> AppResult<VenueDetail> {
    let venue = VenueRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    venue_detail(pool, venue, now).await
}

/// Serialize an already-loaded artist.
pub async fn artist_detail(
    pool: &DbPool,
    artist: Artist,
    now: Timestamp,
) -> AppResult<ArtistDetail> {
    let location = required_location(pool, artist.location_id).await?;
    let split = shows::aggregate(ShowRepo::list_for_artist(pool, artist.id).await?, now);
    Ok(ArtistDetail::new(artist, &location, split))
}

/// Load and serialize an artist by id, 404 if absent.
pub async fn load_artist_detail(
    pool: &DbPool,
    id: DbId,
    now: Timestamp,
) -> AppResult<ArtistDetail> {
    let artist = ArtistRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    artist_detail(pool, artist, now).await
}

/* --------------------------------------------------------------------------
   Summaries, city groups and search results
   -------------------------------------------------------------------------- */

/// One row of a list or search result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub id: DbId,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl From<&SummaryRow> for Summary {
    fn from(row: &SummaryRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            num_upcoming_shows: row.num_upcoming_shows,
        }
    }
}

/// Venues in one city.
#[derive(Debug, Clone, Serialize)]
pub struct VenueArea {
    pub id: DbId,
    pub city: String,
    pub state: String,
    pub venues: Vec<Summary>,
}

/// Artists in one city.
#[derive(Debug, Clone, Serialize)]
pub struct ArtistArea {
    pub id: DbId,
    pub city: String,
    pub state: String,
    pub artists: Vec<Summary>,
}

fn city_groups(rows: &[SummaryRow]) -> Vec<(CityKey, Vec<Summary>)> {
    group_by_city(rows.iter().map(|row| {
        let key = CityKey {
            location_id: row.location_id,
            city: row.city.clone(),
            state: row.state.clone(),
        };
        (key, Summary::from(row))
    }))
}

/// Group venue summaries by city.
pub fn venue_areas(rows: &[SummaryRow]) -> Vec<VenueArea> {
    city_groups(rows)
        .into_iter()
        .map(|(key, venues)| VenueArea {
            id: key.location_id,
            city: key.city,
            state: key.state,
            venues,
        })
        .collect()
}

/// Group artist summaries by city.
pub fn artist_areas(rows: &[SummaryRow]) -> Vec<ArtistArea> {
    city_groups(rows)
        .into_iter()
        .map(|(key, artists)| ArtistArea {
            id: key.location_id,
            city: key.city,
            state: key.state,
            artists,
        })
        .collect()
}

/// `{ count, data }` search response, echoing the term as it was matched
/// (trimmed).
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults {
    pub count: usize,
    pub data: Vec<Summary>,
    pub search_term: String,
}

impl SearchResults {
    pub fn new(search_term: &str, rows: &[SummaryRow]) -> Self {
        let data: Vec<Summary> = rows.iter().map(Summary::from).collect();
        Self {
            count: data.len(),
            data,
            search_term: search_term.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: DbId, name: &str, location_id: DbId, city: &str, state: &str) -> SummaryRow {
        SummaryRow {
            id,
            name: name.to_string(),
            location_id,
            city: city.to_string(),
            state: state.to_string(),
            num_upcoming_shows: id,
        }
    }

    #[test]
    fn venue_areas_group_by_location() {
        let rows = vec![
            row(1, "Mohawk", 10, "Austin", "TX"),
            row(2, "Park Square Live", 20, "San Francisco", "CA"),
            row(3, "The Grand Hall", 10, "Austin", "TX"),
        ];
        let areas = venue_areas(&rows);

        assert_eq!(areas.len(), 2);
        assert_eq!(areas[0].city, "San Francisco");
        assert_eq!(areas[1].id, 10);
        let names: Vec<&str> = areas[1].venues.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["Mohawk", "The Grand Hall"]);
    }

    #[test]
    fn search_count_matches_data() {
        let rows = vec![row(1, "A", 1, "Austin", "TX"), row(2, "B", 1, "Austin", "TX")];
        let results = SearchResults::new("", &rows);
        assert_eq!(results.count, 2);
        assert_eq!(results.data.len(), 2);
    }

    #[test]
    fn search_term_is_echoed_trimmed() {
        let results = SearchResults::new("  hall ", &[]);
        assert_eq!(results.search_term, "hall");
        assert_eq!(results.count, 0);
    }

    #[test]
    fn detail_serializes_flat_show_fields() {
        let split = ShowSplit::default();
        let venue = Venue {
            id: 1,
            name: "The Grand Hall".into(),
            address: "1 Main St".into(),
            phone: None,
            website: None,
            image_link: None,
            facebook_link: None,
            genres: vec!["Jazz".into()],
            seeking_talent: false,
            seeking_description: None,
            location_id: 10,
            timestamps: gigboard_db::models::common::RecordTimestamps {
                created_at: chrono::Utc::now(),
                updated_at: chrono::Utc::now(),
            },
        };
        let location = Location {
            id: 10,
            name: "Austin".into(),
            state: "TX".into(),
            timestamps: venue.timestamps,
        };

        let json = serde_json::to_value(VenueDetail::new(venue, &location, split)).unwrap();
        assert_eq!(json["city"], "Austin");
        assert_eq!(json["state"], "TX");
        assert_eq!(json["upcoming_shows_count"], 0);
        assert_eq!(json["past_shows_count"], 0);
        assert_eq!(json["num_upcoming_shows"], 0);
        assert!(json["upcoming_shows"].as_array().unwrap().is_empty());
        assert!(json.get("shows").is_none());
    }
}
