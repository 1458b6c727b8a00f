//! Upcoming/past partitioning of a venue's or artist's shows.
//!
//! The repository fetches one [`ShowEntry`] per show, already projected to
//! the counterpart (the artist when viewing a venue, the venue when viewing
//! an artist). [`aggregate`] splits them around a reference instant.

use serde::Serialize;

use crate::types::{DbId, Timestamp};

/// The other party of a show, as seen from its owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Counterpart {
    Artist {
        artist_id: DbId,
        artist_name: String,
        artist_image_link: Option<String>,
    },
    Venue {
        venue_id: DbId,
        venue_name: String,
        venue_image_link: Option<String>,
    },
}

/// One show projected for display on its owner's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowEntry {
    pub id: DbId,
    pub start_time: Timestamp,
    #[serde(flatten)]
    pub counterpart: Counterpart,
}

/// A show list split around a reference instant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShowSplit {
    pub upcoming_shows: Vec<ShowEntry>,
    pub past_shows: Vec<ShowEntry>,
    pub upcoming_shows_count: usize,
    pub past_shows_count: usize,
}

/// Whether a show starting at `start_time` counts as upcoming at `now`.
///
/// A show starting exactly at `now` is upcoming, so every show falls in
/// exactly one bucket.
pub fn is_upcoming(start_time: Timestamp, now: Timestamp) -> bool {
    start_time >= now
}

/// Partition `shows` into upcoming and past relative to `now`.
///
/// Both lists are ordered by start time ascending, ties broken by show id.
/// Counts always equal the list lengths.
pub fn aggregate(mut shows: Vec<ShowEntry>, now: Timestamp) -> ShowSplit {
    shows.sort_by(|a, b| a.start_time.cmp(&b.start_time).then(a.id.cmp(&b.id)));

    let (upcoming_shows, past_shows): (Vec<_>, Vec<_>) = shows
        .into_iter()
        .partition(|s| is_upcoming(s.start_time, now));

    ShowSplit {
        upcoming_shows_count: upcoming_shows.len(),
        past_shows_count: past_shows.len(),
        upcoming_shows,
        past_shows,
    }
}
