//! Handlers for the `/shows` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use gigboard_core::error::CoreError;
use gigboard_core::validation::FieldViolation;
use gigboard_db::models::show::{ShowForm, ShowListing};
use gigboard_db::repositories::{ArtistRepo, ShowRepo, VenueRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /shows
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ShowListing>>>> {
    let shows = ShowRepo::list_listings(&state.pool).await?;
    Ok(Json(DataResponse { data: shows }))
}

/// Payload for the show form. Shows have no fixed choice lists; the client
/// picks artist and venue ids from the listings.
#[derive(Debug, Serialize)]
pub struct ShowFormPage {
    pub form: ShowForm,
}

/// GET /shows/create
///
/// The blank form is pre-filled with the current time.
pub async fn create_form() -> Json<DataResponse<ShowFormPage>> {
    let form = ShowForm {
        start_time: Some(Utc::now()),
        ..ShowForm::default()
    };
    Json(DataResponse {
        data: ShowFormPage { form },
    })
}

/// POST /shows/create
///
/// Both referenced records must exist; a dangling id is reported against
/// its form field rather than surfacing as a constraint error.
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ShowForm>,
) -> AppResult<(StatusCode, Json<DataResponse<ShowListing>>)> {
    let input = input.into_create(Utc::now())?;

    let mut violations = Vec::new();
    if ArtistRepo::find_by_id(&state.pool, input.artist_id)
        .await?
        .is_none()
    {
        violations.push(FieldViolation::new("artist_id", "Artist not found."));
    }
    if VenueRepo::find_by_id(&state.pool, input.venue_id)
        .await?
        .is_none()
    {
        violations.push(FieldViolation::new("venue_id", "Venue not found."));
    }
    if !violations.is_empty() {
        return Err(CoreError::InvalidForm(violations).into());
    }

    let show = ShowRepo::create(&state.pool, &input).await?;
    tracing::info!(
        show_id = show.id,
        artist_id = show.artist_id,
        venue_id = show.venue_id,
        start_time = %show.start_time,
        "Show listed",
    );

    let listing = ShowRepo::find_listing(&state.pool, show.id)
        .await?
        .ok_or_else(|| CoreError::Internal(format!("Show {} vanished after insert", show.id)))?;

    Ok((StatusCode::CREATED, Json(DataResponse { data: listing })))
}
