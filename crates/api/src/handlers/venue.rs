//! Handlers for the `/venues` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use chrono::Utc;
use gigboard_core::error::CoreError;
use gigboard_core::types::DbId;
use gigboard_core::validation::validate_form;
use gigboard_db::models::venue::VenueForm;
use gigboard_db::repositories::{LocationRepo, ShowRepo, VenueRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{FormPage, SearchForm};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, SearchResults, VenueArea, VenueDetail};

/// GET /venues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<VenueArea>>>> {
    let rows = VenueRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: views::venue_areas(&rows),
    }))
}

/// POST /venues/search
pub async fn search(
    State(state): State<AppState>,
    Form(input): Form<SearchForm>,
) -> AppResult<Json<SearchResults>> {
    let rows = VenueRepo::search(&state.pool, &input.search_term, Utc::now()).await?;
    tracing::debug!(term = %input.search_term, hits = rows.len(), "Venue search");
    Ok(Json(SearchResults::new(&input.search_term, &rows)))
}

/// GET /venues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let detail = views::load_venue_detail(&state.pool, id, Utc::now()).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /venues/create
pub async fn create_form() -> Json<DataResponse<FormPage<VenueForm>>> {
    Json(DataResponse {
        data: FormPage::create(VenueForm::default()),
    })
}

/// POST /venues/create
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<VenueForm>,
) -> AppResult<(StatusCode, Json<DataResponse<VenueDetail>>)> {
    let input = input.normalized();
    validate_form(&input)?;

    let venue = VenueRepo::create(&state.pool, &input).await?;
    tracing::info!(venue_id = venue.id, name = %venue.name, "Venue listed");

    let detail = views::venue_detail(&state.pool, venue, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /venues/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormPage<VenueForm>>>> {
    let venue = VenueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    let location = LocationRepo::find_by_id(&state.pool, venue.location_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Venue {id} references missing location {}",
                venue.location_id
            )))
        })?;

    Ok(Json(DataResponse {
        data: FormPage::edit(id, VenueForm::from_venue(&venue, &location)),
    }))
}

/// POST /venues/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<VenueForm>,
) -> AppResult<Json<DataResponse<VenueDetail>>> {
    let input = input.normalized();
    validate_form(&input)?;

    let venue = VenueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Venue", id))?;
    tracing::info!(venue_id = venue.id, "Venue updated");

    let detail = views::venue_detail(&state.pool, venue, Utc::now()).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /venues/{id}
///
/// Refused with 409 while the venue still has shows.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let shows = ShowRepo::count_for_venue(&state.pool, id).await?;
    if shows > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Venue {id} has {shows} show(s) and cannot be deleted"
        ))));
    }

    if VenueRepo::delete(&state.pool, id).await? {
        tracing::info!(venue_id = id, "Venue deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Venue", id))
    }
}
