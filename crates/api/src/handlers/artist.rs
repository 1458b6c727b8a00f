//! Handlers for the `/artists` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Form, Json};
use chrono::Utc;
use gigboard_core::error::CoreError;
use gigboard_core::types::DbId;
use gigboard_core::validation::validate_form;
use gigboard_db::models::artist::ArtistForm;
use gigboard_db::repositories::{ArtistRepo, LocationRepo, ShowRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::query::{FormPage, SearchForm};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::views::{self, ArtistArea, ArtistDetail, SearchResults};

/// GET /artists
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ArtistArea>>>> {
    let rows = ArtistRepo::list_summaries(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: views::artist_areas(&rows),
    }))
}

/// POST /artists/search
pub async fn search(
    State(state): State<AppState>,
    Form(input): Form<SearchForm>,
) -> AppResult<Json<SearchResults>> {
    let rows = ArtistRepo::search(&state.pool, &input.search_term, Utc::now()).await?;
    tracing::debug!(term = %input.search_term, hits = rows.len(), "Artist search");
    Ok(Json(SearchResults::new(&input.search_term, &rows)))
}

/// GET /artists/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let detail = views::load_artist_detail(&state.pool, id, Utc::now()).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /artists/create
pub async fn create_form() -> Json<DataResponse<FormPage<ArtistForm>>> {
    Json(DataResponse {
        data: FormPage::create(ArtistForm::default()),
    })
}

/// POST /artists/create
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<ArtistForm>,
) -> AppResult<(StatusCode, Json<DataResponse<ArtistDetail>>)> {
    let input = input.normalized();
    validate_form(&input)?;

    let artist = ArtistRepo::create(&state.pool, &input).await?;
    tracing::info!(artist_id = artist.id, name = %artist.name, "Artist listed");

    let detail = views::artist_detail(&state.pool, artist, Utc::now()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: detail })))
}

/// GET /artists/{id}/edit
pub async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<FormPage<ArtistForm>>>> {
    let artist = ArtistRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    let location = LocationRepo::find_by_id(&state.pool, artist.location_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Internal(format!(
                "Artist {id} references missing location {}",
                artist.location_id
            )))
        })?;

    Ok(Json(DataResponse {
        data: FormPage::edit(id, ArtistForm::from_artist(&artist, &location)),
    }))
}

/// POST /artists/{id}/edit
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<ArtistForm>,
) -> AppResult<Json<DataResponse<ArtistDetail>>> {
    let input = input.normalized();
    validate_form(&input)?;

    let artist = ArtistRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Artist", id))?;
    tracing::info!(artist_id = artist.id, "Artist updated");

    let detail = views::artist_detail(&state.pool, artist, Utc::now()).await?;
    Ok(Json(DataResponse { data: detail }))
}

/// DELETE /artists/{id}
///
/// Refused with 409 while the artist still has shows.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let shows = ShowRepo::count_for_artist(&state.pool, id).await?;
    if shows > 0 {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Artist {id} has {shows} show(s) and cannot be deleted"
        ))));
    }

    if ArtistRepo::delete(&state.pool, id).await? {
        tracing::info!(artist_id = id, "Artist deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Artist", id))
    }
}
