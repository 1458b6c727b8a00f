pub mod artist;
pub mod health;
pub mod show;
pub mod venue;

use axum::Router;

use crate::state::AppState;

/// Build the listing route tree.
///
/// Route hierarchy:
///
/// ```text
/// /venues                      list
/// /venues/search               search (POST)
/// /venues/create               form, create
/// /venues/{id}                 get, delete
/// /venues/{id}/edit            form, update
///
/// /artists                     list
/// /artists/search              search (POST)
/// /artists/create              form, create
/// /artists/{id}                get, delete
/// /artists/{id}/edit           form, update
///
/// /shows                       list
/// /shows/create                form, create
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .nest("/venues", venue::router())
        .nest("/artists", artist::router())
        .nest("/shows", show::router())
}
