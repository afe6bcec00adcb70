pub mod characters;
pub mod conversations;
pub mod health;
pub mod movies;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                         list (name filter, sort, paging)
/// /characters/by-name/{name}          exact name lookup
/// /characters/{id}                    detail with ranked co-speakers
///
/// /conversations                      list (min_lines, sort, paging)
/// /conversations/{id}/lines           transcript in speaking order
///
/// /movies/{movie_id}/conversations    append a conversation (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/characters", characters::router())
        .nest("/conversations", conversations::router())
        .nest("/movies", movies::router())
}
