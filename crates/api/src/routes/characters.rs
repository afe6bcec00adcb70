use axum::routing::get;
use axum::Router;

use crate::handlers::character;
use crate::state::AppState;

/// Routes mounted at `/characters`.
///
/// ```text
/// GET    /                   -> list
/// GET    /by-name/{name}     -> find_by_name
/// GET    /{id}               -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(character::list))
        .route("/by-name/{name}", get(character::find_by_name))
        .route("/{id}", get(character::get_by_id))
}
