use axum::routing::get;
use axum::Router;

use crate::handlers::{conversation, line};
use crate::state::AppState;

/// Routes mounted at `/conversations`.
///
/// ```text
/// GET    /                -> list
/// GET    /{id}/lines      -> list_for_conversation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(conversation::list))
        .route("/{id}/lines", get(line::list_for_conversation))
}
