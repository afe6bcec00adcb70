use axum::routing::post;
use axum::Router;

use crate::handlers::conversation;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// POST   /{movie_id}/conversations    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/{movie_id}/conversations", post(conversation::create))
}
