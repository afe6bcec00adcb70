//! Handlers for conversations: the listing and the append.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use dialogue_core::types::DbId;
use dialogue_db::models::conversation::{
    ConversationSummary, CreatedConversation, NewConversation,
};
use dialogue_db::repositories::conversation_repo::ConversationFilter;
use dialogue_db::repositories::ConversationRepo;

use crate::error::{AppError, AppResult};
use crate::query::ConversationListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/conversations
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ConversationListParams>,
) -> AppResult<Json<DataResponse<Vec<ConversationSummary>>>> {
    let page = params.page(state.config.max_page_limit);
    let filter = ConversationFilter {
        min_lines: params.min_lines,
        sort: params.sort,
    };

    let corpus = state.corpus.read().await;
    let summaries = ConversationRepo::list(&corpus, &filter, page);
    Ok(Json(DataResponse { data: summaries }))
}

/// POST /api/v1/movies/{movie_id}/conversations
///
/// Holds the write lock for the whole append, including the table
/// rewrite, so concurrent appends are serialized and readers never see a
/// conversation without its lines.
pub async fn create(
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
    Json(input): Json<NewConversation>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedConversation>>)> {
    let mut corpus = Arc::clone(&state.corpus).write_owned().await;
    let tables = Arc::clone(&state.tables);

    let conversation_id = tokio::task::spawn_blocking(move || {
        corpus.append_conversation(movie_id, &input, tables.as_ref())
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Append task failed: {e}")))??;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedConversation { conversation_id },
        }),
    ))
}
