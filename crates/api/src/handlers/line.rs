use axum::extract::{Path, State};
use axum::Json;
use dialogue_core::error::CoreError;
use dialogue_core::types::DbId;
use dialogue_db::models::line::ConversationLines;
use dialogue_db::repositories::LineRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/conversations/{id}/lines
pub async fn list_for_conversation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ConversationLines>>> {
    let corpus = state.corpus.read().await;
    let transcript = LineRepo::list_for_conversation(&corpus, id).ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Conversation",
            id,
        },
    ))?;
    Ok(Json(DataResponse { data: transcript }))
}
