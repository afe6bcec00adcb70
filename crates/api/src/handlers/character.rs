//! Handlers for the `/characters` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use dialogue_core::error::CoreError;
use dialogue_core::types::DbId;
use dialogue_db::models::character::{CharacterDetail, CharacterSummary, NameMatch};
use dialogue_db::repositories::character_repo::CharacterFilter;
use dialogue_db::repositories::CharacterRepo;

use crate::error::{AppError, AppResult};
use crate::query::CharacterListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/characters/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CharacterDetail>>> {
    let corpus = state.corpus.read().await;
    let detail = CharacterRepo::find_detail(&corpus, id).ok_or(AppError::Core(
        CoreError::NotFound {
            entity: "Character",
            id,
        },
    ))?;
    Ok(Json(DataResponse { data: detail }))
}

/// GET /api/v1/characters
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<CharacterListParams>,
) -> AppResult<Json<DataResponse<Vec<CharacterSummary>>>> {
    let page = params.page(state.config.max_page_limit);
    let filter = CharacterFilter {
        name: params.name,
        sort: params.sort,
    };

    let corpus = state.corpus.read().await;
    let summaries = CharacterRepo::list(&corpus, &filter, page);
    Ok(Json(DataResponse { data: summaries }))
}

/// GET /api/v1/characters/by-name/{name}
///
/// Exact match after trimming and upper-casing; every character sharing
/// the name is returned.
pub async fn find_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> AppResult<Json<DataResponse<Vec<NameMatch>>>> {
    let corpus = state.corpus.read().await;
    let matches = CharacterRepo::find_by_name(&corpus, &name);
    if matches.is_empty() {
        return Err(AppError::Core(CoreError::NameNotFound {
            entity: "Character",
            name,
        }));
    }
    Ok(Json(DataResponse { data: matches }))
}
