use axum::extract::State;
use axum::{routing::get, Json, Router};
use dialogue_db::CorpusStats;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Row counts of the loaded corpus.
    #[serde(flatten)]
    pub corpus: CorpusStats,
}

/// GET /health -- returns service status and corpus size.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let corpus = state.corpus.read().await.stats();

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        corpus,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
