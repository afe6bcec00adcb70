//! Movie entity.

use dialogue_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::codec::column;

/// A row from the `movies` table. Immutable after load.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Movie {
    #[serde(rename = "movie_id", deserialize_with = "column::id")]
    pub id: DbId,
    pub title: String,
    #[serde(deserialize_with = "column::nullable")]
    pub year: Option<i32>,
    #[serde(deserialize_with = "column::nullable")]
    pub imdb_rating: Option<f64>,
    #[serde(deserialize_with = "column::nullable")]
    pub imdb_votes: Option<i64>,
    #[serde(deserialize_with = "column::nullable_text")]
    pub raw_script_url: Option<String>,
}
