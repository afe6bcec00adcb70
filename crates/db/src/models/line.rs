//! Line entity and the conversation transcript DTO.

use dialogue_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::codec::column;

/// A row from the `lines` table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Line {
    #[serde(rename = "line_id", deserialize_with = "column::id")]
    pub id: DbId,
    #[serde(deserialize_with = "column::nullable")]
    pub character_id: Option<DbId>,
    #[serde(deserialize_with = "column::nullable")]
    pub movie_id: Option<DbId>,
    #[serde(deserialize_with = "column::nullable")]
    pub conversation_id: Option<DbId>,
    /// Position within the conversation, 0-based for appended lines.
    #[serde(deserialize_with = "column::nullable")]
    pub line_sort: Option<i64>,
    pub line_text: String,
}

impl Line {
    /// Backing table header, in serialization order.
    pub const COLUMNS: [&'static str; 6] = [
        "line_id",
        "character_id",
        "movie_id",
        "conversation_id",
        "line_sort",
        "line_text",
    ];
}

/// Response for `GET /conversations/{id}/lines`.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationLines {
    pub conversation_id: DbId,
    pub title: Option<String>,
    pub lines: Vec<SpokenLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpokenLine {
    /// Speaker name; `None` when the speaker is unnamed or unknown.
    pub name: Option<String>,
    pub line_text: String,
}
