//! Character entity and query DTOs.

use dialogue_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::codec::column;

/// A row from the `characters` table plus its derived line count.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Character {
    #[serde(rename = "character_id", deserialize_with = "column::id")]
    pub id: DbId,
    #[serde(deserialize_with = "column::nullable_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "column::nullable")]
    pub movie_id: Option<DbId>,
    #[serde(deserialize_with = "column::nullable_text")]
    pub gender: Option<String>,
    #[serde(deserialize_with = "column::nullable")]
    pub age: Option<i32>,
    /// Lines spoken across all conversations. Derived, never stored.
    #[serde(skip)]
    pub lines: i64,
}

/// Response for `GET /characters/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetail {
    pub character_id: DbId,
    pub character: Option<String>,
    pub movie: Option<String>,
    pub gender: Option<String>,
    pub age: Option<i32>,
    pub number_of_lines: i64,
    /// Characters this one talks to in its movie, most lines together first.
    pub top_conversations: Vec<CoSpeaker>,
}

/// Another character sharing conversations with the queried one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoSpeaker {
    pub character_id: DbId,
    pub character: Option<String>,
    pub gender: Option<String>,
    /// Total lines of every conversation the two share.
    pub number_of_lines_together: i64,
}

/// One row of `GET /characters`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSummary {
    pub character_id: DbId,
    pub character: Option<String>,
    pub movie: Option<String>,
    pub number_of_lines: i64,
}

/// One character matched by `GET /characters/by-name/{name}`.
#[derive(Debug, Clone, Serialize)]
pub struct NameMatch {
    pub name: String,
    pub character_id: DbId,
    pub conversation_count: usize,
    /// Ordered by conversation id.
    pub conversations: Vec<NameMatchConversation>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NameMatchConversation {
    pub conversation_id: DbId,
    pub title: Option<String>,
    /// Lines the matched character speaks in this conversation.
    pub line_count: i64,
    pub other_character: Option<String>,
}
