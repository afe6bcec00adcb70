//! Conversation entity, its derived counters and DTOs.

use dialogue_core::types::DbId;
use serde::{Deserialize, Serialize};

use crate::codec::column;

/// A row from the `conversations` table plus derived line counts.
///
/// Invariant: `character1_lines + character2_lines == line_count`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Conversation {
    #[serde(rename = "conversation_id", deserialize_with = "column::id")]
    pub id: DbId,
    #[serde(deserialize_with = "column::nullable")]
    pub character1_id: Option<DbId>,
    #[serde(deserialize_with = "column::nullable")]
    pub character2_id: Option<DbId>,
    #[serde(deserialize_with = "column::nullable")]
    pub movie_id: Option<DbId>,
    #[serde(skip)]
    pub line_count: i64,
    #[serde(skip)]
    pub character1_lines: i64,
    #[serde(skip)]
    pub character2_lines: i64,
}

impl Conversation {
    /// Backing table header, in serialization order.
    pub const COLUMNS: [&'static str; 4] =
        ["conversation_id", "character1_id", "character2_id", "movie_id"];

    /// A conversation with no lines yet.
    pub fn new(id: DbId, character1_id: DbId, character2_id: DbId, movie_id: DbId) -> Self {
        Self {
            id,
            character1_id: Some(character1_id),
            character2_id: Some(character2_id),
            movie_id: Some(movie_id),
            line_count: 0,
            character1_lines: 0,
            character2_lines: 0,
        }
    }

    /// The other participant, if `character_id` takes part and the other
    /// side is known.
    pub fn counterpart(&self, character_id: DbId) -> Option<DbId> {
        if self.character1_id == Some(character_id) {
            self.character2_id
        } else if self.character2_id == Some(character_id) {
            self.character1_id
        } else {
            None
        }
    }

    /// Lines `character_id` speaks in this conversation.
    pub fn lines_by(&self, character_id: DbId) -> i64 {
        if self.character1_id == Some(character_id) {
            self.character1_lines
        } else if self.character2_id == Some(character_id) {
            self.character2_lines
        } else {
            0
        }
    }

    /// Count one line by `speaker`. Returns `false`, leaving the counters
    /// alone, when the speaker is not a participant.
    pub(crate) fn credit(&mut self, speaker: DbId) -> bool {
        if self.character1_id == Some(speaker) {
            self.character1_lines += 1;
        } else if self.character2_id == Some(speaker) {
            self.character2_lines += 1;
        } else {
            return false;
        }
        self.line_count += 1;
        true
    }
}

/// One row of `GET /conversations`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    pub conversation_id: DbId,
    pub title: Option<String>,
    pub character1: Option<String>,
    pub character2: Option<String>,
    pub line_count: i64,
}

/// Body of `POST /movies/{movie_id}/conversations`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewConversation {
    pub character_1_id: DbId,
    pub character_2_id: DbId,
    /// In speaking order; positions become the line sort values.
    pub lines: Vec<NewLine>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NewLine {
    pub character_id: DbId,
    pub line_text: String,
}

/// Response of a successful append.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedConversation {
    pub conversation_id: DbId,
}
