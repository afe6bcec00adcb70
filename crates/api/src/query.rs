//! Query parameter types for the list endpoints.
//!
//! Values are clamped into a [`Page`] with the configured maximum; an
//! unknown `sort` value is rejected by the extractor.

use dialogue_core::listing::{CharacterSort, ConversationSort, Page};
use serde::Deserialize;

/// `?name=&sort=&limit=&offset=` for `GET /characters`.
#[derive(Debug, Default, Deserialize)]
pub struct CharacterListParams {
    pub name: Option<String>,
    #[serde(default)]
    pub sort: CharacterSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl CharacterListParams {
    pub fn page(&self, max_limit: i64) -> Page {
        Page::new(self.offset, self.limit, max_limit)
    }
}

/// `?min_lines=&sort=&limit=&offset=` for `GET /conversations`.
#[derive(Debug, Default, Deserialize)]
pub struct ConversationListParams {
    pub min_lines: Option<i64>,
    #[serde(default)]
    pub sort: ConversationSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ConversationListParams {
    pub fn page(&self, max_limit: i64) -> Page {
        Page::new(self.offset, self.limit, max_limit)
    }
}
