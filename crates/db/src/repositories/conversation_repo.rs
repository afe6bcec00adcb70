//! Queries over conversations.

use dialogue_core::listing::{cmp_missing_last, ConversationSort, Page};

use crate::models::conversation::{Conversation, ConversationSummary};
use crate::store::CorpusStore;

/// Filters for [`ConversationRepo::list`].
#[derive(Debug, Clone, Default)]
pub struct ConversationFilter {
    /// Keep conversations with at least this many lines.
    pub min_lines: Option<i64>,
    pub sort: ConversationSort,
}

pub struct ConversationRepo;

impl ConversationRepo {
    /// Filtered, sorted, paginated conversation summaries.
    pub fn list(
        store: &CorpusStore,
        filter: &ConversationFilter,
        page: Page,
    ) -> Vec<ConversationSummary> {
        let min_lines = filter.min_lines.unwrap_or(0);

        let mut matches: Vec<&Conversation> = store
            .conversations()
            .values()
            .filter(|c| c.line_count >= min_lines)
            .collect();

        match filter.sort {
            ConversationSort::LineCount => matches.sort_by(|a, b| b.line_count.cmp(&a.line_count)),
            ConversationSort::Title => matches.sort_by(|a, b| {
                cmp_missing_last(store.movie_title(a.movie_id), store.movie_title(b.movie_id))
            }),
            // Already in id order.
            ConversationSort::ConversationId => {}
        }

        page.apply(matches)
            .into_iter()
            .map(|c| ConversationSummary {
                conversation_id: c.id,
                title: store.movie_title(c.movie_id).map(str::to_string),
                character1: store.character_name(c.character1_id).map(str::to_string),
                character2: store.character_name(c.character2_id).map(str::to_string),
                line_count: c.line_count,
            })
            .collect()
    }
}
