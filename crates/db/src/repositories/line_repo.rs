//! Queries over lines.

use dialogue_core::listing::cmp_missing_last;
use dialogue_core::types::DbId;

use crate::models::line::{ConversationLines, Line, SpokenLine};
use crate::store::CorpusStore;

pub struct LineRepo;

impl LineRepo {
    /// The transcript of a conversation, ordered by line position (lines
    /// without a position last, ties in line id order).
    ///
    /// Returns `None` if the conversation does not exist.
    pub fn list_for_conversation(
        store: &CorpusStore,
        conversation_id: DbId,
    ) -> Option<ConversationLines> {
        let conversation = store.conversation(conversation_id)?;

        let mut lines: Vec<&Line> = store
            .lines_of(conversation_id)
            .iter()
            .filter_map(|id| store.line(*id))
            .collect();
        lines.sort_by(|a, b| cmp_missing_last(a.line_sort, b.line_sort));

        Some(ConversationLines {
            conversation_id,
            title: store.movie_title(conversation.movie_id).map(str::to_string),
            lines: lines
                .into_iter()
                .map(|line| SpokenLine {
                    name: store.character_name(line.character_id).map(str::to_string),
                    line_text: line.line_text.clone(),
                })
                .collect(),
        })
    }
}
