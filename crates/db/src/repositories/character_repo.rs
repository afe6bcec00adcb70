//! Queries over characters.

use std::collections::BTreeMap;

use dialogue_core::listing::{cmp_missing_last, CharacterSort, Page};
use dialogue_core::names::{name_contains, normalize_name};
use dialogue_core::types::DbId;

use crate::models::character::{
    Character, CharacterDetail, CharacterSummary, CoSpeaker, NameMatch, NameMatchConversation,
};
use crate::store::CorpusStore;

/// Filters for [`CharacterRepo::list`].
#[derive(Debug, Clone, Default)]
pub struct CharacterFilter {
    /// Case-insensitive substring of the name. Blank means no filter.
    pub name: Option<String>,
    pub sort: CharacterSort,
}

pub struct CharacterRepo;

impl CharacterRepo {
    /// Character detail plus everyone it talks to in its own movie, ranked
    /// by the total lines of the conversations they share.
    pub fn find_detail(store: &CorpusStore, id: DbId) -> Option<CharacterDetail> {
        let character = store.character(id)?;

        let mut together: BTreeMap<DbId, i64> = BTreeMap::new();
        for conversation_id in store.conversations_of(id) {
            let Some(conversation) = store.conversation(*conversation_id) else {
                continue;
            };
            if conversation.movie_id.is_none() || conversation.movie_id != character.movie_id {
                continue;
            }
            match conversation.counterpart(id) {
                Some(other) if other != id => {
                    *together.entry(other).or_default() += conversation.line_count;
                }
                _ => {}
            }
        }

        // Stable sort over id order: ties keep ascending counterpart id.
        let mut ranked: Vec<(DbId, i64)> = together.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let top_conversations = ranked
            .into_iter()
            .map(|(other_id, number_of_lines_together)| {
                let other = store.character(other_id);
                CoSpeaker {
                    character_id: other_id,
                    character: other.and_then(|c| c.name.clone()),
                    gender: other.and_then(|c| c.gender.clone()),
                    number_of_lines_together,
                }
            })
            .collect();

        Some(CharacterDetail {
            character_id: character.id,
            character: character.name.clone(),
            movie: store.movie_title(character.movie_id).map(str::to_string),
            gender: character.gender.clone(),
            age: character.age,
            number_of_lines: character.lines,
            top_conversations,
        })
    }

    /// Filtered, sorted, paginated character summaries.
    pub fn list(store: &CorpusStore, filter: &CharacterFilter, page: Page) -> Vec<CharacterSummary> {
        let needle = filter.name.as_deref().map(str::trim).filter(|n| !n.is_empty());

        let mut matches: Vec<&Character> = store
            .characters()
            .values()
            .filter(|c| needle.map_or(true, |n| name_contains(c.name.as_deref(), n)))
            .collect();

        match filter.sort {
            CharacterSort::Character => {
                matches.sort_by(|a, b| cmp_missing_last(a.name.as_deref(), b.name.as_deref()));
            }
            CharacterSort::Movie => matches.sort_by(|a, b| {
                cmp_missing_last(store.movie_title(a.movie_id), store.movie_title(b.movie_id))
            }),
            CharacterSort::NumberOfLines => matches.sort_by(|a, b| b.lines.cmp(&a.lines)),
        }

        page.apply(matches)
            .into_iter()
            .map(|c| CharacterSummary {
                character_id: c.id,
                character: c.name.clone(),
                movie: store.movie_title(c.movie_id).map(str::to_string),
                number_of_lines: c.lines,
            })
            .collect()
    }

    /// Every character whose normalized name equals `name`, with the
    /// conversations each takes part in.
    pub fn find_by_name(store: &CorpusStore, name: &str) -> Vec<NameMatch> {
        let key = normalize_name(name);

        store
            .characters_named(&key)
            .iter()
            .filter_map(|id| store.character(*id))
            .map(|character| {
                let mut conversation_ids = store.conversations_of(character.id).to_vec();
                conversation_ids.sort_unstable();
                conversation_ids.dedup();

                let conversations: Vec<NameMatchConversation> = conversation_ids
                    .into_iter()
                    .filter_map(|id| store.conversation(id))
                    .map(|conversation| NameMatchConversation {
                        conversation_id: conversation.id,
                        title: store.movie_title(conversation.movie_id).map(str::to_string),
                        line_count: conversation.lines_by(character.id),
                        other_character: store
                            .character_name(conversation.counterpart(character.id))
                            .map(str::to_string),
                    })
                    .collect();

                NameMatch {
                    name: character.name.clone().unwrap_or_else(|| key.clone()),
                    character_id: character.id,
                    conversation_count: conversations.len(),
                    conversations,
                }
            })
            .collect()
    }
}
