//! Read-only queries through the repositories.

mod common;

use common::fixture_store;
use dialogue_core::listing::{CharacterSort, ConversationSort, Page};
use dialogue_db::models::character::{CoSpeaker, NameMatchConversation};
use dialogue_db::models::line::SpokenLine;
use dialogue_db::repositories::character_repo::CharacterFilter;
use dialogue_db::repositories::conversation_repo::ConversationFilter;
use dialogue_db::repositories::{CharacterRepo, ConversationRepo, LineRepo};

fn page(offset: i64, limit: i64) -> Page {
    Page::new(Some(offset), Some(limit), 250)
}

// ---------------------------------------------------------------------------
// Character detail
// ---------------------------------------------------------------------------

#[test]
fn character_detail_ranks_co_speakers() {
    let (store, _) = fixture_store();
    let detail = CharacterRepo::find_detail(&store, 10).expect("RICK exists");

    assert_eq!(detail.character.as_deref(), Some("RICK"));
    assert_eq!(detail.movie.as_deref(), Some("casablanca"));
    assert_eq!(detail.number_of_lines, 4);
    assert_eq!(
        detail.top_conversations,
        vec![
            CoSpeaker {
                character_id: 11,
                character: Some("ILSA".into()),
                gender: Some("F".into()),
                number_of_lines_together: 6,
            },
            CoSpeaker {
                character_id: 12,
                character: Some("SAM".into()),
                gender: Some("M".into()),
                number_of_lines_together: 2,
            },
        ]
    );
}

#[test]
fn character_detail_includes_unnamed_co_speakers() {
    let (store, _) = fixture_store();
    let detail = CharacterRepo::find_detail(&store, 13).expect("RIPLEY exists");

    let ranked: Vec<(i64, Option<&str>, i64)> = detail
        .top_conversations
        .iter()
        .map(|c| (c.character_id, c.character.as_deref(), c.number_of_lines_together))
        .collect();
    assert_eq!(ranked, vec![(14, Some("DALLAS"), 2), (15, None, 2)]);
}

#[test]
fn silent_character_still_ranks_its_partner() {
    let (store, _) = fixture_store();
    let detail = CharacterRepo::find_detail(&store, 17).expect("JILL exists");
    assert_eq!(detail.number_of_lines, 0);
    assert_eq!(detail.top_conversations.len(), 1);
    assert_eq!(detail.top_conversations[0].number_of_lines_together, 1);
}

#[test]
fn unknown_character_detail_is_none() {
    let (store, _) = fixture_store();
    assert!(CharacterRepo::find_detail(&store, 9999).is_none());
}

// ---------------------------------------------------------------------------
// Character listing
// ---------------------------------------------------------------------------

fn listed_ids(filter: &CharacterFilter, page: Page) -> Vec<i64> {
    let (store, _) = fixture_store();
    CharacterRepo::list(&store, filter, page)
        .into_iter()
        .map(|c| c.character_id)
        .collect()
}

#[test]
fn list_characters_by_name_puts_unnamed_last() {
    let ids = listed_ids(&CharacterFilter::default(), page(0, 50));
    assert_eq!(ids, vec![14, 11, 17, 10, 13, 12, 16, 15]);
}

#[test]
fn list_characters_filter_is_case_insensitive() {
    let filter = CharacterFilter {
        name: Some("ri".into()),
        sort: CharacterSort::Character,
    };
    assert_eq!(listed_ids(&filter, page(0, 50)), vec![10, 13]);

    let filter = CharacterFilter {
        name: Some("SaM".into()),
        sort: CharacterSort::Character,
    };
    assert_eq!(listed_ids(&filter, page(0, 50)), vec![12, 16]);
}

#[test]
fn list_characters_blank_filter_matches_everyone() {
    let filter = CharacterFilter {
        name: Some("  ".into()),
        sort: CharacterSort::Character,
    };
    assert_eq!(listed_ids(&filter, page(0, 50)).len(), 8);
}

#[test]
fn list_characters_by_movie_title() {
    let filter = CharacterFilter {
        name: None,
        sort: CharacterSort::Movie,
    };
    assert_eq!(listed_ids(&filter, page(0, 50)), vec![13, 14, 15, 16, 17, 10, 11, 12]);
}

#[test]
fn list_characters_by_line_count() {
    let filter = CharacterFilter {
        name: None,
        sort: CharacterSort::NumberOfLines,
    };
    assert_eq!(listed_ids(&filter, page(0, 50)), vec![10, 11, 13, 12, 14, 15, 16, 17]);
}

#[test]
fn list_characters_pages() {
    let filter = CharacterFilter::default();
    assert_eq!(listed_ids(&filter, page(0, 3)), vec![14, 11, 17]);
    assert_eq!(listed_ids(&filter, page(3, 3)), vec![10, 13, 12]);
    assert_eq!(listed_ids(&filter, page(6, 3)), vec![16, 15]);
    assert!(listed_ids(&filter, page(9, 3)).is_empty());
}

#[test]
fn list_characters_summary_fields() {
    let (store, _) = fixture_store();
    let filter = CharacterFilter {
        name: Some("ilsa".into()),
        sort: CharacterSort::Character,
    };
    let summaries = CharacterRepo::list(&store, &filter, page(0, 50));
    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].character.as_deref(), Some("ILSA"));
    assert_eq!(summaries[0].movie.as_deref(), Some("casablanca"));
    assert_eq!(summaries[0].number_of_lines, 3);
}

// ---------------------------------------------------------------------------
// Find by name
// ---------------------------------------------------------------------------

#[test]
fn find_by_name_returns_every_match() {
    let (store, _) = fixture_store();
    let matches = CharacterRepo::find_by_name(&store, " sam ");

    assert_eq!(matches.len(), 2);

    assert_eq!(matches[0].character_id, 12);
    assert_eq!(matches[0].name, "SAM");
    assert_eq!(matches[0].conversation_count, 1);
    assert_eq!(
        matches[0].conversations,
        vec![NameMatchConversation {
            conversation_id: 101,
            title: Some("casablanca".into()),
            line_count: 1,
            other_character: Some("RICK".into()),
        }]
    );

    assert_eq!(matches[1].character_id, 16);
    assert_eq!(matches[1].conversations[0].title.as_deref(), Some("brazil"));
    assert_eq!(matches[1].conversations[0].other_character.as_deref(), Some("JILL"));
}

#[test]
fn find_by_name_lists_conversations_in_id_order() {
    let (store, _) = fixture_store();
    let matches = CharacterRepo::find_by_name(&store, "ilsa");

    let conversations: Vec<(i64, i64)> = matches[0]
        .conversations
        .iter()
        .map(|c| (c.conversation_id, c.line_count))
        .collect();
    assert_eq!(conversations, vec![(100, 1), (102, 2)]);
}

#[test]
fn find_by_name_is_exact_not_substring() {
    let (store, _) = fixture_store();
    assert!(CharacterRepo::find_by_name(&store, "RIC").is_empty());
    assert!(CharacterRepo::find_by_name(&store, "").is_empty());
}

// ---------------------------------------------------------------------------
// Conversations
// ---------------------------------------------------------------------------

fn conversation_ids(filter: &ConversationFilter, page: Page) -> Vec<i64> {
    let (store, _) = fixture_store();
    ConversationRepo::list(&store, filter, page)
        .into_iter()
        .map(|c| c.conversation_id)
        .collect()
}

#[test]
fn list_conversations_default_is_id_order() {
    let ids = conversation_ids(&ConversationFilter::default(), page(0, 50));
    assert_eq!(ids, vec![100, 101, 102, 103, 104, 105]);
}

#[test]
fn list_conversations_by_line_count_pages_without_gaps() {
    let filter = ConversationFilter {
        min_lines: None,
        sort: ConversationSort::LineCount,
    };
    let first = conversation_ids(&filter, page(0, 2));
    let second = conversation_ids(&filter, page(2, 2));
    let all = conversation_ids(&filter, page(0, 4));

    assert_eq!(first, vec![100, 102]);
    assert_eq!(second, vec![101, 103]);
    assert_eq!([first, second].concat(), all);
}

#[test]
fn list_conversations_by_title() {
    let filter = ConversationFilter {
        min_lines: None,
        sort: ConversationSort::Title,
    };
    assert_eq!(
        conversation_ids(&filter, page(0, 50)),
        vec![103, 105, 104, 100, 101, 102]
    );
}

#[test]
fn list_conversations_min_lines() {
    let filter = ConversationFilter {
        min_lines: Some(3),
        sort: ConversationSort::ConversationId,
    };
    assert_eq!(conversation_ids(&filter, page(0, 50)), vec![100, 102]);
}

#[test]
fn list_conversations_summary_fields() {
    let (store, _) = fixture_store();
    let summaries = ConversationRepo::list(&store, &ConversationFilter::default(), page(5, 1));
    let summary = &summaries[0];
    assert_eq!(summary.conversation_id, 105);
    assert_eq!(summary.title.as_deref(), Some("alien"));
    assert_eq!(summary.character1.as_deref(), Some("RIPLEY"));
    assert_eq!(summary.character2, None);
    assert_eq!(summary.line_count, 2);
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

#[test]
fn conversation_lines_follow_sort_position() {
    let (store, _) = fixture_store();
    let transcript = LineRepo::list_for_conversation(&store, 101).expect("exists");

    assert_eq!(transcript.conversation_id, 101);
    assert_eq!(transcript.title.as_deref(), Some("casablanca"));
    assert_eq!(
        transcript.lines,
        vec![
            SpokenLine {
                name: Some("RICK".into()),
                line_text: "Sam, play it".into(),
            },
            SpokenLine {
                name: Some("SAM".into()),
                line_text: "You want me to play it?".into(),
            },
        ]
    );
}

#[test]
fn unknown_conversation_lines_is_none() {
    let (store, _) = fixture_store();
    assert!(LineRepo::list_for_conversation(&store, 4242).is_none());
}
