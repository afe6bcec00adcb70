//! The owned in-memory corpus.
//!
//! [`CorpusStore`] is built once from the four backing tables and then only
//! changes through [`CorpusStore::append_conversation`]. All fields are
//! private; queries go through the read accessors or the repositories.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use dialogue_core::error::CoreError;
use dialogue_core::names::normalize_name;
use dialogue_core::types::DbId;
use dialogue_core::validation::{self, Participant};
use serde::Serialize;

use crate::codec;
use crate::error::StoreError;
use crate::models::character::Character;
use crate::models::conversation::{Conversation, NewConversation};
use crate::models::line::Line;
use crate::models::movie::Movie;
use crate::sequence::IdSequence;
use crate::tables::{Table, TableStore};

/// Row counts per table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CorpusStats {
    pub movies: usize,
    pub characters: usize,
    pub conversations: usize,
    pub lines: usize,
}

/// Why a loaded line could not be counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Unattributed {
    UnknownConversation,
    UnknownSpeaker,
    NotAParticipant,
}

impl fmt::Display for Unattributed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownConversation => "unknown conversation",
            Self::UnknownSpeaker => "unknown speaker",
            Self::NotAParticipant => "speaker is not a participant",
        })
    }
}

/// Movies, characters, conversations and lines keyed by id, with derived
/// line counts and lookup indexes.
///
/// Maps are ordered by id, which is the base order every listing starts
/// from before its stable sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CorpusStore {
    movies: BTreeMap<DbId, Movie>,
    characters: BTreeMap<DbId, Character>,
    conversations: BTreeMap<DbId, Conversation>,
    lines: BTreeMap<DbId, Line>,
    /// Normalized name -> character ids, in id order.
    names: HashMap<String, Vec<DbId>>,
    lines_by_conversation: HashMap<DbId, Vec<DbId>>,
    conversations_by_character: HashMap<DbId, Vec<DbId>>,
    conversation_ids: IdSequence,
    line_ids: IdSequence,
}

impl CorpusStore {
    // -----------------------------------------------------------------------
    // Load
    // -----------------------------------------------------------------------

    /// Read all four tables and derive counts. Any missing or malformed
    /// table fails the whole load.
    pub fn load(tables: &dyn TableStore) -> Result<Self, StoreError> {
        let movies: Vec<Movie> = codec::decode(Table::Movies, &tables.read(Table::Movies)?)?;
        let characters: Vec<Character> =
            codec::decode(Table::Characters, &tables.read(Table::Characters)?)?;
        let conversations: Vec<Conversation> =
            codec::decode(Table::Conversations, &tables.read(Table::Conversations)?)?;
        let lines: Vec<Line> = codec::decode(Table::Lines, &tables.read(Table::Lines)?)?;

        let store = Self::from_rows(movies, characters, conversations, lines);

        let stats = store.stats();
        tracing::info!(
            movies = stats.movies,
            characters = stats.characters,
            conversations = stats.conversations,
            lines = stats.lines,
            "Corpus loaded",
        );
        Ok(store)
    }

    /// Build a store from already-parsed rows. Derived counts on the input
    /// are ignored and recomputed from `lines`.
    pub fn from_rows(
        movies: Vec<Movie>,
        characters: Vec<Character>,
        conversations: Vec<Conversation>,
        lines: Vec<Line>,
    ) -> Self {
        let mut store = Self {
            movies: keyed(Table::Movies, movies, |m| m.id),
            characters: keyed(Table::Characters, characters, |c| c.id),
            conversations: keyed(Table::Conversations, conversations, |c| c.id),
            lines: keyed(Table::Lines, lines, |l| l.id),
            ..Self::default()
        };

        store.conversation_ids = IdSequence::seeded_from(store.conversations.keys().copied());
        store.line_ids = IdSequence::seeded_from(store.lines.keys().copied());
        store.build_indexes();
        store.recount();
        store
    }

    fn build_indexes(&mut self) {
        for character in self.characters.values() {
            if let Some(name) = &character.name {
                self.names
                    .entry(normalize_name(name))
                    .or_default()
                    .push(character.id);
            }
        }

        for conversation in self.conversations.values() {
            index_participants(&mut self.conversations_by_character, conversation);
        }

        for line in self.lines.values() {
            if let Some(conversation_id) = line.conversation_id {
                self.lines_by_conversation
                    .entry(conversation_id)
                    .or_default()
                    .push(line.id);
            }
        }
    }

    /// Recompute every derived counter from the lines table.
    fn recount(&mut self) {
        for character in self.characters.values_mut() {
            character.lines = 0;
        }
        for conversation in self.conversations.values_mut() {
            conversation.line_count = 0;
            conversation.character1_lines = 0;
            conversation.character2_lines = 0;
        }

        let mut skipped = 0usize;
        for line in self.lines.values() {
            if let Err(reason) = credit_line(&mut self.conversations, &mut self.characters, line) {
                skipped += 1;
                tracing::debug!(line_id = line.id, %reason, "Line left out of line counts");
            }
        }
        if skipped > 0 {
            tracing::warn!(skipped, "Lines could not be attributed and were left out of line counts");
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    pub fn movies(&self) -> &BTreeMap<DbId, Movie> {
        &self.movies
    }

    pub fn characters(&self) -> &BTreeMap<DbId, Character> {
        &self.characters
    }

    pub fn conversations(&self) -> &BTreeMap<DbId, Conversation> {
        &self.conversations
    }

    pub fn lines(&self) -> &BTreeMap<DbId, Line> {
        &self.lines
    }

    pub fn movie(&self, id: DbId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    pub fn character(&self, id: DbId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn conversation(&self, id: DbId) -> Option<&Conversation> {
        self.conversations.get(&id)
    }

    pub fn line(&self, id: DbId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Title of `movie_id`, if both the id and the movie exist.
    pub fn movie_title(&self, movie_id: Option<DbId>) -> Option<&str> {
        movie_id
            .and_then(|id| self.movies.get(&id))
            .map(|movie| movie.title.as_str())
    }

    /// Name of `character_id`, if the character exists and is named.
    pub fn character_name(&self, character_id: Option<DbId>) -> Option<&str> {
        character_id
            .and_then(|id| self.characters.get(&id))
            .and_then(|character| character.name.as_deref())
    }

    /// Character ids whose normalized name equals `normalized`.
    pub fn characters_named(&self, normalized: &str) -> &[DbId] {
        self.names.get(normalized).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ids of conversations `character_id` takes part in, in id order.
    pub fn conversations_of(&self, character_id: DbId) -> &[DbId] {
        self.conversations_by_character
            .get(&character_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Ids of lines filed under `conversation_id`, in id order.
    pub fn lines_of(&self, conversation_id: DbId) -> &[DbId] {
        self.lines_by_conversation
            .get(&conversation_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn stats(&self) -> CorpusStats {
        CorpusStats {
            movies: self.movies.len(),
            characters: self.characters.len(),
            conversations: self.conversations.len(),
            lines: self.lines.len(),
        }
    }

    /// Id the next appended conversation will get.
    pub fn next_conversation_id(&self) -> DbId {
        self.conversation_ids.peek()
    }

    /// Id the next appended line will get.
    pub fn next_line_id(&self) -> DbId {
        self.line_ids.peek()
    }

    // -----------------------------------------------------------------------
    // Append
    // -----------------------------------------------------------------------

    /// Append a conversation between two characters of `movie_id`.
    ///
    /// Runs every check first, then rewrites the conversations and lines
    /// tables through `tables`, and only then changes memory. A rejected
    /// draft or a failed write leaves the store exactly as it was.
    pub fn append_conversation(
        &mut self,
        movie_id: DbId,
        draft: &NewConversation,
        tables: &dyn TableStore,
    ) -> Result<DbId, StoreError> {
        self.validate(movie_id, draft)?;

        let conversation = Conversation::new(
            self.conversation_ids.peek(),
            draft.character_1_id,
            draft.character_2_id,
            movie_id,
        );
        let new_lines: Vec<Line> = draft
            .lines
            .iter()
            .zip(self.line_ids.reserve(draft.lines.len()))
            .enumerate()
            .map(|(position, (line, id))| Line {
                id,
                character_id: Some(line.character_id),
                movie_id: Some(movie_id),
                conversation_id: Some(conversation.id),
                line_sort: Some(position as i64),
                line_text: line.line_text.clone(),
            })
            .collect();

        let conversations_csv = codec::encode(
            Table::Conversations,
            &Conversation::COLUMNS,
            self.conversations.values().chain(std::iter::once(&conversation)),
        )?;
        let lines_csv = codec::encode(
            Table::Lines,
            &Line::COLUMNS,
            self.lines.values().chain(new_lines.iter()),
        )?;

        // Conversations first: a conversation without its lines reloads
        // cleanly, lines without their conversation do not.
        tables.write(Table::Conversations, &conversations_csv)?;
        tables.write(Table::Lines, &lines_csv)?;

        let conversation_id = conversation.id;
        let line_count = new_lines.len();
        self.commit(conversation, new_lines);

        tracing::info!(conversation_id, movie_id, line_count, "Conversation appended");
        Ok(conversation_id)
    }

    fn validate(&self, movie_id: DbId, draft: &NewConversation) -> Result<(), CoreError> {
        if !self.movies.contains_key(&movie_id) {
            return Err(CoreError::NotFound {
                entity: "Movie",
                id: movie_id,
            });
        }

        let first = self.participant(draft.character_1_id)?;
        let second = self.participant(draft.character_2_id)?;
        validation::check_participants(movie_id, first, second)?;
        validation::check_speakers(
            first.id,
            second.id,
            draft.lines.iter().map(|line| line.character_id),
        )
    }

    fn participant(&self, id: DbId) -> Result<Participant, CoreError> {
        self.characters
            .get(&id)
            .map(|character| Participant {
                id,
                movie_id: character.movie_id,
            })
            .ok_or(CoreError::NotFound {
                entity: "Character",
                id,
            })
    }

    fn commit(&mut self, conversation: Conversation, lines: Vec<Line>) {
        let conversation_id = conversation.id;
        index_participants(&mut self.conversations_by_character, &conversation);
        self.conversations.insert(conversation_id, conversation);
        self.conversation_ids.commit_through(conversation_id);

        for line in lines {
            if let Err(reason) = credit_line(&mut self.conversations, &mut self.characters, &line) {
                tracing::error!(line_id = line.id, %reason, "Validated line could not be counted");
            }
            self.lines_by_conversation
                .entry(conversation_id)
                .or_default()
                .push(line.id);
            self.line_ids.commit_through(line.id);
            self.lines.insert(line.id, line);
        }
    }
}

/// Key rows by id. On duplicate ids the later row wins.
fn keyed<T>(table: Table, rows: Vec<T>, id_of: impl Fn(&T) -> DbId) -> BTreeMap<DbId, T> {
    let mut map = BTreeMap::new();
    for row in rows {
        let id = id_of(&row);
        if map.insert(id, row).is_some() {
            tracing::warn!(table = %table, id, "Duplicate id, keeping the later row");
        }
    }
    map
}

fn index_participants(index: &mut HashMap<DbId, Vec<DbId>>, conversation: &Conversation) {
    let mut participants = [conversation.character1_id, conversation.character2_id];
    if participants[0] == participants[1] {
        participants[1] = None;
    }
    for character_id in participants.into_iter().flatten() {
        index.entry(character_id).or_default().push(conversation.id);
    }
}

/// Count `line` towards its conversation and its speaker.
fn credit_line(
    conversations: &mut BTreeMap<DbId, Conversation>,
    characters: &mut BTreeMap<DbId, Character>,
    line: &Line,
) -> Result<(), Unattributed> {
    let conversation = line
        .conversation_id
        .and_then(|id| conversations.get_mut(&id))
        .ok_or(Unattributed::UnknownConversation)?;
    let speaker = line
        .character_id
        .and_then(|id| characters.get_mut(&id))
        .ok_or(Unattributed::UnknownSpeaker)?;

    if !conversation.credit(speaker.id) {
        return Err(Unattributed::NotAParticipant);
    }
    speaker.lines += 1;
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
