//! Rules a new conversation must satisfy before it touches the store.
//!
//! Existence checks (movie, characters) need the store and live in
//! `dialogue-db`; the rules here only look at the resolved participants and
//! the submitted speakers, and run in the order the errors are reported.

use crate::error::CoreError;
use crate::types::DbId;

/// A resolved conversation participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Participant {
    pub id: DbId,
    pub movie_id: Option<DbId>,
}

/// Both participants must belong to `movie_id`, and they must differ.
pub fn check_participants(
    movie_id: DbId,
    first: Participant,
    second: Participant,
) -> Result<(), CoreError> {
    for participant in [first, second] {
        if participant.movie_id != Some(movie_id) {
            return Err(CoreError::Validation(format!(
                "character {} is not part of movie {movie_id}",
                participant.id
            )));
        }
    }

    if first.id == second.id {
        return Err(CoreError::Validation(format!(
            "a conversation needs two different characters, got {} twice",
            first.id
        )));
    }

    Ok(())
}

/// Every speaker must be one of the two participants.
pub fn check_speakers<I>(first_id: DbId, second_id: DbId, speakers: I) -> Result<(), CoreError>
where
    I: IntoIterator<Item = DbId>,
{
    for (position, speaker) in speakers.into_iter().enumerate() {
        if speaker != first_id && speaker != second_id {
            return Err(CoreError::Validation(format!(
                "line {position} is spoken by character {speaker}, \
                 who is not in the conversation between {first_id} and {second_id}"
            )));
        }
    }
    Ok(())
}
