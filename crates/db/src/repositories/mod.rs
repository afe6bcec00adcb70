//! Read-only queries over a loaded [`CorpusStore`](crate::CorpusStore).
//!
//! Each repository is a unit struct with associated functions, taking the
//! store by shared reference. Lookups return `Option`/`Vec`; callers decide
//! how an absent result is reported.

pub mod character_repo;
pub mod conversation_repo;
pub mod line_repo;

pub use character_repo::CharacterRepo;
pub use conversation_repo::ConversationRepo;
pub use line_repo::LineRepo;
