pub mod character;
pub mod conversation;
pub mod line;
