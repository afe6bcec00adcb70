//! Domain building blocks shared by the corpus store and the HTTP layer.
//!
//! This crate has no internal dependencies so both `dialogue-db` and
//! `dialogue-api` can use it.

pub mod error;
pub mod fields;
pub mod listing;
pub mod names;
pub mod types;
pub mod validation;
