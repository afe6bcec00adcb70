use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} named {name}")]
    NameNotFound { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}
