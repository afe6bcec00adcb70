//! CSV encoding of whole tables.
//!
//! Rows are mapped onto the entity structs with serde. Column coercion goes
//! through the [`column`] helpers so every column has the fallback documented
//! in `dialogue_core::fields`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StoreError;
use crate::tables::Table;

/// Parse every row of `table`. Headers are trimmed; field values reach the
/// [`column`] helpers as written, so free text keeps its spacing.
pub fn decode<T: DeserializeOwned>(table: Table, bytes: &[u8]) -> Result<Vec<T>, StoreError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    reader
        .deserialize()
        .collect::<Result<Vec<T>, _>>()
        .map_err(|source| StoreError::Csv { table, source })
}

/// Serialize `rows` under an explicit header, so an empty table still
/// carries its column names.
pub fn encode<'a, T, I>(table: Table, columns: &[&str], rows: I) -> Result<Vec<u8>, StoreError>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(columns)
        .map_err(|source| StoreError::Csv { table, source })?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|source| StoreError::Csv { table, source })?;
    }

    writer.into_inner().map_err(|err| StoreError::Io {
        table,
        source: err.into_error(),
    })
}

/// `deserialize_with` adapters over `dialogue_core::fields`.
pub mod column {
    use std::str::FromStr;

    use dialogue_core::fields;
    use dialogue_core::types::DbId;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    /// Primary key: must parse, otherwise the whole table is rejected.
    pub fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DbId, D::Error> {
        let raw = String::deserialize(deserializer)?;
        fields::required_id(&raw).map_err(D::Error::custom)
    }

    pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(fields::nullable(&raw))
    }

    pub fn nullable_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(fields::nullable_text(&raw))
    }
}
