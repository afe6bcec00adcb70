/// All corpus identifiers are 64-bit integers, one sequence per entity type.
pub type DbId = i64;
