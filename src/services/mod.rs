//! Field collection: manifest version, source-control revision, timestamp

pub mod collect;
pub mod manifest;
pub mod revision;
pub mod timestamp;
