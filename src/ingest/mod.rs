/// Data ingestion: HTTP clients for the external data sources.
///
/// Each source gets its own file. The clients implement the provider traits
/// from `crate::provider`; the engine never talks HTTP directly.

pub mod rid;
pub mod tmd;

#[cfg(test)]
pub mod fixtures;
