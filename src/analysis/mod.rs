/// Derived read models computed from engine state.
///
/// Nothing here mutates the engine; these are the aggregations a rendering
/// layer consumes between cycles.

pub mod stats;
pub mod trend;
