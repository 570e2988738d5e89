//! Core data models for the scorekeeper.

mod ids;
mod match_record;
mod roster;
mod snapshot;
mod stats;

pub use ids::*;
pub use match_record::*;
pub use roster::*;
pub use snapshot::*;
pub use stats::*;
