//! Standings and analytics engine.
//!
//! Computes derived statistics from one group's record snapshot:
//! - Match winners via the fixed tie-break cascade
//! - Per-player cumulative standings
//! - Cumulative-to-date win rate and score trends
//! - Placement distributions
//! - Leader usage and performance tables
//! - Average rounds by table size
//!
//! Every function here is pure and synchronous: no I/O, no shared mutable
//! state, and bit-identical output for an unchanged snapshot. Callers that
//! want parallelism can run independent computations concurrently over the
//! same snapshot without coordination.

mod leaders;
mod placements;
mod rounds;
mod standings;
mod timeseries;
mod winner;

pub use leaders::*;
pub use placements::*;
pub use rounds::*;
pub use standings::*;
pub use timeseries::*;
pub use winner::*;

use std::collections::HashMap;

use thiserror::Error;

use crate::models::{MatchId, MatchResult};

/// Errors raised by the analytics engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A match with zero results reached the engine. Finalized matches
    /// always own at least one result, so this indicates corrupt data and
    /// is surfaced rather than skipped.
    #[error("match has no results")]
    EmptyMatch,
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Group results by owning match, preserving first-encounter order.
pub(crate) fn group_by_match(results: &[MatchResult]) -> Vec<Vec<MatchResult>> {
    let mut index: HashMap<MatchId, usize> = HashMap::new();
    let mut groups: Vec<Vec<MatchResult>> = Vec::new();

    for result in results {
        match index.get(&result.match_id) {
            Some(&i) => groups[i].push(result.clone()),
            None => {
                index.insert(result.match_id.clone(), groups.len());
                groups.push(vec![result.clone()]);
            }
        }
    }

    groups
}
