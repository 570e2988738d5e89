//! Winner resolution for a single match.

use crate::models::MatchResult;

use super::EngineError;

/// The fixed comparison key: score, then spice, then solari, then water.
fn tiebreak_key(result: &MatchResult) -> (u32, u32, u32, u32) {
    (result.score, result.spice, result.solari, result.water)
}

/// Order one match's results from first to last place.
///
/// Descending by score, ties broken by spice, then solari, then water.
/// Results equal on all four counters keep their input order (stable sort),
/// so the ranking is deterministic even for genuine ties.
pub fn rank_results(results: &[MatchResult]) -> Result<Vec<&MatchResult>, EngineError> {
    if results.is_empty() {
        return Err(EngineError::EmptyMatch);
    }

    let mut ranked: Vec<&MatchResult> = results.iter().collect();
    ranked.sort_by(|a, b| tiebreak_key(b).cmp(&tiebreak_key(a)));
    Ok(ranked)
}

/// Determine the winner of a single match.
///
/// Fails with [`EngineError::EmptyMatch`] on an empty result list; a valid
/// match never has one.
pub fn resolve_winner(results: &[MatchResult]) -> Result<&MatchResult, EngineError> {
    let ranked = rank_results(results)?;
    Ok(ranked[0])
}
