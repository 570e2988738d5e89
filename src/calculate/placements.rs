//! Per-player placement distributions.

use std::collections::{BTreeMap, HashMap};

use crate::models::{MatchResult, PlacementDistribution, Player, PlayerId};

use super::{group_by_match, rank_results, round1, EngineError};

/// Compute each player's distribution of finishing positions.
///
/// Every match is ranked with the same cascade that resolves winners, so
/// ranks are contiguous 1-based integers with no shared places. Counts are
/// reported as percentages of the player's total games, one decimal.
/// Players appear in the order they are first seen in `results`.
pub fn compute_placements(
    players: &[Player],
    results: &[MatchResult],
) -> Result<Vec<PlacementDistribution>, EngineError> {
    let roster: HashMap<&PlayerId, &str> =
        players.iter().map(|p| (&p.id, p.name.as_str())).collect();

    let mut order: Vec<PlayerId> = Vec::new();
    let mut tallies: HashMap<PlayerId, BTreeMap<u32, u32>> = HashMap::new();

    for group in group_by_match(results) {
        let ranked = rank_results(&group)?;
        for (i, result) in ranked.iter().enumerate() {
            let rank = i as u32 + 1;
            let tally = tallies.entry(result.player_id.clone()).or_insert_with(|| {
                order.push(result.player_id.clone());
                BTreeMap::new()
            });
            *tally.entry(rank).or_default() += 1;
        }
    }

    let distributions = order
        .into_iter()
        .map(|player_id| {
            let tally = &tallies[&player_id];
            let total: u32 = tally.values().sum();

            let per_rank = tally
                .iter()
                .map(|(&rank, &count)| {
                    (rank, round1(f64::from(count) / f64::from(total) * 100.0))
                })
                .collect();

            let name = roster
                .get(&player_id)
                .map(|n| n.to_string())
                .unwrap_or_default();

            PlacementDistribution {
                player_id,
                name,
                per_rank,
            }
        })
        .collect();

    Ok(distributions)
}
