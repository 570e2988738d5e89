//! Per-player cumulative standings.

use std::collections::HashMap;

use crate::models::{MatchResult, Player, PlayerId, PlayerStat};

use super::{group_by_match, resolve_winner, round1, EngineError};

/// Compute cumulative standings over a full result set.
///
/// Players appear in the order they are first seen in `results`; roster
/// players with no recorded games follow with zeroed stats. Wins are
/// resolved once per match via the tie-break cascade.
pub fn compute_standings(
    players: &[Player],
    results: &[MatchResult],
) -> Result<Vec<PlayerStat>, EngineError> {
    let roster: HashMap<&PlayerId, &str> =
        players.iter().map(|p| (&p.id, p.name.as_str())).collect();

    let mut wins_by_player: HashMap<PlayerId, u32> = HashMap::new();
    for group in group_by_match(results) {
        let winner = resolve_winner(&group)?;
        *wins_by_player.entry(winner.player_id.clone()).or_default() += 1;
    }

    // (games, score sum) keyed by player, ordered by first encounter
    let mut order: Vec<PlayerId> = Vec::new();
    let mut totals: HashMap<PlayerId, (u32, u64)> = HashMap::new();
    for result in results {
        let entry = totals.entry(result.player_id.clone()).or_insert_with(|| {
            order.push(result.player_id.clone());
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += u64::from(result.score);
    }

    for player in players {
        if !totals.contains_key(&player.id) {
            order.push(player.id.clone());
            totals.insert(player.id.clone(), (0, 0));
        }
    }

    let stats = order
        .into_iter()
        .map(|player_id| {
            let (total_games, score_sum) = totals[&player_id];
            let wins = wins_by_player.get(&player_id).copied().unwrap_or(0);

            let avg_score = if total_games > 0 {
                round1(score_sum as f64 / f64::from(total_games))
            } else {
                0.0
            };
            let winrate = if total_games > 0 {
                round1(f64::from(wins) / f64::from(total_games) * 100.0)
            } else {
                0.0
            };

            let name = roster
                .get(&player_id)
                .map(|n| n.to_string())
                .unwrap_or_default();

            PlayerStat {
                player_id,
                name,
                total_games,
                wins,
                avg_score,
                winrate,
            }
        })
        .collect();

    Ok(stats)
}
