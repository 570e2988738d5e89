//! Leader usage and performance tables.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{
    GlobalLeaderSort, GlobalLeaderStat, Leader, LeaderId, LeaderSort, LeaderStat, MatchResult,
    PlayerId,
};

use super::{group_by_match, resolve_winner, round1, EngineError};

/// Table sizes shown by the presentation layer.
const PLAYER_LEADER_LIMIT: usize = 5;
const GLOBAL_LEADER_LIMIT: usize = 7;

/// One player's leader table: usage count and mean score per leader.
///
/// Results without a recorded leader are excluded — "not chosen" is no
/// data, not a leader. Returns the top 5 under the selected sort.
pub fn compute_leader_stats(
    player_id: &PlayerId,
    leaders: &[Leader],
    results: &[MatchResult],
    sort: LeaderSort,
) -> Vec<LeaderStat> {
    let names: HashMap<&LeaderId, &str> =
        leaders.iter().map(|l| (&l.id, l.name.as_str())).collect();

    let mut order: Vec<LeaderId> = Vec::new();
    let mut totals: HashMap<LeaderId, (u32, u64)> = HashMap::new();
    for result in results.iter().filter(|r| &r.player_id == player_id) {
        let leader_id = match &result.leader_id {
            Some(id) => id,
            None => continue,
        };
        let entry = totals.entry(leader_id.clone()).or_insert_with(|| {
            order.push(leader_id.clone());
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += u64::from(result.score);
    }

    let mut stats: Vec<LeaderStat> = order
        .into_iter()
        .map(|leader_id| {
            let (count, score_sum) = totals[&leader_id];
            LeaderStat {
                name: names
                    .get(&leader_id)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                leader_id,
                count,
                avg_score: round1(score_sum as f64 / f64::from(count)),
            }
        })
        .collect();

    match sort {
        LeaderSort::MostUsed => stats.sort_by(|a, b| b.count.cmp(&a.count)),
        LeaderSort::BestScore => stats.sort_by(|a, b| {
            b.avg_score
                .partial_cmp(&a.avg_score)
                .unwrap_or(Ordering::Equal)
        }),
    }
    stats.truncate(PLAYER_LEADER_LIMIT);
    stats
}

/// The group-wide leader table: total uses and win rate per leader.
///
/// A use counts as a win when the match's resolved winner ran that leader.
/// Leaders with zero wins report `winrate = 0.0`. Returns the top 7 under
/// the selected sort.
pub fn compute_global_leader_stats(
    leaders: &[Leader],
    results: &[MatchResult],
    sort: GlobalLeaderSort,
) -> Result<Vec<GlobalLeaderStat>, EngineError> {
    let names: HashMap<&LeaderId, &str> =
        leaders.iter().map(|l| (&l.id, l.name.as_str())).collect();

    let mut order: Vec<LeaderId> = Vec::new();
    let mut uses: HashMap<LeaderId, u32> = HashMap::new();
    for result in results {
        let leader_id = match &result.leader_id {
            Some(id) => id,
            None => continue,
        };
        let entry = uses.entry(leader_id.clone()).or_insert_with(|| {
            order.push(leader_id.clone());
            0
        });
        *entry += 1;
    }

    let mut wins: HashMap<LeaderId, u32> = HashMap::new();
    for group in group_by_match(results) {
        let winner = resolve_winner(&group)?;
        if let Some(leader_id) = &winner.leader_id {
            *wins.entry(leader_id.clone()).or_default() += 1;
        }
    }

    let mut stats: Vec<GlobalLeaderStat> = order
        .into_iter()
        .map(|leader_id| {
            let count = uses[&leader_id];
            let won = wins.get(&leader_id).copied().unwrap_or(0);
            GlobalLeaderStat {
                name: names
                    .get(&leader_id)
                    .map(|n| n.to_string())
                    .unwrap_or_default(),
                leader_id,
                count,
                winrate: round1(f64::from(won) / f64::from(count) * 100.0),
            }
        })
        .collect();

    match sort {
        GlobalLeaderSort::MostUsed => stats.sort_by(|a, b| b.count.cmp(&a.count)),
        GlobalLeaderSort::BestWinrate => stats.sort_by(|a, b| {
            b.winrate
                .partial_cmp(&a.winrate)
                .unwrap_or(Ordering::Equal)
        }),
    }
    stats.truncate(GLOBAL_LEADER_LIMIT);
    Ok(stats)
}
