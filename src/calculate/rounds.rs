//! Average rounds played, segmented by table size.

use std::collections::HashMap;

use crate::models::{Match, MatchId, MatchResult, RoundsSummary};

use super::round1;

/// Mean `played_rounds` for three-player and four-player matches.
///
/// Matches without a recorded rounds count are excluded from both buckets
/// (missing is no data, not zero), and table sizes other than 3 or 4 are
/// ignored. An empty bucket reports `None`.
pub fn compute_avg_rounds(matches: &[Match], results: &[MatchResult]) -> RoundsSummary {
    let mut participants: HashMap<&MatchId, u32> = HashMap::new();
    for result in results {
        *participants.entry(&result.match_id).or_default() += 1;
    }

    let mut three_player: Vec<u32> = Vec::new();
    let mut four_player: Vec<u32> = Vec::new();
    for m in matches {
        let rounds = match m.played_rounds {
            Some(r) => r,
            None => continue,
        };
        match participants.get(&m.id).copied().unwrap_or(0) {
            3 => three_player.push(rounds),
            4 => four_player.push(rounds),
            _ => {}
        }
    }

    RoundsSummary {
        three_player: mean(&three_player),
        four_player: mean(&four_player),
    }
}

fn mean(values: &[u32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: u64 = values.iter().map(|&v| u64::from(v)).sum();
    Some(round1(sum as f64 / values.len() as f64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityId;
    use chrono::NaiveDate;

    fn m(id: &str, rounds: Option<u32>) -> Match {
        let mut m = Match::new(
            EntityId::from("g1"),
            "Dune: Imperium".to_string(),
            NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        );
        m.id = EntityId::from(id);
        m.played_rounds = rounds;
        m
    }

    fn results_for(match_id: &str, player_count: u32) -> Vec<MatchResult> {
        (0..player_count)
            .map(|i| {
                MatchResult::new(
                    EntityId::from(match_id),
                    EntityId::from(format!("p{i}").as_str()),
                    10,
                )
            })
            .collect()
    }

    #[test]
    fn test_buckets_by_participant_count() {
        let matches = vec![m("m1", Some(8)), m("m2", Some(10)), m("m3", Some(9))];
        let mut results = results_for("m1", 3);
        results.extend(results_for("m2", 3));
        results.extend(results_for("m3", 4));

        let summary = compute_avg_rounds(&matches, &results);

        assert_eq!(summary.three_player, Some(9.0));
        assert_eq!(summary.four_player, Some(9.0));
    }

    #[test]
    fn test_missing_rounds_excluded_not_zero() {
        let matches = vec![m("m1", Some(9)), m("m2", None)];
        let mut results = results_for("m1", 3);
        results.extend(results_for("m2", 3));

        let summary = compute_avg_rounds(&matches, &results);

        // m2 must not drag the average toward zero
        assert_eq!(summary.three_player, Some(9.0));
    }

    #[test]
    fn test_all_rounds_missing_reports_no_data() {
        let matches = vec![m("m1", None), m("m2", None)];
        let mut results = results_for("m1", 3);
        results.extend(results_for("m2", 4));

        let summary = compute_avg_rounds(&matches, &results);

        assert_eq!(summary.three_player, None);
        assert_eq!(summary.four_player, None);
    }

    #[test]
    fn test_other_table_sizes_ignored() {
        let matches = vec![m("m1", Some(7)), m("m2", Some(11))];
        let mut results = results_for("m1", 2);
        results.extend(results_for("m2", 6));

        let summary = compute_avg_rounds(&matches, &results);

        assert_eq!(summary.three_player, None);
        assert_eq!(summary.four_player, None);
    }

    #[test]
    fn test_mean_rounded_to_one_decimal() {
        let matches = vec![m("m1", Some(8)), m("m2", Some(9)), m("m3", Some(9))];
        let mut results = results_for("m1", 4);
        results.extend(results_for("m2", 4));
        results.extend(results_for("m3", 4));

        let summary = compute_avg_rounds(&matches, &results);

        // 26 / 3 = 8.666...
        assert_eq!(summary.four_player, Some(8.7));
    }
}
