//! Cumulative-to-date trend series.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use chrono::NaiveDate;

use crate::models::{
    MatchId, MatchResult, PlayerId, RecordSnapshot, TimeSeriesPoint, TrendMetric, TrendSeries,
};

use super::{compute_standings, EngineError};

/// Compute one cumulative series over a snapshot.
///
/// One point per distinct match date present in the results, ascending. Each
/// point is derived from *all* results dated on or before it — an append-only
/// ledger read, not a sliding window — so later points always cover a
/// superset of earlier ones. Players with no games yet carry no entry.
pub fn compute_time_series(
    snapshot: &RecordSnapshot,
    metric: TrendMetric,
) -> Result<Vec<TimeSeriesPoint>, EngineError> {
    let date_of: HashMap<&MatchId, NaiveDate> =
        snapshot.matches.iter().map(|m| (&m.id, m.date)).collect();

    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    for result in &snapshot.results {
        if let Some(&date) = date_of.get(&result.match_id) {
            dates.insert(date);
        }
    }

    let mut points = Vec::with_capacity(dates.len());
    for date in dates {
        let cumulative: Vec<MatchResult> = snapshot
            .results
            .iter()
            .filter(|r| {
                date_of
                    .get(&r.match_id)
                    .map(|&d| d <= date)
                    .unwrap_or(false)
            })
            .cloned()
            .collect();

        let standings = compute_standings(&snapshot.players, &cumulative)?;
        let per_player: BTreeMap<PlayerId, f64> = standings
            .into_iter()
            .filter(|s| s.total_games > 0)
            .map(|s| {
                let value = match metric {
                    TrendMetric::WinRate => s.winrate,
                    TrendMetric::AvgScore => s.avg_score,
                };
                (s.player_id, value)
            })
            .collect();

        points.push(TimeSeriesPoint { date, per_player });
    }

    Ok(points)
}

/// Both series over the shared date axis.
pub fn compute_trends(snapshot: &RecordSnapshot) -> Result<TrendSeries, EngineError> {
    Ok(TrendSeries {
        win_rate: compute_time_series(snapshot, TrendMetric::WinRate)?,
        avg_score: compute_time_series(snapshot, TrendMetric::AvgScore)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntityId, Match, Player};
    use pretty_assertions::assert_eq;

    fn snapshot_with_two_dates() -> RecordSnapshot {
        let players = vec![
            Player {
                id: EntityId::from("p1"),
                name: "Alice".to_string(),
            },
            Player {
                id: EntityId::from("p2"),
                name: "Bob".to_string(),
            },
        ];

        let mut m1 = Match::new(
            EntityId::from("g1"),
            "Dune: Imperium".to_string(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        );
        m1.id = EntityId::from("m1");
        let mut m2 = Match::new(
            EntityId::from("g1"),
            "Dune: Imperium".to_string(),
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        );
        m2.id = EntityId::from("m2");

        let results = vec![
            MatchResult::new(EntityId::from("m1"), EntityId::from("p1"), 10),
            MatchResult::new(EntityId::from("m1"), EntityId::from("p2"), 8),
            MatchResult::new(EntityId::from("m2"), EntityId::from("p1"), 4),
            MatchResult::new(EntityId::from("m2"), EntityId::from("p2"), 12),
        ];

        RecordSnapshot::new(vec![m1, m2], results, players, vec![])
    }

    #[test]
    fn test_one_point_per_distinct_date() {
        let snapshot = snapshot_with_two_dates();
        let series = compute_time_series(&snapshot, TrendMetric::WinRate).unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(series[1].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    }

    #[test]
    fn test_second_point_covers_both_matches() {
        let snapshot = snapshot_with_two_dates();
        let series = compute_time_series(&snapshot, TrendMetric::WinRate).unwrap();

        // After m1 only: Alice 1/1 wins
        assert_eq!(series[0].per_player[&EntityId::from("p1")], 100.0);
        assert_eq!(series[0].per_player[&EntityId::from("p2")], 0.0);

        // After m1 + m2: one win each over two games
        assert_eq!(series[1].per_player[&EntityId::from("p1")], 50.0);
        assert_eq!(series[1].per_player[&EntityId::from("p2")], 50.0);
    }

    #[test]
    fn test_avg_score_series_is_cumulative() {
        let snapshot = snapshot_with_two_dates();
        let series = compute_time_series(&snapshot, TrendMetric::AvgScore).unwrap();

        assert_eq!(series[0].per_player[&EntityId::from("p1")], 10.0);
        // (10 + 4) / 2
        assert_eq!(series[1].per_player[&EntityId::from("p1")], 7.0);
    }

    #[test]
    fn test_player_absent_until_first_game() {
        let mut snapshot = snapshot_with_two_dates();
        // Bob only played the second match
        snapshot.results.remove(1);

        let series = compute_time_series(&snapshot, TrendMetric::WinRate).unwrap();

        assert!(!series[0].per_player.contains_key(&EntityId::from("p2")));
        assert!(series[1].per_player.contains_key(&EntityId::from("p2")));
    }

    #[test]
    fn test_coverage_grows_monotonically() {
        let snapshot = snapshot_with_two_dates();
        let series = compute_time_series(&snapshot, TrendMetric::AvgScore).unwrap();

        for window in series.windows(2) {
            assert!(window[0].date < window[1].date);
            for player_id in window[0].per_player.keys() {
                assert!(window[1].per_player.contains_key(player_id));
            }
        }
    }

    #[test]
    fn test_trends_share_the_date_axis() {
        let snapshot = snapshot_with_two_dates();
        let trends = compute_trends(&snapshot).unwrap();

        let win_dates: Vec<NaiveDate> = trends.win_rate.iter().map(|p| p.date).collect();
        let score_dates: Vec<NaiveDate> = trends.avg_score.iter().map(|p| p.date).collect();
        assert_eq!(win_dates, score_dates);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_series() {
        let snapshot = RecordSnapshot::default();
        let series = compute_time_series(&snapshot, TrendMetric::WinRate).unwrap();
        assert!(series.is_empty());
    }

    #[test]
    fn test_same_day_matches_share_a_point() {
        let mut snapshot = snapshot_with_two_dates();
        // Move m2 onto m1's day
        snapshot.matches[1].date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let series = compute_time_series(&snapshot, TrendMetric::WinRate).unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].per_player[&EntityId::from("p1")], 50.0);
    }
}
