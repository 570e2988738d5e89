//! Derived statistics models.
//!
//! Pure computed values with no lifecycle of their own: the engine rebuilds
//! them from scratch on every invocation and nothing caches them across
//! snapshot changes.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{LeaderId, PlayerId};

/// Per-player cumulative standings over a full snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStat {
    pub player_id: PlayerId,

    /// Display name, denormalized for the presentation layer
    pub name: String,

    /// Number of recorded results for this player
    pub total_games: u32,

    /// Matches where the tie-break cascade selected this player
    pub wins: u32,

    /// Mean score, one decimal; 0.0 with no games
    pub avg_score: f64,

    /// Percentage of games won, one decimal; 0.0 with no games
    pub winrate: f64,
}

/// Which per-player value a time series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendMetric {
    WinRate,
    AvgScore,
}

/// One point on the cumulative time series.
///
/// Players with no games on or before `date` carry no entry — "no data
/// yet" is distinct from zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub per_player: BTreeMap<PlayerId, f64>,
}

/// Both cumulative series over the shared date axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSeries {
    pub win_rate: Vec<TimeSeriesPoint>,
    pub avg_score: Vec<TimeSeriesPoint>,
}

/// Per-player distribution of finishing positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementDistribution {
    pub player_id: PlayerId,
    pub name: String,

    /// Rank (1-based) to percentage of the player's games, one decimal
    pub per_rank: BTreeMap<u32, f64>,
}

/// Sort mode for a player's own leader table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderSort {
    #[default]
    MostUsed,
    BestScore,
}

/// Sort mode for the group-wide leader table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GlobalLeaderSort {
    #[default]
    MostUsed,
    BestWinrate,
}

/// One leader's usage and scoring for a single player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderStat {
    pub leader_id: LeaderId,
    pub name: String,

    /// Times the player ran this leader
    pub count: u32,

    /// Mean score with this leader, one decimal
    pub avg_score: f64,
}

/// One leader's usage and win rate across the whole group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalLeaderStat {
    pub leader_id: LeaderId,
    pub name: String,

    /// Total uses across all players
    pub count: u32,

    /// Percentage of uses that won their match, one decimal
    pub winrate: f64,
}

/// Average rounds played, split by table size.
///
/// `None` means no match of that size carried a rounds count — "no data",
/// never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundsSummary {
    pub three_player: Option<f64>,
    pub four_player: Option<f64>,
}
