//! Derived analytics endpoints.
//!
//! Each handler loads one snapshot and runs the corresponding engine
//! computation; nothing here caches or mutates.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::routes::load_group_snapshot;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::{
    compute_avg_rounds, compute_global_leader_stats, compute_leader_stats, compute_placements,
    compute_standings, compute_trends,
};
use crate::models::{
    EntityId, GlobalLeaderSort, GlobalLeaderStat, LeaderSort, LeaderStat, PlacementDistribution,
    PlayerStat, RoundsSummary, TrendSeries,
};

// ── Standings ───────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct StandingsResponse {
    pub standings: Vec<PlayerStat>,
}

pub async fn standings(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<StandingsResponse>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;
    let standings = compute_standings(&snapshot.players, &snapshot.results)?;
    Ok(Json(StandingsResponse { standings }))
}

// ── Trends ──────────────────────────────────────────────────────

pub async fn trends(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<TrendSeries>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;
    let series = compute_trends(&snapshot)?;
    Ok(Json(series))
}

// ── Placements ──────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct PlacementsResponse {
    pub placements: Vec<PlacementDistribution>,
}

pub async fn placements(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<PlacementsResponse>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;
    let placements = compute_placements(&snapshot.players, &snapshot.results)?;
    Ok(Json(PlacementsResponse { placements }))
}

// ── Leaders ─────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GlobalLeaderParams {
    #[serde(default)]
    pub mode: GlobalLeaderSort,
}

#[derive(Debug, Serialize)]
pub struct GlobalLeadersResponse {
    pub mode: GlobalLeaderSort,
    pub leaders: Vec<GlobalLeaderStat>,
}

pub async fn global_leaders(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
    Query(params): Query<GlobalLeaderParams>,
) -> Result<Json<GlobalLeadersResponse>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;
    let leaders = compute_global_leader_stats(&snapshot.leaders, &snapshot.results, params.mode)?;
    Ok(Json(GlobalLeadersResponse {
        mode: params.mode,
        leaders,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PlayerLeaderParams {
    #[serde(default)]
    pub mode: LeaderSort,
}

#[derive(Debug, Serialize)]
pub struct PlayerLeadersResponse {
    pub player_id: EntityId,
    pub mode: LeaderSort,
    pub leaders: Vec<LeaderStat>,
}

pub async fn player_leaders(
    State(state): State<AppState>,
    Path((group_id, player_id)): Path<(String, String)>,
    Query(params): Query<PlayerLeaderParams>,
) -> Result<Json<PlayerLeadersResponse>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;

    let player_id = EntityId::from(player_id);
    if snapshot.player_name(&player_id).is_none() {
        return Err(ApiError::NotFound(format!("player {}", player_id)));
    }

    let leaders = compute_leader_stats(
        &player_id,
        &snapshot.leaders,
        &snapshot.results,
        params.mode,
    );
    Ok(Json(PlayerLeadersResponse {
        player_id,
        mode: params.mode,
        leaders,
    }))
}

// ── Rounds ──────────────────────────────────────────────────────

pub async fn rounds(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<RoundsSummary>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;
    let summary = compute_avg_rounds(&snapshot.matches, &snapshot.results);
    Ok(Json(summary))
}
