//! Group and match listing endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::routes::load_group_snapshot;
use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::resolve_winner;
use crate::models::{Match, MatchResult, PlayerId};
use crate::storage::list_groups;

#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    pub groups: Vec<String>,
}

pub async fn list_all(State(state): State<AppState>) -> Result<Json<GroupsResponse>, ApiError> {
    let groups = list_groups(&state.storage)?;
    Ok(Json(GroupsResponse { groups }))
}

#[derive(Debug, Serialize)]
pub struct MatchEntry {
    #[serde(flatten)]
    pub record: Match,
    pub results: Vec<MatchResult>,
    pub winner_player_id: PlayerId,
}

#[derive(Debug, Serialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchEntry>,
}

/// List a group's matches with their results and resolved winner,
/// newest first.
pub async fn list_matches(
    State(state): State<AppState>,
    Path(group_id): Path<String>,
) -> Result<Json<MatchesResponse>, ApiError> {
    let snapshot = load_group_snapshot(&state, &group_id)?;

    let mut records: Vec<&Match> = snapshot.matches.iter().collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));

    let mut matches = Vec::with_capacity(records.len());
    for record in records {
        let results = snapshot.results_for_match(&record.id);
        let winner_player_id = resolve_winner(&results)?.player_id.clone();
        matches.push(MatchEntry {
            record: record.clone(),
            results,
            winner_player_id,
        });
    }

    Ok(Json(MatchesResponse { matches }))
}

#[cfg(test)]
mod tests {
    use crate::api::build_router;
    use crate::api::state::AppState;
    use crate::models::{EntityId, Match, MatchResult};
    use crate::storage::{EntityType, JsonlWriter, StorageConfig};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::util::ServiceExt;

    async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    fn setup_state(dir: &std::path::Path) -> AppState {
        AppState {
            storage: Arc::new(StorageConfig::new(dir.to_path_buf())),
        }
    }

    fn make_match(id: &str, date: &str) -> Match {
        let mut m = Match::new(
            EntityId::from("thursday"),
            "Dune: Imperium".to_string(),
            chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        );
        m.id = EntityId::from(id);
        m
    }

    fn seed_group(config: &StorageConfig, group: &str, matches: &[Match], results: &[MatchResult]) {
        JsonlWriter::for_entity(config, EntityType::Match, group)
            .append_batch(matches)
            .unwrap();
        JsonlWriter::for_entity(config, EntityType::Result, group)
            .append_batch(results)
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_groups() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_state(tmp.path());
        std::fs::create_dir_all(state.storage.group_dir("thursday")).unwrap();
        std::fs::create_dir_all(state.storage.group_dir("sunday")).unwrap();

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/groups").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["groups"], serde_json::json!(["sunday", "thursday"]));
    }

    #[tokio::test]
    async fn test_list_matches_with_winner() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_state(tmp.path());

        let m1 = make_match("m1", "2024-01-01");
        let m2 = make_match("m2", "2024-02-01");
        let results = vec![
            MatchResult::new(EntityId::from("m1"), EntityId::from("p1"), 10),
            MatchResult::new(EntityId::from("m1"), EntityId::from("p2"), 8),
            MatchResult::new(EntityId::from("m2"), EntityId::from("p1"), 4),
            MatchResult::new(EntityId::from("m2"), EntityId::from("p2"), 12),
        ];
        seed_group(&state.storage, "thursday", &[m1, m2], &results);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/groups/thursday/matches").await;

        assert_eq!(status, StatusCode::OK);
        let matches = json["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        // Newest first
        assert_eq!(matches[0]["id"], "m2");
        assert_eq!(matches[0]["winner_player_id"], "p2");
        assert_eq!(matches[1]["winner_player_id"], "p1");
        assert_eq!(matches[1]["results"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_group_is_404() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_state(tmp.path());

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/groups/nope/matches").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_match_without_results_is_500() {
        let tmp = tempfile::tempdir().unwrap();
        let state = setup_state(tmp.path());

        let m1 = make_match("m1", "2024-01-01");
        seed_group(&state.storage, "thursday", &[m1], &[]);

        let app = build_router(state);
        let (status, json) = get_json(app, "/api/groups/thursday/matches").await;

        // Corrupt data is surfaced, not skipped
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    }
}
