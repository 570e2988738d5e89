//! Route registration.

pub mod analytics;
pub mod groups;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::ApiError;
use crate::models::RecordSnapshot;
use crate::storage;

/// Build the API router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/groups", get(groups::list_all))
        .route("/api/groups/:group_id/matches", get(groups::list_matches))
        .route("/api/groups/:group_id/standings", get(analytics::standings))
        .route("/api/groups/:group_id/trends", get(analytics::trends))
        .route(
            "/api/groups/:group_id/placements",
            get(analytics::placements),
        )
        .route(
            "/api/groups/:group_id/leaders",
            get(analytics::global_leaders),
        )
        .route(
            "/api/groups/:group_id/players/:player_id/leaders",
            get(analytics::player_leaders),
        )
        .route("/api/groups/:group_id/rounds", get(analytics::rounds))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Load a group's snapshot, or 404 if the group is unknown.
pub(crate) fn load_group_snapshot(
    state: &AppState,
    group_id: &str,
) -> Result<RecordSnapshot, ApiError> {
    if !state.storage.group_dir(group_id).exists() {
        return Err(ApiError::NotFound(format!("group {}", group_id)));
    }
    Ok(storage::load_snapshot(&state.storage, group_id)?)
}
