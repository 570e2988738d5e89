//! Filesystem data lake operations.
//!
//! Handles reading and writing the local data lake: one directory per
//! group, holding normalized JSONL files for matches, results, players,
//! and leaders. Reading a group yields the immutable [`RecordSnapshot`]
//! the analytics engine computes over.

mod jsonl;

pub use jsonl::*;

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::models::RecordSnapshot;

/// Errors that can occur during storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),
}

/// Configuration for storage paths.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_dir: PathBuf,
}

impl StorageConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn groups_dir(&self) -> PathBuf {
        self.data_dir.join("groups")
    }

    pub fn group_dir(&self, group_id: &str) -> PathBuf {
        self.groups_dir().join(group_id)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(PathBuf::from("./data"))
    }
}

/// Read one group's records as a single atomic snapshot.
///
/// Missing files read as empty collections, so a freshly created group is a
/// valid (empty) snapshot. An inconsistent snapshot is logged and still
/// returned; the engine surfaces integrity errors on its own terms.
pub fn load_snapshot(
    config: &StorageConfig,
    group_id: &str,
) -> Result<RecordSnapshot, StorageError> {
    let matches = JsonlReader::for_entity(config, EntityType::Match, group_id).read_all()?;
    let results = JsonlReader::for_entity(config, EntityType::Result, group_id).read_all()?;
    let players = JsonlReader::for_entity(config, EntityType::Player, group_id).read_all()?;
    let leaders = JsonlReader::for_entity(config, EntityType::Leader, group_id).read_all()?;

    let snapshot = RecordSnapshot::new(matches, results, players, leaders);
    if !snapshot.is_consistent() {
        warn!("Snapshot for group {} has dangling references", group_id);
    }

    Ok(snapshot)
}
