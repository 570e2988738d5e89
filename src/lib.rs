//! # Scorekeeper
//!
//! A local board-game group tracker with standings and analytics.
//!
//! ## Architecture
//!
//! - **models**: Core data structures (matches, results, players, leaders)
//! - **calculate**: Standings and analytics engine (pure, deterministic)
//! - **storage**: Filesystem data lake operations (JSONL)
//! - **api**: REST API endpoints
//! - **config**: Configuration loading and validation

pub mod api;
pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
