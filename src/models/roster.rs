//! Player and leader roster models.
//!
//! Both are referenced by results, never owned by them.

use serde::{Deserialize, Serialize};

use super::{EntityId, LeaderId, PlayerId};

/// A member of the group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier (derived from the display name)
    pub id: PlayerId,

    /// Display name
    pub name: String,
}

impl Player {
    /// Create a new Player with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&["player", &name]);
        Self { id, name }
    }
}

/// A playable leader of the game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leader {
    /// Unique identifier (derived from the display name)
    pub id: LeaderId,

    /// Display name
    pub name: String,
}

impl Leader {
    /// Create a new Leader with auto-generated ID.
    pub fn new(name: String) -> Self {
        let id = EntityId::generate(&["leader", &name]);
        Self { id, name }
    }
}
