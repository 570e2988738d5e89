//! Match and per-player result models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, GroupId, LeaderId, MatchId, PlayerId, ResultId};

/// One completed play session, owning a set of per-player results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match {
    /// Unique identifier (derived from group + date + creation time)
    pub id: MatchId,

    /// Group this match was played in
    pub group_id: GroupId,

    /// Which board game was played
    pub game: String,

    /// Calendar day the match was played (no time component)
    pub date: NaiveDate,

    /// Whether an expansion was in play
    pub uses_expansion: bool,

    /// Name of the expansion, if one was used
    pub expansion: Option<String>,

    /// Whether the family (simplified) variant was played
    pub family_variant: bool,

    /// How many rounds the match ran, if recorded
    pub played_rounds: Option<u32>,

    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// Create a new Match with auto-generated ID.
    pub fn new(group_id: GroupId, game: String, date: NaiveDate) -> Self {
        let created_at = Utc::now();
        let id = EntityId::generate(&[
            group_id.as_str(),
            &game,
            &date.to_string(),
            &created_at.to_rfc3339(),
        ]);

        Self {
            id,
            group_id,
            game,
            date,
            uses_expansion: false,
            expansion: None,
            family_variant: false,
            played_rounds: None,
            created_at,
        }
    }

    /// Builder method to mark an expansion as in play.
    pub fn with_expansion(mut self, expansion: String) -> Self {
        self.uses_expansion = true;
        self.expansion = Some(expansion);
        self
    }

    /// Builder method to mark the family variant.
    pub fn with_family_variant(mut self) -> Self {
        self.family_variant = true;
        self
    }

    /// Builder method to set the rounds played.
    pub fn with_played_rounds(mut self, rounds: u32) -> Self {
        self.played_rounds = Some(rounds);
        self
    }
}

/// One player's recorded outcome within a match.
///
/// The four counters feed the tie-break cascade; a missing leader means
/// "not chosen", never zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Unique identifier (derived from match_id + player_id)
    pub id: ResultId,

    /// Match this result belongs to
    pub match_id: MatchId,

    /// Player this result belongs to; unique within one match
    pub player_id: PlayerId,

    /// Leader the player ran, if recorded
    pub leader_id: Option<LeaderId>,

    /// Victory points
    pub score: u32,

    /// Spice held at game end
    pub spice: u32,

    /// Solari held at game end
    pub solari: u32,

    /// Water held at game end
    pub water: u32,
}

impl MatchResult {
    /// Create a new MatchResult with auto-generated ID.
    pub fn new(match_id: MatchId, player_id: PlayerId, score: u32) -> Self {
        let id = EntityId::generate(&[match_id.as_str(), player_id.as_str()]);

        Self {
            id,
            match_id,
            player_id,
            leader_id: None,
            score,
            spice: 0,
            solari: 0,
            water: 0,
        }
    }

    /// Builder method to set the leader.
    pub fn with_leader(mut self, leader_id: LeaderId) -> Self {
        self.leader_id = Some(leader_id);
        self
    }

    /// Builder method to set the resource counters.
    pub fn with_resources(mut self, spice: u32, solari: u32, water: u32) -> Self {
        self.spice = spice;
        self.solari = solari;
        self.water = water;
        self
    }
}
