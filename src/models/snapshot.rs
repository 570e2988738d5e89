//! Group-scoped record snapshot.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Leader, LeaderId, Match, MatchId, MatchResult, Player, PlayerId};

/// An immutable set of match/result/player/leader records for one group.
///
/// Supplied whole to the analytics engine; acquiring it is a single atomic
/// read. The engine never re-fetches mid-computation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSnapshot {
    pub matches: Vec<Match>,
    pub results: Vec<MatchResult>,
    pub players: Vec<Player>,
    pub leaders: Vec<Leader>,
}

impl RecordSnapshot {
    pub fn new(
        matches: Vec<Match>,
        results: Vec<MatchResult>,
        players: Vec<Player>,
        leaders: Vec<Leader>,
    ) -> Self {
        Self {
            matches,
            results,
            players,
            leaders,
        }
    }

    /// All results belonging to one match, in record order.
    pub fn results_for_match(&self, match_id: &MatchId) -> Vec<MatchResult> {
        self.results
            .iter()
            .filter(|r| &r.match_id == match_id)
            .cloned()
            .collect()
    }

    /// The calendar day a match was played, if the match is known.
    pub fn match_date(&self, match_id: &MatchId) -> Option<NaiveDate> {
        self.matches
            .iter()
            .find(|m| &m.id == match_id)
            .map(|m| m.date)
    }

    /// Display name for a player ID.
    pub fn player_name(&self, player_id: &PlayerId) -> Option<&str> {
        self.players
            .iter()
            .find(|p| &p.id == player_id)
            .map(|p| p.name.as_str())
    }

    /// Display name for a leader ID.
    pub fn leader_name(&self, leader_id: &LeaderId) -> Option<&str> {
        self.leaders
            .iter()
            .find(|l| &l.id == leader_id)
            .map(|l| l.name.as_str())
    }

    /// Whether every result references a known match, player, and (when set)
    /// leader. Storage checks this on load; a false here means the data lake
    /// was edited out from under us.
    pub fn is_consistent(&self) -> bool {
        let match_ids: HashSet<&MatchId> = self.matches.iter().map(|m| &m.id).collect();
        let player_ids: HashSet<&PlayerId> = self.players.iter().map(|p| &p.id).collect();
        let leader_ids: HashSet<&LeaderId> = self.leaders.iter().map(|l| &l.id).collect();

        self.results.iter().all(|r| {
            match_ids.contains(&r.match_id)
                && player_ids.contains(&r.player_id)
                && r.leader_id
                    .as_ref()
                    .map(|id| leader_ids.contains(id))
                    .unwrap_or(true)
        })
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
