//! Bounty bookkeeping.
//!
//! Folds `AdjustScore` actions into per-participant wins and losses the way
//! a host would record them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use spree_events::{Action, ParticipantId, ScoreKind};

/// Bounty totals for one participant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Points credited for stopping opponents' streaks
    pub wins: u32,
    /// Points charged for stopping teammates' streaks
    pub losses: u32,
}

impl Standing {
    /// Wins minus losses.
    pub fn net(&self) -> i64 {
        i64::from(self.wins) - i64::from(self.losses)
    }
}

/// Accumulated bounty standings for a session.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    standings: HashMap<ParticipantId, Standing>,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a score adjustment. Other actions are ignored.
    pub fn apply(&mut self, action: &Action) {
        if let Action::AdjustScore {
            participant,
            delta,
            kind,
        } = action
        {
            let standing = self.standings.entry(*participant).or_default();
            match kind {
                ScoreKind::Credit => standing.wins += delta,
                ScoreKind::Penalty => standing.losses += delta,
            }
        }
    }

    /// Records every score adjustment in `actions`.
    pub fn apply_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    /// Returns a participant's standing; zero if they were never scored.
    pub fn standing(&self, id: ParticipantId) -> Standing {
        self.standings.get(&id).copied().unwrap_or_default()
    }

    /// Returns all scored participants, best net first, then by id.
    pub fn standings(&self) -> Vec<(ParticipantId, Standing)> {
        let mut standings: Vec<(ParticipantId, Standing)> =
            self.standings.iter().map(|(id, s)| (*id, *s)).collect();
        standings.sort_by(|a, b| b.1.net().cmp(&a.1.net()).then(a.0.cmp(&b.0)));
        standings
    }

    /// Returns true if nothing was scored.
    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}
