//! Output Actions
//!
//! What the tracker asks the host to do after an event. The host realizes
//! them in order.

use serde::{Deserialize, Serialize};

use crate::participant::ParticipantId;

/// How a score adjustment is recorded by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreKind {
    /// Recorded as a win-equivalent
    Credit,
    /// Recorded as a loss-equivalent
    Penalty,
}

/// A single side effect for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Action {
    /// Session-wide text message
    Broadcast { text: String },
    /// Private text message to one participant
    Notify {
        participant: ParticipantId,
        text: String,
    },
    /// Score change for one participant; `delta` is always positive and
    /// `kind` decides which column it lands in
    AdjustScore {
        participant: ParticipantId,
        delta: u32,
        kind: ScoreKind,
    },
}

impl Action {
    /// Creates a broadcast action.
    pub fn broadcast(text: impl Into<String>) -> Self {
        Action::Broadcast { text: text.into() }
    }

    /// Creates a private notification.
    pub fn notify(participant: ParticipantId, text: impl Into<String>) -> Self {
        Action::Notify {
            participant,
            text: text.into(),
        }
    }

    /// Creates a credit score adjustment.
    pub fn credit(participant: ParticipantId, delta: u32) -> Self {
        Action::AdjustScore {
            participant,
            delta,
            kind: ScoreKind::Credit,
        }
    }

    /// Creates a penalty score adjustment.
    pub fn penalty(participant: ParticipantId, delta: u32) -> Self {
        Action::AdjustScore {
            participant,
            delta,
            kind: ScoreKind::Penalty,
        }
    }

    /// Returns the message text for broadcasts and notifications.
    pub fn text(&self) -> Option<&str> {
        match self {
            Action::Broadcast { text } | Action::Notify { text, .. } => Some(text.as_str()),
            Action::AdjustScore { .. } => None,
        }
    }

    /// Returns true for score adjustments.
    pub fn is_score_adjustment(&self) -> bool {
        matches!(self, Action::AdjustScore { .. })
    }

    /// Serializes the action to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
