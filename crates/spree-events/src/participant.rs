//! Participant Types
//!
//! Identity handles for session participants, their teams, and the
//! instruments they deploy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Connection-scoped handle of a session participant.
///
/// Unique while the participant is connected; the host may hand the same
/// value to someone else after a disconnect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub i32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!("#{}", self.0))
    }
}

impl From<i32> for ParticipantId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Team handle. Participants sharing a `TeamId` are teammates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(pub i32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.0)
    }
}

impl From<i32> for TeamId {
    fn from(value: i32) -> Self {
        Self(value)
    }
}

/// Handle of the thing that did the eliminating (a shot, a deployed device).
///
/// Instruments deployed by one participant but fired under another's name
/// carry a delegated owner that the host resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InstrumentId(pub u64);

impl fmt::Display for InstrumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "instrument {}", self.0)
    }
}

impl From<u64> for InstrumentId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// An active participant as seen by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Connection handle
    pub id: ParticipantId,
    /// Display name used in announcements
    pub name: String,
    /// Side the participant plays for
    pub team: TeamId,
}

impl Participant {
    /// Creates a new participant record.
    pub fn new(id: impl Into<ParticipantId>, name: impl Into<String>, team: impl Into<TeamId>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: team.into(),
        }
    }

    /// Returns true if both participants play for the same team.
    pub fn is_teammate_of(&self, other: &Participant) -> bool {
        self.team == other.team
    }
}
