//! The host environment as seen by the tracker.

use spree_events::{InstrumentId, Participant, ParticipantId, TeamId};

/// Lookups the tracker needs from whatever runs the session.
///
/// Implementations answer for the moment of the call: a participant that
/// has disconnected is no longer returned.
pub trait SessionHost {
    /// Returns the participant who really owns `instrument`, if it was
    /// deployed on someone's behalf.
    fn resolve_delegated_owner(&self, instrument: InstrumentId) -> Option<ParticipantId>;

    /// Returns the participant if they are currently connected.
    fn lookup_active_participant(&self, id: ParticipantId) -> Option<Participant>;

    /// Returns the participant's team.
    fn team_of(&self, id: ParticipantId) -> Option<TeamId> {
        self.lookup_active_participant(id).map(|p| p.team)
    }

    /// Returns the participant's display name.
    fn display_name(&self, id: ParticipantId) -> Option<String> {
        self.lookup_active_participant(id).map(|p| p.name)
    }
}
