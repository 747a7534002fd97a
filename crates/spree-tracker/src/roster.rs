//! In-memory session host.
//!
//! Keeps the connected participants and the owners of deployed
//! instruments. Used by the replay tool and by hosts that have no
//! participant registry of their own.

use std::collections::HashMap;

use spree_events::{InstrumentId, Participant, ParticipantId, SessionEvent};

use crate::host::SessionHost;

/// Connected participants and deployed instruments.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: HashMap<ParticipantId, Participant>,
    instruments: HashMap<InstrumentId, ParticipantId>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a participant.
    pub fn join(&mut self, participant: Participant) {
        self.participants.insert(participant.id, participant);
    }

    /// Removes a participant and forgets the instruments they deployed.
    pub fn leave(&mut self, id: ParticipantId) -> Option<Participant> {
        self.instruments.retain(|_, owner| *owner != id);
        self.participants.remove(&id)
    }

    /// Records `owner` as the delegated owner of `instrument`.
    pub fn deploy(&mut self, instrument: InstrumentId, owner: ParticipantId) {
        self.instruments.insert(instrument, owner);
    }

    /// Forgets an instrument.
    pub fn retire(&mut self, instrument: InstrumentId) -> Option<ParticipantId> {
        self.instruments.remove(&instrument)
    }

    /// Updates the roster from a session event. Eliminations change nothing.
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::Join { participant } => self.join(participant.clone()),
            SessionEvent::Leave { id } => {
                self.leave(*id);
            }
            SessionEvent::Deploy { instrument, owner } => self.deploy(*instrument, *owner),
            SessionEvent::Retire { instrument } => {
                self.retire(*instrument);
            }
            SessionEvent::Elimination(_) => {}
        }
    }

    /// Returns a connected participant.
    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.get(&id)
    }

    /// Returns the number of connected participants.
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Returns true if nobody is connected.
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Returns the number of instruments with a known owner.
    pub fn instrument_count(&self) -> usize {
        self.instruments.len()
    }
}

impl SessionHost for Roster {
    fn resolve_delegated_owner(&self, instrument: InstrumentId) -> Option<ParticipantId> {
        self.instruments.get(&instrument).copied()
    }

    fn lookup_active_participant(&self, id: ParticipantId) -> Option<Participant> {
        self.participants.get(&id).cloned()
    }
}
