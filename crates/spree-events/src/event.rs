//! Session Events
//!
//! Inputs delivered by the host, one at a time, in session order.

use serde::{Deserialize, Serialize};

use crate::participant::{InstrumentId, Participant, ParticipantId};

/// One elimination as recorded by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EliminationEvent {
    /// Participant that was eliminated
    pub victim: ParticipantId,
    /// Participant the raw record credits (the nominal operator)
    pub killer: ParticipantId,
    /// Instrument used, if the host tracks one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instrument: Option<InstrumentId>,
    /// The victim was avenged; streak-ending consequences are suppressed
    #[serde(default)]
    pub avenged_exemption: bool,
    /// Self-destruct exemption; only applies when victim and killer match
    #[serde(default)]
    pub self_destruct_exemption: bool,
}

impl EliminationEvent {
    /// Creates an elimination with no instrument and no exemptions.
    pub fn new(victim: impl Into<ParticipantId>, killer: impl Into<ParticipantId>) -> Self {
        Self {
            victim: victim.into(),
            killer: killer.into(),
            instrument: None,
            avenged_exemption: false,
            self_destruct_exemption: false,
        }
    }

    /// Sets the instrument the elimination was made with.
    pub fn with_instrument(mut self, instrument: impl Into<InstrumentId>) -> Self {
        self.instrument = Some(instrument.into());
        self
    }

    /// Marks the victim as avenged.
    pub fn avenged(mut self) -> Self {
        self.avenged_exemption = true;
        self
    }

    /// Marks the elimination as an exempt self-destruct.
    pub fn self_destruct(mut self) -> Self {
        self.self_destruct_exemption = true;
        self
    }
}

/// Everything the host can tell the tracker about a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum SessionEvent {
    /// A participant connected
    Join { participant: Participant },
    /// A participant disconnected
    Leave { id: ParticipantId },
    /// An instrument was deployed on behalf of `owner`
    Deploy {
        instrument: InstrumentId,
        owner: ParticipantId,
    },
    /// A deployed instrument expired or was destroyed
    Retire { instrument: InstrumentId },
    /// A participant was eliminated
    Elimination(EliminationEvent),
}

impl SessionEvent {
    /// Serializes the event to a single JSON line.
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes an event from a JSON line.
    pub fn from_jsonl(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

impl From<EliminationEvent> for SessionEvent {
    fn from(event: EliminationEvent) -> Self {
        SessionEvent::Elimination(event)
    }
}
