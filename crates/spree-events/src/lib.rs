//! Shared session event types and serialization for spree tracking.
//!
//! This crate contains pure data structures with no tracking logic.
//! It is a dependency for all other crates in the workspace.

pub mod action;
pub mod event;
pub mod participant;

#[cfg(feature = "test-fixtures")]
pub mod fixtures;

// Re-export participant types
pub use participant::{InstrumentId, Participant, ParticipantId, TeamId};

// Re-export event types
pub use event::{EliminationEvent, SessionEvent};

// Re-export action types
pub use action::{Action, ScoreKind};
