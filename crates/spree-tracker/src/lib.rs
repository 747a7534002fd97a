//! Spree tracking: elimination streaks, tiers and bounties.
//!
//! The tracker sits behind a session host. The host feeds it joins, leaves
//! and eliminations one at a time; the tracker keeps a streak counter per
//! connected participant and answers each event with the broadcasts and
//! score adjustments the host should apply.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   SessionEvent    ┌──────────────┐   Vec<Action>
//! │ session host │ ────────────────▶ │ SpreeTracker │ ─────────────▶ host
//! └──────────────┘ ◀──── lookups ─── └──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tier`]: Streak classification and bounty values
//! - [`messages`]: Announcement templates keyed by tier and relationship
//! - [`host`]: The `SessionHost` lookups the tracker depends on
//! - [`tracker`]: The streak state machine
//! - [`roster`]: In-memory `SessionHost`
//! - [`scoreboard`]: Wins and losses from score adjustments
//! - [`replay`]: Running recorded session logs
//! - [`config`]: TOML configuration

pub mod config;
pub mod host;
pub mod messages;
pub mod replay;
pub mod roster;
pub mod scoreboard;
pub mod tier;
pub mod tracker;

// Re-export config types
pub use config::{
    default_config_toml, AnnouncementConfig, ConfigError, ExemptionConfig, ScoringConfig,
    TomlSerializeError, TrackerConfig,
};

// Re-export message types
pub use messages::{
    default_templates, default_templates_toml, Announcer, MessageTemplates, MilestoneTemplates,
    Relationship, StopTable, StopTemplates, TemplateError,
};

// Re-export tier types
pub use tier::{bounty_points, classify, milestone, Milestone, Tier, REIGN_THRESHOLD, SPREE_THRESHOLD};

pub use host::SessionHost;
pub use replay::{parse_session_log, read_session_log, Replay, ReplayReport};
pub use roster::Roster;
pub use scoreboard::{Scoreboard, Standing};
pub use tracker::SpreeTracker;

use spree_events::ParticipantId;
use thiserror::Error;

/// Errors that can occur in tracker operations.
#[derive(Debug, Error)]
pub enum SpreeError {
    /// Victim or killer is not a connected participant. Eliminations that
    /// hit this are dropped.
    #[error("participant {id} is not an active participant")]
    UnresolvableParticipant { id: ParticipantId },
    /// Error reading a session log
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed session log line
    #[error("line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    /// Error writing JSON output
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Error loading configuration
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// Error loading templates
    #[error("Template error: {0}")]
    Template(#[from] TemplateError),
}
