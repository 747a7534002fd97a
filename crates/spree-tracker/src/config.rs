//! Configuration loading for the tracker.
//!
//! All tracker settings are loaded from a TOML configuration file. Every
//! section is optional and falls back to the defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Complete tracker configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Which announcements are emitted
    #[serde(default)]
    pub announcements: AnnouncementConfig,
    /// Which score adjustments are emitted
    #[serde(default)]
    pub scoring: ScoringConfig,
    /// How exempt eliminations treat the victim's streak
    #[serde(default)]
    pub exemptions: ExemptionConfig,
}

impl TrackerConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Serializes the configuration as a TOML string.
    pub fn to_toml(&self) -> Result<String, TomlSerializeError> {
        toml::to_string_pretty(self).map_err(TomlSerializeError)
    }
}

/// Announcement settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnouncementConfig {
    /// Broadcast when a streak of five or more ends
    pub stop_broadcasts: bool,
    /// Broadcast when a killer reaches a milestone
    pub milestone_broadcasts: bool,
    /// Privately tell whoever ended a streak what it was worth to them
    pub bounty_notices: bool,
}

impl Default for AnnouncementConfig {
    fn default() -> Self {
        Self {
            stop_broadcasts: true,
            milestone_broadcasts: true,
            bounty_notices: false,
        }
    }
}

/// Score adjustment settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Credit opponents who end a streak with its bounty
    pub credit_opponent_stops: bool,
    /// Penalize teammates who end a streak by its bounty
    pub penalize_teammate_stops: bool,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            credit_opponent_stops: true,
            penalize_teammate_stops: true,
        }
    }
}

/// Exempt elimination settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptionConfig {
    /// Reset the victim's streak even when the elimination is exempt.
    /// With `false` an exempt victim keeps their streak.
    pub reset_streak: bool,
}

impl Default for ExemptionConfig {
    fn default() -> Self {
        Self { reset_streak: true }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing TOML config
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Error that can occur during TOML serialization.
#[derive(Debug, Error)]
#[error("TOML serialize error: {0}")]
pub struct TomlSerializeError(#[source] pub toml::ser::Error);

/// Generates a default configuration file content.
pub fn default_config_toml() -> String {
    r#"# Spree Tracker Configuration

[announcements]
stop_broadcasts = true
milestone_broadcasts = true
bounty_notices = false

[scoring]
credit_opponent_stops = true
penalize_teammate_stops = true

[exemptions]
reset_streak = true
"#
    .to_string()
}
