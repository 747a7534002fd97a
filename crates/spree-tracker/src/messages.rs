//! Template-based announcement text.
//!
//! Streak-ended messages are indexed by (tier, relationship); milestone
//! messages by tier, plus one template for every further block of five in
//! the top tier. Templates can be replaced from TOML.
//!
//! Supported placeholders: `{victim}`, `{killer}`, `{points}`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use spree_events::Participant;
use thiserror::Error;

use crate::tier::{Milestone, Tier};

/// How the participant who ended a streak relates to its owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    /// The owner ended their own streak
    SelfInflicted,
    /// Someone on the owner's team ended it
    Teammate,
    /// Someone on another team ended it
    Opponent,
}

impl Relationship {
    /// Classifies the pair. Identity is checked before team membership.
    pub fn between(victim: &Participant, killer: &Participant) -> Self {
        if victim.id == killer.id {
            Relationship::SelfInflicted
        } else if victim.is_teammate_of(killer) {
            Relationship::Teammate
        } else {
            Relationship::Opponent
        }
    }
}

/// Messages for one tier's streak ending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StopTemplates {
    /// Broadcast when the owner eliminates themselves
    pub self_inflicted: String,
    /// Broadcast when a teammate ends the streak
    pub teammate: String,
    /// Broadcast when an opponent ends the streak
    pub opponent: String,
    /// Private notice to a teammate who ended the streak
    pub teammate_bounty: String,
    /// Private notice to an opponent who ended the streak
    pub opponent_bounty: String,
}

impl StopTemplates {
    fn broadcast(&self, relationship: Relationship) -> &str {
        match relationship {
            Relationship::SelfInflicted => &self.self_inflicted,
            Relationship::Teammate => &self.teammate,
            Relationship::Opponent => &self.opponent,
        }
    }

    fn bounty(&self, relationship: Relationship) -> Option<&str> {
        match relationship {
            Relationship::SelfInflicted => None,
            Relationship::Teammate => Some(self.teammate_bounty.as_str()),
            Relationship::Opponent => Some(self.opponent_bounty.as_str()),
        }
    }
}

/// Streak-ended templates for every tier.
///
/// Tiers missing from a TOML file keep their defaults; a tier that is
/// present must list all five messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StopTable {
    pub rampage: StopTemplates,
    pub killing_spree: StopTemplates,
    pub blitz: StopTemplates,
    pub reign: StopTemplates,
}

impl StopTable {
    /// Returns the templates for a tier.
    pub fn for_tier(&self, tier: Tier) -> &StopTemplates {
        match tier {
            Tier::Rampage => &self.rampage,
            Tier::KillingSpree => &self.killing_spree,
            Tier::Blitz => &self.blitz,
            Tier::Reign => &self.reign,
        }
    }
}

impl Default for StopTable {
    fn default() -> Self {
        Self {
            rampage: StopTemplates {
                self_inflicted: "{victim} self-pwned, ending that rampage.".to_string(),
                teammate: "{victim}'s rampage was stopped by teammate {killer}".to_string(),
                opponent: "{victim}'s rampage was stopped by {killer}".to_string(),
                teammate_bounty: "Stopping teammate {victim}'s rampage lost you {points} extra points"
                    .to_string(),
                opponent_bounty: "Stopping {victim}'s rampage earned you {points} extra bounty points"
                    .to_string(),
            },
            killing_spree: StopTemplates {
                self_inflicted: "{victim} killed themselves in their own killing spree!".to_string(),
                teammate: "{victim}'s killing spree was halted by their own teammate {killer}"
                    .to_string(),
                opponent: "{victim}'s killing spree was halted by {killer}".to_string(),
                teammate_bounty:
                    "Halting teammate {victim}'s killing spree lost you {points} extra points"
                        .to_string(),
                opponent_bounty:
                    "Halting {victim}'s killing spree earned you {points} extra bounty points"
                        .to_string(),
            },
            blitz: StopTemplates {
                self_inflicted: "{victim} for some reason blitz'ed themselves...".to_string(),
                teammate: "{victim}'s blitzkrieg was abrubtly ended by teammate {killer}".to_string(),
                opponent: "{victim}'s blitzkrieg was finally ended by {killer}".to_string(),
                teammate_bounty: "Ending teammate {victim}'s blitzkrieg lost you {points} extra points. You're supposed to be family.".to_string(),
                opponent_bounty: "Ending {victim}'s blitzkrieg earned you {points} extra bounty points"
                    .to_string(),
            },
            reign: StopTemplates {
                self_inflicted: "The only force that could stop {victim} is {victim}... and they did"
                    .to_string(),
                teammate: "The unstoppable reign of {victim} was ended by TEAMMATE {killer}. What the hell?!".to_string(),
                opponent: "Finally! The unstoppable reign of {victim} was ended by {killer}"
                    .to_string(),
                teammate_bounty: "Ending teammate {victim}'s reign of destruction LOST you {points} extra points! C'mon!".to_string(),
                opponent_bounty:
                    "Ending {victim}'s reign of destruction earned you {points} extra bounty points"
                        .to_string(),
            },
        }
    }
}

/// Templates announced when a killer reaches a milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneTemplates {
    pub rampage: String,
    pub killing_spree: String,
    pub blitz: String,
    pub reign: String,
    /// Every further multiple of five above the reign threshold
    pub ongoing: String,
}

impl MilestoneTemplates {
    fn for_milestone(&self, milestone: Milestone) -> &str {
        match milestone {
            Milestone::Reached { tier: Tier::Rampage } => &self.rampage,
            Milestone::Reached { tier: Tier::KillingSpree } => &self.killing_spree,
            Milestone::Reached { tier: Tier::Blitz } => &self.blitz,
            Milestone::Reached { tier: Tier::Reign } => &self.reign,
            Milestone::Ongoing => &self.ongoing,
        }
    }
}

impl Default for MilestoneTemplates {
    fn default() -> Self {
        Self {
            rampage: "{killer} is on a rampage!".to_string(),
            killing_spree: "{killer} is on a killing spree!".to_string(),
            blitz: "{killer} is going blitz! {points} bounty points on their head!".to_string(),
            reign: "{killer} is unstoppable!! Come on people; {points} bounty points!!".to_string(),
            ongoing: "{killer} continues to obliterate... the bounty is now up to {points} points!"
                .to_string(),
        }
    }
}

/// Full set of announcement templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageTemplates {
    /// Streak-ended messages
    pub stopped: StopTable,
    /// Killer milestone messages
    pub milestones: MilestoneTemplates,
}

impl MessageTemplates {
    /// Loads templates from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, TemplateError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Parses templates from a TOML string.
    pub fn from_str(content: &str) -> Result<Self, TemplateError> {
        Ok(toml::from_str(content)?)
    }
}

/// Errors that can occur during template loading.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// IO error reading template file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    /// Error parsing TOML
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Fills templates with participant names and bounty values.
#[derive(Debug, Clone, Default)]
pub struct Announcer {
    templates: MessageTemplates,
}

impl Announcer {
    /// Creates an announcer over the given templates.
    pub fn new(templates: MessageTemplates) -> Self {
        Self { templates }
    }

    /// Broadcast text for a streak ended at `tier`.
    pub fn stop_message(
        &self,
        tier: Tier,
        relationship: Relationship,
        victim: &Participant,
        killer: &Participant,
        points: u32,
    ) -> String {
        let template = self.templates.stopped.for_tier(tier).broadcast(relationship);
        fill(template, &victim.name, &killer.name, points)
    }

    /// Private notice for whoever ended the streak. Self-inflicted stops
    /// have none.
    pub fn bounty_notice(
        &self,
        tier: Tier,
        relationship: Relationship,
        victim: &Participant,
        killer: &Participant,
        points: u32,
    ) -> Option<String> {
        self.templates
            .stopped
            .for_tier(tier)
            .bounty(relationship)
            .map(|template| fill(template, &victim.name, &killer.name, points))
    }

    /// Broadcast text for a killer reaching a milestone.
    pub fn milestone_message(&self, milestone: Milestone, killer: &Participant, points: u32) -> String {
        let template = self.templates.milestones.for_milestone(milestone);
        fill(template, "", &killer.name, points)
    }

    /// Returns a reference to the templates.
    pub fn templates(&self) -> &MessageTemplates {
        &self.templates
    }
}

/// Substitutes the supported placeholders in one left-to-right pass.
///
/// Substituted text is never scanned again, so names containing
/// placeholder syntax come through literally. Unknown `{...}` sequences
/// are copied unchanged.
pub fn fill(template: &str, victim: &str, killer: &str, points: u32) -> String {
    let mut out = String::with_capacity(template.len() + victim.len() + killer.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        if let Some(after) = tail.strip_prefix("{victim}") {
            out.push_str(victim);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{killer}") {
            out.push_str(killer);
            rest = after;
        } else if let Some(after) = tail.strip_prefix("{points}") {
            out.push_str(&points.to_string());
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

/// Returns the default templates.
pub fn default_templates() -> MessageTemplates {
    MessageTemplates::default()
}

/// Returns default templates as a TOML string.
pub fn default_templates_toml() -> String {
    r#"# Spree Announcement Templates
# Placeholders: {victim}, {killer}, {points}

[stopped.rampage]
self_inflicted = "{victim} self-pwned, ending that rampage."
teammate = "{victim}'s rampage was stopped by teammate {killer}"
opponent = "{victim}'s rampage was stopped by {killer}"
teammate_bounty = "Stopping teammate {victim}'s rampage lost you {points} extra points"
opponent_bounty = "Stopping {victim}'s rampage earned you {points} extra bounty points"

[stopped.killing_spree]
self_inflicted = "{victim} killed themselves in their own killing spree!"
teammate = "{victim}'s killing spree was halted by their own teammate {killer}"
opponent = "{victim}'s killing spree was halted by {killer}"
teammate_bounty = "Halting teammate {victim}'s killing spree lost you {points} extra points"
opponent_bounty = "Halting {victim}'s killing spree earned you {points} extra bounty points"

[stopped.blitz]
self_inflicted = "{victim} for some reason blitz'ed themselves..."
teammate = "{victim}'s blitzkrieg was abrubtly ended by teammate {killer}"
opponent = "{victim}'s blitzkrieg was finally ended by {killer}"
teammate_bounty = "Ending teammate {victim}'s blitzkrieg lost you {points} extra points. You're supposed to be family."
opponent_bounty = "Ending {victim}'s blitzkrieg earned you {points} extra bounty points"

[stopped.reign]
self_inflicted = "The only force that could stop {victim} is {victim}... and they did"
teammate = "The unstoppable reign of {victim} was ended by TEAMMATE {killer}. What the hell?!"
opponent = "Finally! The unstoppable reign of {victim} was ended by {killer}"
teammate_bounty = "Ending teammate {victim}'s reign of destruction LOST you {points} extra points! C'mon!"
opponent_bounty = "Ending {victim}'s reign of destruction earned you {points} extra bounty points"

[milestones]
rampage = "{killer} is on a rampage!"
killing_spree = "{killer} is on a killing spree!"
blitz = "{killer} is going blitz! {points} bounty points on their head!"
reign = "{killer} is unstoppable!! Come on people; {points} bounty points!!"
ongoing = "{killer} continues to obliterate... the bounty is now up to {points} points!"
"#
    .to_string()
}
