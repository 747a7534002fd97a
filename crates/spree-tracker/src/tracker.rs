//! The streak state machine.
//!
//! [`SpreeTracker`] owns one counter per connected participant. Joins
//! create the counter, leaves drop it, and eliminations move it: the
//! victim's streak ends and the killer's grows.

use std::collections::HashMap;
use std::path::Path;

use spree_events::{Action, EliminationEvent, Participant, ParticipantId, SessionEvent};

use crate::config::TrackerConfig;
use crate::host::SessionHost;
use crate::messages::{Announcer, MessageTemplates, Relationship};
use crate::tier::{bounty_points, classify, milestone, SPREE_THRESHOLD};
use crate::SpreeError;

/// Per-session streak tracker.
#[derive(Debug, Clone)]
pub struct SpreeTracker {
    /// Current streak of every connected participant
    table: HashMap<ParticipantId, u32>,
    /// Configuration settings
    config: TrackerConfig,
    /// Announcement text
    announcer: Announcer,
}

impl SpreeTracker {
    /// Creates a tracker with the given configuration and templates.
    pub fn new(config: TrackerConfig, templates: MessageTemplates) -> Self {
        Self {
            table: HashMap::new(),
            config,
            announcer: Announcer::new(templates),
        }
    }

    /// Creates a tracker with default configuration and templates.
    pub fn with_defaults() -> Self {
        Self::new(TrackerConfig::default(), MessageTemplates::default())
    }

    /// Creates a tracker from a configuration file and an optional
    /// template file.
    pub fn from_files(config_path: &Path, templates_path: Option<&Path>) -> Result<Self, SpreeError> {
        let config = TrackerConfig::from_file(config_path)?;
        let templates = match templates_path {
            Some(path) => MessageTemplates::from_file(path)?,
            None => MessageTemplates::default(),
        };
        Ok(Self::new(config, templates))
    }

    /// Starts tracking a participant at zero, replacing any previous entry.
    pub fn on_join(&mut self, id: ParticipantId) {
        self.table.insert(id, 0);
    }

    /// Stops tracking a participant. Unknown ids are ignored.
    pub fn on_leave(&mut self, id: ParticipantId) {
        self.table.remove(&id);
    }

    /// Processes one elimination and returns the actions for the host.
    ///
    /// 1. Resolves the killer through the instrument's delegated owner
    /// 2. Drops the event if victim or killer is not connected
    /// 3. Ends the victim's streak, announcing and scoring it at five or more
    /// 4. Grows the killer's streak and announces milestones
    pub fn on_elimination<H: SessionHost>(&mut self, host: &H, event: &EliminationEvent) -> Vec<Action> {
        let (victim, killer) = match resolve_participants(host, event) {
            Ok(pair) => pair,
            Err(e) => {
                tracing::debug!("Dropping elimination of {}: {}", event.victim, e);
                return Vec::new();
            }
        };

        let mut actions = Vec::new();
        self.end_victim_streak(event, &victim, &killer, &mut actions);
        if victim.id != killer.id {
            self.extend_killer_streak(&killer, &mut actions);
        }
        actions
    }

    /// Dispatches any session event.
    pub fn handle_event<H: SessionHost>(&mut self, host: &H, event: &SessionEvent) -> Vec<Action> {
        match event {
            SessionEvent::Join { participant } => {
                self.on_join(participant.id);
                Vec::new()
            }
            SessionEvent::Leave { id } => {
                self.on_leave(*id);
                Vec::new()
            }
            SessionEvent::Deploy { .. } | SessionEvent::Retire { .. } => Vec::new(),
            SessionEvent::Elimination(elimination) => self.on_elimination(host, elimination),
        }
    }

    fn end_victim_streak(
        &mut self,
        event: &EliminationEvent,
        victim: &Participant,
        killer: &Participant,
        actions: &mut Vec<Action>,
    ) {
        let Some(prior) = self.table.get(&victim.id).copied() else {
            return;
        };

        let exempt = event.avenged_exemption
            || (event.self_destruct_exemption && victim.id == killer.id);
        if exempt {
            tracing::debug!(
                "Exempt elimination of {} ({}) with streak {}",
                victim.name,
                victim.id,
                prior
            );
            if self.config.exemptions.reset_streak {
                self.table.insert(victim.id, 0);
            }
            return;
        }

        if prior >= SPREE_THRESHOLD {
            self.announce_stop(prior, victim, killer, actions);
        }
        self.table.insert(victim.id, 0);
    }

    fn announce_stop(
        &self,
        prior: u32,
        victim: &Participant,
        killer: &Participant,
        actions: &mut Vec<Action>,
    ) {
        let Some(tier) = classify(prior) else {
            return;
        };
        let points = bounty_points(prior);
        let relationship = Relationship::between(victim, killer);

        tracing::info!(
            "{}'s {} ({}) ended by {} ({:?}), bounty {}",
            victim.name,
            tier,
            prior,
            killer.name,
            relationship,
            points
        );

        if self.config.announcements.stop_broadcasts {
            let text = self.announcer.stop_message(tier, relationship, victim, killer, points);
            actions.push(Action::broadcast(text));
        }

        if self.config.announcements.bounty_notices {
            if let Some(text) = self.announcer.bounty_notice(tier, relationship, victim, killer, points) {
                actions.push(Action::notify(killer.id, text));
            }
        }

        match relationship {
            Relationship::SelfInflicted => {}
            Relationship::Teammate if self.config.scoring.penalize_teammate_stops => {
                actions.push(Action::penalty(killer.id, points));
            }
            Relationship::Opponent if self.config.scoring.credit_opponent_stops => {
                actions.push(Action::credit(killer.id, points));
            }
            _ => {}
        }
    }

    fn extend_killer_streak(&mut self, killer: &Participant, actions: &mut Vec<Action>) {
        let Some(count) = self.table.get_mut(&killer.id) else {
            return;
        };
        *count += 1;
        let streak = *count;

        let Some(reached) = milestone(streak) else {
            return;
        };
        tracing::info!("{} ({}) reached a streak of {}", killer.name, killer.id, streak);

        if self.config.announcements.milestone_broadcasts {
            let text = self
                .announcer
                .milestone_message(reached, killer, bounty_points(streak));
            actions.push(Action::broadcast(text));
        }
    }

    /// Returns a participant's current streak, if they are tracked.
    pub fn streak(&self, id: ParticipantId) -> Option<u32> {
        self.table.get(&id).copied()
    }

    /// Returns true if the participant has a counter.
    pub fn is_tracked(&self, id: ParticipantId) -> bool {
        self.table.contains_key(&id)
    }

    /// Returns the number of tracked participants.
    pub fn tracked_count(&self) -> usize {
        self.table.len()
    }

    /// Returns participants with a running streak, longest first.
    pub fn leaders(&self) -> Vec<(ParticipantId, u32)> {
        let mut leaders: Vec<(ParticipantId, u32)> = self
            .table
            .iter()
            .filter(|(_, streak)| **streak > 0)
            .map(|(id, streak)| (*id, *streak))
            .collect();
        leaders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        leaders
    }

    /// Returns every tracked participant and streak, ordered by id.
    pub fn streaks(&self) -> Vec<(ParticipantId, u32)> {
        let mut streaks: Vec<(ParticipantId, u32)> =
            self.table.iter().map(|(id, streak)| (*id, *streak)).collect();
        streaks.sort_by_key(|(id, _)| *id);
        streaks
    }

    /// Returns a reference to the configuration.
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Returns a reference to the announcer.
    pub fn announcer(&self) -> &Announcer {
        &self.announcer
    }
}

impl Default for SpreeTracker {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Resolves victim and credited killer to connected participants.
fn resolve_participants<H: SessionHost>(
    host: &H,
    event: &EliminationEvent,
) -> Result<(Participant, Participant), SpreeError> {
    let killer_id = event
        .instrument
        .and_then(|instrument| host.resolve_delegated_owner(instrument))
        .unwrap_or(event.killer);

    let victim = host
        .lookup_active_participant(event.victim)
        .ok_or(SpreeError::UnresolvableParticipant { id: event.victim })?;
    let killer = host
        .lookup_active_participant(killer_id)
        .ok_or(SpreeError::UnresolvableParticipant { id: killer_id })?;

    Ok((victim, killer))
}
