//! Session log replay.
//!
//! Drives a recorded session through a [`Roster`], a [`SpreeTracker`] and a
//! [`Scoreboard`] in the order a live host would.

use std::fs;
use std::path::Path;

use serde::Serialize;
use spree_events::{Action, ParticipantId, SessionEvent};

use crate::roster::Roster;
use crate::scoreboard::{Scoreboard, Standing};
use crate::tracker::SpreeTracker;
use crate::SpreeError;

/// Reads a JSONL session log. Blank lines are skipped.
pub fn read_session_log(path: &Path) -> Result<Vec<SessionEvent>, SpreeError> {
    let content = fs::read_to_string(path)?;
    parse_session_log(&content)
}

/// Parses JSONL session log text. Blank lines are skipped; errors carry the
/// 1-based line number.
pub fn parse_session_log(content: &str) -> Result<Vec<SessionEvent>, SpreeError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            SessionEvent::from_jsonl(line).map_err(|source| SpreeError::Parse {
                line: index + 1,
                source,
            })
        })
        .collect()
}

/// Everything a replay produced.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Number of events processed
    pub events: usize,
    /// Every action, in emission order
    pub actions: Vec<Action>,
    /// Bounty standings, best first
    pub standings: Vec<(ParticipantId, Standing)>,
    /// Streaks of participants still connected at the end, by id
    pub final_streaks: Vec<(ParticipantId, u32)>,
}

impl ReplayReport {
    /// Returns the text of every broadcast, in order.
    pub fn broadcasts(&self) -> Vec<&str> {
        self.actions
            .iter()
            .filter(|a| matches!(a, Action::Broadcast { .. }))
            .filter_map(|a| a.text())
            .collect()
    }

    /// Returns every broadcast and private notice as a printable line, in
    /// order. Notices are prefixed with their recipient.
    pub fn transcript(&self) -> Vec<String> {
        self.actions
            .iter()
            .filter_map(|action| match action {
                Action::Broadcast { text } => Some(text.clone()),
                Action::Notify { participant, text } => Some(format!("[to {}] {}", participant, text)),
                Action::AdjustScore { .. } => None,
            })
            .collect()
    }
}

/// A host simulation around one tracker.
#[derive(Debug, Clone, Default)]
pub struct Replay {
    roster: Roster,
    tracker: SpreeTracker,
    scoreboard: Scoreboard,
    events: usize,
    actions: Vec<Action>,
}

impl Replay {
    /// Creates a replay around a configured tracker.
    pub fn new(tracker: SpreeTracker) -> Self {
        Self {
            roster: Roster::new(),
            tracker,
            scoreboard: Scoreboard::new(),
            events: 0,
            actions: Vec::new(),
        }
    }

    /// Applies one event and returns the actions it produced.
    ///
    /// Joins reach the roster before the tracker and leaves reach the
    /// tracker first, so the tracker never sees an id the host has not
    /// registered yet.
    pub fn step(&mut self, event: &SessionEvent) -> Vec<Action> {
        self.events += 1;

        let actions = match event {
            SessionEvent::Join { .. } => {
                self.roster.apply(event);
                self.tracker.handle_event(&self.roster, event)
            }
            SessionEvent::Leave { .. } => {
                let actions = self.tracker.handle_event(&self.roster, event);
                self.roster.apply(event);
                actions
            }
            SessionEvent::Deploy { .. } | SessionEvent::Retire { .. } => {
                self.roster.apply(event);
                Vec::new()
            }
            SessionEvent::Elimination(_) => self.tracker.handle_event(&self.roster, event),
        };

        self.scoreboard.apply_all(&actions);
        self.actions.extend(actions.iter().cloned());
        actions
    }

    /// Applies every event in order and returns the report.
    pub fn run<'a>(mut self, events: impl IntoIterator<Item = &'a SessionEvent>) -> ReplayReport {
        for event in events {
            self.step(event);
        }
        tracing::info!(
            "Replayed {} events, {} actions",
            self.events,
            self.actions.len()
        );
        self.into_report()
    }

    /// Finishes the replay.
    pub fn into_report(self) -> ReplayReport {
        ReplayReport {
            events: self.events,
            standings: self.scoreboard.standings(),
            final_streaks: self.tracker.streaks(),
            actions: self.actions,
        }
    }

    /// Returns the host roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Returns the tracker.
    pub fn tracker(&self) -> &SpreeTracker {
        &self.tracker
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }
}
