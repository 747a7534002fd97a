//! Sample data fixtures for testing.
//!
//! This module provides a ready-made session log for other crates to use.
//! Enable the `test-fixtures` feature to access these helpers.
//!
//! # Example
//!
//! ```ignore
//! // In your Cargo.toml:
//! // [dev-dependencies]
//! // spree-events = { path = "../spree-events", features = ["test-fixtures"] }
//!
//! use spree_events::fixtures;
//!
//! let events = fixtures::sample_session();
//! ```

use crate::SessionEvent;

/// Raw JSONL text of the sample session, including one blank line.
pub const SAMPLE_SESSION_JSONL: &str = include_str!("../tests/fixtures/sample_session.jsonl");

/// Returns the sample session as parsed events.
///
/// Two teams, five participants:
/// - Alpha (red) eliminates five blue players and reaches a rampage
/// - Charlie's deployed instrument, fired under Delta's name, ends it
/// - Echo leaves, and a later elimination naming Echo is unresolvable
/// - Bravo eliminates themselves with no streak
pub fn sample_session() -> Vec<SessionEvent> {
    SAMPLE_SESSION_JSONL
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| {
            SessionEvent::from_jsonl(l).unwrap_or_else(|e| {
                panic!("Failed to parse session line: {}\nError: {}", l, e)
            })
        })
        .collect()
}
