//! Streak classification.
//!
//! Maps a streak count onto its named tier and bounty. Everything here is a
//! pure function of the count.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Smallest streak that counts as a spree.
pub const SPREE_THRESHOLD: u32 = 5;

/// Streak count at which the open-ended top tier starts.
pub const REIGN_THRESHOLD: u32 = 20;

/// Named bucket for a streak of at least [`SPREE_THRESHOLD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// 5 to 9
    Rampage,
    /// 10 to 14
    KillingSpree,
    /// 15 to 19
    Blitz,
    /// 20 and above
    Reign,
}

impl Tier {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Rampage => "rampage",
            Tier::KillingSpree => "killing spree",
            Tier::Blitz => "blitz",
            Tier::Reign => "reign of destruction",
        }
    }

    /// Lowest streak that falls in this tier.
    pub fn floor(&self) -> u32 {
        match self {
            Tier::Rampage => 5,
            Tier::KillingSpree => 10,
            Tier::Blitz => 15,
            Tier::Reign => REIGN_THRESHOLD,
        }
    }

    /// Returns all tiers in ascending order.
    pub fn all() -> &'static [Tier] {
        &[Tier::Rampage, Tier::KillingSpree, Tier::Blitz, Tier::Reign]
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a streak. Streaks below [`SPREE_THRESHOLD`] have no tier.
pub fn classify(streak: u32) -> Option<Tier> {
    match streak {
        0..=4 => None,
        5..=9 => Some(Tier::Rampage),
        10..=14 => Some(Tier::KillingSpree),
        15..=19 => Some(Tier::Blitz),
        _ => Some(Tier::Reign),
    }
}

/// Bounty carried by a streak: two points per completed block of five.
pub fn bounty_points(streak: u32) -> u32 {
    2 * (streak / SPREE_THRESHOLD)
}

/// A streak value worth announcing when a killer reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Milestone {
    /// Entered a new tier (5, 10, 15 or 20)
    Reached { tier: Tier },
    /// Another block of five inside the top tier (25, 30, ...)
    Ongoing,
}

/// Returns the milestone for a freshly incremented streak, if any.
pub fn milestone(streak: u32) -> Option<Milestone> {
    match streak {
        5 | 10 | 15 | 20 => classify(streak).map(|tier| Milestone::Reached { tier }),
        s if s > REIGN_THRESHOLD && s % SPREE_THRESHOLD == 0 => Some(Milestone::Ongoing),
        _ => None,
    }
}
