//! Achievement badges
//!
//! Badges use fixed string slugs as identifiers (e.g. `streak-7`) so awards
//! stay idempotent: inserting an already-earned badge id is a no-op.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a badge was earned for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeCategory {
    Streak,
    Savings,
    Budget,
    Achievement,
}

impl fmt::Display for BadgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Streak => "streak",
            Self::Savings => "savings",
            Self::Budget => "budget",
            Self::Achievement => "achievement",
        };
        write!(f, "{}", s)
    }
}

/// An earned achievement badge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Fixed slug, e.g. "streak-7"
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub category: BadgeCategory,
    pub earned_at: DateTime<Utc>,

    /// Human-readable requirement, e.g. "Save 7 days in a row"
    pub requirement: String,
}

impl Badge {
    /// The badge awarded for an `n`-day saving streak
    pub fn streak(days: u32) -> Self {
        Self {
            id: format!("streak-{}", days),
            name: format!("{}-day streak", days),
            description: format!("Saved money {} days in a row", days),
            icon: "🔥".to_string(),
            category: BadgeCategory::Streak,
            earned_at: Utc::now(),
            requirement: format!("Save {} consecutive days", days),
        }
    }
}
