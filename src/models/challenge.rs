//! Savings challenge model
//!
//! Challenges are a small finite-state machine: `Active` is the only
//! non-terminal state, and a single evaluation step decides the exit
//! transition. Terminal challenges are never re-evaluated.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::ExpenseCategory;
use super::ids::ChallengeId;
use super::money::Money;

/// The kind of challenge, with its per-kind parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum ChallengeKind {
    /// Spend nothing on Saturdays and Sundays within the window
    NoSpendWeekend,

    /// Cut spending in one category below its recent monthly average
    ReduceCategory {
        category: ExpenseCategory,
        /// Percentage reduction aimed for, e.g. 25.0 for "25% less"
        target_reduction_percent: f64,
    },

    /// Save at least `target` (net positive savings) within the window
    SaveAmount { target: Money },

    /// Keep total expenses within the window at or under `limit`
    ExpenseLimit { limit: Money },
}

impl ChallengeKind {
    /// Short label used in listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoSpendWeekend => "no-spend-weekend",
            Self::ReduceCategory { .. } => "reduce-category",
            Self::SaveAmount { .. } => "save-amount",
            Self::ExpenseLimit { .. } => "expense-limit",
        }
    }
}

impl fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Challenge lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeStatus {
    Active,
    Completed,
    Failed,
    Expired,
}

impl ChallengeStatus {
    /// Terminal states are never re-evaluated
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl fmt::Display for ChallengeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Expired => "expired",
        };
        write!(f, "{}", s)
    }
}

/// A savings challenge over a date window
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Challenge {
    pub id: ChallengeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: ChallengeKind,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub status: ChallengeStatus,

    /// Progress score, 0-100
    #[serde(default)]
    pub progress: f64,

    pub created_at: DateTime<Utc>,
}

impl Challenge {
    /// Create a new active challenge
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ChallengeKind,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: ChallengeId::new(),
            name: name.into(),
            description: description.into(),
            kind,
            start_date,
            end_date,
            status: ChallengeStatus::Active,
            progress: 0.0,
            created_at: Utc::now(),
        }
    }

    /// Check if a date falls within the challenge window (inclusive)
    pub fn window_contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }

    /// Validate the challenge
    pub fn validate(&self) -> Result<(), ChallengeValidationError> {
        if self.end_date < self.start_date {
            return Err(ChallengeValidationError::WindowInverted);
        }
        match &self.kind {
            ChallengeKind::ReduceCategory {
                target_reduction_percent,
                ..
            } if *target_reduction_percent <= 0.0 => {
                Err(ChallengeValidationError::NonPositiveTarget)
            }
            ChallengeKind::SaveAmount { target } if !target.is_positive() => {
                Err(ChallengeValidationError::NonPositiveTarget)
            }
            ChallengeKind::ExpenseLimit { limit } if !limit.is_positive() => {
                Err(ChallengeValidationError::NonPositiveTarget)
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}..{} {} ({:.0}%)",
            self.name, self.kind, self.start_date, self.end_date, self.status, self.progress
        )
    }
}

/// Validation errors for challenges
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChallengeValidationError {
    WindowInverted,
    NonPositiveTarget,
}

impl fmt::Display for ChallengeValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WindowInverted => write!(f, "Challenge end date is before its start date"),
            Self::NonPositiveTarget => write!(f, "Challenge target must be positive"),
        }
    }
}

impl std::error::Error for ChallengeValidationError {}
