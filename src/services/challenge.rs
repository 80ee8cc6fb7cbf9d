//! Challenge service
//!
//! Creates challenges and evaluates active ones against the expense and
//! saving-activity history. Progress formulas are pure functions; the service
//! wires them to storage and drives the status machine. Terminal challenges
//! are skipped entirely — their status and progress never change again.

use chrono::{Duration, NaiveDate};

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Challenge, ChallengeKind, ChallengeStatus, Money};
use crate::storage::Storage;

/// Days of history consulted by the reduce-category baseline
const REDUCE_CATEGORY_LOOKBACK_DAYS: i64 = 90;

/// Clamp a progress score into [0, 100]
fn clamp_progress(progress: f64) -> f64 {
    progress.clamp(0.0, 100.0)
}

/// Progress for a no-spend-weekend challenge: binary, no partial credit
pub fn no_spend_weekend_progress(any_weekend_expense: bool) -> f64 {
    if any_weekend_expense {
        0.0
    } else {
        100.0
    }
}

/// Progress for a reduce-category challenge
///
/// Compares window spend against the historical monthly average. A zero
/// average yields zero progress: with no prior spending in the category there
/// is no baseline to reduce from, so the challenge cannot advance (kept as
/// specified rather than treating "nothing to cut" as success).
pub fn reduce_category_progress(
    historical_monthly_avg: Money,
    window_spend: Money,
    target_reduction_percent: f64,
) -> f64 {
    if !historical_monthly_avg.is_positive() || target_reduction_percent <= 0.0 {
        return 0.0;
    }
    let avg = historical_monthly_avg.to_major_units();
    let spend = window_spend.to_major_units();
    let reduction_achieved = (avg - spend) / avg * 100.0;
    clamp_progress(reduction_achieved / target_reduction_percent * 100.0)
}

/// Progress for a save-amount challenge
pub fn save_amount_progress(saved: Money, target: Money) -> f64 {
    if !target.is_positive() {
        return 0.0;
    }
    clamp_progress(saved.ratio_of(target) * 100.0)
}

/// Progress for an expense-limit challenge
///
/// Full credit at or under the limit, then linear degradation: spend at twice
/// the limit scores zero.
pub fn expense_limit_progress(spend: Money, limit: Money) -> f64 {
    if !limit.is_positive() {
        return 0.0;
    }
    if spend <= limit {
        return 100.0;
    }
    let overrun = (spend - limit).ratio_of(limit);
    clamp_progress(100.0 - overrun * 100.0)
}

/// Service for challenge management and evaluation
pub struct ChallengeService<'a> {
    storage: &'a Storage,
}

impl<'a> ChallengeService<'a> {
    /// Create a new challenge service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate and persist a new challenge
    ///
    /// Status and progress are stored as given; nothing is derived at
    /// creation time.
    pub fn create(&self, challenge: Challenge) -> NesteggResult<Challenge> {
        challenge
            .validate()
            .map_err(|e| NesteggError::Validation(e.to_string()))?;

        self.storage.challenges.add(challenge.clone())?;
        self.storage.challenges.save()?;
        Ok(challenge)
    }

    /// All challenges
    pub fn list(&self) -> NesteggResult<Vec<Challenge>> {
        self.storage.challenges.all()
    }

    /// Compute the current progress score for a challenge
    pub fn progress_for(&self, challenge: &Challenge) -> NesteggResult<f64> {
        let start = challenge.start_date;
        let end = challenge.end_date;

        let progress = match &challenge.kind {
            ChallengeKind::NoSpendWeekend => {
                let any_weekend = self.storage.expenses.any_weekend_in_range(start, end)?;
                no_spend_weekend_progress(any_weekend)
            }
            ChallengeKind::ReduceCategory {
                category,
                target_reduction_percent,
            } => {
                let lookback_start = start - Duration::days(REDUCE_CATEGORY_LOOKBACK_DAYS);
                let lookback_end = start - Duration::days(1);
                let historical_total = self.storage.expenses.total_for_category_in_range(
                    *category,
                    lookback_start,
                    lookback_end,
                )?;
                let historical_monthly_avg = historical_total.scale(1.0 / 3.0);
                let window_spend = self
                    .storage
                    .expenses
                    .total_for_category_in_range(*category, start, end)?;
                reduce_category_progress(
                    historical_monthly_avg,
                    window_spend,
                    *target_reduction_percent,
                )
            }
            ChallengeKind::SaveAmount { target } => {
                let saved = self.storage.activities.saved_in_range(start, end)?;
                save_amount_progress(saved, *target)
            }
            ChallengeKind::ExpenseLimit { limit } => {
                let spend = self.storage.expenses.total_in_range(start, end)?;
                expense_limit_progress(spend, *limit)
            }
        };

        Ok(progress)
    }

    /// Evaluate every active challenge as of `today`
    ///
    /// Past the deadline the final progress decides completed vs failed.
    /// Before the deadline, reaching 100 completes the challenge early;
    /// otherwise the fresh progress is persisted and the challenge stays
    /// active. Returns the challenges that were updated.
    pub fn evaluate_all(&self, today: NaiveDate) -> NesteggResult<Vec<Challenge>> {
        let mut updated = Vec::new();

        for challenge in self.storage.challenges.active()? {
            let progress = self.progress_for(&challenge)?;

            let status = if today > challenge.end_date {
                if progress >= 100.0 {
                    ChallengeStatus::Completed
                } else {
                    ChallengeStatus::Failed
                }
            } else if progress >= 100.0 {
                ChallengeStatus::Completed
            } else {
                ChallengeStatus::Active
            };

            self.storage
                .challenges
                .set_outcome(challenge.id, progress, status)?;

            if let Some(fresh) = self.storage.challenges.get(challenge.id)? {
                updated.push(fresh);
            }
        }

        self.storage.challenges.save()?;
        Ok(updated)
    }
}
