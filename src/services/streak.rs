//! Streak service
//!
//! Records saving activity, maintains the singleton streak record, and awards
//! threshold badges. Streak reads project the stored record without
//! recomputation; only a recorded saving day triggers a recompute.

use chrono::NaiveDate;

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Badge, GoalContribution, Money, SavingActivity, UserStreak};
use crate::storage::Storage;

/// Streak lengths that earn a badge
pub const STREAK_BADGE_DAYS: [u32; 5] = [7, 14, 30, 60, 100];

/// Result of recording a saving activity
#[derive(Debug, Clone)]
pub struct SavingOutcome {
    pub activity: SavingActivity,
    pub streak: UserStreak,
    /// Badges newly earned by this recording
    pub new_badges: Vec<Badge>,
}

/// Service for saving activity and streak management
pub struct StreakService<'a> {
    storage: &'a Storage,
}

impl<'a> StreakService<'a> {
    /// Create a new streak service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a saving activity for `today`
    ///
    /// Appends one activity row, applies any goal contributions, and — when
    /// the day counts as a saving day — updates the streak record and checks
    /// badge thresholds.
    pub fn record_saving_activity(
        &self,
        today: NaiveDate,
        net_savings: Money,
        is_manual_saving_day: bool,
        goal_contributions: Vec<GoalContribution>,
    ) -> NesteggResult<SavingOutcome> {
        // Contributions target existing goals
        for contribution in &goal_contributions {
            if self.storage.goals.get(contribution.goal_id)?.is_none() {
                return Err(NesteggError::goal_not_found(
                    contribution.goal_id.to_string(),
                ));
            }
        }

        let activity = SavingActivity::new(
            today,
            net_savings,
            is_manual_saving_day,
            goal_contributions.clone(),
        );
        self.storage.activities.add(activity.clone())?;

        for contribution in &goal_contributions {
            self.storage
                .goals
                .contribute(contribution.goal_id, contribution.amount)?;
        }

        let mut new_badges = Vec::new();
        let mut streak = self.storage.streak.get()?;

        if activity.counts_as_saving_day() {
            streak.mark_saving_day(today, today);
            self.storage.streak.put(streak.clone())?;
            new_badges = self.award_streak_badges(streak.current_streak)?;
        }

        self.storage.activities.save()?;
        self.storage.goals.save()?;
        self.storage.streak.save()?;
        self.storage.badges.save()?;

        Ok(SavingOutcome {
            activity,
            streak,
            new_badges,
        })
    }

    /// The stored current streak (no recomputation)
    pub fn current_streak(&self) -> NesteggResult<u32> {
        Ok(self.storage.streak.get()?.current_streak)
    }

    /// The stored longest streak (no recomputation)
    pub fn longest_streak(&self) -> NesteggResult<u32> {
        Ok(self.storage.streak.get()?.longest_streak)
    }

    /// Award any threshold badges the current streak qualifies for
    ///
    /// Each badge id is fixed, so re-checking with an unchanged streak never
    /// duplicates an award.
    fn award_streak_badges(&self, current_streak: u32) -> NesteggResult<Vec<Badge>> {
        let mut earned = Vec::new();
        for days in STREAK_BADGE_DAYS {
            if current_streak >= days {
                let badge = Badge::streak(days);
                if self.storage.badges.add_if_absent(badge.clone())? {
                    earned.push(badge);
                }
            }
        }
        Ok(earned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NesteggPaths;
    use crate::models::{GoalCategory, SavingsGoal};
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = NesteggPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    #[test]
    fn test_positive_savings_starts_streak() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        let outcome = service
            .record_saving_activity(date(2025, 3, 10), Money::from_cents(500), false, vec![])
            .unwrap();

        assert_eq!(outcome.streak.current_streak, 1);
        assert_eq!(service.current_streak().unwrap(), 1);
        assert_eq!(storage.activities.count().unwrap(), 1);
    }

    #[test]
    fn test_negative_savings_does_not_touch_streak() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        let outcome = service
            .record_saving_activity(date(2025, 3, 10), Money::from_cents(-500), false, vec![])
            .unwrap();

        assert_eq!(outcome.streak.current_streak, 0);
        // The activity row is still appended
        assert_eq!(storage.activities.count().unwrap(), 1);
    }

    #[test]
    fn test_manual_override_counts() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        let outcome = service
            .record_saving_activity(date(2025, 3, 10), Money::from_cents(-500), true, vec![])
            .unwrap();

        assert_eq!(outcome.streak.current_streak, 1);
    }

    #[test]
    fn test_same_day_recording_is_idempotent_for_streak() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);
        let today = date(2025, 3, 10);

        service
            .record_saving_activity(today, Money::from_cents(100), false, vec![])
            .unwrap();
        let outcome = service
            .record_saving_activity(today, Money::from_cents(200), false, vec![])
            .unwrap();

        assert_eq!(outcome.streak.current_streak, 1);
        assert_eq!(storage.activities.count().unwrap(), 2);
    }

    #[test]
    fn test_consecutive_days_extend_streak() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        for day in 1..=3 {
            service
                .record_saving_activity(date(2025, 3, day), Money::from_cents(100), false, vec![])
                .unwrap();
        }

        assert_eq!(service.current_streak().unwrap(), 3);
        assert_eq!(service.longest_streak().unwrap(), 3);
    }

    #[test]
    fn test_longest_streak_survives_gap() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        for day in 1..=4 {
            service
                .record_saving_activity(date(2025, 3, day), Money::from_cents(100), false, vec![])
                .unwrap();
        }
        // A gap, then one more day
        service
            .record_saving_activity(date(2025, 3, 20), Money::from_cents(100), false, vec![])
            .unwrap();

        assert_eq!(service.current_streak().unwrap(), 1);
        assert_eq!(service.longest_streak().unwrap(), 4);
    }

    #[test]
    fn test_badge_awarded_at_threshold_once() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        let mut last_outcome = None;
        for day in 1..=7 {
            last_outcome = Some(
                service
                    .record_saving_activity(
                        date(2025, 3, day),
                        Money::from_cents(100),
                        false,
                        vec![],
                    )
                    .unwrap(),
            );
        }
        let outcome = last_outcome.unwrap();
        assert_eq!(outcome.streak.current_streak, 7);
        assert_eq!(outcome.new_badges.len(), 1);
        assert_eq!(outcome.new_badges[0].id, "streak-7");

        // Another recording on the same day must not duplicate the badge
        let outcome = service
            .record_saving_activity(date(2025, 3, 7), Money::from_cents(100), false, vec![])
            .unwrap();
        assert!(outcome.new_badges.is_empty());
        assert_eq!(storage.badges.count().unwrap(), 1);
    }

    #[test]
    fn test_goal_contribution_applied() {
        let (_t, storage) = create_storage();
        let goal = SavingsGoal::new(
            "Trip",
            Money::from_major(1000),
            date(2025, 12, 31),
            GoalCategory::Travel,
        );
        let goal_id = goal.id;
        storage.goals.add(goal).unwrap();

        let service = StreakService::new(&storage);
        service
            .record_saving_activity(
                date(2025, 3, 10),
                Money::from_major(50),
                false,
                vec![GoalContribution {
                    goal_id,
                    amount: Money::from_major(50),
                }],
            )
            .unwrap();

        assert_eq!(
            storage.goals.get(goal_id).unwrap().unwrap().current_amount,
            Money::from_major(50)
        );
    }

    #[test]
    fn test_contribution_to_unknown_goal_rejected() {
        let (_t, storage) = create_storage();
        let service = StreakService::new(&storage);

        let result = service.record_saving_activity(
            date(2025, 3, 10),
            Money::from_major(50),
            false,
            vec![GoalContribution {
                goal_id: crate::models::GoalId::new(),
                amount: Money::from_major(50),
            }],
        );

        assert!(result.is_err());
        // Nothing was appended
        assert_eq!(storage.activities.count().unwrap(), 0);
    }
}
