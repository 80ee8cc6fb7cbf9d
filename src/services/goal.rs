//! Savings goal service

use chrono::NaiveDate;

use crate::error::{NesteggError, NesteggResult};
use crate::models::{GoalCategory, GoalId, Money, SavingsGoal};
use crate::storage::Storage;

/// Service for savings goal management
pub struct GoalService<'a> {
    storage: &'a Storage,
}

impl<'a> GoalService<'a> {
    /// Create a new goal service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a new savings goal
    pub fn create(
        &self,
        name: impl Into<String>,
        target_amount: Money,
        deadline: NaiveDate,
        category: GoalCategory,
    ) -> NesteggResult<SavingsGoal> {
        let goal = SavingsGoal::new(name, target_amount, deadline, category);
        goal.validate()
            .map_err(|e| NesteggError::Validation(e.to_string()))?;

        self.storage.goals.add(goal.clone())?;
        self.storage.goals.save()?;
        Ok(goal)
    }

    /// Contribute toward a goal; the saved amount may exceed the target
    pub fn contribute(&self, id: GoalId, amount: Money) -> NesteggResult<SavingsGoal> {
        if !amount.is_positive() {
            return Err(NesteggError::Validation(
                "Contribution amount must be positive".into(),
            ));
        }
        if !self.storage.goals.contribute(id, amount)? {
            return Err(NesteggError::goal_not_found(id.to_string()));
        }
        self.storage.goals.save()?;

        self.storage
            .goals
            .get(id)?
            .ok_or_else(|| NesteggError::goal_not_found(id.to_string()))
    }

    /// All goals, earliest deadline first
    pub fn list(&self) -> NesteggResult<Vec<SavingsGoal>> {
        let mut goals = self.storage.goals.all()?;
        goals.sort_by(|a, b| a.deadline.cmp(&b.deadline));
        Ok(goals)
    }

    /// Delete a goal
    pub fn delete(&self, id: GoalId) -> NesteggResult<()> {
        if !self.storage.goals.delete(id)? {
            return Err(NesteggError::goal_not_found(id.to_string()));
        }
        self.storage.goals.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NesteggPaths;
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
    fn test_create_and_contribute_past_target() {
        let (_t, storage) = create_storage();
        let service = GoalService::new(&storage);

        let goal = service
            .create("Trip", Money::from_major(500), date(2025, 12, 31), GoalCategory::Travel)
            .unwrap();

        let updated = service.contribute(goal.id, Money::from_major(600)).unwrap();
        assert_eq!(updated.current_amount, Money::from_major(600));
        assert!(updated.is_reached());
    }

    #[test]
    fn test_create_rejects_invalid() {
        let (_t, storage) = create_storage();
        let service = GoalService::new(&storage);

        assert!(service
            .create("", Money::from_major(500), date(2025, 12, 31), GoalCategory::Other)
            .is_err());
        assert!(service
            .create("x", Money::zero(), date(2025, 12, 31), GoalCategory::Other)
            .is_err());
        assert_eq!(storage.goals.count().unwrap(), 0);
    }

    #[test]
    fn test_contribute_requires_positive_amount() {
        let (_t, storage) = create_storage();
        let service = GoalService::new(&storage);
        let goal = service
            .create("Trip", Money::from_major(500), date(2025, 12, 31), GoalCategory::Travel)
            .unwrap();

        assert!(service.contribute(goal.id, Money::zero()).is_err());
        assert!(service.contribute(goal.id, Money::from_major(-10)).is_err());
    }

    #[test]
    fn test_list_sorted_by_deadline() {
        let (_t, storage) = create_storage();
        let service = GoalService::new(&storage);
        service
            .create("Later", Money::from_major(100), date(2026, 1, 1), GoalCategory::Other)
            .unwrap();
        service
            .create("Sooner", Money::from_major(100), date(2025, 6, 1), GoalCategory::Other)
            .unwrap();

        let list = service.list().unwrap();
        assert_eq!(list[0].name, "Sooner");
    }

    #[test]
    fn test_delete_unknown_goal() {
        let (_t, storage) = create_storage();
        let service = GoalService::new(&storage);
        assert!(service.delete(GoalId::new()).unwrap_err().is_not_found());
    }
}
