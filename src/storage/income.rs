//! Monthly income repository

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::{IncomeId, Money, MonthKey, MonthlyIncome};

use super::collection::{Collection, Identified};

impl Identified for MonthlyIncome {
    type Key = IncomeId;

    fn key(&self) -> IncomeId {
        self.id
    }
}

/// Repository for income persistence
pub struct IncomeRepository {
    inner: Collection<MonthlyIncome>,
}

impl IncomeRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Collection::new(path),
        }
    }

    pub fn load(&self) -> NesteggResult<()> {
        self.inner.load()
    }

    pub fn save(&self) -> NesteggResult<()> {
        self.inner.save()
    }

    pub fn all(&self) -> NesteggResult<Vec<MonthlyIncome>> {
        self.inner.all()
    }

    pub fn add(&self, income: MonthlyIncome) -> NesteggResult<()> {
        self.inner.add(income)
    }

    pub fn delete(&self, id: IncomeId) -> NesteggResult<bool> {
        self.inner.remove(&id)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Entries contributing income to a month (recurring entries included)
    pub fn for_month(&self, month: MonthKey) -> NesteggResult<Vec<MonthlyIncome>> {
        self.inner.filter(|i| i.applies_to(month))
    }

    /// Total income for a month
    pub fn total_for_month(&self, month: MonthKey) -> NesteggResult<Money> {
        Ok(self.for_month(month)?.iter().map(|i| i.amount).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_repo() -> (TempDir, IncomeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = IncomeRepository::new(temp_dir.path().join("income.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_total_with_recurring() {
        let (_t, repo) = create_repo();
        repo.add(MonthlyIncome::new(
            Money::from_major(3000),
            "Salary",
            MonthKey::new(2025, 1),
            true,
        ))
        .unwrap();
        repo.add(MonthlyIncome::new(
            Money::from_major(500),
            "Bonus",
            MonthKey::new(2025, 3),
            false,
        ))
        .unwrap();

        // Recurring salary reaches March; bonus applies only there
        assert_eq!(
            repo.total_for_month(MonthKey::new(2025, 3)).unwrap(),
            Money::from_major(3500)
        );
        assert_eq!(
            repo.total_for_month(MonthKey::new(2025, 4)).unwrap(),
            Money::from_major(3000)
        );
        // Before the salary started: nothing
        assert_eq!(
            repo.total_for_month(MonthKey::new(2024, 12)).unwrap(),
            Money::zero()
        );
    }
}
