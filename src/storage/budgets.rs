//! Budget repository

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::{Budget, BudgetId, ExpenseCategory, Money, MonthKey};

use super::collection::{Collection, Identified};

impl Identified for Budget {
    type Key = BudgetId;

    fn key(&self) -> BudgetId {
        self.id
    }
}

/// Repository for budget persistence
///
/// At most one budget is expected per (category, month) pair;
/// `BudgetService::create` enforces this through `find_for`.
pub struct BudgetRepository {
    inner: Collection<Budget>,
}

impl BudgetRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<Budget>> {
        self.inner.all()
    }

    pub fn add(&self, budget: Budget) -> NesteggResult<()> {
        self.inner.add(budget)
    }

    pub fn get(&self, id: BudgetId) -> NesteggResult<Option<Budget>> {
        self.inner.get(&id)
    }

    pub fn delete(&self, id: BudgetId) -> NesteggResult<bool> {
        self.inner.remove(&id)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// The budget for a (category, month) pair, if any
    pub fn find_for(
        &self,
        category: ExpenseCategory,
        month: MonthKey,
    ) -> NesteggResult<Option<Budget>> {
        Ok(self
            .inner
            .filter(|b| b.category == category && b.month == month)?
            .into_iter()
            .next())
    }

    /// Budgets for a calendar month
    pub fn for_month(&self, month: MonthKey) -> NesteggResult<Vec<Budget>> {
        self.inner.filter(|b| b.month == month)
    }

    /// Overwrite the derived spent amount on a budget
    pub fn set_spent(&self, id: BudgetId, spent: Money) -> NesteggResult<bool> {
        self.inner.update(&id, |b| b.current_spent = spent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_repo() -> (TempDir, BudgetRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budgets.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_find_for() {
        let (_t, repo) = create_repo();
        let march = MonthKey::new(2025, 3);
        repo.add(Budget::new(ExpenseCategory::Food, Money::from_major(400), march)).unwrap();

        assert!(repo.find_for(ExpenseCategory::Food, march).unwrap().is_some());
        assert!(repo.find_for(ExpenseCategory::Bills, march).unwrap().is_none());
        assert!(repo
            .find_for(ExpenseCategory::Food, MonthKey::new(2025, 4))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_for_month() {
        let (_t, repo) = create_repo();
        let march = MonthKey::new(2025, 3);
        repo.add(Budget::new(ExpenseCategory::Food, Money::from_major(400), march)).unwrap();
        repo.add(Budget::new(ExpenseCategory::Bills, Money::from_major(300), march)).unwrap();
        repo.add(Budget::new(
            ExpenseCategory::Food,
            Money::from_major(450),
            MonthKey::new(2025, 4),
        ))
        .unwrap();

        assert_eq!(repo.for_month(march).unwrap().len(), 2);
    }

    #[test]
    fn test_set_spent() {
        let (_t, repo) = create_repo();
        let b = Budget::new(
            ExpenseCategory::Food,
            Money::from_major(400),
            MonthKey::new(2025, 3),
        );
        let id = b.id;
        repo.add(b).unwrap();

        assert!(repo.set_spent(id, Money::from_major(123)).unwrap());
        assert_eq!(
            repo.get(id).unwrap().unwrap().current_spent,
            Money::from_major(123)
        );
    }
}
