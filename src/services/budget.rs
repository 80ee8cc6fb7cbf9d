//! Budget service
//!
//! Budget uniqueness per (category, month) is enforced here, at the data
//! path every caller goes through, rather than as a UI-side lookup.

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Budget, BudgetId, ExpenseCategory, Money, MonthKey};
use crate::storage::Storage;

/// Service for budget management
pub struct BudgetService<'a> {
    storage: &'a Storage,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a budget for a (category, month) pair
    ///
    /// The derived spend is seeded from existing expenses so a budget created
    /// mid-month starts accurate.
    pub fn create(
        &self,
        category: ExpenseCategory,
        monthly_limit: Money,
        month: MonthKey,
    ) -> NesteggResult<Budget> {
        if self.storage.budgets.find_for(category, month)?.is_some() {
            return Err(NesteggError::duplicate_budget(format!(
                "{}:{}",
                category, month
            )));
        }

        let mut budget = Budget::new(category, monthly_limit, month);
        budget
            .validate()
            .map_err(|e| NesteggError::Validation(e.to_string()))?;

        budget.current_spent = self
            .storage
            .expenses
            .total_for_category_month(category, month)?;

        self.storage.budgets.add(budget.clone())?;
        self.storage.budgets.save()?;
        Ok(budget)
    }

    /// Budgets for a month with their derived spend freshly recomputed
    pub fn list_month(&self, month: MonthKey) -> NesteggResult<Vec<Budget>> {
        let mut budgets = self.storage.budgets.for_month(month)?;
        for budget in &mut budgets {
            let spent = self
                .storage
                .expenses
                .total_for_category_month(budget.category, month)?;
            if spent != budget.current_spent {
                self.storage.budgets.set_spent(budget.id, spent)?;
                budget.current_spent = spent;
            }
        }
        self.storage.budgets.save()?;
        budgets.sort_by_key(|b| b.category.label());
        Ok(budgets)
    }

    /// Delete a budget
    pub fn delete(&self, id: BudgetId) -> NesteggResult<()> {
        if !self.storage.budgets.delete(id)? {
            return Err(NesteggError::budget_not_found(id.to_string()));
        }
        self.storage.budgets.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NesteggPaths;
    use crate::models::Expense;
    use chrono::NaiveDate;
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
    fn test_duplicate_rejected() {
        let (_t, storage) = create_storage();
        let service = BudgetService::new(&storage);
        let march = MonthKey::new(2025, 3);

        service
            .create(ExpenseCategory::Food, Money::from_major(400), march)
            .unwrap();
        let err = service
            .create(ExpenseCategory::Food, Money::from_major(500), march)
            .unwrap_err();
        assert!(err.is_duplicate());

        // Same category in another month is fine
        service
            .create(ExpenseCategory::Food, Money::from_major(400), MonthKey::new(2025, 4))
            .unwrap();
        assert_eq!(storage.budgets.count().unwrap(), 2);
    }

    #[test]
    fn test_create_seeds_spent_from_existing_expenses() {
        let (_t, storage) = create_storage();
        storage
            .expenses
            .add(Expense::new(
                Money::from_major(150),
                ExpenseCategory::Food,
                "",
                date(2025, 3, 2),
            ))
            .unwrap();

        let service = BudgetService::new(&storage);
        let budget = service
            .create(ExpenseCategory::Food, Money::from_major(400), MonthKey::new(2025, 3))
            .unwrap();
        assert_eq!(budget.current_spent, Money::from_major(150));
    }

    #[test]
    fn test_list_month_recomputes_spent() {
        let (_t, storage) = create_storage();
        let service = BudgetService::new(&storage);
        let march = MonthKey::new(2025, 3);
        service
            .create(ExpenseCategory::Food, Money::from_major(400), march)
            .unwrap();

        // Expense added behind the service's back
        storage
            .expenses
            .add(Expense::new(
                Money::from_major(90),
                ExpenseCategory::Food,
                "",
                date(2025, 3, 9),
            ))
            .unwrap();

        let budgets = service.list_month(march).unwrap();
        assert_eq!(budgets.len(), 1);
        assert_eq!(budgets[0].current_spent, Money::from_major(90));
    }

    #[test]
    fn test_create_rejects_zero_limit() {
        let (_t, storage) = create_storage();
        let service = BudgetService::new(&storage);
        assert!(service
            .create(ExpenseCategory::Food, Money::zero(), MonthKey::new(2025, 3))
            .is_err());
    }
}
