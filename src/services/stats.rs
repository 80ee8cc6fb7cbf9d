//! Spending aggregates
//!
//! One pass over expenses and income produces the per-month and per-category
//! totals the tips and advisor engines share. Aggregation is snapshot-based:
//! callers collect once and read many times.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::NesteggResult;
use crate::models::{ExpenseCategory, Money, MonthKey};
use crate::storage::Storage;

/// Aggregated spending and income over a trailing window of months
#[derive(Debug, Clone)]
pub struct SpendingStats {
    /// Window months, ascending; the last entry is the current month
    months: Vec<MonthKey>,
    current: MonthKey,
    month_totals: HashMap<MonthKey, Money>,
    category_month_totals: HashMap<(ExpenseCategory, MonthKey), Money>,
    month_income: HashMap<MonthKey, Money>,
}

impl SpendingStats {
    /// Aggregate the `months_back` months ending with the month of `today`
    pub fn collect(storage: &Storage, today: NaiveDate, months_back: u32) -> NesteggResult<Self> {
        let current = MonthKey::containing(today);
        let mut months = Vec::with_capacity(months_back.max(1) as usize);
        let mut month = current;
        for _ in 0..months_back.max(1) {
            months.push(month);
            month = month.prev();
        }
        months.reverse();

        let window_start = months[0].start_date();
        let window_end = current.end_date();

        let mut month_totals: HashMap<MonthKey, Money> = HashMap::new();
        let mut category_month_totals: HashMap<(ExpenseCategory, MonthKey), Money> = HashMap::new();

        for expense in storage.expenses.in_range(window_start, window_end)? {
            let key = MonthKey::containing(expense.date);
            *month_totals.entry(key).or_default() += expense.amount;
            *category_month_totals
                .entry((expense.category, key))
                .or_default() += expense.amount;
        }

        let mut month_income = HashMap::new();
        for &m in &months {
            month_income.insert(m, storage.income.total_for_month(m)?);
        }

        Ok(Self {
            months,
            current,
            month_totals,
            category_month_totals,
            month_income,
        })
    }

    /// The current month (last in the window)
    pub fn current_month(&self) -> MonthKey {
        self.current
    }

    /// Window months, ascending
    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    /// Total spend in a month (zero outside the window)
    pub fn total_for(&self, month: MonthKey) -> Money {
        self.month_totals.get(&month).copied().unwrap_or_default()
    }

    /// Total spend for one category in a month
    pub fn category_total(&self, category: ExpenseCategory, month: MonthKey) -> Money {
        self.category_month_totals
            .get(&(category, month))
            .copied()
            .unwrap_or_default()
    }

    /// Mean monthly spend for a category over the whole window
    pub fn category_monthly_average(&self, category: ExpenseCategory) -> Money {
        let total: Money = self
            .months
            .iter()
            .map(|m| self.category_total(category, *m))
            .sum();
        total.scale(1.0 / self.months.len() as f64)
    }

    /// Income attributed to a month (zero outside the window)
    pub fn income_for(&self, month: MonthKey) -> Money {
        self.month_income.get(&month).copied().unwrap_or_default()
    }
}
