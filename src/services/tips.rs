//! Tip generation
//!
//! Four heuristics over the spending aggregates produce candidate tips,
//! ranked by confidence × yearly impact. The top five replace the stored set
//! wholesale on every run.

use chrono::NaiveDate;

use crate::error::NesteggResult;
use crate::messages::MessageCatalog;
use crate::models::{ExpenseCategory, Money, Tip, TipAction};
use crate::storage::Storage;

use super::stats::SpendingStats;

/// Number of tips kept per generation
pub const MAX_TIPS: usize = 5;

/// Months of history the heuristics look at
const STATS_WINDOW_MONTHS: u32 = 4;

/// Category average above which a reduction tip fires
const CATEGORY_AVG_THRESHOLD: Money = Money::from_major(200);

/// Category average above which the tip is high-confidence
const CATEGORY_AVG_HIGH: Money = Money::from_major(300);

/// Cap on the suggested monthly category reduction
const CATEGORY_REDUCTION_CAP: Money = Money::from_major(50);

/// Fraction of a category's average suggested as a cut
const CATEGORY_REDUCTION_SHARE: f64 = 0.20;

/// Month-over-month increase that triggers a trend tip
const TREND_DELTA_THRESHOLD: Money = Money::from_major(100);

/// Cap on goal-driven reductions, as a share of total monthly spending
const GOAL_REDUCTION_CAP_SHARE: f64 = 0.10;

/// Service generating ranked savings tips
pub struct TipService<'a> {
    storage: &'a Storage,
    catalog: MessageCatalog,
}

impl<'a> TipService<'a> {
    /// Create a new tip service with the default message catalog
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            catalog: MessageCatalog::default_english(),
        }
    }

    /// Create a tip service with a custom message catalog
    pub fn with_catalog(storage: &'a Storage, catalog: MessageCatalog) -> Self {
        Self { storage, catalog }
    }

    /// Generate tips as of `today`, persisting the top five
    pub fn generate(&self, today: NaiveDate) -> NesteggResult<Vec<Tip>> {
        let stats = SpendingStats::collect(self.storage, today, STATS_WINDOW_MONTHS)?;

        let mut tips = Vec::new();
        self.category_tips(&stats, &mut tips);
        self.budget_tips(&stats, &mut tips)?;
        self.goal_tips(&stats, today, &mut tips)?;
        self.trend_tips(&stats, &mut tips);

        tips.sort_by(|a, b| {
            b.score()
                .partial_cmp(&a.score())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        tips.truncate(MAX_TIPS);

        self.storage.tips.replace_all(tips.clone())?;
        self.storage.tips.save()?;
        Ok(tips)
    }

    /// Heuristic (a): categories averaging above the threshold
    fn category_tips(&self, stats: &SpendingStats, tips: &mut Vec<Tip>) {
        for category in ExpenseCategory::ALL {
            let average = stats.category_monthly_average(category);
            if average <= CATEGORY_AVG_THRESHOLD {
                continue;
            }

            let suggested = average
                .scale(CATEGORY_REDUCTION_SHARE)
                .min(CATEGORY_REDUCTION_CAP);
            let impact = suggested.scale(12.0);
            let confidence = if average > CATEGORY_AVG_HIGH { 0.8 } else { 0.6 };

            let text = self.catalog.render(
                "tip.category",
                &[
                    ("average", average.to_string()),
                    ("category", category.to_string()),
                    ("suggested", suggested.to_string()),
                    ("impact", impact.to_string()),
                ],
            );
            tips.push(Tip::new(
                text,
                impact,
                confidence,
                Some(category),
                TipAction::ReduceCategory,
                suggested,
            ));
        }
    }

    /// Heuristic (b): budgets whose actual spend exceeds the limit
    fn budget_tips(&self, stats: &SpendingStats, tips: &mut Vec<Tip>) -> NesteggResult<()> {
        let month = stats.current_month();
        for budget in self.storage.budgets.for_month(month)? {
            let spent = stats.category_total(budget.category, month);
            if spent <= budget.monthly_limit {
                continue;
            }

            let over = spent - budget.monthly_limit;
            let impact = over.scale(12.0);
            let text = self.catalog.render(
                "tip.budget",
                &[
                    ("category", budget.category.to_string()),
                    ("month", month.to_string()),
                    ("over", over.to_string()),
                    ("impact", impact.to_string()),
                ],
            );
            tips.push(Tip::new(
                text,
                impact,
                0.9,
                Some(budget.category),
                TipAction::AdjustBudget,
                over,
            ));
        }
        Ok(())
    }

    /// Heuristic (c): goals needing a monthly contribution to hit deadline
    fn goal_tips(
        &self,
        stats: &SpendingStats,
        today: NaiveDate,
        tips: &mut Vec<Tip>,
    ) -> NesteggResult<()> {
        let monthly_spending = stats.total_for(stats.current_month());
        let reduction_cap = monthly_spending.scale(GOAL_REDUCTION_CAP_SHARE);

        for goal in self.storage.goals.open_goals()? {
            let days_left = (goal.deadline - today).num_days();
            let months_remaining = ((days_left as f64 / 30.0).ceil() as i64).max(1);
            let required = goal.remaining().scale(1.0 / months_remaining as f64);
            if !required.is_positive() {
                continue;
            }

            let suggested = required.min(reduction_cap);
            if !suggested.is_positive() {
                continue;
            }
            let impact = suggested.scale(12.0);

            let text = self.catalog.render(
                "tip.goal",
                &[
                    ("goal", goal.name.clone()),
                    ("required", required.to_string()),
                    ("suggested", suggested.to_string()),
                ],
            );
            tips.push(Tip::new(
                text,
                impact,
                0.7,
                None,
                TipAction::FundGoal,
                suggested,
            ));
        }
        Ok(())
    }

    /// Heuristic (d): month-over-month spending increase
    fn trend_tips(&self, stats: &SpendingStats, tips: &mut Vec<Tip>) {
        let last_month = stats.current_month().prev();
        let prior_month = last_month.prev();
        let last = stats.total_for(last_month);
        let prior = stats.total_for(prior_month);

        if last <= prior + TREND_DELTA_THRESHOLD {
            return;
        }

        let increase = last - prior;
        let impact = increase.scale(12.0);
        let text = self.catalog.render(
            "tip.trend",
            &[
                ("increase", increase.to_string()),
                ("impact", impact.to_string()),
            ],
        );
        tips.push(Tip::new(
            text,
            impact,
            0.6,
            None,
            TipAction::ReviewTrend,
            increase,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NesteggPaths;
    use crate::models::{Budget, Expense, GoalCategory, MonthKey, SavingsGoal};
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

    fn add_expense(storage: &Storage, major: i64, category: ExpenseCategory, d: NaiveDate) {
        storage
            .expenses
            .add(Expense::new(Money::from_major(major), category, "", d))
            .unwrap();
    }

    #[test]
    fn test_no_data_no_tips() {
        let (_t, storage) = create_storage();
        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();
        assert!(tips.is_empty());
        assert_eq!(storage.tips.count().unwrap(), 0);
    }

    #[test]
    fn test_category_tip_fires_above_threshold() {
        let (_t, storage) = create_storage();
        // $400/month food for each window month -> average $400 > $200
        for m in [12u32, 1, 2, 3] {
            let (y, m) = if m == 12 { (2024, 12) } else { (2025, m) };
            add_expense(&storage, 400, ExpenseCategory::Food, date(y, m, 10));
        }

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();

        let tip = tips
            .iter()
            .find(|t| t.related_category == Some(ExpenseCategory::Food))
            .expect("category tip");
        assert_eq!(tip.action, TipAction::ReduceCategory);
        // 20% of $400 is $80, capped at $50
        assert_eq!(tip.suggested_reduction, Money::from_major(50));
        assert_eq!(tip.impact_yearly, Money::from_major(600));
        // Average > $300 -> high confidence
        assert_eq!(tip.confidence, 0.8);
    }

    #[test]
    fn test_category_tip_confidence_tier() {
        let (_t, storage) = create_storage();
        // Average $250: above the threshold, below the high mark
        for m in [12u32, 1, 2, 3] {
            let (y, m) = if m == 12 { (2024, 12) } else { (2025, m) };
            add_expense(&storage, 250, ExpenseCategory::Shopping, date(y, m, 10));
        }

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();
        let tip = tips
            .iter()
            .find(|t| t.related_category == Some(ExpenseCategory::Shopping))
            .expect("category tip");
        assert_eq!(tip.confidence, 0.6);
        // 20% of $250 = $50, exactly at the cap
        assert_eq!(tip.suggested_reduction, Money::from_major(50));
    }

    #[test]
    fn test_budget_overrun_tip() {
        let (_t, storage) = create_storage();
        let march = MonthKey::new(2025, 3);
        storage
            .budgets
            .add(Budget::new(ExpenseCategory::Bills, Money::from_major(100), march))
            .unwrap();
        add_expense(&storage, 150, ExpenseCategory::Bills, date(2025, 3, 5));

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();

        let tip = tips
            .iter()
            .find(|t| t.action == TipAction::AdjustBudget)
            .expect("budget tip");
        assert_eq!(tip.confidence, 0.9);
        assert_eq!(tip.suggested_reduction, Money::from_major(50));
        assert_eq!(tip.impact_yearly, Money::from_major(600));
    }

    #[test]
    fn test_goal_tip_capped_by_spending_share() {
        let (_t, storage) = create_storage();
        // $1000 of current-month spending -> cap = $100/month
        add_expense(&storage, 1000, ExpenseCategory::Other, date(2025, 3, 5));
        storage
            .goals
            .add(SavingsGoal::new(
                "Car",
                Money::from_major(6000),
                date(2025, 9, 11), // 180 days out -> 6 months
                GoalCategory::Vehicle,
            ))
            .unwrap();

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();

        let tip = tips
            .iter()
            .find(|t| t.action == TipAction::FundGoal)
            .expect("goal tip");
        // Required is $1000/month; suggestion capped at 10% of $1000 spending
        assert_eq!(tip.suggested_reduction, Money::from_major(100));
        assert_eq!(tip.confidence, 0.7);
    }

    #[test]
    fn test_trend_tip_on_spike() {
        let (_t, storage) = create_storage();
        // Prior month $200, last month $500: increase of $300 > $100
        add_expense(&storage, 200, ExpenseCategory::Other, date(2025, 1, 10));
        add_expense(&storage, 500, ExpenseCategory::Other, date(2025, 2, 10));

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();

        let tip = tips
            .iter()
            .find(|t| t.action == TipAction::ReviewTrend)
            .expect("trend tip");
        assert_eq!(tip.confidence, 0.6);
        assert_eq!(tip.suggested_reduction, Money::from_major(300));
    }

    #[test]
    fn test_no_trend_tip_below_delta() {
        let (_t, storage) = create_storage();
        add_expense(&storage, 200, ExpenseCategory::Other, date(2025, 1, 10));
        add_expense(&storage, 250, ExpenseCategory::Other, date(2025, 2, 10));

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();
        assert!(tips.iter().all(|t| t.action != TipAction::ReviewTrend));
    }

    #[test]
    fn test_ranking_non_increasing_and_capped() {
        let (_t, storage) = create_storage();
        // Enough signals to overflow the cap: five heavy categories, an
        // overrun budget, a goal, and a trend spike
        for category in [
            ExpenseCategory::Food,
            ExpenseCategory::Transport,
            ExpenseCategory::Bills,
            ExpenseCategory::Entertainment,
            ExpenseCategory::Shopping,
            ExpenseCategory::Health,
        ] {
            for m in [1u32, 2, 3] {
                add_expense(&storage, 400, category, date(2025, m, 10));
            }
        }
        storage
            .budgets
            .add(Budget::new(
                ExpenseCategory::Food,
                Money::from_major(100),
                MonthKey::new(2025, 3),
            ))
            .unwrap();
        storage
            .goals
            .add(SavingsGoal::new(
                "Nest egg",
                Money::from_major(10_000),
                date(2026, 3, 15),
                GoalCategory::EmergencyFund,
            ))
            .unwrap();

        let service = TipService::new(&storage);
        let tips = service.generate(date(2025, 3, 15)).unwrap();

        assert_eq!(tips.len(), MAX_TIPS);
        for pair in tips.windows(2) {
            assert!(pair[0].score() >= pair[1].score());
        }
        // Stored set matches the returned set
        assert_eq!(storage.tips.count().unwrap(), MAX_TIPS);
    }

    #[test]
    fn test_regeneration_replaces_stored_tips() {
        let (_t, storage) = create_storage();
        add_expense(&storage, 400, ExpenseCategory::Food, date(2025, 3, 10));
        add_expense(&storage, 400, ExpenseCategory::Food, date(2025, 2, 10));
        add_expense(&storage, 400, ExpenseCategory::Food, date(2025, 1, 10));
        add_expense(&storage, 400, ExpenseCategory::Food, date(2024, 12, 10));

        let service = TipService::new(&storage);
        let first = service.generate(date(2025, 3, 15)).unwrap();
        assert!(!first.is_empty());

        let second = service.generate(date(2025, 3, 16)).unwrap();
        assert_eq!(storage.tips.count().unwrap(), second.len());
        // Fresh ids each run: the store holds the new generation only
        let stored = storage.tips.all().unwrap();
        for tip in &stored {
            assert!(second.iter().any(|t| t.id == tip.id));
            assert!(first.iter().all(|t| t.id != tip.id));
        }
    }
}
