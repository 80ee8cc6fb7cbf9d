//! Advisor service
//!
//! A deterministic rule engine producing prioritized advice from income,
//! spending, budget, and goal aggregates. No model or network call is
//! involved; the "advisor" label describes the output, not the mechanism.
//! Output is cached briefly and replaced wholesale on regeneration.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::error::NesteggResult;
use crate::models::{
    Advice, AdviceImpact, AdviceKind, AdvicePriority, ExpenseCategory, Money,
};
use crate::storage::Storage;

use super::stats::SpendingStats;

/// Most advice records kept in storage
pub const MAX_STORED_ADVICE: usize = 10;

/// Advice records surfaced to the caller
pub const MAX_SURFACED_ADVICE: usize = 5;

/// Savings rate below this fraction of income triggers advice
const SAVINGS_RATE_TARGET: f64 = 0.20;

/// Savings rate below this fraction makes it high priority
const SAVINGS_RATE_CRITICAL: f64 = 0.10;

/// Month-over-month expense growth that counts as a spike
const SPIKE_GROWTH_THRESHOLD: f64 = 0.15;

/// Aggregate budgeted-vs-income ratio that counts as over-committed
const BUDGET_LOAD_THRESHOLD: f64 = 0.80;

/// Spending above this multiple of a category benchmark draws advice
const BENCHMARK_FLAG_MULTIPLE: f64 = 1.5;

/// Spending above this multiple makes it high priority
const BENCHMARK_CRITICAL_MULTIPLE: f64 = 2.0;

/// Service generating prioritized advice
pub struct AdvisorService<'a> {
    storage: &'a Storage,
    cache_minutes: i64,
}

impl<'a> AdvisorService<'a> {
    /// Create a new advisor with the default one-hour cache
    pub fn new(storage: &'a Storage) -> Self {
        Self {
            storage,
            cache_minutes: 60,
        }
    }

    /// Override the cache lifetime
    pub fn with_cache_minutes(storage: &'a Storage, cache_minutes: i64) -> Self {
        Self {
            storage,
            cache_minutes,
        }
    }

    /// Produce advice as of `now`, reusing the cache when it is fresh
    ///
    /// Regeneration replaces the stored advice wholesale: items are ranked by
    /// (priority weight, yearly savings), at most ten are stored, and the top
    /// five are returned.
    pub fn generate(
        &self,
        now: DateTime<Utc>,
        today: NaiveDate,
        force_refresh: bool,
    ) -> NesteggResult<Vec<Advice>> {
        if !force_refresh {
            if let Some(newest) = self.storage.advice.newest_created_at()? {
                if now - newest < Duration::minutes(self.cache_minutes) {
                    return self.surfaced();
                }
            }
        }

        let stats = SpendingStats::collect(self.storage, today, 2)?;
        let mut advice = Vec::new();

        self.savings_rate_rule(&stats, now, &mut advice);
        self.spending_spike_rule(&stats, now, &mut advice);
        self.goal_rules(&stats, now, today, &mut advice)?;
        self.budget_rules(&stats, now, &mut advice)?;
        self.benchmark_rules(&stats, now, &mut advice);

        advice.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
        advice.truncate(MAX_STORED_ADVICE);

        self.storage.advice.replace_all(advice)?;
        self.storage.advice.save()?;
        self.surfaced()
    }

    /// The stored advice, ranked, capped at the surfaced limit
    pub fn surfaced(&self) -> NesteggResult<Vec<Advice>> {
        let mut advice = self.storage.advice.all()?;
        advice.sort_by(|a, b| b.rank_key().cmp(&a.rank_key()));
        advice.truncate(MAX_SURFACED_ADVICE);
        Ok(advice)
    }

    /// Savings rate below target: suggest boosting monthly savings
    fn savings_rate_rule(
        &self,
        stats: &SpendingStats,
        now: DateTime<Utc>,
        advice: &mut Vec<Advice>,
    ) {
        let month = stats.current_month();
        let income = stats.income_for(month);
        if !income.is_positive() {
            return;
        }

        let saved = income - stats.total_for(month);
        let rate = saved.ratio_of(income).max(0.0);
        if rate >= SAVINGS_RATE_TARGET {
            return;
        }

        let priority = if rate < SAVINGS_RATE_CRITICAL {
            AdvicePriority::High
        } else {
            AdvicePriority::Medium
        };
        let shortfall = income.scale(SAVINGS_RATE_TARGET) - saved;

        advice.push(Advice::new(
            AdviceKind::BoostSavings,
            "Boost your savings rate",
            format!(
                "You are saving {:.0}% of your income this month; 20% is the usual guideline. Setting aside another {} per month closes the gap.",
                rate * 100.0,
                shortfall
            ),
            AdviceImpact {
                monthly_savings: shortfall,
                yearly_savings: shortfall.scale(12.0),
                goal_time_reduction_months: None,
            },
            priority,
            vec![
                "Automate a transfer to savings on payday".to_string(),
                "Review subscriptions and recurring charges".to_string(),
            ],
            None,
            now,
        ));
    }

    /// Month-over-month expense growth above the spike threshold
    fn spending_spike_rule(
        &self,
        stats: &SpendingStats,
        now: DateTime<Utc>,
        advice: &mut Vec<Advice>,
    ) {
        let current = stats.total_for(stats.current_month());
        let previous = stats.total_for(stats.current_month().prev());
        if !previous.is_positive() {
            return;
        }

        let growth = (current - previous).ratio_of(previous);
        if growth <= SPIKE_GROWTH_THRESHOLD {
            return;
        }

        let increase = current - previous;
        advice.push(Advice::new(
            AdviceKind::SpendingSpike,
            "Spending spike this month",
            format!(
                "Expenses are up {:.0}% on last month ({} more). Catching it early keeps the month recoverable.",
                growth * 100.0,
                increase
            ),
            AdviceImpact {
                monthly_savings: increase,
                yearly_savings: increase.scale(12.0),
                goal_time_reduction_months: None,
            },
            AdvicePriority::High,
            vec!["Scan this month's largest expenses for one-offs".to_string()],
            None,
            now,
        ));
    }

    /// Per-goal shortfall or surplus against the required monthly saving
    fn goal_rules(
        &self,
        stats: &SpendingStats,
        now: DateTime<Utc>,
        today: NaiveDate,
        advice: &mut Vec<Advice>,
    ) -> NesteggResult<()> {
        let month = stats.current_month();
        let free = stats.income_for(month) - stats.total_for(month);

        for goal in self.storage.goals.open_goals()? {
            let days_left = (goal.deadline - today).num_days();
            let months_remaining = ((days_left as f64 / 30.0).ceil() as i64).max(1);
            let required = goal.remaining().scale(1.0 / months_remaining as f64);
            if !required.is_positive() {
                continue;
            }

            if free < required {
                let gap = required - free;
                let priority = if free < required.scale(0.5) {
                    AdvicePriority::High
                } else {
                    AdvicePriority::Medium
                };
                advice.push(Advice::new(
                    AdviceKind::GoalShortfall,
                    format!("\"{}\" is off pace", goal.name),
                    format!(
                        "Hitting \"{}\" by {} needs {} per month; current free cash flow leaves you {} short.",
                        goal.name, goal.deadline, required, gap
                    ),
                    AdviceImpact {
                        monthly_savings: gap,
                        yearly_savings: gap.scale(12.0),
                        goal_time_reduction_months: None,
                    },
                    priority,
                    vec![format!("Direct {} per month toward this goal", required)],
                    None,
                    now,
                ));
            } else if free > required {
                // Putting the whole surplus toward the goal shortens the runway
                let accelerated_months =
                    ((goal.remaining().to_major_units() / free.to_major_units()).ceil() as i64)
                        .max(1);
                let saved_months = (months_remaining - accelerated_months).max(0) as u32;
                if saved_months == 0 {
                    continue;
                }
                advice.push(Advice::new(
                    AdviceKind::GoalSurplus,
                    format!("\"{}\" could finish early", goal.name),
                    format!(
                        "Free cash flow of {} per month beats the {} this goal needs; committing it would finish about {} months sooner.",
                        free, required, saved_months
                    ),
                    AdviceImpact {
                        monthly_savings: Money::zero(),
                        yearly_savings: Money::zero(),
                        goal_time_reduction_months: Some(saved_months),
                    },
                    AdvicePriority::Low,
                    vec![format!("Raise the monthly contribution toward {}", free)],
                    None,
                    now,
                ));
            }
        }
        Ok(())
    }

    /// Per-budget overruns plus the aggregate budget-vs-income load
    fn budget_rules(
        &self,
        stats: &SpendingStats,
        now: DateTime<Utc>,
        advice: &mut Vec<Advice>,
    ) -> NesteggResult<()> {
        let month = stats.current_month();
        let income = stats.income_for(month);
        let mut total_budgeted = Money::zero();

        for budget in self.storage.budgets.for_month(month)? {
            total_budgeted += budget.monthly_limit;
            let spent = stats.category_total(budget.category, month);
            if spent <= budget.monthly_limit {
                continue;
            }

            let over = spent - budget.monthly_limit;
            advice.push(Advice::new(
                AdviceKind::BudgetOverrun,
                format!("{} budget exceeded", budget.category),
                format!(
                    "{} spending of {} is {} over its {} limit for {}.",
                    budget.category, spent, over, budget.monthly_limit, month
                ),
                AdviceImpact {
                    monthly_savings: over,
                    yearly_savings: over.scale(12.0),
                    goal_time_reduction_months: None,
                },
                AdvicePriority::Medium,
                vec![format!("Pause non-essential {} purchases", budget.category)],
                Some(budget.category),
                now,
            ));
        }

        if income.is_positive() && total_budgeted.ratio_of(income) > BUDGET_LOAD_THRESHOLD {
            advice.push(Advice::new(
                AdviceKind::BudgetLoad,
                "Budgets consume most of your income",
                format!(
                    "Budgets total {} against {} of income ({:.0}%). Little is left for saving.",
                    total_budgeted,
                    income,
                    total_budgeted.ratio_of(income) * 100.0
                ),
                AdviceImpact {
                    monthly_savings: total_budgeted - income.scale(BUDGET_LOAD_THRESHOLD),
                    yearly_savings: (total_budgeted - income.scale(BUDGET_LOAD_THRESHOLD))
                        .scale(12.0),
                    goal_time_reduction_months: None,
                },
                AdvicePriority::High,
                vec!["Trim the largest budget lines first".to_string()],
                None,
                now,
            ));
        }
        Ok(())
    }

    /// Per-category spend against the fixed benchmark share of income
    fn benchmark_rules(
        &self,
        stats: &SpendingStats,
        now: DateTime<Utc>,
        advice: &mut Vec<Advice>,
    ) {
        let month = stats.current_month();
        let income = stats.income_for(month);
        if !income.is_positive() {
            return;
        }

        for category in ExpenseCategory::ALL {
            let benchmark = income.scale(category.benchmark_share());
            if !benchmark.is_positive() {
                continue;
            }
            let spent = stats.category_total(category, month);
            let multiple = spent.ratio_of(benchmark);
            if multiple <= BENCHMARK_FLAG_MULTIPLE {
                continue;
            }

            let priority = if multiple > BENCHMARK_CRITICAL_MULTIPLE {
                AdvicePriority::High
            } else {
                AdvicePriority::Medium
            };
            let excess = spent - benchmark;

            advice.push(Advice::new(
                AdviceKind::CategoryBenchmark,
                format!("{} spending is well above typical", category),
                format!(
                    "{} spending of {} is {:.0}% of the {} benchmark for your income.",
                    category,
                    spent,
                    multiple * 100.0,
                    benchmark
                ),
                AdviceImpact {
                    monthly_savings: excess,
                    yearly_savings: excess.scale(12.0),
                    goal_time_reduction_months: None,
                },
                priority,
                vec![format!("Bring {} closer to {} per month", category, benchmark)],
                Some(category),
                now,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::NesteggPaths;
    use crate::models::{Budget, Expense, GoalCategory, MonthKey, MonthlyIncome, SavingsGoal};
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

    fn add_income(storage: &Storage, major: i64) {
        storage
            .income
            .add(MonthlyIncome::new(
                Money::from_major(major),
                "Salary",
                MonthKey::new(2025, 1),
                true,
            ))
            .unwrap();
    }

    fn add_expense(storage: &Storage, major: i64, category: ExpenseCategory, d: NaiveDate) {
        storage
            .expenses
            .add(Expense::new(Money::from_major(major), category, "", d))
            .unwrap();
    }

    #[test]
    fn test_low_savings_rate_high_priority() {
        let (_t, storage) = create_storage();
        add_income(&storage, 3000);
        // Spend 95% of income in an unbenchmark-heavy way is hard; spread it
        add_expense(&storage, 2850, ExpenseCategory::Bills, date(2025, 3, 5));

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let boost = advice
            .iter()
            .find(|a| a.kind == AdviceKind::BoostSavings)
            .expect("boost savings advice");
        // Saving 5% -> below the 10% critical mark
        assert_eq!(boost.priority, AdvicePriority::High);
    }

    #[test]
    fn test_moderate_savings_rate_medium_priority() {
        let (_t, storage) = create_storage();
        add_income(&storage, 3000);
        // Saving 15%: below target, above critical
        add_expense(&storage, 2550, ExpenseCategory::Bills, date(2025, 3, 5));

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let boost = advice
            .iter()
            .find(|a| a.kind == AdviceKind::BoostSavings)
            .expect("boost savings advice");
        assert_eq!(boost.priority, AdvicePriority::Medium);
    }

    #[test]
    fn test_spending_spike_rule() {
        let (_t, storage) = create_storage();
        add_expense(&storage, 1000, ExpenseCategory::Other, date(2025, 2, 10));
        add_expense(&storage, 1300, ExpenseCategory::Other, date(2025, 3, 10));

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let spike = advice
            .iter()
            .find(|a| a.kind == AdviceKind::SpendingSpike)
            .expect("spike advice");
        assert_eq!(spike.priority, AdvicePriority::High);
        assert_eq!(spike.impact.monthly_savings, Money::from_major(300));
    }

    #[test]
    fn test_goal_shortfall_rule() {
        let (_t, storage) = create_storage();
        add_income(&storage, 1000);
        add_expense(&storage, 900, ExpenseCategory::Bills, date(2025, 3, 5));
        // Needs $500/month; free cash flow is $100
        storage
            .goals
            .add(SavingsGoal::new(
                "House",
                Money::from_major(3000),
                date(2025, 9, 11),
                GoalCategory::Home,
            ))
            .unwrap();

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let shortfall = advice
            .iter()
            .find(|a| a.kind == AdviceKind::GoalShortfall)
            .expect("shortfall advice");
        // Free $100 < half of required $500 -> high priority
        assert_eq!(shortfall.priority, AdvicePriority::High);
    }

    #[test]
    fn test_budget_load_rule() {
        let (_t, storage) = create_storage();
        add_income(&storage, 1000);
        let march = MonthKey::new(2025, 3);
        storage
            .budgets
            .add(Budget::new(ExpenseCategory::Bills, Money::from_major(500), march))
            .unwrap();
        storage
            .budgets
            .add(Budget::new(ExpenseCategory::Food, Money::from_major(400), march))
            .unwrap();

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let load = advice
            .iter()
            .find(|a| a.kind == AdviceKind::BudgetLoad)
            .expect("budget load advice");
        assert_eq!(load.priority, AdvicePriority::High);
    }

    #[test]
    fn test_benchmark_rule_priorities() {
        let (_t, storage) = create_storage();
        add_income(&storage, 2000);
        // Food benchmark is 15% = $300; spend $650 (>200%)
        add_expense(&storage, 650, ExpenseCategory::Food, date(2025, 3, 5));
        // Transport benchmark $300; spend $500 (>150%, <200%)
        add_expense(&storage, 500, ExpenseCategory::Transport, date(2025, 3, 6));

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        let food = advice
            .iter()
            .find(|a| a.related_category == Some(ExpenseCategory::Food)
                && a.kind == AdviceKind::CategoryBenchmark)
            .expect("food benchmark advice");
        assert_eq!(food.priority, AdvicePriority::High);

        let transport = advice
            .iter()
            .find(|a| a.related_category == Some(ExpenseCategory::Transport)
                && a.kind == AdviceKind::CategoryBenchmark)
            .expect("transport benchmark advice");
        assert_eq!(transport.priority, AdvicePriority::Medium);
    }

    #[test]
    fn test_cache_reused_within_lifetime() {
        let (_t, storage) = create_storage();
        add_expense(&storage, 1000, ExpenseCategory::Other, date(2025, 2, 10));
        add_expense(&storage, 1300, ExpenseCategory::Other, date(2025, 3, 10));

        let advisor = AdvisorService::new(&storage);
        let now = Utc::now();
        let first = advisor.generate(now, date(2025, 3, 15), false).unwrap();
        assert!(!first.is_empty());

        // New data arrives, but the cache is still fresh
        add_expense(&storage, 5000, ExpenseCategory::Other, date(2025, 3, 11));
        let cached = advisor
            .generate(now + Duration::minutes(10), date(2025, 3, 15), false)
            .unwrap();
        let first_ids: Vec<_> = first.iter().map(|a| a.id).collect();
        assert!(cached.iter().all(|a| first_ids.contains(&a.id)));

        // Force refresh regenerates
        let refreshed = advisor
            .generate(now + Duration::minutes(10), date(2025, 3, 15), true)
            .unwrap();
        assert!(refreshed.iter().all(|a| !first_ids.contains(&a.id)));
    }

    #[test]
    fn test_cache_expires_after_lifetime() {
        let (_t, storage) = create_storage();
        add_expense(&storage, 1000, ExpenseCategory::Other, date(2025, 2, 10));
        add_expense(&storage, 1300, ExpenseCategory::Other, date(2025, 3, 10));

        let advisor = AdvisorService::with_cache_minutes(&storage, 60);
        let now = Utc::now();
        let first = advisor.generate(now, date(2025, 3, 15), false).unwrap();
        let first_ids: Vec<_> = first.iter().map(|a| a.id).collect();

        let later = advisor
            .generate(now + Duration::minutes(61), date(2025, 3, 15), false)
            .unwrap();
        assert!(later.iter().all(|a| !first_ids.contains(&a.id)));
    }

    #[test]
    fn test_storage_cap_and_surfaced_cap() {
        let (_t, storage) = create_storage();
        add_income(&storage, 2000);
        // Trip many rules at once: overspend every category beyond benchmark
        for category in ExpenseCategory::ALL {
            add_expense(&storage, 700, category, date(2025, 3, 5));
        }
        // Budgets that are all overrun
        for category in [ExpenseCategory::Food, ExpenseCategory::Bills, ExpenseCategory::Health] {
            storage
                .budgets
                .add(Budget::new(category, Money::from_major(100), MonthKey::new(2025, 3)))
                .unwrap();
        }

        let advisor = AdvisorService::new(&storage);
        let advice = advisor
            .generate(Utc::now(), date(2025, 3, 15), true)
            .unwrap();

        assert!(advice.len() <= MAX_SURFACED_ADVICE);
        assert!(storage.advice.count().unwrap() <= MAX_STORED_ADVICE);

        // Ranking is non-increasing by (priority, yearly savings)
        for pair in advice.windows(2) {
            assert!(pair[0].rank_key() >= pair[1].rank_key());
        }
    }
}
