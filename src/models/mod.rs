//! Core data models for nestegg
//!
//! This module contains the data structures for the finance-tracking domain:
//! expenses, savings goals, budgets, income, saving activity, streaks,
//! badges, challenges, and advisor output.

pub mod activity;
pub mod advice;
pub mod badge;
pub mod budget;
pub mod category;
pub mod challenge;
pub mod expense;
pub mod goal;
pub mod ids;
pub mod income;
pub mod money;
pub mod month;
pub mod streak;
pub mod tip;

pub use activity::{GoalContribution, SavingActivity};
pub use advice::{Advice, AdviceImpact, AdviceKind, AdvicePriority};
pub use badge::{Badge, BadgeCategory};
pub use budget::Budget;
pub use category::{ExpenseCategory, GoalCategory};
pub use challenge::{Challenge, ChallengeKind, ChallengeStatus};
pub use expense::Expense;
pub use goal::SavingsGoal;
pub use ids::{
    ActivityId, AdviceId, BudgetId, ChallengeId, ExpenseId, GoalId, IncomeId, TipId,
};
pub use income::MonthlyIncome;
pub use money::Money;
pub use month::MonthKey;
pub use streak::{compute_streak, UserStreak};
pub use tip::{Tip, TipAction};
