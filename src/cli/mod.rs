//! CLI command handlers
//!
//! Bridges clap argument parsing to the service layer, one module per
//! command group.

pub mod advise;
pub mod budget;
pub mod challenge;
pub mod expense;
pub mod goal;
pub mod income;
pub mod project;
pub mod save;

pub use advise::{handle_advise_command, AdviseCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use challenge::{handle_challenge_command, ChallengeCommands};
pub use expense::{handle_expense_command, ExpenseCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use income::{handle_income_command, IncomeCommands};
pub use project::{handle_project_command, ProjectArgs};
pub use save::{handle_save_command, SaveCommands};

use chrono::{Local, NaiveDate};

use crate::error::{NesteggError, NesteggResult};
use crate::models::{Money, MonthKey};

/// Parse a money string, mapping failure into a validation error
pub(crate) fn parse_money(s: &str) -> NesteggResult<Money> {
    Money::parse(s).map_err(|e| NesteggError::Validation(e.to_string()))
}

/// Parse an optional YYYY-MM-DD date, defaulting to today
pub(crate) fn parse_date_or_today(s: Option<&str>) -> NesteggResult<NaiveDate> {
    match s {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| NesteggError::Validation(format!("Invalid date: {}", s))),
        None => Ok(Local::now().date_naive()),
    }
}

/// Parse a required YYYY-MM-DD date
pub(crate) fn parse_date(s: &str) -> NesteggResult<NaiveDate> {
    parse_date_or_today(Some(s))
}

/// Parse an optional YYYY-MM month key, defaulting to the current month
pub(crate) fn parse_month_or_current(s: Option<&str>) -> NesteggResult<MonthKey> {
    match s {
        Some(s) => MonthKey::parse(s).map_err(|e| NesteggError::Validation(e.to_string())),
        None => Ok(MonthKey::containing(Local::now().date_naive())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_money_errors_are_validation() {
        let err = parse_money("abc").unwrap_err();
        assert!(err.is_validation());
        assert_eq!(parse_money("12.50").unwrap(), Money::from_cents(1250));
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-10").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
        );
        assert!(parse_date("10/03/2025").is_err());
    }

    #[test]
    fn test_parse_month_or_current() {
        assert_eq!(
            parse_month_or_current(Some("2025-03")).unwrap(),
            MonthKey::new(2025, 3)
        );
        assert!(parse_month_or_current(Some("2025-13")).is_err());
        // None yields some valid current month
        let current = parse_month_or_current(None).unwrap();
        assert!((1..=12).contains(&current.month));
    }
}
