//! Budget commands

use clap::Subcommand;

use crate::display;
use crate::error::{NesteggError, NesteggResult};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::{parse_money, parse_month_or_current};

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Create a budget for a category and month
    Set {
        /// Category to budget
        category: String,
        /// Monthly spending limit, e.g. "400"
        limit: String,
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// List budgets for a month with up-to-date spending
    List {
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete a budget by id
    Delete {
        /// Budget id (bud-... prefix or full UUID)
        id: String,
    },
}

pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> NesteggResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            month,
        } => {
            let category = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    NesteggError::Validation(e.to_string())
                })?;
            let limit = parse_money(&limit)?;
            let month = parse_month_or_current(month.as_deref())?;

            let budget = service.create(category, limit, month)?;
            println!(
                "Budget set: {} {} at {} ({})",
                budget.month, budget.category, budget.monthly_limit, budget.id
            );
        }
        BudgetCommands::List { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let budgets = service.list_month(month)?;
            if budgets.is_empty() {
                println!("No budgets for {}.", month);
            } else {
                println!("{}", display::budget_table(&budgets));
            }
        }
        BudgetCommands::Delete { id } => {
            let id = id
                .parse()
                .map_err(|_| NesteggError::budget_not_found(id.clone()))?;
            service.delete(id)?;
            println!("Deleted budget.");
        }
    }

    Ok(())
}
