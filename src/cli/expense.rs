//! Expense commands

use clap::Subcommand;

use crate::display;
use crate::error::NesteggResult;
use crate::services::ExpenseService;
use crate::storage::Storage;

use super::{parse_date_or_today, parse_money, parse_month_or_current};

#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Log an expense
    Add {
        /// Amount spent, e.g. "12.50"
        amount: String,
        /// Category: food, transport, bills, entertainment, shopping,
        /// health, education, other
        category: String,
        /// Short description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Expense date (YYYY-MM-DD, default today)
        #[arg(short = 'D', long)]
        date: Option<String>,
    },
    /// List expenses
    List {
        /// Restrict to one month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete an expense by id
    Delete {
        /// Expense id (exp-... prefix or full UUID)
        id: String,
    },
}

pub fn handle_expense_command(storage: &Storage, cmd: ExpenseCommands) -> NesteggResult<()> {
    let service = ExpenseService::new(storage);

    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            description,
            date,
        } => {
            let amount = parse_money(&amount)?;
            let category = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    crate::error::NesteggError::Validation(e.to_string())
                })?;
            let date = parse_date_or_today(date.as_deref())?;

            let expense = service.add(amount, category, description, date)?;
            println!("Logged {} ({})", expense.amount, expense.id);
        }
        ExpenseCommands::List { month } => {
            let expenses = match month.as_deref() {
                Some(m) => service.list_month(parse_month_or_current(Some(m))?)?,
                None => service.list()?,
            };
            if expenses.is_empty() {
                println!("No expenses recorded.");
            } else {
                println!("{}", display::expense_table(&expenses));
            }
        }
        ExpenseCommands::Delete { id } => {
            let id = id
                .parse()
                .map_err(|_| crate::error::NesteggError::expense_not_found(id.clone()))?;
            service.delete(id)?;
            println!("Deleted expense.");
        }
    }

    Ok(())
}
