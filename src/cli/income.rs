//! Income commands

use clap::Subcommand;

use crate::display;
use crate::error::NesteggResult;
use crate::services::IncomeService;
use crate::storage::Storage;

use super::{parse_money, parse_month_or_current};

#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record income for a month
    Add {
        /// Amount, e.g. "3000"
        amount: String,
        /// Where the income comes from
        source: String,
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
        /// Count this income every month from then on
        #[arg(short, long)]
        recurring: bool,
    },
    /// List income for a month
    List {
        /// Month (YYYY-MM, default current)
        #[arg(short, long)]
        month: Option<String>,
    },
}

pub fn handle_income_command(storage: &Storage, cmd: IncomeCommands) -> NesteggResult<()> {
    let service = IncomeService::new(storage);

    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            month,
            recurring,
        } => {
            let amount = parse_money(&amount)?;
            let month = parse_month_or_current(month.as_deref())?;

            let income = service.add(amount, source, month, recurring)?;
            println!("Recorded {}", income);
        }
        IncomeCommands::List { month } => {
            let month = parse_month_or_current(month.as_deref())?;
            let income = service.list_month(month)?;
            if income.is_empty() {
                println!("No income recorded for {}.", month);
            } else {
                println!("{}", display::income_table(&income));
                println!("Total: {}", service.total_for_month(month)?);
            }
        }
    }

    Ok(())
}
