//! Savings goal commands

use clap::Subcommand;

use crate::display;
use crate::error::{NesteggError, NesteggResult};
use crate::services::GoalService;
use crate::storage::Storage;

use super::{parse_date, parse_money};

#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a savings goal
    Add {
        /// Goal name
        name: String,
        /// Target amount, e.g. "1200"
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
        /// Category: emergency-fund, travel, education, home, vehicle, other
        #[arg(short, long, default_value = "other")]
        category: String,
    },
    /// List goals
    List,
    /// Contribute toward a goal
    Contribute {
        /// Goal id (goal-... prefix or full UUID)
        id: String,
        /// Amount to add
        amount: String,
    },
    /// Delete a goal by id
    Delete {
        /// Goal id (goal-... prefix or full UUID)
        id: String,
    },
}

pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> NesteggResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            category,
        } => {
            let target = parse_money(&target)?;
            let deadline = parse_date(&deadline)?;
            let category = category
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    NesteggError::Validation(e.to_string())
                })?;

            let goal = service.create(name, target, deadline, category)?;
            println!("Created goal {} ({})", goal.name, goal.id);
        }
        GoalCommands::List => {
            let goals = service.list()?;
            if goals.is_empty() {
                println!("No goals yet.");
            } else {
                println!("{}", display::goal_table(&goals));
            }
        }
        GoalCommands::Contribute { id, amount } => {
            let id = id
                .parse()
                .map_err(|_| NesteggError::goal_not_found(id.clone()))?;
            let amount = parse_money(&amount)?;

            let goal = service.contribute(id, amount)?;
            println!(
                "{} now at {} of {} ({:.0}%)",
                goal.name,
                goal.current_amount,
                goal.target_amount,
                goal.progress_percent()
            );
        }
        GoalCommands::Delete { id } => {
            let id = id
                .parse()
                .map_err(|_| NesteggError::goal_not_found(id.clone()))?;
            service.delete(id)?;
            println!("Deleted goal.");
        }
    }

    Ok(())
}
