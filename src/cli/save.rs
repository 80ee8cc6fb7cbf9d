//! Saving activity and streak commands

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::{NesteggError, NesteggResult};
use crate::models::GoalContribution;
use crate::services::StreakService;
use crate::storage::Storage;

use super::parse_money;

#[derive(Subcommand)]
pub enum SaveCommands {
    /// Record today's saving activity
    Record {
        /// Net amount saved today; negative means net spent from savings
        amount: String,
        /// Mark today a saving day even if the amount is not positive
        #[arg(short, long)]
        manual: bool,
        /// Goal id to direct part of the savings to
        #[arg(long)]
        goal: Option<String>,
        /// Amount to contribute to that goal (defaults to the full amount)
        #[arg(long)]
        goal_amount: Option<String>,
    },
    /// Show streak status and earned badges
    Streak,
}

pub fn handle_save_command(storage: &Storage, cmd: SaveCommands) -> NesteggResult<()> {
    let service = StreakService::new(storage);

    match cmd {
        SaveCommands::Record {
            amount,
            manual,
            goal,
            goal_amount,
        } => {
            let amount = parse_money(&amount)?;

            let contributions = match goal {
                Some(goal_id) => {
                    let goal_id = goal_id
                        .parse()
                        .map_err(|_| NesteggError::goal_not_found(goal_id.clone()))?;
                    let contribution_amount = match goal_amount {
                        Some(s) => parse_money(&s)?,
                        None => amount,
                    };
                    vec![GoalContribution {
                        goal_id,
                        amount: contribution_amount,
                    }]
                }
                None => Vec::new(),
            };

            let today = Local::now().date_naive();
            let outcome = service.record_saving_activity(today, amount, manual, contributions)?;

            if outcome.activity.counts_as_saving_day() {
                println!(
                    "Saving day recorded. Current streak: {} days (best {}).",
                    outcome.streak.current_streak, outcome.streak.longest_streak
                );
            } else {
                println!("Activity recorded; not a saving day.");
            }
            for badge in &outcome.new_badges {
                println!("New badge: {} {}", badge.icon, badge.name);
            }
        }
        SaveCommands::Streak => {
            let streak = storage.streak.get()?;
            println!(
                "Current streak: {} days\nLongest streak: {} days",
                streak.current_streak, streak.longest_streak
            );
            if let Some(last) = streak.last_saving_day {
                println!("Last saving day: {}", last);
            }
            println!("\n{}", display::badge_list(&storage.badges.all()?));
        }
    }

    Ok(())
}
