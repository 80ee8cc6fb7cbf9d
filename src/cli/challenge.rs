//! Challenge commands

use chrono::Local;
use clap::Subcommand;

use crate::display;
use crate::error::{NesteggError, NesteggResult};
use crate::models::{Challenge, ChallengeKind};
use crate::services::ChallengeService;
use crate::storage::Storage;

use super::{parse_date, parse_money};

#[derive(Subcommand)]
pub enum ChallengeCommands {
    /// Start a challenge
    Add {
        /// Challenge name
        name: String,
        /// Kind: no-spend-weekend, reduce-category, save-amount, expense-limit
        kind: String,
        /// Window start (YYYY-MM-DD)
        start: String,
        /// Window end (YYYY-MM-DD)
        end: String,
        /// Category (reduce-category only)
        #[arg(long)]
        category: Option<String>,
        /// Target amount (save-amount and expense-limit)
        #[arg(long)]
        target: Option<String>,
        /// Target reduction percent (reduce-category only)
        #[arg(long)]
        reduction: Option<f64>,
        /// Description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// List challenges
    List,
    /// Evaluate active challenges against current data
    Evaluate,
}

fn build_kind(
    kind: &str,
    category: Option<String>,
    target: Option<String>,
    reduction: Option<f64>,
) -> NesteggResult<ChallengeKind> {
    match kind {
        "no-spend-weekend" => Ok(ChallengeKind::NoSpendWeekend),
        "reduce-category" => {
            let category = category
                .ok_or_else(|| {
                    NesteggError::Validation("reduce-category needs --category".into())
                })?
                .parse()
                .map_err(|e: crate::models::category::CategoryParseError| {
                    NesteggError::Validation(e.to_string())
                })?;
            let target_reduction_percent = reduction.ok_or_else(|| {
                NesteggError::Validation("reduce-category needs --reduction".into())
            })?;
            Ok(ChallengeKind::ReduceCategory {
                category,
                target_reduction_percent,
            })
        }
        "save-amount" => {
            let target = target
                .ok_or_else(|| NesteggError::Validation("save-amount needs --target".into()))?;
            Ok(ChallengeKind::SaveAmount {
                target: parse_money(&target)?,
            })
        }
        "expense-limit" => {
            let target = target
                .ok_or_else(|| NesteggError::Validation("expense-limit needs --target".into()))?;
            Ok(ChallengeKind::ExpenseLimit {
                limit: parse_money(&target)?,
            })
        }
        other => Err(NesteggError::Validation(format!(
            "Unknown challenge kind: {}",
            other
        ))),
    }
}

pub fn handle_challenge_command(storage: &Storage, cmd: ChallengeCommands) -> NesteggResult<()> {
    let service = ChallengeService::new(storage);

    match cmd {
        ChallengeCommands::Add {
            name,
            kind,
            start,
            end,
            category,
            target,
            reduction,
            description,
        } => {
            let kind = build_kind(&kind, category, target, reduction)?;
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;

            let challenge = service.create(Challenge::new(name, description, kind, start, end))?;
            println!("Started challenge {} ({})", challenge.name, challenge.id);
        }
        ChallengeCommands::List => {
            let challenges = service.list()?;
            if challenges.is_empty() {
                println!("No challenges yet.");
            } else {
                println!("{}", display::challenge_table(&challenges));
            }
        }
        ChallengeCommands::Evaluate => {
            let today = Local::now().date_naive();
            let updated = service.evaluate_all(today)?;
            if updated.is_empty() {
                println!("No active challenges to evaluate.");
            } else {
                println!("{}", display::challenge_table(&updated));
            }
        }
    }

    Ok(())
}
