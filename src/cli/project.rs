//! Savings projection command

use chrono::Utc;
use clap::Args;

use crate::config::Settings;
use crate::error::NesteggResult;
use crate::messages::MessageCatalog;
use crate::services::{calculate_future_value, generate_recommendation, RecommendationContext};

use super::parse_money;

#[derive(Args)]
pub struct ProjectArgs {
    /// Starting principal, e.g. "5000"
    pub principal: String,
    /// Monthly contribution, e.g. "200"
    pub monthly: String,
    /// Years to project, e.g. "5" or "2.5"
    pub years: f64,
    /// Annual interest rate as a fraction (default from settings)
    #[arg(short, long)]
    pub rate: Option<f64>,
    /// Goal amount to measure the projection against
    #[arg(short, long)]
    pub goal: Option<String>,
    /// Your savings rate as a fraction of income, e.g. "0.15"
    #[arg(long)]
    pub savings_rate: Option<f64>,
    /// Months of expenses in your emergency fund
    #[arg(long)]
    pub fund_months: Option<f64>,
    /// Monthly living expense (needed for the emergency-fund remark)
    #[arg(long)]
    pub living_expense: Option<String>,
    /// Print the formula used
    #[arg(long)]
    pub show_formula: bool,
}

pub fn handle_project_command(settings: &Settings, args: ProjectArgs) -> NesteggResult<()> {
    let principal = parse_money(&args.principal)?;
    let monthly = parse_money(&args.monthly)?;
    let rate = args.rate.unwrap_or(settings.default_annual_rate);

    let projection = calculate_future_value(principal, monthly, rate, args.years, Utc::now());
    println!(
        "Future value after {} years at {:.1}%: {}",
        args.years,
        rate * 100.0,
        projection.future_value
    );
    if args.show_formula {
        println!("{}", projection.formula);
    }

    if let Some(goal) = args.goal {
        let goal_amount = parse_money(&goal)?;
        let ctx = RecommendationContext {
            savings_rate: args.savings_rate,
            emergency_fund_months: args.fund_months,
            monthly_living_expense: match args.living_expense {
                Some(s) => Some(parse_money(&s)?),
                None => None,
            },
        };
        let catalog = MessageCatalog::default_english();
        println!(
            "{}",
            generate_recommendation(projection.future_value, goal_amount, &ctx, &catalog)
        );
    }

    Ok(())
}
