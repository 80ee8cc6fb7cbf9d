use anyhow::Result;
use clap::{Parser, Subcommand};

use nestegg_cli::cli::{
    handle_advise_command, handle_budget_command, handle_challenge_command,
    handle_expense_command, handle_goal_command, handle_income_command, handle_project_command,
    handle_save_command, AdviseCommands, BudgetCommands, ChallengeCommands, ExpenseCommands,
    GoalCommands, IncomeCommands, ProjectArgs, SaveCommands,
};
use nestegg_cli::config::{paths::NesteggPaths, settings::Settings};
use nestegg_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "nestegg",
    version,
    about = "Local-first personal finance tracker",
    long_about = "nestegg tracks expenses, budgets, income, and savings goals \
                  locally, with saving streaks, challenges, and a rule-based \
                  advisor. All data stays on your machine as plain JSON."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Saving activity and streak commands
    #[command(subcommand)]
    Save(SaveCommands),

    /// Savings challenge commands
    #[command(subcommand, alias = "chal")]
    Challenge(ChallengeCommands),

    /// Tips and advisor reports
    #[command(subcommand)]
    Advise(AdviseCommands),

    /// Project compound savings growth
    Project(ProjectArgs),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = NesteggPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Income(cmd)) => handle_income_command(&storage, cmd)?,
        Some(Commands::Goal(cmd)) => handle_goal_command(&storage, cmd)?,
        Some(Commands::Save(cmd)) => handle_save_command(&storage, cmd)?,
        Some(Commands::Challenge(cmd)) => handle_challenge_command(&storage, cmd)?,
        Some(Commands::Advise(cmd)) => handle_advise_command(&storage, &settings, cmd)?,
        Some(Commands::Project(args)) => handle_project_command(&settings, args)?,
        Some(Commands::Init) => {
            if settings.setup_completed {
                println!("Already initialized at {}", paths.base_dir().display());
            } else {
                settings.setup_completed = true;
                settings.save(&paths)?;
                storage.save_all()?;
                println!("Initialized nestegg at {}", paths.base_dir().display());
            }
        }
        Some(Commands::Config) => {
            println!("Data directory: {}", paths.base_dir().display());
            println!("Currency symbol: {}", settings.currency_symbol);
            println!("Date format: {}", settings.date_format);
            println!(
                "Default annual rate: {:.1}%",
                settings.default_annual_rate * 100.0
            );
            println!("Advice cache: {} minutes", settings.advice_cache_minutes);
        }
        None => {
            println!("Run `nestegg --help` for available commands.");
        }
    }

    Ok(())
}
