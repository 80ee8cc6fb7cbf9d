//! Tips and advisor commands

use chrono::{Local, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display;
use crate::error::NesteggResult;
use crate::services::{AdvisorService, TipService};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum AdviseCommands {
    /// Generate quick savings tips
    Tips,
    /// Generate the full advisor report
    Report {
        /// Ignore the cached report and regenerate
        #[arg(short, long)]
        refresh: bool,
    },
}

pub fn handle_advise_command(
    storage: &Storage,
    settings: &Settings,
    cmd: AdviseCommands,
) -> NesteggResult<()> {
    let today = Local::now().date_naive();

    match cmd {
        AdviseCommands::Tips => {
            let tips = TipService::new(storage).generate(today)?;
            println!("{}", display::tip_list(&tips));
        }
        AdviseCommands::Report { refresh } => {
            let advisor =
                AdvisorService::with_cache_minutes(storage, settings.advice_cache_minutes);
            let advice = advisor.generate(Utc::now(), today, refresh)?;
            println!("{}", display::advice_report(&advice));
        }
    }

    Ok(())
}
