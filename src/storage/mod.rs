//! Storage layer for nestegg
//!
//! JSON file storage with atomic writes. Each entity collection lives in its
//! own file under the data directory; a missing file reads as an empty
//! collection. All operations are synchronous and last-writer-wins — the
//! design assumes a single active session per data store.

pub mod activities;
pub mod advice;
pub mod badges;
pub mod budgets;
pub mod challenges;
pub mod collection;
pub mod expenses;
pub mod file_io;
pub mod goals;
pub mod income;
pub mod streak;
pub mod tips;

pub use activities::ActivityRepository;
pub use advice::AdviceRepository;
pub use badges::BadgeRepository;
pub use budgets::BudgetRepository;
pub use challenges::ChallengeRepository;
pub use collection::{Collection, Identified};
pub use expenses::ExpenseRepository;
pub use file_io::{read_json, write_json_atomic};
pub use goals::GoalRepository;
pub use income::IncomeRepository;
pub use streak::StreakStore;
pub use tips::TipRepository;

use crate::config::paths::NesteggPaths;
use crate::error::NesteggError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: NesteggPaths,
    pub expenses: ExpenseRepository,
    pub goals: GoalRepository,
    pub budgets: BudgetRepository,
    pub income: IncomeRepository,
    pub activities: ActivityRepository,
    pub streak: StreakStore,
    pub badges: BadgeRepository,
    pub challenges: ChallengeRepository,
    pub tips: TipRepository,
    pub advice: AdviceRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: NesteggPaths) -> Result<Self, NesteggError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            goals: GoalRepository::new(paths.goals_file()),
            budgets: BudgetRepository::new(paths.budgets_file()),
            income: IncomeRepository::new(paths.income_file()),
            activities: ActivityRepository::new(paths.activities_file()),
            streak: StreakStore::new(paths.streak_file()),
            badges: BadgeRepository::new(paths.badges_file()),
            challenges: ChallengeRepository::new(paths.challenges_file()),
            tips: TipRepository::new(paths.tips_file()),
            advice: AdviceRepository::new(paths.advice_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &NesteggPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), NesteggError> {
        self.expenses.load()?;
        self.goals.load()?;
        self.budgets.load()?;
        self.income.load()?;
        self.activities.load()?;
        self.streak.load()?;
        self.badges.load()?;
        self.challenges.load()?;
        self.tips.load()?;
        self.advice.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), NesteggError> {
        self.expenses.save()?;
        self.goals.save()?;
        self.budgets.save()?;
        self.income.save()?;
        self.activities.save()?;
        self.streak.save()?;
        self.badges.save()?;
        self.challenges.save()?;
        self.tips.save()?;
        self.advice.save()?;
        Ok(())
    }

    /// Check if storage has been initialized (settings file exists)
    pub fn is_initialized(&self) -> bool {
        self.paths.settings_file().exists()
    }
}
