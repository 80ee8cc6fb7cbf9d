//! Path management for nestegg
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `NESTEGG_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/nestegg` or `~/.config/nestegg`
//! 3. Windows: `%APPDATA%\nestegg`

use std::path::PathBuf;

use crate::error::NesteggError;

/// Manages all paths used by nestegg
#[derive(Debug, Clone)]
pub struct NesteggPaths {
    /// Base directory for all nestegg data
    base_dir: PathBuf,
}

impl NesteggPaths {
    /// Create a new NesteggPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, NesteggError> {
        let base_dir = if let Ok(custom) = std::env::var("NESTEGG_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create NesteggPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to expenses.json
    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Get the path to goals.json
    pub fn goals_file(&self) -> PathBuf {
        self.data_dir().join("goals.json")
    }

    /// Get the path to budgets.json
    pub fn budgets_file(&self) -> PathBuf {
        self.data_dir().join("budgets.json")
    }

    /// Get the path to income.json
    pub fn income_file(&self) -> PathBuf {
        self.data_dir().join("income.json")
    }

    /// Get the path to activities.json (saving activity log)
    pub fn activities_file(&self) -> PathBuf {
        self.data_dir().join("activities.json")
    }

    /// Get the path to streak.json (singleton streak record)
    pub fn streak_file(&self) -> PathBuf {
        self.data_dir().join("streak.json")
    }

    /// Get the path to badges.json
    pub fn badges_file(&self) -> PathBuf {
        self.data_dir().join("badges.json")
    }

    /// Get the path to challenges.json
    pub fn challenges_file(&self) -> PathBuf {
        self.data_dir().join("challenges.json")
    }

    /// Get the path to tips.json
    pub fn tips_file(&self) -> PathBuf {
        self.data_dir().join("tips.json")
    }

    /// Get the path to advice.json
    pub fn advice_file(&self) -> PathBuf {
        self.data_dir().join("advice.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), NesteggError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| NesteggError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| NesteggError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if nestegg has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, NesteggError> {
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| NesteggError::Config("Could not determine home directory".into()))
        })?;
    Ok(config_base.join("nestegg"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, NesteggError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| NesteggError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("nestegg"))
}
