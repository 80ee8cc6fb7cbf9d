//! Spending and goal categories
//!
//! Both category sets are closed enums so the rule engines can match
//! exhaustively; adding a category forces every dispatch site to be revisited
//! at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Health,
    Education,
    Other,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 8] = [
        Self::Food,
        Self::Transport,
        Self::Bills,
        Self::Entertainment,
        Self::Shopping,
        Self::Health,
        Self::Education,
        Self::Other,
    ];

    /// The advisor's "normal" share of income for this category
    ///
    /// Food 15%, transport 15%, bills 25%, everything else 5%.
    pub fn benchmark_share(&self) -> f64 {
        match self {
            Self::Food => 0.15,
            Self::Transport => 0.15,
            Self::Bills => 0.25,
            Self::Entertainment | Self::Shopping | Self::Health | Self::Education | Self::Other => {
                0.05
            }
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "food" => Ok(Self::Food),
            "transport" => Ok(Self::Transport),
            "bills" => Ok(Self::Bills),
            "entertainment" => Ok(Self::Entertainment),
            "shopping" => Ok(Self::Shopping),
            "health" => Ok(Self::Health),
            "education" => Ok(Self::Education),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// The closed set of savings goal categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalCategory {
    EmergencyFund,
    Travel,
    Education,
    Home,
    Vehicle,
    Other,
}

impl GoalCategory {
    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::EmergencyFund => "Emergency fund",
            Self::Travel => "Travel",
            Self::Education => "Education",
            Self::Home => "Home",
            Self::Vehicle => "Vehicle",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for GoalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for GoalCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "emergency-fund" | "emergency" => Ok(Self::EmergencyFund),
            "travel" => Ok(Self::Travel),
            "education" => Ok(Self::Education),
            "home" => Ok(Self::Home),
            "vehicle" => Ok(Self::Vehicle),
            "other" => Ok(Self::Other),
            _ => Err(CategoryParseError::Unknown(s.to_string())),
        }
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(f, "Unknown category: {}", s),
        }
    }
}

impl std::error::Error for CategoryParseError {}
