//! nestegg - local-first personal finance tracker
//!
//! This library implements the core of the nestegg application: expense,
//! budget, income, and savings-goal tracking with saving streaks, badges,
//! savings challenges, and a deterministic rule-based advisor. All state
//! persists as JSON files on the local machine.
//!
//! # Architecture
//!
//! - `config`: configuration and path management
//! - `error`: custom error types
//! - `models`: core data models (expenses, goals, budgets, streaks, ...)
//! - `storage`: JSON file storage layer
//! - `services`: business logic and the rule engines (projection, streaks,
//!   challenges, tips, advisor)
//! - `messages`: message templates for engine output
//! - `display`: terminal table rendering
//! - `cli`: command handlers for the `nestegg` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use nestegg_cli::config::{paths::NesteggPaths, settings::Settings};
//! use nestegg_cli::storage::Storage;
//!
//! let paths = NesteggPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod messages;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{NesteggError, NesteggResult};
