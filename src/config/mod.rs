//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::NesteggPaths;
pub use settings::Settings;
