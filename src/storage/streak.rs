//! Streak store
//!
//! The streak record is a singleton document rather than a collection; it is
//! read and written whole.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::{NesteggError, NesteggResult};
use crate::models::UserStreak;

use super::file_io::{read_json, write_json_atomic};

/// Store for the singleton streak record
pub struct StreakStore {
    path: PathBuf,
    record: RwLock<UserStreak>,
}

impl StreakStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            record: RwLock::new(UserStreak::default()),
        }
    }

    pub fn load(&self) -> NesteggResult<()> {
        let loaded: UserStreak = read_json(&self.path)?;
        let mut record = self
            .record
            .write()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *record = loaded;
        Ok(())
    }

    pub fn save(&self) -> NesteggResult<()> {
        let record = self
            .record
            .read()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*record)
    }

    /// The current streak record, cloned
    pub fn get(&self) -> NesteggResult<UserStreak> {
        Ok(self
            .record
            .read()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire read lock: {}", e)))?
            .clone())
    }

    /// Replace the streak record
    pub fn put(&self, streak: UserStreak) -> NesteggResult<()> {
        let mut record = self
            .record
            .write()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *record = streak;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_default_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = StreakStore::new(temp_dir.path().join("streak.json"));
        store.load().unwrap();

        let streak = store.get().unwrap();
        assert_eq!(streak.current_streak, 0);
        assert!(streak.streak_history.is_empty());
    }

    #[test]
    fn test_put_save_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("streak.json");

        let store = StreakStore::new(path.clone());
        store.load().unwrap();

        let mut streak = UserStreak::default();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        streak.mark_saving_day(today, today);
        store.put(streak).unwrap();
        store.save().unwrap();

        let store2 = StreakStore::new(path);
        store2.load().unwrap();
        let loaded = store2.get().unwrap();
        assert_eq!(loaded.current_streak, 1);
        assert_eq!(loaded.last_saving_day, Some(today));
    }
}
