//! Advice repository
//!
//! Stores the advisor's cached output. The newest `created_at` timestamp
//! doubles as the cache age marker.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

use crate::error::NesteggResult;
use crate::models::{Advice, AdviceId};

use super::collection::{Collection, Identified};

impl Identified for Advice {
    type Key = AdviceId;

    fn key(&self) -> AdviceId {
        self.id
    }
}

/// Repository for cached advice
pub struct AdviceRepository {
    inner: Collection<Advice>,
}

impl AdviceRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Collection::new(path),
        }
    }

    pub fn load(&self) -> NesteggResult<()> {
        self.inner.load()
    }

    pub fn save(&self) -> NesteggResult<()> {
        self.inner.save()
    }

    pub fn all(&self) -> NesteggResult<Vec<Advice>> {
        self.inner.all()
    }

    /// Replace the cached advice wholesale
    pub fn replace_all(&self, advice: Vec<Advice>) -> NesteggResult<()> {
        self.inner.set(advice)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Timestamp of the most recently generated cached item
    pub fn newest_created_at(&self) -> NesteggResult<Option<DateTime<Utc>>> {
        Ok(self.inner.all()?.iter().map(|a| a.created_at).max())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdviceImpact, AdviceKind, AdvicePriority};
    use chrono::Duration;
    use tempfile::TempDir;

    fn advice_at(created_at: DateTime<Utc>) -> Advice {
        Advice::new(
            AdviceKind::BoostSavings,
            "t",
            "m",
            AdviceImpact::default(),
            AdvicePriority::Low,
            vec![],
            None,
            created_at,
        )
    }

    #[test]
    fn test_newest_created_at() {
        let temp_dir = TempDir::new().unwrap();
        let repo = AdviceRepository::new(temp_dir.path().join("advice.json"));
        repo.load().unwrap();

        assert!(repo.newest_created_at().unwrap().is_none());

        let now = Utc::now();
        repo.replace_all(vec![
            advice_at(now - Duration::hours(2)),
            advice_at(now),
            advice_at(now - Duration::minutes(30)),
        ])
        .unwrap();

        assert_eq!(repo.newest_created_at().unwrap(), Some(now));
    }
}
