//! Tip repository
//!
//! Tips are ephemeral: every generation run replaces the stored set.

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::{Tip, TipId};

use super::collection::{Collection, Identified};

impl Identified for Tip {
    type Key = TipId;

    fn key(&self) -> TipId {
        self.id
    }
}

/// Repository for generated tips
pub struct TipRepository {
    inner: Collection<Tip>,
}

impl TipRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<Tip>> {
        self.inner.all()
    }

    /// Replace all stored tips with a fresh generation
    pub fn replace_all(&self, tips: Vec<Tip>) -> NesteggResult<()> {
        self.inner.set(tips)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TipAction};
    use tempfile::TempDir;

    #[test]
    fn test_replace_all_is_wholesale() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TipRepository::new(temp_dir.path().join("tips.json"));
        repo.load().unwrap();

        let old = Tip::new("old", Money::from_major(10), 0.5, None, TipAction::ReviewTrend, Money::zero());
        repo.replace_all(vec![old]).unwrap();
        assert_eq!(repo.count().unwrap(), 1);

        let fresh: Vec<Tip> = (0..3)
            .map(|i| {
                Tip::new(
                    format!("tip {}", i),
                    Money::from_major(10),
                    0.5,
                    None,
                    TipAction::ReviewTrend,
                    Money::zero(),
                )
            })
            .collect();
        repo.replace_all(fresh).unwrap();

        let stored = repo.all().unwrap();
        assert_eq!(stored.len(), 3);
        assert!(stored.iter().all(|t| t.text != "old"));
    }
}
