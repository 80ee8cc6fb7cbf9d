//! Challenge repository

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::{Challenge, ChallengeId, ChallengeStatus};

use super::collection::{Collection, Identified};

impl Identified for Challenge {
    type Key = ChallengeId;

    fn key(&self) -> ChallengeId {
        self.id
    }
}

/// Repository for challenge persistence
pub struct ChallengeRepository {
    inner: Collection<Challenge>,
}

impl ChallengeRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<Challenge>> {
        self.inner.all()
    }

    pub fn add(&self, challenge: Challenge) -> NesteggResult<()> {
        self.inner.add(challenge)
    }

    pub fn get(&self, id: ChallengeId) -> NesteggResult<Option<Challenge>> {
        self.inner.get(&id)
    }

    pub fn delete(&self, id: ChallengeId) -> NesteggResult<bool> {
        self.inner.remove(&id)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Challenges still in the active state
    pub fn active(&self) -> NesteggResult<Vec<Challenge>> {
        self.inner.filter(|c| c.status == ChallengeStatus::Active)
    }

    /// Overwrite a challenge's progress and status
    pub fn set_outcome(
        &self,
        id: ChallengeId,
        progress: f64,
        status: ChallengeStatus,
    ) -> NesteggResult<bool> {
        self.inner.update(&id, |c| {
            c.progress = progress;
            c.status = status;
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChallengeKind;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn create_repo() -> (TempDir, ChallengeRepository) {
        let temp_dir = TempDir::new().unwrap();
        let repo = ChallengeRepository::new(temp_dir.path().join("challenges.json"));
        repo.load().unwrap();
        (temp_dir, repo)
    }

    #[test]
    fn test_active_filter() {
        let (_t, repo) = create_repo();
        let mut done = Challenge::new(
            "done",
            "",
            ChallengeKind::NoSpendWeekend,
            date(2025, 1, 1),
            date(2025, 1, 31),
        );
        done.status = ChallengeStatus::Completed;
        repo.add(done).unwrap();
        repo.add(Challenge::new(
            "running",
            "",
            ChallengeKind::NoSpendWeekend,
            date(2025, 3, 1),
            date(2025, 3, 31),
        ))
        .unwrap();

        let active = repo.active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "running");
    }

    #[test]
    fn test_set_outcome() {
        let (_t, repo) = create_repo();
        let c = Challenge::new(
            "c",
            "",
            ChallengeKind::NoSpendWeekend,
            date(2025, 3, 1),
            date(2025, 3, 31),
        );
        let id = c.id;
        repo.add(c).unwrap();

        assert!(repo
            .set_outcome(id, 100.0, ChallengeStatus::Completed)
            .unwrap());
        let updated = repo.get(id).unwrap().unwrap();
        assert_eq!(updated.progress, 100.0);
        assert_eq!(updated.status, ChallengeStatus::Completed);
    }
}
