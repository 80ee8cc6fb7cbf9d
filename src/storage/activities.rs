//! Saving activity repository
//!
//! The activity log is append-only; entries are never edited after the fact.

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::NesteggResult;
use crate::models::{ActivityId, Money, SavingActivity};

use super::collection::{Collection, Identified};

impl Identified for SavingActivity {
    type Key = ActivityId;

    fn key(&self) -> ActivityId {
        self.id
    }
}

/// Repository for the saving activity log
pub struct ActivityRepository {
    inner: Collection<SavingActivity>,
}

impl ActivityRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<SavingActivity>> {
        self.inner.all()
    }

    pub fn add(&self, activity: SavingActivity) -> NesteggResult<()> {
        self.inner.add(activity)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Activities dated within [start, end] inclusive
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> NesteggResult<Vec<SavingActivity>> {
        self.inner.filter(|a| a.date >= start && a.date <= end)
    }

    /// Sum of positive net savings within [start, end] inclusive
    ///
    /// Net-negative days contribute nothing rather than subtracting;
    /// the save-amount challenge only credits what was actually put aside.
    pub fn saved_in_range(&self, start: NaiveDate, end: NaiveDate) -> NesteggResult<Money> {
        Ok(self
            .in_range(start, end)?
            .iter()
            .filter(|a| a.net_savings.is_positive())
            .map(|a| a.net_savings)
            .sum())
    }
}
