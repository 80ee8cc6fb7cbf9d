//! Savings goal repository

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::{GoalId, Money, SavingsGoal};

use super::collection::{Collection, Identified};

impl Identified for SavingsGoal {
    type Key = GoalId;

    fn key(&self) -> GoalId {
        self.id
    }
}

/// Repository for savings goal persistence
pub struct GoalRepository {
    inner: Collection<SavingsGoal>,
}

impl GoalRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<SavingsGoal>> {
        self.inner.all()
    }

    pub fn add(&self, goal: SavingsGoal) -> NesteggResult<()> {
        self.inner.add(goal)
    }

    pub fn get(&self, id: GoalId) -> NesteggResult<Option<SavingsGoal>> {
        self.inner.get(&id)
    }

    pub fn delete(&self, id: GoalId) -> NesteggResult<bool> {
        self.inner.remove(&id)
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Add `amount` to a goal's saved total; returns false if the goal is absent
    pub fn contribute(&self, id: GoalId, amount: Money) -> NesteggResult<bool> {
        self.inner.update(&id, |goal| goal.contribute(amount))
    }

    /// Goals whose target has not been reached yet
    pub fn open_goals(&self) -> NesteggResult<Vec<SavingsGoal>> {
        self.inner.filter(|g| !g.is_reached())
    }
}
