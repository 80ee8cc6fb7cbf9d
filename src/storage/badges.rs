//! Badge repository
//!
//! Badge ids are fixed slugs; `add_if_absent` is the only insert path so an
//! already-earned badge can never be duplicated.

use std::path::PathBuf;

use crate::error::NesteggResult;
use crate::models::Badge;

use super::collection::{Collection, Identified};

impl Identified for Badge {
    type Key = String;

    fn key(&self) -> String {
        self.id.clone()
    }
}

/// Repository for earned badges
pub struct BadgeRepository {
    inner: Collection<Badge>,
}

impl BadgeRepository {
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

    pub fn all(&self) -> NesteggResult<Vec<Badge>> {
        self.inner.all()
    }

    pub fn count(&self) -> NesteggResult<usize> {
        self.inner.count()
    }

    /// Whether a badge with this id has been earned
    pub fn contains(&self, id: &str) -> NesteggResult<bool> {
        Ok(self.inner.get(&id.to_string())?.is_some())
    }

    /// Insert the badge unless its id is already present; returns true if added
    pub fn add_if_absent(&self, badge: Badge) -> NesteggResult<bool> {
        if self.contains(&badge.id)? {
            Ok(false)
        } else {
            self.inner.add(badge)?;
            Ok(true)
        }
    }
}
