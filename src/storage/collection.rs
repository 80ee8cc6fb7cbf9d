//! Generic JSON-array collection
//!
//! Every entity collection persists as a JSON array in its own file and is
//! mirrored in memory behind an RwLock. The verbs here are the full storage
//! contract the services rely on: all/set/add/get/update/remove, plus
//! explicit load/save against disk. A missing file reads as an empty
//! collection.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{NesteggError, NesteggResult};

use super::file_io::{read_json, write_json_atomic};

/// Entities stored in a `Collection` expose their lookup key
pub trait Identified {
    type Key: PartialEq;

    fn key(&self) -> Self::Key;
}

/// A persistent, in-memory-mirrored list of entities
pub struct Collection<T> {
    path: PathBuf,
    items: RwLock<Vec<T>>,
}

impl<T> Collection<T>
where
    T: Identified + Clone + Serialize + DeserializeOwned,
{
    /// Create a collection backed by `path` (not yet loaded)
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            items: RwLock::new(Vec::new()),
        }
    }

    fn read_guard(&self) -> NesteggResult<RwLockReadGuard<'_, Vec<T>>> {
        self.items
            .read()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire read lock: {}", e)))
    }

    fn write_guard(&self) -> NesteggResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.items
            .write()
            .map_err(|e| NesteggError::Storage(format!("Failed to acquire write lock: {}", e)))
    }

    /// Load items from disk, replacing the in-memory mirror
    pub fn load(&self) -> NesteggResult<()> {
        let loaded: Vec<T> = read_json(&self.path)?;
        *self.write_guard()? = loaded;
        Ok(())
    }

    /// Save the in-memory mirror to disk
    pub fn save(&self) -> NesteggResult<()> {
        let items = self.read_guard()?;
        write_json_atomic(&self.path, &*items)
    }

    /// All items, cloned
    pub fn all(&self) -> NesteggResult<Vec<T>> {
        Ok(self.read_guard()?.clone())
    }

    /// Replace the entire collection
    pub fn set(&self, items: Vec<T>) -> NesteggResult<()> {
        *self.write_guard()? = items;
        Ok(())
    }

    /// Append one item
    pub fn add(&self, item: T) -> NesteggResult<()> {
        self.write_guard()?.push(item);
        Ok(())
    }

    /// Find an item by key
    pub fn get(&self, key: &T::Key) -> NesteggResult<Option<T>> {
        Ok(self
            .read_guard()?
            .iter()
            .find(|item| item.key() == *key)
            .cloned())
    }

    /// Apply `f` to the item with the given key; returns false if absent
    pub fn update<F>(&self, key: &T::Key, f: F) -> NesteggResult<bool>
    where
        F: FnOnce(&mut T),
    {
        let mut items = self.write_guard()?;
        match items.iter_mut().find(|item| item.key() == *key) {
            Some(item) => {
                f(item);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove the item with the given key; returns false if absent
    pub fn remove(&self, key: &T::Key) -> NesteggResult<bool> {
        let mut items = self.write_guard()?;
        let before = items.len();
        items.retain(|item| item.key() != *key);
        Ok(items.len() < before)
    }

    /// Number of items
    pub fn count(&self) -> NesteggResult<usize> {
        Ok(self.read_guard()?.len())
    }

    /// Items matching a predicate, cloned
    pub fn filter<F>(&self, pred: F) -> NesteggResult<Vec<T>>
    where
        F: FnMut(&&T) -> bool,
    {
        Ok(self.read_guard()?.iter().filter(pred).cloned().collect())
    }
}
