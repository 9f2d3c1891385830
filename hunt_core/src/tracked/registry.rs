// Copyright 2026 the Hunt Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dense, insertion-ordered entry storage.

use alloc::vec::Vec;
use core::fmt;

use super::entry::Tracked;
use super::id::TrackedId;
use crate::config::HuntConfig;

/// Insertion-ordered storage for tracked entries.
///
/// Entries live in a single `Vec` in registration order. Removal shifts later
/// entries down, so the evaluator walks the registry back to front and can
/// remove the current index without disturbing the ones it has yet to visit.
/// Because ids increase monotonically and order is preserved, lookups by
/// [`TrackedId`] are a binary search.
pub struct Registry<T> {
    pub(crate) entries: Vec<Tracked<T>>,
    next_id: u64,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a new entry for `target` and returns its id.
    ///
    /// The entry starts not visible; no evaluation happens here.
    pub fn insert(&mut self, target: T, config: &HuntConfig<T>) -> TrackedId {
        let id = TrackedId(self.next_id);
        self.next_id += 1;
        self.entries.push(Tracked::new(id, target, config));
        id
    }

    /// Returns the entry with the given id, if it is still tracked.
    #[must_use]
    pub fn get(&self, id: TrackedId) -> Option<&Tracked<T>> {
        let idx = self.entries.binary_search_by_key(&id, |e| e.id).ok()?;
        Some(&self.entries[idx])
    }

    /// Returns whether the given id is still tracked.
    #[must_use]
    pub fn contains(&self, id: TrackedId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the number of tracked entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tracked<T>> + '_ {
        self.entries.iter()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn ids_follow_registration_order() {
        let mut reg = Registry::<&str>::new();
        let config = HuntConfig::new();
        let a = reg.insert("a", &config);
        let b = reg.insert("b", &config);
        assert!(a < b);
        assert_eq!(reg.len(), 2);
        let order: Vec<_> = reg.iter().map(|e| *e.target()).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn duplicates_are_independent() {
        let mut reg = Registry::<&str>::new();
        let config = HuntConfig::new().offset(10.0);
        let first = reg.insert("same", &config);
        let second = reg.insert("same", &config);
        assert_ne!(first, second);
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.get(second).map(Tracked::offset), Some(10.0));
    }

    #[test]
    fn lookup_after_removal() {
        let mut reg = Registry::<u32>::new();
        let config = HuntConfig::new();
        let ids: Vec<_> = (0..4).map(|n| reg.insert(n, &config)).collect();
        reg.entries.remove(1);
        assert!(!reg.contains(ids[1]));
        assert_eq!(reg.get(ids[3]).map(|e| *e.target()), Some(3));
        assert!(!reg.get(ids[0]).is_some_and(Tracked::is_visible));
    }
}
