// Copyright 2026 the Tessel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Maps from small integer keys to values, stored by key.

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::error::IndexMapError;

/// A map whose keys are indices into a slot vector.
///
/// Lookups are a bounds check and a slot read. Inserting a key past the end
/// doubles the capacity until the key fits, so memory use follows the largest
/// key rather than the number of entries. Iteration visits keys in ascending
/// order.
#[derive(Clone)]
pub struct IndexMap<T> {
    slots: Vec<Option<T>>,
    len: usize,
}

impl<T> Default for IndexMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IndexMap<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold the same entries; capacity is ignored.
impl<T: PartialEq> PartialEq for IndexMap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for IndexMap<T> {}

impl<T> IndexMap<T> {
    /// Create an empty map without allocating.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            len: 0,
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots; every key below it can be inserted without
    /// growing.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// One past the largest occupied key, or 0 for an empty map.
    pub fn smallest_key_bound(&self) -> usize {
        self.slots.iter().rposition(Option::is_some).map_or(0, |key| key + 1)
    }

    /// Grow to at least `capacity` slots; never shrinks.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.slots.len() {
            self.slots.resize_with(capacity, || None);
        }
    }

    /// Insert `value` at `key` unless the key is taken.
    ///
    /// Returns whether the value was stored; an existing value is kept and
    /// `value` is dropped.
    pub fn insert(&mut self, key: usize, value: T) -> bool {
        if key >= self.slots.len() {
            self.reserve(grown_capacity(self.slots.len(), key));
        }

        let slot = &mut self.slots[key];
        if slot.is_some() {
            return false;
        }
        *slot = Some(value);
        self.len += 1;
        true
    }

    /// Remove and return the value at `key`.
    pub fn remove(&mut self, key: usize) -> Option<T> {
        let value = self.slots.get_mut(key)?.take()?;
        self.len -= 1;
        Some(value)
    }

    /// Whether `key` holds a value.
    pub fn contains_key(&self, key: usize) -> bool {
        self.get(key).is_some()
    }

    /// The value at `key`.
    pub fn get(&self, key: usize) -> Option<&T> {
        self.slots.get(key)?.as_ref()
    }

    /// The value at `key`, mutably.
    pub fn get_mut(&mut self, key: usize) -> Option<&mut T> {
        self.slots.get_mut(key)?.as_mut()
    }

    /// The value at `key`, telling apart keys past the allocated slots from
    /// empty slots.
    pub fn at(&self, key: usize) -> Result<&T, IndexMapError> {
        match self.slots.get(key) {
            None => Err(IndexMapError::PastEnd {
                key,
                capacity: self.slots.len(),
            }),
            Some(None) => Err(IndexMapError::Vacant { key }),
            Some(Some(value)) => Ok(value),
        }
    }

    /// Keep only the entries for which `keep` returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(usize, &mut T) -> bool) {
        for (key, slot) in self.slots.iter_mut().enumerate() {
            if let Some(value) = slot {
                if !keep(key, value) {
                    *slot = None;
                    self.len -= 1;
                }
            }
        }
    }

    /// Remove all entries, keeping the capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.len = 0;
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(key, slot)| slot.as_ref().map(|value| (key, value)))
    }

    /// Entries in ascending key order, with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots
            .iter_mut()
            .enumerate()
            .filter_map(|(key, slot)| slot.as_mut().map(|value| (key, value)))
    }

    /// Occupied keys in ascending order.
    pub fn keys(&self) -> impl Iterator<Item = usize> + '_ {
        self.iter().map(|(key, _)| key)
    }

    /// Values in ascending key order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().map(|(_, value)| value)
    }
}

/// Capacity after doubling `len` until `key` fits. Falls back to exactly
/// `key + 1` slots once doubling would overflow.
fn grown_capacity(len: usize, key: usize) -> usize {
    let mut capacity = len.max(1);
    while capacity <= key {
        match capacity.checked_mul(2) {
            Some(doubled) => capacity = doubled,
            None => return key.saturating_add(1),
        }
    }
    capacity
}

impl<T> Index<usize> for IndexMap<T> {
    type Output = T;

    /// Panics if `key` holds no value.
    fn index(&self, key: usize) -> &T {
        match self.get(key) {
            Some(value) => value,
            None => panic!("no value at key {key}"),
        }
    }
}

impl<T> IndexMut<usize> for IndexMap<T> {
    fn index_mut(&mut self, key: usize) -> &mut T {
        match self.get_mut(key) {
            Some(value) => value,
            None => panic!("no value at key {key}"),
        }
    }
}

/// Later duplicates of a key are dropped, as with [`IndexMap::insert`].
impl<T> FromIterator<(usize, T)> for IndexMap<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<T> Extend<(usize, T)> for IndexMap<T> {
    fn extend<I: IntoIterator<Item = (usize, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
