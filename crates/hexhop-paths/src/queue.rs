//! Duplicate-free priority queue for ranking candidate moves.
//!
//! Entries live in a vector kept sorted by ascending priority. Lower
//! priorities are removed first; ties are broken by insertion order (FIFO).
//! Each item appears at most once, compared by value.
//!
//! A sorted vector rather than a heap: candidate sets are tiny (a handful of
//! neighbours plus jump targets), and every insertion needs an equality scan
//! for uniqueness anyway.

use std::fmt;

use crate::error::CollectionError;

/// Capacity of a freshly created queue.
pub const INITIAL_CAPACITY: usize = 10;

/// Number of slots added each time a full queue grows.
pub const GROWTH_INCREMENT: usize = 5;

#[derive(Debug, Clone)]
struct Entry<T> {
    item: T,
    priority: f64,
}

/// A priority queue that holds each item at most once.
///
/// The first priority given for an item wins: inserting an item that is
/// already present is a no-op. Use [`update_priority`](Self::update_priority)
/// to re-rank an item.
#[derive(Debug, Clone)]
pub struct UniquePriorityQueue<T> {
    entries: Vec<Entry<T>>,
}

impl<T: PartialEq> UniquePriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
        }
    }

    /// Insert `item` with the given priority, unless it is already queued.
    ///
    /// The entry goes after every existing entry whose priority is less than
    /// or equal to `priority`, so equal priorities keep insertion order.
    pub fn insert(&mut self, item: T, priority: f64) {
        debug_assert!(!priority.is_nan(), "priority must be comparable");
        if self.contains(&item) {
            return;
        }
        if self.entries.len() == self.entries.capacity() {
            self.entries.reserve_exact(GROWTH_INCREMENT);
        }
        let at = self.entries.partition_point(|e| e.priority <= priority);
        self.entries.insert(at, Entry { item, priority });
    }

    /// Whether an equal item is queued.
    pub fn contains(&self, item: &T) -> bool {
        self.position(item).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current backing capacity.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// The lowest-priority item, without removing it.
    pub fn peek_min(&self) -> Result<&T, CollectionError> {
        self.entries
            .first()
            .map(|e| &e.item)
            .ok_or(CollectionError::EmptyCollection)
    }

    /// Remove and return the lowest-priority item.
    pub fn remove_min(&mut self) -> Result<T, CollectionError> {
        self.pop_min().ok_or(CollectionError::EmptyCollection)
    }

    /// Remove and return the lowest-priority item, or `None` if empty.
    pub fn pop_min(&mut self) -> Option<T> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.remove(0).item)
    }

    /// Re-rank a queued item.
    ///
    /// Equivalent to removing the entry and inserting it again: among equal
    /// priorities the re-ranked item sorts after everything already queued.
    pub fn update_priority(&mut self, item: &T, priority: f64) -> Result<(), CollectionError> {
        let at = self.position(item).ok_or(CollectionError::ItemNotFound)?;
        let entry = self.entries.remove(at);
        self.insert(entry.item, priority);
        Ok(())
    }

    /// Iterate `(item, priority)` pairs in removal order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&T, f64)> + '_ {
        self.entries.iter().map(|e| (&e.item, e.priority))
    }

    fn position(&self, item: &T) -> Option<usize> {
        self.entries.iter().position(|e| e.item == *item)
    }
}

impl<T: PartialEq> Default for UniquePriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for UniquePriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return write!(f, "The PQ is empty");
        }
        for (i, e) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} [{:.1}]", e.item, e.priority)?;
        }
        Ok(())
    }
}
