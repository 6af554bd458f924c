//! Id-keyed record table
//!
//! This module provides the EntityTable component that backs every entity kind
//! in the store. A table owns a HashMap of identifier to record plus the
//! counter used to mint the next identifier.
//!
//! # Identifiers
//!
//! Identifiers start at 1 and increase by one per insert. They are never
//! reused, so deleting the newest record does not hand its id to the next
//! insert.
//!
//! # Ordering
//!
//! Listings are returned in ascending id order, which is also insertion
//! order, so results are deterministic regardless of hash layout.

use std::collections::HashMap;

/// In-memory table of records keyed by a sequential `u32` identifier
#[derive(Debug, Clone)]
pub struct EntityTable<T> {
    /// Map of identifier to record
    rows: HashMap<u32, T>,
    /// Identifier handed to the next insert
    next_id: u32,
}

impl<T: Clone> EntityTable<T> {
    /// Create a new empty table whose first id will be 1
    pub fn new() -> Self {
        EntityTable {
            rows: HashMap::new(),
            next_id: 1,
        }
    }

    /// Mint the next identifier, build a record with it and store it
    ///
    /// # Arguments
    ///
    /// * `build` - Receives the freshly minted id and returns the record
    ///
    /// # Returns
    ///
    /// A clone of the stored record
    pub fn insert_with<F>(&mut self, build: F) -> T
    where
        F: FnOnce(u32) -> T,
    {
        let id = self.next_id;
        self.next_id += 1;

        let record = build(id);
        self.rows.insert(id, record.clone());
        record
    }

    /// Get an immutable reference to a record
    ///
    /// # Returns
    ///
    /// * `Some(&T)` - If the record exists
    /// * `None` - If the id is not found
    pub fn get(&self, id: u32) -> Option<&T> {
        self.rows.get(&id)
    }

    /// Modify a stored record in place using a closure
    ///
    /// # Returns
    ///
    /// * `Some(T)` - A clone of the record after the update
    /// * `None` - If the id is not found; nothing is stored in that case
    pub fn update<F>(&mut self, id: u32, f: F) -> Option<T>
    where
        F: FnOnce(&mut T),
    {
        let record = self.rows.get_mut(&id)?;
        f(record);
        Some(record.clone())
    }

    /// Remove a record
    ///
    /// Returns `true` if a record was present and removed.
    pub fn remove(&mut self, id: u32) -> bool {
        self.rows.remove(&id).is_some()
    }

    /// All records matching `predicate`, in ascending id order
    pub fn filter<P>(&self, mut predicate: P) -> Vec<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut matches: Vec<(&u32, &T)> = self
            .rows
            .iter()
            .filter(|(_, record)| predicate(record))
            .collect();
        matches.sort_by_key(|(id, _)| **id);
        matches.into_iter().map(|(_, record)| record.clone()).collect()
    }

    /// The lowest-id record matching `predicate`
    pub fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.rows
            .iter()
            .filter(|(_, record)| predicate(record))
            .min_by_key(|(id, _)| **id)
            .map(|(_, record)| record.clone())
    }

    /// All records, in ascending id order
    pub fn all(&self) -> Vec<T> {
        self.filter(|_| true)
    }

    /// Iterate over stored records in arbitrary order
    ///
    /// Suitable for aggregation where order does not matter.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl<T: Clone> Default for EntityTable<T> {
    fn default() -> Self {
        Self::new()
    }
}
