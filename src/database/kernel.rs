// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Kernel operations: the primitive set every database kind implements.
//!
//! Everything else a database can do is built from these in
//! [`super::secondary`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::cursor::Cursor;
use crate::error::Result;
use crate::song::Song;

/// Concrete storage strategy behind a database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// Contiguous vector storage
    #[default]
    Array,
    /// Position-keyed hash map storage
    Hashed,
}

impl DatabaseKind {
    /// Parse a kind name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Some(DatabaseKind::Array),
            "hashed" | "hash" => Some(DatabaseKind::Hashed),
            _ => None,
        }
    }

    /// Kind name
    pub fn name(self) -> &'static str {
        match self {
            DatabaseKind::Array => "array",
            DatabaseKind::Hashed => "hashed",
        }
    }
}

impl fmt::Display for DatabaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Primitive operations over an ordered collection of songs.
///
/// Positions are 0-based and contiguous; removing an entry shifts every
/// later entry down by one.
pub trait DatabaseKernel {
    /// Empty database of the same kind
    fn new_instance(&self) -> Self
    where
        Self: Sized;

    /// Runtime tag of the storage strategy
    fn kind(&self) -> DatabaseKind;

    /// Remove every entry
    fn clear(&mut self);

    /// Replace the contents of `self` with the contents of `source`,
    /// leaving `source` empty.
    fn transfer_from(&mut self, source: &mut Self)
    where
        Self: Sized;

    /// Append a song at the end. Duplicates are allowed.
    fn add_entry(&mut self, song: Song);

    /// Remove and return the song at `index`
    fn remove_entry_by_order(&mut self, index: usize) -> Result<Song>;

    /// Borrow the song at `index`
    fn entry_by_order(&self, index: usize) -> Result<&Song>;

    /// Number of entries
    fn size(&self) -> usize;

    /// Reserve room for at least `capacity` entries in total
    fn ensure_capacity(&mut self, capacity: usize);

    /// Check if there are no entries
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Iterate the entries in storage order
    fn entries(&self) -> Entries<'_, Self>
    where
        Self: Sized,
    {
        Entries { db: self, next: 0 }
    }

    /// Iterate with the ability to remove the entry just yielded
    fn cursor(&mut self) -> Cursor<'_, Self>
    where
        Self: Sized,
    {
        Cursor::new(self)
    }
}

/// Read-only iterator over a database, in storage order
pub struct Entries<'a, D> {
    db: &'a D,
    next: usize,
}

impl<'a, D: DatabaseKernel> Iterator for Entries<'a, D> {
    type Item = &'a Song;

    fn next(&mut self) -> Option<Self::Item> {
        let song = self.db.entry_by_order(self.next).ok()?;
        self.next += 1;
        Some(song)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.db.size().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<D: DatabaseKernel> ExactSizeIterator for Entries<'_, D> {}
