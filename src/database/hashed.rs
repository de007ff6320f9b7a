// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hash-backed database.
//!
//! Songs live in a map keyed by position. Keys always form the range
//! `0..len`; removal re-keys every later entry one position down.

use std::collections::HashMap;
use std::fmt;

use super::kernel::{DatabaseKernel, DatabaseKind};
use super::secondary::DatabaseSecondary;
use crate::error::{DatabaseError, Result};
use crate::song::Song;

/// Database storing its songs in a position-keyed hash map
#[derive(Debug, Clone, Default)]
pub struct HashDatabase {
    songs: HashMap<usize, Song>,
}

impl HashDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty database with room for `capacity` songs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            songs: HashMap::with_capacity(capacity),
        }
    }

    fn out_of_range(&self, index: usize) -> DatabaseError {
        DatabaseError::IndexOutOfRange {
            index,
            size: self.songs.len(),
        }
    }
}

impl DatabaseKernel for HashDatabase {
    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Hashed
    }

    fn clear(&mut self) {
        self.songs.clear();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.songs = std::mem::take(&mut source.songs);
    }

    fn add_entry(&mut self, song: Song) {
        let next = self.songs.len();
        self.songs.insert(next, song);
    }

    fn remove_entry_by_order(&mut self, index: usize) -> Result<Song> {
        let len = self.songs.len();
        let song = self
            .songs
            .remove(&index)
            .ok_or_else(|| self.out_of_range(index))?;

        for position in index + 1..len {
            if let Some(moved) = self.songs.remove(&position) {
                self.songs.insert(position - 1, moved);
            }
        }

        Ok(song)
    }

    fn entry_by_order(&self, index: usize) -> Result<&Song> {
        self.songs
            .get(&index)
            .ok_or_else(|| self.out_of_range(index))
    }

    fn size(&self) -> usize {
        self.songs.len()
    }

    fn ensure_capacity(&mut self, capacity: usize) {
        self.songs.reserve(capacity.saturating_sub(self.songs.len()));
    }
}

impl PartialEq for HashDatabase {
    fn eq(&self, other: &Self) -> bool {
        self.same_entries(other)
    }
}

impl Eq for HashDatabase {}

impl fmt::Display for HashDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Song> for HashDatabase {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut db = Self::new();
        db.add_entries(iter);
        db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(title: &str) -> Song {
        Song::new(title, "Artist", "", "01:00")
    }

    fn keys_are_contiguous(db: &HashDatabase) -> bool {
        (0..db.songs.len()).all(|i| db.songs.contains_key(&i))
    }

    #[test]
    fn test_remove_rekeys() {
        let mut db: HashDatabase = ["a", "b", "c", "d"].iter().map(|t| song(t)).collect();

        assert_eq!(db.remove_entry_by_order(0).unwrap(), song("a"));
        assert!(keys_are_contiguous(&db));
        assert_eq!(db.entry_by_order(0).unwrap(), &song("b"));

        assert_eq!(db.remove_entry_by_order(2).unwrap(), song("d"));
        assert!(keys_are_contiguous(&db));
        assert_eq!(db.size(), 2);

        assert!(matches!(
            db.remove_entry_by_order(5),
            Err(DatabaseError::IndexOutOfRange { index: 5, size: 2 })
        ));
    }

    #[test]
    fn test_add_after_remove() {
        let mut db: HashDatabase = ["a", "b"].iter().map(|t| song(t)).collect();
        db.remove_entry_by_order(0).unwrap();
        db.add_entry(song("c"));

        assert!(keys_are_contiguous(&db));
        assert_eq!(db.entry_by_order(1).unwrap(), &song("c"));
    }

    #[test]
    fn test_new_instance_keeps_kind() {
        let db = HashDatabase::with_capacity(8);
        let other = db.new_instance();
        assert_eq!(other.kind(), DatabaseKind::Hashed);
        assert_eq!(db, other);
    }

    #[test]
    fn test_transfer() {
        let mut source: HashDatabase = ["a", "b"].iter().map(|t| song(t)).collect();
        let mut dest = HashDatabase::new();
        dest.transfer_from(&mut source);
        assert_eq!(dest.size(), 2);
        assert!(source.is_empty());
        assert_eq!(dest.to_string(), "a\tArtist\t\t01:00\nb\tArtist\t\t01:00\n");
    }
}
