// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Array-backed database.

use std::fmt;

use super::kernel::{DatabaseKernel, DatabaseKind};
use super::secondary::DatabaseSecondary;
use crate::error::{DatabaseError, Result};
use crate::song::Song;

/// Database storing its songs in a contiguous vector
#[derive(Debug, Clone, Default)]
pub struct ArrayDatabase {
    songs: Vec<Song>,
}

impl ArrayDatabase {
    /// Create an empty database
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty database with room for `capacity` songs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            songs: Vec::with_capacity(capacity),
        }
    }
}

impl DatabaseKernel for ArrayDatabase {
    fn new_instance(&self) -> Self {
        Self::new()
    }

    fn kind(&self) -> DatabaseKind {
        DatabaseKind::Array
    }

    fn clear(&mut self) {
        self.songs.clear();
    }

    fn transfer_from(&mut self, source: &mut Self) {
        self.songs = std::mem::take(&mut source.songs);
    }

    fn add_entry(&mut self, song: Song) {
        self.songs.push(song);
    }

    fn remove_entry_by_order(&mut self, index: usize) -> Result<Song> {
        if index >= self.songs.len() {
            return Err(DatabaseError::IndexOutOfRange {
                index,
                size: self.songs.len(),
            });
        }
        Ok(self.songs.remove(index))
    }

    fn entry_by_order(&self, index: usize) -> Result<&Song> {
        self.songs.get(index).ok_or(DatabaseError::IndexOutOfRange {
            index,
            size: self.songs.len(),
        })
    }

    fn size(&self) -> usize {
        self.songs.len()
    }

    fn ensure_capacity(&mut self, capacity: usize) {
        self.songs.reserve(capacity.saturating_sub(self.songs.len()));
    }
}

impl PartialEq for ArrayDatabase {
    fn eq(&self, other: &Self) -> bool {
        self.same_entries(other)
    }
}

impl Eq for ArrayDatabase {}

impl fmt::Display for ArrayDatabase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromIterator<Song> for ArrayDatabase {
    fn from_iter<I: IntoIterator<Item = Song>>(iter: I) -> Self {
        let mut db = Self::new();
        db.add_entries(iter);
        db
    }
}
