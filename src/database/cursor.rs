// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Forward iteration with in-place removal.

use super::kernel::DatabaseKernel;
use crate::error::{DatabaseError, Result};
use crate::song::Song;

/// Cursor over a database that can remove the entry it last yielded.
///
/// The cursor holds the database exclusively, so nothing else can shift
/// positions under it. Removal compacts the storage; the cursor steps back
/// one position to match, so the following [`Cursor::advance`] yields the
/// entry that moved into the freed slot.
pub struct Cursor<'a, D: DatabaseKernel> {
    db: &'a mut D,
    /// Position of the next entry to yield
    next: usize,
    /// Position of the last yielded entry, if it has not been removed
    current: Option<usize>,
}

impl<'a, D: DatabaseKernel> Cursor<'a, D> {
    pub(crate) fn new(db: &'a mut D) -> Self {
        Self {
            db,
            next: 0,
            current: None,
        }
    }

    /// Check if another entry remains
    pub fn has_next(&self) -> bool {
        self.next < self.db.size()
    }

    /// Yield the next entry
    pub fn advance(&mut self) -> Option<&Song> {
        if !self.has_next() {
            self.current = None;
            return None;
        }
        let index = self.next;
        self.next += 1;
        self.current = Some(index);
        self.db.entry_by_order(index).ok()
    }

    /// Remove the entry last returned by [`Cursor::advance`]
    pub fn remove(&mut self) -> Result<Song> {
        let index = self.current.take().ok_or(DatabaseError::NoCurrentEntry)?;
        let song = self.db.remove_entry_by_order(index)?;
        self.next -= 1;
        Ok(song)
    }

    /// Number of entries not yet yielded
    pub fn remaining(&self) -> usize {
        self.db.size().saturating_sub(self.next)
    }
}
