// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song database.
//!
//! This module provides:
//! - Kernel: the primitive operations each storage kind implements
//! - Secondary: search, merge, split, sort and file I/O built on the kernel
//! - Two storage kinds: array-backed and hash-backed

pub mod array;
pub mod cursor;
pub mod hashed;
pub mod kernel;
pub mod order;
pub mod secondary;

pub use array::ArrayDatabase;
pub use cursor::Cursor;
pub use hashed::HashDatabase;
pub use kernel::{DatabaseKernel, DatabaseKind, Entries};
pub use order::SongOrder;
pub use secondary::DatabaseSecondary;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DatabaseError;
    use crate::song::Song;

    fn three_songs<D: DatabaseKernel>(mut db: D) -> D {
        db.add_entry(Song::new("AWAKE", "Hoshimachi Suisei", "Shinsei Mokuroku", "03:14"));
        db.add_entry(Song::new("Bye Bye Rainy", "Hoshimachi Suisei", "", "03:20"));
        db.add_entry(Song::new("KINGWORLD", "Shirakami Fubuki", "", "03:30"));
        db
    }

    #[test]
    fn test_database_creation() {
        let array = ArrayDatabase::new();
        let hashed = HashDatabase::new();
        assert_eq!(array.kind(), DatabaseKind::Array);
        assert_eq!(hashed.kind(), DatabaseKind::Hashed);
        assert!(array.is_empty());
        assert!(hashed.is_empty());
    }

    #[test]
    fn test_entries_iterator() {
        let db = three_songs(ArrayDatabase::new());
        let titles: Vec<&str> = db.entries().map(|song| song.title()).collect();
        assert_eq!(titles, vec!["AWAKE", "Bye Bye Rainy", "KINGWORLD"]);
        assert_eq!(db.entries().len(), 3);

        // restartable per call
        assert_eq!(db.entries().count(), 3);
        assert_eq!(ArrayDatabase::new().entries().next(), None);
    }

    #[test]
    fn test_cursor_has_next() {
        let mut db = three_songs(HashDatabase::new());
        let mut cursor = db.cursor();
        assert!(cursor.has_next());
        cursor.advance();
        assert!(cursor.has_next());
        cursor.advance();
        assert!(cursor.has_next());
        cursor.advance();
        assert!(!cursor.has_next());
        assert!(cursor.advance().is_none());

        let mut empty = ArrayDatabase::new();
        assert!(!empty.cursor().has_next());
    }

    #[test]
    fn test_cursor_remove_matches_remove_by_order() {
        let mut db1 = three_songs(ArrayDatabase::new());
        let mut db2 = db1.new_instance();
        db2.append(&db1);

        let expected = db2.entry_by_order(0).unwrap().clone();
        {
            let mut cursor = db1.cursor();
            assert_eq!(cursor.advance(), Some(&expected));
            assert_eq!(cursor.remove().unwrap(), expected);
            assert_eq!(cursor.remaining(), 2);
            assert_eq!(cursor.advance().map(|s| s.title()), Some("Bye Bye Rainy"));
        }
        db2.remove_entry_by_order(0).unwrap();

        assert_eq!(db1, db2);
    }

    #[test]
    fn test_cursor_remove_every_entry() {
        let mut db = three_songs(HashDatabase::new());
        let mut cursor = db.cursor();
        let mut removed = 0;
        while cursor.advance().is_some() {
            cursor.remove().unwrap();
            removed += 1;
        }
        assert_eq!(removed, 3);
        assert!(db.is_empty());
    }

    #[test]
    fn test_cursor_remove_without_current() {
        let mut db = three_songs(ArrayDatabase::new());
        let mut cursor = db.cursor();
        assert!(matches!(cursor.remove(), Err(DatabaseError::NoCurrentEntry)));

        cursor.advance();
        cursor.remove().unwrap();
        assert!(matches!(cursor.remove(), Err(DatabaseError::NoCurrentEntry)));
    }

    #[test]
    fn test_equals_new_instance_iff_empty() {
        let db = three_songs(ArrayDatabase::new());
        assert!(!db.same_entries(&db.new_instance()));

        let empty = HashDatabase::new();
        assert!(empty.same_entries(&empty.new_instance()));
    }

    #[test]
    fn test_add_entry_on_empty() {
        let song = Song::new("Title", "Artist", "Album", "00:00");
        let mut db = HashDatabase::new();
        db.add_entry(song.clone());
        assert_eq!(db.size(), 1);
        assert_eq!(db.entry_by_order(0).unwrap(), &song);
    }
}
