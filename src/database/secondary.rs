// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Secondary operations, built only from kernel primitives.
//!
//! [`DatabaseSecondary`] is implemented for every [`DatabaseKernel`], so a
//! new storage kind gets search, merge, split, sort and file I/O for free.
//! Nothing here can see how a kind stores its songs.

use std::cmp::Ordering;
use std::io;
use std::path::Path;

use tracing::{debug, info, trace, warn};

use super::kernel::DatabaseKernel;
use super::order::SongOrder;
use crate::error::{DatabaseError, RecordError, Result};
use crate::records::{self, FileLineReader, FileLineWriter, LineReader, LineWriter};
use crate::song::{SearchField, Song};

/// Derived database operations
pub trait DatabaseSecondary: DatabaseKernel + Sized {
    /// Check if an equal song is present
    fn contains(&self, song: &Song) -> bool {
        self.entries().any(|entry| entry == song)
    }

    /// Add every song of `other` that `self` does not already hold, in
    /// `other`'s order. Returns how many were added.
    fn append<O: DatabaseKernel>(&mut self, other: &O) -> usize {
        let mut added = 0;
        for song in other.entries() {
            if !self.contains(song) {
                self.add_entry(song.clone());
                added += 1;
            }
        }
        added
    }

    /// Add every song in order, keeping duplicates
    fn add_entries<I: IntoIterator<Item = Song>>(&mut self, songs: I) {
        for song in songs {
            self.add_entry(song);
        }
    }

    /// Remove the first entry equal to `song`
    fn remove_entry(&mut self, song: &Song) -> Result<Song> {
        let index = self
            .entries()
            .position(|entry| entry == song)
            .ok_or_else(|| DatabaseError::NotPresent(song.clone()))?;
        self.remove_entry_by_order(index)
    }

    /// All songs whose `field` equals `value`, in storage order
    fn get_entries(&self, field: SearchField, value: &str) -> Vec<Song> {
        self.entries()
            .filter(|song| song.matches(field, value))
            .cloned()
            .collect()
    }

    /// Remove and return all songs whose `field` equals `value`, in storage order
    fn remove_entries(&mut self, field: SearchField, value: &str) -> Vec<Song> {
        let mut removed = Vec::new();
        let mut cursor = self.cursor();

        while let Some(song) = cursor.advance() {
            if !song.matches(field, value) {
                continue;
            }
            match cursor.remove() {
                Ok(song) => removed.push(song),
                Err(e) => warn!("Cursor removal failed during remove_entries: {}", e),
            }
        }

        removed
    }

    /// Move all songs whose `field` equals `value` into a new database of
    /// the same kind
    fn split(&mut self, field: SearchField, value: &str) -> Self {
        let mut matched = self.new_instance();
        matched.add_entries(self.remove_entries(field, value));
        debug!(
            "Split {} entries with {} == {:?}, {} remain",
            matched.size(),
            field,
            value,
            self.size()
        );
        matched
    }

    /// Stable sort with a caller-supplied comparator
    fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&Song, &Song) -> Ordering,
    {
        let mut songs = drain_all(self);
        songs.sort_by(compare);
        self.add_entries(songs);
    }

    /// Stable sort by one of the standard orders.
    ///
    /// For [`SongOrder::Length`] every duration is converted before anything
    /// moves, so a malformed duration leaves the order untouched.
    fn sort(&mut self, order: SongOrder) -> Result<()> {
        if order == SongOrder::Length {
            for song in self.entries() {
                song.seconds()?;
            }
        }
        self.sort_by(|a, b| order.compare(a, b).unwrap_or(Ordering::Equal));
        Ok(())
    }

    /// Load records from a line reader, skipping songs already present.
    ///
    /// Blank lines are ignored. The first malformed line aborts the read;
    /// songs added before it stay. Returns how many songs were added.
    fn read_from<R: LineReader>(&mut self, reader: &mut R) -> Result<usize> {
        let mut added = 0;
        let mut line_number = 0;

        while let Some(line) = reader.next_line() {
            line_number += 1;
            let line = match line {
                Ok(line) => line,
                Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                    return Err(DatabaseError::DataFormat {
                        line: line_number,
                        source: RecordError::Encoding,
                    });
                }
                Err(e) => return Err(DatabaseError::resource(reader.location(), e)),
            };
            if line.trim_end_matches('\r').is_empty() {
                continue;
            }

            let song = records::decode(&line).map_err(|source| DatabaseError::DataFormat {
                line: line_number,
                source,
            })?;

            if self.contains(&song) {
                trace!("Skipping duplicate on line {}: {}", line_number, song);
                continue;
            }
            self.add_entry(song);
            added += 1;
        }

        Ok(added)
    }

    /// Load records from a file, skipping songs already present
    fn read_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let path = path.as_ref();
        let mut reader =
            FileLineReader::open(path).map_err(|e| DatabaseError::resource(path, e))?;
        let added = self.read_from(&mut reader)?;
        info!("Read {} new songs from {:?}", added, path);
        Ok(added)
    }

    /// Write every entry as one record line
    fn write_to<W: LineWriter>(&self, writer: &mut W) -> Result<()> {
        for song in self.entries() {
            writer
                .write_line(&records::encode(song))
                .map_err(|e| DatabaseError::resource(writer.location(), e))?;
        }
        writer
            .finish()
            .map_err(|e| DatabaseError::resource(writer.location(), e))
    }

    /// Write every entry to a file, replacing its contents
    fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer =
            FileLineWriter::create(path).map_err(|e| DatabaseError::resource(path, e))?;
        self.write_to(&mut writer)?;
        info!("Wrote {} songs to {:?}", self.size(), path);
        Ok(())
    }

    /// Record lines for every entry, each followed by `\n`
    fn render(&self) -> String {
        let mut out = String::new();
        for song in self.entries() {
            out.push_str(&records::encode(song));
            out.push('\n');
        }
        out
    }

    /// Same size and an equal song at every position
    fn same_entries<O: DatabaseKernel>(&self, other: &O) -> bool {
        self.size() == other.size()
            && (0..self.size()).all(|i| self.entry_by_order(i).ok() == other.entry_by_order(i).ok())
    }
}

impl<D: DatabaseKernel> DatabaseSecondary for D {}

/// Remove every entry, returning them in storage order
fn drain_all<D: DatabaseKernel>(db: &mut D) -> Vec<Song> {
    let mut songs = Vec::with_capacity(db.size());
    while let Some(last) = db.size().checked_sub(1) {
        match db.remove_entry_by_order(last) {
            Ok(song) => songs.push(song),
            Err(e) => {
                warn!("Stopped draining at position {}: {}", last, e);
                break;
            }
        }
    }
    songs.reverse();
    songs
}
