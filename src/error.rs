// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Error types for the song database.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::song::Song;

/// Result alias used throughout the database layers
pub type Result<T, E = DatabaseError> = std::result::Result<T, E>;

/// A duration string that is not of the form `digits:digits`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid duration {text:?}: expected MM:SS")]
pub struct DurationError {
    /// The offending text
    pub text: String,
}

impl DurationError {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

/// A record line that does not have the `title\tartist\talbum\tduration` shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// Wrong number of tab-separated fields
    #[error("expected 3 or 4 tab-separated fields, found {0}")]
    FieldCount(usize),
    /// Duration field is not `MM:SS`
    #[error(transparent)]
    Duration(#[from] DurationError),
    /// Line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    Encoding,
}

/// Errors reported by database operations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Positional access outside `0..size`
    #[error("index {index} out of range for database of size {size}")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Size at the time of the call
        size: usize,
    },

    /// `remove_entry` was asked for a song the database does not hold
    #[error("song not present in database: {0}")]
    NotPresent(Song),

    /// Cursor removal without a yielded entry to remove
    #[error("cursor has no current entry to remove")]
    NoCurrentEntry,

    /// A record line could not be parsed
    #[error("line {line}: {source}")]
    DataFormat {
        /// 1-based line number in the source
        line: usize,
        /// What was wrong with it
        #[source]
        source: RecordError,
    },

    /// A song duration could not be converted to seconds
    #[error(transparent)]
    Duration(#[from] DurationError),

    /// The backing file could not be opened, read or written
    #[error("I/O error on {path:?}: {source}")]
    Resource {
        /// File involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },
}

impl DatabaseError {
    /// True for errors caused by a caller breaking an operation's requirements
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            DatabaseError::IndexOutOfRange { .. }
                | DatabaseError::NotPresent(_)
                | DatabaseError::NoCurrentEntry
        )
    }

    /// True for malformed input data
    pub fn is_data_format(&self) -> bool {
        matches!(
            self,
            DatabaseError::DataFormat { .. } | DatabaseError::Duration(_)
        )
    }

    pub(crate) fn resource(path: impl Into<PathBuf>, source: io::Error) -> Self {
        DatabaseError::Resource {
            path: path.into(),
            source,
        }
    }
}
