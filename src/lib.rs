// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory song database with tab-delimited file persistence.
//!
//! A database is layered: [`DatabaseKernel`] is the small set of primitives
//! each storage kind implements, and [`DatabaseSecondary`] builds search,
//! merge, split, sort and file I/O on top of those primitives alone.

pub mod config;
pub mod database;
pub mod error;
pub mod records;
pub mod song;

pub use database::{
    ArrayDatabase, Cursor, DatabaseKernel, DatabaseKind, DatabaseSecondary, HashDatabase,
    SongOrder,
};
pub use error::{DatabaseError, DurationError, RecordError};
pub use song::{SearchField, Song};
