// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Sort orders over songs.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;
use crate::song::{SearchField, Song};

/// Total orders used by [`super::DatabaseSecondary::sort`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SongOrder {
    /// Lexicographic by title
    Title,
    /// Lexicographic by artist
    Artist,
    /// Lexicographic by album
    Album,
    /// Numeric by duration in seconds
    Length,
}

impl SongOrder {
    /// Parse an order name
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Some(SongOrder::Title),
            "artist" => Some(SongOrder::Artist),
            "album" => Some(SongOrder::Album),
            "length" | "duration" => Some(SongOrder::Length),
            _ => None,
        }
    }

    /// Order name
    pub fn name(self) -> &'static str {
        match self {
            SongOrder::Title => "title",
            SongOrder::Artist => "artist",
            SongOrder::Album => "album",
            SongOrder::Length => "length",
        }
    }

    /// Text field compared by this order, `None` for [`SongOrder::Length`]
    pub fn field(self) -> Option<SearchField> {
        match self {
            SongOrder::Title => Some(SearchField::Title),
            SongOrder::Artist => Some(SearchField::Artist),
            SongOrder::Album => Some(SearchField::Album),
            SongOrder::Length => None,
        }
    }

    /// Compare two songs.
    ///
    /// Text orders compare bytes, so uppercase sorts before lowercase.
    /// Fails only for [`SongOrder::Length`] when a duration is malformed.
    pub fn compare(self, a: &Song, b: &Song) -> Result<Ordering, DurationError> {
        match self.field() {
            Some(field) => Ok(a.field(field).cmp(b.field(field))),
            None => Ok(a.seconds()?.cmp(&b.seconds()?)),
        }
    }
}

impl fmt::Display for SongOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_orders() {
        let a = Song::new("AWAKE", "Hoshimachi Suisei", "Shinsei Mokuroku", "03:14");
        let b = Song::new("Bye Bye Rainy", "Hoshimachi Suisei", "", "03:20");

        assert_eq!(SongOrder::Title.compare(&a, &b), Ok(Ordering::Less));
        assert_eq!(SongOrder::Artist.compare(&a, &b), Ok(Ordering::Equal));
        assert_eq!(SongOrder::Album.compare(&a, &b), Ok(Ordering::Greater));
    }

    #[test]
    fn test_case_sensitive() {
        let upper = Song::new("KINGWORLD", "", "", "00:00");
        let lower = Song::new("Kairikou", "", "", "00:00");
        // 'I' < 'a'
        assert_eq!(SongOrder::Title.compare(&upper, &lower), Ok(Ordering::Less));
    }

    #[test]
    fn test_length_order() {
        let short = Song::new("UNDEAD", "YOASOBI", "", "03:03");
        let long = Song::new("Kairikou", "Aitsuki Nakuru", "Shinsou", "04:42");
        assert_eq!(SongOrder::Length.compare(&short, &long), Ok(Ordering::Less));

        // "10:00" > "9:59" numerically even though it is lexicographically smaller
        let ten = Song::new("a", "", "", "10:00");
        let nine = Song::new("b", "", "", "9:59");
        assert_eq!(SongOrder::Length.compare(&ten, &nine), Ok(Ordering::Greater));

        let bad = Song::new("c", "", "", "??");
        assert!(SongOrder::Length.compare(&short, &bad).is_err());
    }

    #[test]
    fn test_parse() {
        assert_eq!(SongOrder::parse("Length"), Some(SongOrder::Length));
        assert_eq!(SongOrder::parse("duration"), Some(SongOrder::Length));
        assert_eq!(SongOrder::parse("genre"), None);
    }
}
