// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song records.
//!
//! A [`Song`] is an immutable value made of four text fields. Two songs
//! are the same song exactly when every field matches.

pub mod duration;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DurationError;

/// Searchable text fields of a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchField {
    /// Song title
    Title,
    /// Performing artist
    Artist,
    /// Album name (may be empty)
    Album,
}

impl SearchField {
    /// All searchable fields
    pub const ALL: [SearchField; 3] = [SearchField::Title, SearchField::Artist, SearchField::Album];

    /// Parse a field name, case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Some(SearchField::Title),
            "artist" => Some(SearchField::Artist),
            "album" => Some(SearchField::Album),
            _ => None,
        }
    }

    /// Lowercase name of the field
    pub fn name(self) -> &'static str {
        match self {
            SearchField::Title => "title",
            SearchField::Artist => "artist",
            SearchField::Album => "album",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A music track record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    title: String,
    artist: String,
    #[serde(default)]
    album: String,
    duration: String,
}

impl Song {
    /// Create a song. No validation is performed; `album` may be empty and
    /// `duration` is only checked when converted with [`Song::seconds`].
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration: duration.into(),
        }
    }

    /// Get title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get artist
    pub fn artist(&self) -> &str {
        &self.artist
    }

    /// Get album
    pub fn album(&self) -> &str {
        &self.album
    }

    /// Get duration text
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// Get the text of a searchable field
    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::Title => &self.title,
            SearchField::Artist => &self.artist,
            SearchField::Album => &self.album,
        }
    }

    /// Check whether `field` equals `value` exactly
    pub fn matches(&self, field: SearchField, value: &str) -> bool {
        self.field(field) == value
    }

    /// Total length in seconds
    pub fn seconds(&self) -> Result<u32, DurationError> {
        duration::parse_seconds(&self.duration)
    }
}

/// Renders the tab-delimited record line, without a line terminator
impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.title, self.artist, self.album, self.duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn awake() -> Song {
        Song::new("AWAKE", "Hoshimachi Suisei", "Shinsei Mokuroku", "03:14")
    }

    #[test]
    fn test_song_accessors() {
        let song = awake();
        assert_eq!(song.title(), "AWAKE");
        assert_eq!(song.artist(), "Hoshimachi Suisei");
        assert_eq!(song.album(), "Shinsei Mokuroku");
        assert_eq!(song.duration(), "03:14");
        assert_eq!(song.seconds(), Ok(194));
    }

    #[test]
    fn test_song_equality_is_field_wise() {
        assert_eq!(awake(), awake());
        assert_ne!(
            awake(),
            Song::new("awake", "Hoshimachi Suisei", "Shinsei Mokuroku", "03:14")
        );
        assert_ne!(
            awake(),
            Song::new("AWAKE", "Hoshimachi Suisei", "", "03:14")
        );

        let mut set = HashSet::new();
        set.insert(awake());
        assert!(set.contains(&awake()));
    }

    #[test]
    fn test_song_fields() {
        let song = Song::new("Bye Bye Rainy", "Hoshimachi Suisei", "", "03:20");
        assert_eq!(song.field(SearchField::Title), "Bye Bye Rainy");
        assert_eq!(song.field(SearchField::Album), "");
        assert!(song.matches(SearchField::Artist, "Hoshimachi Suisei"));
        assert!(!song.matches(SearchField::Artist, "hoshimachi suisei"));
    }

    #[test]
    fn test_song_display() {
        let song = Song::new("Bye Bye Rainy", "Hoshimachi Suisei", "", "03:20");
        assert_eq!(song.to_string(), "Bye Bye Rainy\tHoshimachi Suisei\t\t03:20");
    }

    #[test]
    fn test_bad_duration() {
        let song = Song::new("Title", "Artist", "Album", "soon");
        assert!(song.seconds().is_err());
    }

    #[test]
    fn test_search_field_parse() {
        assert_eq!(SearchField::parse("ARTIST"), Some(SearchField::Artist));
        assert_eq!(SearchField::parse("album"), Some(SearchField::Album));
        assert_eq!(SearchField::parse("length"), None);
        for field in SearchField::ALL {
            assert_eq!(SearchField::parse(field.name()), Some(field));
        }
    }
}
