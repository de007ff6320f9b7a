// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Tab-delimited record lines.
//!
//! One song per line: `title\tartist\talbum\tduration`. Fields are not
//! escaped, so a tab or newline inside a field breaks the record.

use crate::error::RecordError;
use crate::song::{duration, Song};

/// Field separator
pub const SEPARATOR: char = '\t';

/// Encode a song as a record line, without the line terminator
pub fn encode(song: &Song) -> String {
    song.to_string()
}

/// Decode a record line.
///
/// A line with three fields is read as `title\tartist\tduration` with an
/// empty album. A trailing `\r` is ignored.
pub fn decode(line: &str) -> Result<Song, RecordError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line.split(SEPARATOR).collect();

    let (title, artist, album, length) = match fields.as_slice() {
        [title, artist, album, length] => (*title, *artist, *album, *length),
        [title, artist, length] => (*title, *artist, "", *length),
        _ => return Err(RecordError::FieldCount(fields.len())),
    };

    duration::parse_seconds(length)?;

    Ok(Song::new(title, artist, album, length))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_line() {
        let song = decode("AWAKE\tHoshimachi Suisei\tShinsei Mokuroku\t03:14").unwrap();
        assert_eq!(
            song,
            Song::new("AWAKE", "Hoshimachi Suisei", "Shinsei Mokuroku", "03:14")
        );
    }

    #[test]
    fn test_decode_empty_album() {
        let song = decode("Bye Bye Rainy\tHoshimachi Suisei\t\t03:20").unwrap();
        assert_eq!(song.album(), "");
        assert_eq!(song.duration(), "03:20");
    }

    #[test]
    fn test_decode_three_fields() {
        let song = decode("KINGWORLD\tShirakami Fubuki\t03:30").unwrap();
        assert_eq!(song, Song::new("KINGWORLD", "Shirakami Fubuki", "", "03:30"));
    }

    #[test]
    fn test_decode_crlf() {
        let song = decode("UNDEAD\tYOASOBI\t\t03:03\r").unwrap();
        assert_eq!(song.duration(), "03:03");
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(decode("just a title"), Err(RecordError::FieldCount(1)));
        assert_eq!(decode("a\tb\tc\td\te"), Err(RecordError::FieldCount(5)));
        assert!(matches!(
            decode("Title\tArtist\tAlbum\tlong"),
            Err(RecordError::Duration(_))
        ));
    }

    #[test]
    fn test_encode_keeps_empty_album() {
        let song = Song::new("UNDEAD", "YOASOBI", "", "03:03");
        let line = encode(&song);
        assert_eq!(line, "UNDEAD\tYOASOBI\t\t03:03");
        assert_eq!(decode(&line).unwrap(), song);
    }
}
