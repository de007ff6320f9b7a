// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! `MM:SS` duration text.

use crate::error::DurationError;

/// Convert `MM:SS` text to total seconds.
///
/// Both halves must be non-empty runs of ASCII digits. The seconds half
/// is not range checked, so `"01:75"` is 135 seconds.
pub fn parse_seconds(text: &str) -> Result<u32, DurationError> {
    let (minutes, seconds) = text.split_once(':').ok_or_else(|| DurationError::new(text))?;

    let minutes = parse_digits(minutes).ok_or_else(|| DurationError::new(text))?;
    let seconds = parse_digits(seconds).ok_or_else(|| DurationError::new(text))?;

    minutes
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds))
        .ok_or_else(|| DurationError::new(text))
}

fn parse_digits(part: &str) -> Option<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Render total seconds as zero-padded `MM:SS`
pub fn format_seconds(total: u32) -> String {
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seconds() {
        assert_eq!(parse_seconds("03:14"), Ok(194));
        assert_eq!(parse_seconds("03:20"), Ok(200));
        assert_eq!(parse_seconds("00:00"), Ok(0));
        assert_eq!(parse_seconds("4:42"), Ok(282));
        assert_eq!(parse_seconds("120:05"), Ok(7205));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for text in ["", "0314", "03:", ":14", "03:1a", "-3:14", "03:14:00", " 03:14"] {
            assert!(parse_seconds(text).is_err(), "{:?} should be rejected", text);
        }
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(194), "03:14");
        assert_eq!(format_seconds(5), "00:05");
        assert_eq!(format_seconds(6000), "100:00");
    }
}
