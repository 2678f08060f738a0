//! Apache timestamp decoding.
//!
//! The bracketed field of a common-log line is always laid out as
//! `DD/Mon/YYYY:HH:MM:SS ±ZZZZ`, so decoding slices fixed offsets instead of
//! running a general date parser. The offset is checked for shape and then
//! dropped: hourly aggregations work on the hour exactly as it was logged.

use crate::parse::error::TimestampDecodeError;
use chrono::{NaiveDate, NaiveDateTime};

const LAYOUT_LEN: usize = 26;

const SEPARATORS: &[(usize, u8)] = &[
    (2, b'/'),
    (6, b'/'),
    (11, b':'),
    (14, b':'),
    (17, b':'),
    (20, b' '),
];

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Decode `DD/Mon/YYYY:HH:MM:SS ±ZZZZ` into a naive calendar timestamp.
pub fn decode_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampDecodeError> {
    let bytes = raw.as_bytes();
    if bytes.len() != LAYOUT_LEN {
        return Err(TimestampDecodeError::Length {
            expected: LAYOUT_LEN,
            found: bytes.len(),
        });
    }

    for &(offset, expected) in SEPARATORS {
        if bytes[offset] != expected {
            return Err(TimestampDecodeError::Separator {
                offset,
                expected: expected as char,
            });
        }
    }

    let day = digits(bytes, 0..2, "day")?;
    let month = month(bytes)?;
    let year = digits(bytes, 7..11, "year")?;
    let hour = digits(bytes, 12..14, "hour")?;
    let minute = digits(bytes, 15..17, "minute")?;
    let second = digits(bytes, 18..20, "second")?;
    check_offset(bytes)?;

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, second))
        .ok_or(TimestampDecodeError::OutOfRange)
}

fn digits(
    bytes: &[u8],
    range: std::ops::Range<usize>,
    field: &'static str,
) -> Result<u32, TimestampDecodeError> {
    let slot = &bytes[range];
    if !slot.iter().all(u8::is_ascii_digit) {
        return Err(TimestampDecodeError::Digits {
            field,
            raw: String::from_utf8_lossy(slot).into_owned(),
        });
    }

    Ok(slot
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
}

fn month(bytes: &[u8]) -> Result<u32, TimestampDecodeError> {
    let slot = &bytes[3..6];
    MONTHS
        .iter()
        .position(|m| m.as_bytes() == slot)
        .map(|i| i as u32 + 1)
        .ok_or_else(|| TimestampDecodeError::Month {
            month: String::from_utf8_lossy(slot).into_owned(),
        })
}

fn check_offset(bytes: &[u8]) -> Result<(), TimestampDecodeError> {
    let slot = &bytes[21..26];
    let signed = matches!(slot[0], b'+' | b'-');
    if signed && slot[1..].iter().all(u8::is_ascii_digit) {
        Ok(())
    } else {
        Err(TimestampDecodeError::Offset {
            raw: String::from_utf8_lossy(slot).into_owned(),
        })
    }
}
