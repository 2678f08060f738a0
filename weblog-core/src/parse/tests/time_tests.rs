use crate::parse::{TimestampDecodeError, decode_timestamp};
use chrono::{NaiveDate, NaiveDateTime};
use pretty_assertions::assert_eq;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn decodes_apache_layout() {
    // Act
    let ts = decode_timestamp("01/Aug/1995:00:00:07 -0400").unwrap();

    // Assert
    assert_eq!(ts, at(1995, 8, 1, 0, 0, 7));
}

#[test]
fn keeps_logged_hour_regardless_of_offset() {
    // Act
    let west = decode_timestamp("03/Jul/1995:17:59:59 -0400").unwrap();
    let east = decode_timestamp("03/Jul/1995:17:59:59 +1000").unwrap();

    // Assert
    assert_eq!(west, east);
    assert_eq!(west, at(1995, 7, 3, 17, 59, 59));
}

#[test]
fn decodes_every_month_abbreviation() {
    let months = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    for (i, month) in months.iter().enumerate() {
        let raw = format!("10/{month}/2001:12:30:00 +0000");
        let ts = decode_timestamp(&raw).unwrap();
        assert_eq!(ts, at(2001, i as u32 + 1, 10, 12, 30, 0), "month {month}");
    }
}

#[test]
fn rejects_unknown_month() {
    // Act
    let err = decode_timestamp("01/Aug/1995:00:00:07 -0400".replace("Aug", "aug").as_str());

    // Assert
    assert_eq!(
        err,
        Err(TimestampDecodeError::Month {
            month: "aug".to_string()
        })
    );
}

#[test]
fn rejects_non_digit_in_numeric_slot() {
    // Act
    let err = decode_timestamp("01/Aug/19x5:00:00:07 -0400");

    // Assert
    assert_eq!(
        err,
        Err(TimestampDecodeError::Digits {
            field: "year",
            raw: "19x5".to_string()
        })
    );
}

#[test]
fn rejects_wrong_length() {
    // Act
    let err = decode_timestamp("1/Aug/1995:00:00:07 -0400");

    // Assert
    assert_eq!(
        err,
        Err(TimestampDecodeError::Length {
            expected: 26,
            found: 25
        })
    );
}

#[test]
fn rejects_misplaced_separator() {
    // Act
    let err = decode_timestamp("01/Aug/1995 00:00:07 -0400");

    // Assert
    assert_eq!(
        err,
        Err(TimestampDecodeError::Separator {
            offset: 11,
            expected: ':'
        })
    );
}

#[test]
fn rejects_malformed_offset() {
    // Act
    let err = decode_timestamp("01/Aug/1995:00:00:07 *0400");

    // Assert
    assert_eq!(
        err,
        Err(TimestampDecodeError::Offset {
            raw: "*0400".to_string()
        })
    );
}

#[test]
fn rejects_impossible_calendar_values() {
    assert_eq!(
        decode_timestamp("31/Feb/1995:00:00:07 -0400"),
        Err(TimestampDecodeError::OutOfRange)
    );
    assert_eq!(
        decode_timestamp("01/Feb/1995:24:00:07 -0400"),
        Err(TimestampDecodeError::OutOfRange)
    );
}
