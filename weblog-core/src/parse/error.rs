use thiserror::Error;

/// Why a single line was rejected.
///
/// Never fatal: the parser folds every variant into a [`ParseFailure`]
/// carrying the untouched input line.
///
/// [`ParseFailure`]: crate::parse::ParseFailure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineFormatError {
    #[error("line does not match the access-log grammar")]
    NoMatch,

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] TimestampDecodeError),

    #[error("response code '{raw}' is not a three digit number")]
    ResponseCode { raw: String },

    #[error("content size '{raw}' is neither '-' nor a decimal number")]
    ContentSize { raw: String },
}

/// Positional decoding of `DD/Mon/YYYY:HH:MM:SS ±ZZZZ` failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampDecodeError {
    #[error("expected {expected} characters, found {found}")]
    Length { expected: usize, found: usize },

    #[error("expected '{expected}' at offset {offset}")]
    Separator { offset: usize, expected: char },

    #[error("unknown month abbreviation '{month}'")]
    Month { month: String },

    #[error("non-numeric {field} '{raw}'")]
    Digits { field: &'static str, raw: String },

    #[error("malformed timezone offset '{raw}'")]
    Offset { raw: String },

    #[error("date or time out of range")]
    OutOfRange,
}

/// A user supplied grammar could not be used.
#[derive(Debug, Error)]
pub enum GrammarError {
    #[error("invalid line pattern: {0}")]
    Invalid(#[from] regex::Error),

    #[error("line pattern must define exactly {expected} capture groups, found {found}")]
    Groups { expected: usize, found: usize },
}
