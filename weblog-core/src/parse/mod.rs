mod error;
mod line;
#[cfg(test)]
mod tests;
mod time;
mod types;

pub use error::{GrammarError, LineFormatError, TimestampDecodeError};
pub use line::{DEFAULT_PATTERN, GRAMMAR_GROUPS, LineParser};
pub use time::decode_timestamp;
pub use types::{AccessRecord, ParseFailure, ParseOutcome};
