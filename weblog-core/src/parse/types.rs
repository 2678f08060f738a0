use crate::parse::error::LineFormatError;
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;
use std::sync::Arc;

/// One well-formed access-log line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessRecord {
    pub host: String,
    pub client_identity: String,
    pub user_id: String,
    /// Wall-clock time as written in the log; the offset is not applied.
    pub timestamp: NaiveDateTime,
    pub method: String,
    pub endpoint: String,
    pub protocol: String,
    pub response_code: u16,
    pub content_size: u64,
}

impl AccessRecord {
    /// Literal hour digits of the timestamp.
    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }
}

/// A rejected line, kept verbatim for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub line: String,
    #[serde(serialize_with = "serialize_reason")]
    pub reason: LineFormatError,
}

fn serialize_reason<S: serde::Serializer>(
    reason: &LineFormatError,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(reason)
}

/// Exactly one of these is produced per input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(Arc<AccessRecord>),
    Failed(ParseFailure),
}

impl ParseOutcome {
    pub fn is_parsed(&self) -> bool {
        matches!(self, ParseOutcome::Parsed(_))
    }

    pub fn record(&self) -> Option<&Arc<AccessRecord>> {
        match self {
            ParseOutcome::Parsed(record) => Some(record),
            ParseOutcome::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ParseFailure> {
        match self {
            ParseOutcome::Parsed(_) => None,
            ParseOutcome::Failed(failure) => Some(failure),
        }
    }
}
