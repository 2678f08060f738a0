use crate::parse::ParseFailure;
use serde::Serialize;
use std::fmt;

/// Line accounting for one run.
///
/// `parsed + failed == total` always holds. `failed_lines` is a bounded
/// prefix of the failures, empty when nothing failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseSummary {
    pub total: usize,
    pub parsed: usize,
    pub failed: usize,
    pub failed_lines: Vec<ParseFailure>,
}

impl ParseSummary {
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

impl fmt::Display for ParseSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Read {} lines, successfully parsed {} lines, failed to parse {} lines",
            self.total, self.parsed, self.failed
        )
    }
}
