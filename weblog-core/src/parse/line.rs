use crate::parse::error::{GrammarError, LineFormatError};
use crate::parse::time::decode_timestamp;
use crate::parse::types::{AccessRecord, ParseFailure, ParseOutcome};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::sync::Arc;

/// Default common-log grammar.
///
/// Groups, in order: host, identity, user id, timestamp, method, endpoint,
/// protocol, response code, content size. Inside the quoted request only the
/// method is mandatory; the endpoint is the next token when present, anything
/// between it and the last token is skipped, and the last token (if any) is
/// the protocol. Text after the size field is ignored.
pub const DEFAULT_PATTERN: &str = r#"^(\S+) (\S+) (\S+) \[([\w:/]+\s[+\-]\d{4})\] "(\S+)(?:\s+(\S+))?(?:\s+.*?)??(?:\s+(\S+))?\s*" ([0-9]{3}) (\S+)"#;

/// Number of capture groups a grammar must expose (group 0 excluded).
pub const GRAMMAR_GROUPS: usize = 9;

static DEFAULT_GRAMMAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_PATTERN).expect("default access-log grammar compiles"));

/// Turns raw lines into [`ParseOutcome`]s.
///
/// Stateless apart from the compiled grammar, so a single parser can be
/// shared by every worker.
#[derive(Debug, Clone)]
pub struct LineParser {
    grammar: Regex,
}

impl Default for LineParser {
    fn default() -> Self {
        Self {
            grammar: DEFAULT_GRAMMAR.clone(),
        }
    }
}

impl LineParser {
    /// Build a parser from a custom grammar.
    ///
    /// The pattern must expose the nine groups of [`DEFAULT_PATTERN`] in the
    /// same order. Groups 6 and 7 (endpoint, protocol) may be optional.
    pub fn with_pattern(pattern: &str) -> Result<Self, GrammarError> {
        let grammar = Regex::new(pattern)?;
        let found = grammar.captures_len() - 1;
        if found != GRAMMAR_GROUPS {
            return Err(GrammarError::Groups {
                expected: GRAMMAR_GROUPS,
                found,
            });
        }
        Ok(Self { grammar })
    }

    pub fn pattern(&self) -> &str {
        self.grammar.as_str()
    }

    pub fn parse(&self, line: &str) -> ParseOutcome {
        match self.parse_record(line) {
            Ok(record) => ParseOutcome::Parsed(Arc::new(record)),
            Err(reason) => ParseOutcome::Failed(ParseFailure {
                line: line.to_string(),
                reason,
            }),
        }
    }

    pub fn parse_record(&self, line: &str) -> Result<AccessRecord, LineFormatError> {
        let caps = self
            .grammar
            .captures(line)
            .ok_or(LineFormatError::NoMatch)?;

        let timestamp = decode_timestamp(group(&caps, 4))?;
        let response_code = parse_response_code(group(&caps, 8))?;
        let content_size = parse_content_size(group(&caps, 9))?;

        Ok(AccessRecord {
            host: group(&caps, 1).to_string(),
            client_identity: group(&caps, 2).to_string(),
            user_id: group(&caps, 3).to_string(),
            timestamp,
            method: group(&caps, 5).to_string(),
            endpoint: group(&caps, 6).to_string(),
            protocol: group(&caps, 7).to_string(),
            response_code,
            content_size,
        })
    }
}

fn group<'h>(caps: &Captures<'h>, index: usize) -> &'h str {
    caps.get(index).map_or("", |m| m.as_str())
}

fn parse_response_code(raw: &str) -> Result<u16, LineFormatError> {
    let valid = raw.len() == 3 && raw.bytes().all(|b| b.is_ascii_digit());
    valid
        .then(|| raw.parse().ok())
        .flatten()
        .ok_or_else(|| LineFormatError::ResponseCode {
            raw: raw.to_string(),
        })
}

fn parse_content_size(raw: &str) -> Result<u64, LineFormatError> {
    if raw == "-" {
        return Ok(0);
    }

    let valid = !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit());
    valid
        .then(|| raw.parse().ok())
        .flatten()
        .ok_or_else(|| LineFormatError::ContentSize {
            raw: raw.to_string(),
        })
}
