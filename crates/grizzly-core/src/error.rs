// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for grizzly-core

use nom::error::ErrorKind;
use thiserror::Error;

/// Why a field parser or line grammar rejected its input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// A sub-parser did not match at the current position
    #[error("grammar mismatch ({0:?})")]
    GrammarMismatch(ErrorKind),

    /// The text had the timestamp shape but is not a real calendar date/time
    #[error("cannot construct a timestamp from {text:?}")]
    InvalidTimestamp {
        /// The matched `yyyy-MM-dd HH:mm:ss.SSS` text
        text: String,
    },
}

/// Failure of a field parser or grammar, pointing into the rejected input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {input:?}")]
pub struct ParseError<'a> {
    /// Input suffix at which the failure happened
    pub input: &'a str,
    /// What went wrong
    pub kind: ParseErrorKind,
}

impl<'a> ParseError<'a> {
    /// Create a mismatch error
    #[must_use]
    pub fn mismatch(input: &'a str, kind: ErrorKind) -> Self {
        Self {
            input,
            kind: ParseErrorKind::GrammarMismatch(kind),
        }
    }

    /// Create a timestamp construction error for the matched `text`
    #[must_use]
    pub fn invalid_timestamp(input: &'a str, text: &str) -> Self {
        Self {
            input,
            kind: ParseErrorKind::InvalidTimestamp {
                text: text.to_string(),
            },
        }
    }

    /// Whether this is a timestamp construction error rather than a mismatch
    #[must_use]
    pub fn is_invalid_timestamp(&self) -> bool {
        matches!(self.kind, ParseErrorKind::InvalidTimestamp { .. })
    }
}

impl<'a> nom::error::ParseError<&'a str> for ParseError<'a> {
    fn from_error_kind(input: &'a str, kind: ErrorKind) -> Self {
        Self::mismatch(input, kind)
    }

    fn append(_input: &'a str, _kind: ErrorKind, other: Self) -> Self {
        other
    }

    // A timestamp error outlives later plain mismatches in an `alt`.
    fn or(self, other: Self) -> Self {
        if self.is_invalid_timestamp() && !other.is_invalid_timestamp() {
            self
        } else {
            other
        }
    }
}

/// Stream-level errors reported by the runner
#[derive(Debug, Error)]
pub enum RunError {
    /// Reading from the line source failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// `run` was called on a runner that has already run
    #[error("Runner has already been started")]
    AlreadyStarted,
}
