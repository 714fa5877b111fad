// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line dispatcher
//!
//! Tries the grammars in a fixed order and tags the first match. A line that
//! no grammar accepts is [`Dispatch::Unrecognized`]; that is an ordinary
//! outcome, not an error.

use nom::branch::alt;
use nom::combinator::map;
use tracing::{debug, trace};

use crate::event::LogEvent;
use crate::fields::{PResult, parse};
use crate::grammar::{case_completed, case_started, suite_completed, suite_started};

/// Outcome of dispatching one line
#[derive(Debug, Clone, PartialEq)]
pub enum Dispatch<'a> {
    /// A grammar matched a prefix of the line
    Matched {
        /// The parsed event
        event: LogEvent,
        /// Unconsumed end of the line
        remainder: &'a str,
    },
    /// No grammar matched
    Unrecognized,
}

impl Dispatch<'_> {
    /// The matched event, if any
    #[must_use]
    pub fn into_event(self) -> Option<LogEvent> {
        match self {
            Self::Matched { event, .. } => Some(event),
            Self::Unrecognized => None,
        }
    }
}

/// Ordered choice over the four line grammars
///
/// Suite started, suite completed, case started, case completed: the first
/// grammar that matches wins.
pub fn log_event(input: &str) -> PResult<'_, LogEvent> {
    alt((
        map(suite_started, LogEvent::SuiteStarted),
        map(suite_completed, LogEvent::SuiteCompleted),
        map(case_started, LogEvent::CaseStarted),
        map(case_completed, LogEvent::CaseCompleted),
    ))(input)
}

/// Classify a single line
#[must_use]
pub fn dispatch(line: &str) -> Dispatch<'_> {
    match parse(log_event, line) {
        Ok((event, remainder)) => Dispatch::Matched { event, remainder },
        Err(err) => {
            if err.is_invalid_timestamp() {
                debug!(%err, line, "Rejected line with invalid timestamp");
            } else {
                trace!(line, "Unrecognized line");
            }
            Dispatch::Unrecognized
        }
    }
}
