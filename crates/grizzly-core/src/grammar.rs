// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line grammars
//!
//! One grammar per recognized log-line shape:
//!
//! ```text
//! Test Suite '<name>' started at <yyyy-MM-dd HH:mm:ss.SSS>
//! Test Suite '<name>' passed|failed at <yyyy-MM-dd HH:mm:ss.SSS>
//! Test Case '<name>' started.
//! Test Case '<name>' passed|failed (<float> seconds).
//! ```
//!
//! A grammar matches a prefix of the line; whatever follows (usually a
//! trailing period) is returned as the remainder. A failure anywhere in the
//! sequence fails the whole grammar, leaving the caller's input untouched.

use nom::combinator::map;
use nom::sequence::{preceded, terminated, tuple};

use crate::error::ParseError;
use crate::event::{CaseCompleted, CaseStarted, SuiteCompleted, SuiteStarted};
use crate::fields::{
    PResult, elapsed_seconds, keyword, parse, passed_flag, quoted_name, timestamp,
};

const TEST_SUITE: &str = "Test Suite";
const TEST_CASE: &str = "Test Case";

/// `Test Suite '<name>' started at <timestamp>`
pub fn suite_started(input: &str) -> PResult<'_, SuiteStarted> {
    map(
        preceded(
            keyword(TEST_SUITE),
            tuple((
                terminated(quoted_name, tuple((keyword("started"), keyword("at")))),
                timestamp,
            )),
        ),
        |(name, started_at)| SuiteStarted {
            name: name.to_string(),
            started_at,
        },
    )(input)
}

/// `Test Suite '<name>' passed|failed at <timestamp>`
pub fn suite_completed(input: &str) -> PResult<'_, SuiteCompleted> {
    map(
        preceded(
            keyword(TEST_SUITE),
            tuple((quoted_name, terminated(passed_flag, keyword("at")), timestamp)),
        ),
        |(name, passed, ended_at)| SuiteCompleted {
            name: name.to_string(),
            passed,
            ended_at,
        },
    )(input)
}

/// `Test Case '<name>' started`
pub fn case_started(input: &str) -> PResult<'_, CaseStarted> {
    map(
        preceded(
            keyword(TEST_CASE),
            terminated(quoted_name, keyword("started")),
        ),
        |name| CaseStarted {
            name: name.to_string(),
        },
    )(input)
}

/// `Test Case '<name>' passed|failed (<elapsed> seconds)`
pub fn case_completed(input: &str) -> PResult<'_, CaseCompleted> {
    map(
        preceded(
            keyword(TEST_CASE),
            tuple((quoted_name, passed_flag, elapsed_seconds)),
        ),
        |(name, passed, elapsed)| CaseCompleted {
            name: name.to_string(),
            passed,
            elapsed,
        },
    )(input)
}

/// Parse a "suite started" line into the event and the unconsumed remainder
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not have this shape.
pub fn parse_suite_started(line: &str) -> Result<(SuiteStarted, &str), ParseError<'_>> {
    parse(suite_started, line)
}

/// Parse a "suite completed" line into the event and the unconsumed remainder
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not have this shape.
pub fn parse_suite_completed(line: &str) -> Result<(SuiteCompleted, &str), ParseError<'_>> {
    parse(suite_completed, line)
}

/// Parse a "case started" line into the event and the unconsumed remainder
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not have this shape.
pub fn parse_case_started(line: &str) -> Result<(CaseStarted, &str), ParseError<'_>> {
    parse(case_started, line)
}

/// Parse a "case completed" line into the event and the unconsumed remainder
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not have this shape.
pub fn parse_case_completed(line: &str) -> Result<(CaseCompleted, &str), ParseError<'_>> {
    parse(case_completed, line)
}
