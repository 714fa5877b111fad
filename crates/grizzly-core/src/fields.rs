// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Field parsers for the primitive tokens of a log line
//!
//! Every parser here is a pure `nom` parser over `&str`: it takes the input,
//! returns the remaining input together with the parsed value, and keeps no
//! state between calls. Use [`parse`] to run one as a plain function.
//!
//! ```
//! use grizzly_core::fields::{elapsed_seconds, parse};
//!
//! let (elapsed, rest) = parse(elapsed_seconds, "(0.026 seconds).").unwrap();
//! assert_eq!(elapsed, 0.026);
//! assert_eq!(rest, ".");
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_while_m_n};
use nom::character::complete::{char, digit1, multispace0};
use nom::combinator::{map, map_opt, opt, recognize, value};
use nom::error::ErrorKind;
use nom::sequence::{delimited, pair, terminated, tuple};

use crate::error::ParseError;

/// Result type of every parser in this crate
pub type PResult<'a, O> = nom::IResult<&'a str, O, ParseError<'a>>;

/// Run `parser` against `input`, returning the value and the unconsumed remainder
///
/// # Errors
///
/// Returns the [`ParseError`] of the first sub-parser that could not match.
pub fn parse<'a, O>(
    mut parser: impl FnMut(&'a str) -> PResult<'a, O>,
    input: &'a str,
) -> Result<(O, &'a str), ParseError<'a>> {
    match parser(input) {
        Ok((rest, value)) => Ok((value, rest)),
        Err(nom::Err::Error(e) | nom::Err::Failure(e)) => Err(e),
        // complete parsers never ask for more input
        Err(nom::Err::Incomplete(_)) => Err(ParseError::mismatch(input, ErrorKind::Eof)),
    }
}

/// Literal token, matched case-sensitively, followed by any whitespace
pub fn keyword<'a>(word: &'static str) -> impl FnMut(&'a str) -> PResult<'a, &'a str> {
    terminated(tag(word), multispace0)
}

/// `'<name>'` followed by any whitespace
///
/// The name is everything up to the next apostrophe; there is no escaping.
pub fn quoted_name(input: &str) -> PResult<'_, &str> {
    terminated(
        delimited(char('\''), take_till(|c: char| c == '\''), char('\'')),
        multispace0,
    )(input)
}

/// `passed` as `true` or `failed` as `false`, followed by any whitespace
pub fn passed_flag(input: &str) -> PResult<'_, bool> {
    alt((
        value(true, keyword("passed")),
        value(false, keyword("failed")),
    ))(input)
}

/// Digits with an optional fractional part; no sign, no exponent
///
/// Values too large to be finite are rejected.
fn unsigned_decimal(input: &str) -> PResult<'_, f64> {
    map_opt(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| s.parse::<f64>().ok().filter(|v| v.is_finite()),
    )(input)
}

/// `(<decimal> seconds)`
pub fn elapsed_seconds(input: &str) -> PResult<'_, f64> {
    delimited(
        char('('),
        terminated(
            terminated(unsigned_decimal, multispace0),
            keyword("seconds"),
        ),
        char(')'),
    )(input)
}

fn digits<'a>(count: usize) -> impl FnMut(&'a str) -> PResult<'a, u32> {
    map(
        take_while_m_n(count, count, |c: char| c.is_ascii_digit()),
        |s: &str| s.bytes().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')),
    )
}

/// `yyyy-MM-dd HH:mm:ss.SSS` as a naive date/time
///
/// Input with the right shape but impossible values (month 13, Feb 30, ...)
/// fails with [`ParseErrorKind::InvalidTimestamp`](crate::error::ParseErrorKind::InvalidTimestamp)
/// instead of a mismatch.
pub fn timestamp(input: &str) -> PResult<'_, NaiveDateTime> {
    let (rest, (year, _, month, _, day, _, hour, _, minute, _, second, _, millis)) =
        tuple((
            digits(4),
            char('-'),
            digits(2),
            char('-'),
            digits(2),
            char(' '),
            digits(2),
            char(':'),
            digits(2),
            char(':'),
            digits(2),
            char('.'),
            digits(3),
        ))(input)?;

    let matched = &input[..input.len() - rest.len()];
    NaiveDate::from_ymd_opt(year as i32, month, day)
        .and_then(|date| date.and_hms_milli_opt(hour, minute, second, millis))
        .map(|ts| (rest, ts))
        .ok_or_else(|| nom::Err::Error(ParseError::invalid_timestamp(input, matched)))
}
