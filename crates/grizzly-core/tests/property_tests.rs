// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for grizzly-core
//!
//! These tests use proptest to check that every event survives a trip through
//! its log-line rendering, and that arbitrary input never breaks the parsers.

use chrono::{NaiveDate, NaiveDateTime};
use proptest::prelude::*;

use grizzly_core::dispatch::{Dispatch, dispatch};
use grizzly_core::event::{CaseCompleted, CaseStarted, LogEvent, SuiteCompleted, SuiteStarted};
use grizzly_core::grammar::{
    parse_case_completed, parse_case_started, parse_suite_completed, parse_suite_started,
};

// ============================================================================
// Strategies
// ============================================================================

/// Names never contain an apostrophe or a line break
fn arbitrary_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("All tests".to_string()),
        Just("-[ModelsTests.AddressTest testExample]".to_string()),
        Just("Test Case".to_string()),
        Just("passed".to_string()),
        Just("日本語テスト".to_string()),
        "[^'\r\n]{1,60}".prop_map(|s| s),
    ]
}

fn arbitrary_timestamp() -> impl Strategy<Value = NaiveDateTime> {
    (
        1970i32..=2100,
        1u32..=12,
        1u32..=28,
        0u32..24,
        0u32..60,
        0u32..60,
        0u32..1000,
    )
        .prop_map(|(y, mo, d, h, mi, s, ms)| {
            NaiveDate::from_ymd_opt(y, mo, d)
                .and_then(|date| date.and_hms_milli_opt(h, mi, s, ms))
                .expect("generated a valid date")
        })
}

fn arbitrary_elapsed() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), Just(0.026), Just(1.0), 0.0f64..10_000.0]
}

fn arbitrary_event() -> impl Strategy<Value = LogEvent> {
    prop_oneof![
        (arbitrary_name(), arbitrary_timestamp())
            .prop_map(|(name, started_at)| LogEvent::SuiteStarted(SuiteStarted { name, started_at })),
        (arbitrary_name(), any::<bool>(), arbitrary_timestamp()).prop_map(
            |(name, passed, ended_at)| LogEvent::SuiteCompleted(SuiteCompleted {
                name,
                passed,
                ended_at
            })
        ),
        arbitrary_name().prop_map(|name| LogEvent::CaseStarted(CaseStarted { name })),
        (arbitrary_name(), any::<bool>(), arbitrary_elapsed()).prop_map(
            |(name, passed, elapsed)| LogEvent::CaseCompleted(CaseCompleted {
                name,
                passed,
                elapsed
            })
        ),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn suite_started_round_trips(name in arbitrary_name(), started_at in arbitrary_timestamp()) {
        let event = SuiteStarted { name, started_at };
        let line = event.to_string();
        let (parsed, rest) = parse_suite_started(&line).expect("Should parse");
        prop_assert_eq!(parsed, event);
        prop_assert_eq!(rest, "");
    }

    #[test]
    fn suite_completed_round_trips(
        name in arbitrary_name(),
        passed in any::<bool>(),
        ended_at in arbitrary_timestamp()
    ) {
        let event = SuiteCompleted { name, passed, ended_at };
        let line = event.to_string();
        let (parsed, rest) = parse_suite_completed(&line).expect("Should parse");
        prop_assert_eq!(parsed, event);
        prop_assert_eq!(rest, ".");
    }

    #[test]
    fn case_started_round_trips(name in arbitrary_name()) {
        let event = CaseStarted { name };
        let line = event.to_string();
        let (parsed, rest) = parse_case_started(&line).expect("Should parse");
        prop_assert_eq!(parsed, event);
        prop_assert_eq!(rest, ".");
    }

    #[test]
    fn case_completed_round_trips(
        name in arbitrary_name(),
        passed in any::<bool>(),
        elapsed in arbitrary_elapsed()
    ) {
        let event = CaseCompleted { name, passed, elapsed };
        let line = event.to_string();
        let (parsed, rest) = parse_case_completed(&line).expect("Should parse");
        prop_assert_eq!(parsed, event);
        prop_assert_eq!(rest, ".");
    }

    #[test]
    fn dispatch_picks_the_rendering_grammar(event in arbitrary_event()) {
        let line = event.to_string();
        match dispatch(&line) {
            Dispatch::Matched { event: parsed, .. } => prop_assert_eq!(parsed, event),
            Dispatch::Unrecognized => prop_assert!(false, "did not match {}", line),
        }
    }

    #[test]
    fn dispatch_is_idempotent(line in ".{0,200}") {
        prop_assert_eq!(dispatch(&line), dispatch(&line));
    }

    #[test]
    fn elapsed_is_never_negative(line in "Test Case '[a-z]{1,8}' (passed|failed) \\(-?[0-9.]{1,8} seconds\\)\\.") {
        if let Dispatch::Matched { event: LogEvent::CaseCompleted(case), .. } = dispatch(&line) {
            prop_assert!(case.elapsed >= 0.0);
        }
    }

    #[test]
    fn unterminated_name_never_matches(
        prefix in prop_oneof![Just("Test Suite "), Just("Test Case ")],
        name in "[^'\r\n]{0,40}"
    ) {
        let line = format!("{prefix}'{name}");
        prop_assert_eq!(dispatch(&line), Dispatch::Unrecognized);
    }
}
