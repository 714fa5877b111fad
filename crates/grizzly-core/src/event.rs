// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Lifecycle events recognized in a test log
//!
//! Each event renders back to the canonical log line it is parsed from, e.g.
//!
//! ```
//! use grizzly_core::event::CaseStarted;
//!
//! let started = CaseStarted { name: "-[T testX]".to_string() };
//! assert_eq!(started.to_string(), "Test Case '-[T testX]' started.");
//! ```

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format of the timestamps printed by `xcodebuild`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `Test Suite '<name>' started at <timestamp>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteStarted {
    /// Suite name
    pub name: String,
    /// When the suite started (no timezone)
    pub started_at: NaiveDateTime,
}

/// `Test Suite '<name>' passed|failed at <timestamp>.`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteCompleted {
    /// Suite name
    pub name: String,
    /// Whether every test in the suite passed
    pub passed: bool,
    /// When the suite finished (no timezone)
    pub ended_at: NaiveDateTime,
}

/// `Test Case '<name>' started.`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStarted {
    /// Test case name, e.g. `-[ModelsTests.AddressTest testExample]`
    pub name: String,
}

/// `Test Case '<name>' passed|failed (<elapsed> seconds).`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseCompleted {
    /// Test case name
    pub name: String,
    /// Whether the test case passed
    pub passed: bool,
    /// Wall time in seconds, never negative
    pub elapsed: f64,
}

impl CaseCompleted {
    /// `"passed"` or `"failed"`
    #[must_use]
    pub fn outcome(&self) -> &'static str {
        outcome(self.passed)
    }
}

/// Any event the dispatcher can produce
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum LogEvent {
    /// A suite started
    SuiteStarted(SuiteStarted),
    /// A suite finished
    SuiteCompleted(SuiteCompleted),
    /// A test case started
    CaseStarted(CaseStarted),
    /// A test case finished
    CaseCompleted(CaseCompleted),
}

impl LogEvent {
    /// Name of the suite or test case the event refers to
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::SuiteStarted(e) => &e.name,
            Self::SuiteCompleted(e) => &e.name,
            Self::CaseStarted(e) => &e.name,
            Self::CaseCompleted(e) => &e.name,
        }
    }
}

fn outcome(passed: bool) -> &'static str {
    if passed { "passed" } else { "failed" }
}

impl fmt::Display for SuiteStarted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test Suite '{}' started at {}",
            self.name,
            self.started_at.format(TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for SuiteCompleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test Suite '{}' {} at {}.",
            self.name,
            outcome(self.passed),
            self.ended_at.format(TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for CaseStarted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Test Case '{}' started.", self.name)
    }
}

impl fmt::Display for CaseCompleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Test Case '{}' {} ({} seconds).",
            self.name,
            self.outcome(),
            self.elapsed
        )
    }
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SuiteStarted(e) => e.fmt(f),
            Self::SuiteCompleted(e) => e.fmt(f),
            Self::CaseStarted(e) => e.fmt(f),
            Self::CaseCompleted(e) => e.fmt(f),
        }
    }
}
