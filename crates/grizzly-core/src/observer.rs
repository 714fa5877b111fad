// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Observer contract for the stream runner

use crate::error::RunError;
use crate::event::{CaseCompleted, CaseStarted, SuiteCompleted, SuiteStarted};

/// Receives events from a [`Runner`](crate::runner::Runner) as they are parsed
///
/// Callbacks run synchronously on the runner's thread. Per run the order is:
/// [`on_before_parse_run_started`](Observer::on_before_parse_run_started) once,
/// then one `on_found_*` call per recognized line in input order, then
/// [`on_after_parse_run_completed`](Observer::on_after_parse_run_completed) once.
///
/// All methods default to doing nothing.
pub trait Observer {
    /// Called just before the runner reads its first line
    fn on_before_parse_run_started(&mut self) {}

    /// A "suite started" line was parsed
    fn on_found_suite_started(&mut self, _event: SuiteStarted) {}

    /// A "suite completed" line was parsed
    fn on_found_suite_completed(&mut self, _event: SuiteCompleted) {}

    /// A "case started" line was parsed
    fn on_found_case_started(&mut self, _event: CaseStarted) {}

    /// A "case completed" line was parsed
    fn on_found_case_completed(&mut self, _event: CaseCompleted) {}

    /// Called once the input is exhausted
    ///
    /// `error` is `None` when the run reached end-of-input normally, or the
    /// stream-level error that ended it.
    fn on_after_parse_run_completed(&mut self, _error: Option<&RunError>) {}
}
