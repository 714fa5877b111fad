// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Stream runner
//!
//! Reads a line source to the end, dispatches every line and forwards matched
//! events to an [`Observer`].
//!
//! # Example
//!
//! ```
//! use grizzly_core::event::CaseCompleted;
//! use grizzly_core::observer::Observer;
//! use grizzly_core::runner::Runner;
//!
//! #[derive(Default)]
//! struct Slowest(Option<CaseCompleted>);
//!
//! impl Observer for Slowest {
//!     fn on_found_case_completed(&mut self, event: CaseCompleted) {
//!         if self.0.as_ref().is_none_or(|slowest| event.elapsed > slowest.elapsed) {
//!             self.0 = Some(event);
//!         }
//!     }
//! }
//!
//! let log = "Test Case 'a' passed (0.1 seconds).\nTest Case 'b' passed (0.7 seconds).\n";
//! let mut slowest = Slowest::default();
//! Runner::new(&mut slowest).run(log.as_bytes()).unwrap();
//! assert_eq!(slowest.0.unwrap().name, "b");
//! ```

use std::io::BufRead;

use tracing::debug;

use crate::dispatch::{Dispatch, dispatch};
use crate::error::RunError;
use crate::event::LogEvent;
use crate::observer::Observer;

/// Lifecycle of a [`Runner`]; it only moves forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// `run` has not been called
    NotStarted,
    /// Lines are being read
    Running,
    /// End of input reached
    Completed,
}

/// Line counts for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Lines read from the source
    pub lines: usize,
    /// Lines that produced an event
    pub matched: usize,
    /// Lines no grammar recognized
    pub unrecognized: usize,
}

/// Feeds lines through the dispatcher and calls back into a borrowed observer
///
/// A runner performs at most one [`run`](Runner::run).
pub struct Runner<'o, O: Observer + ?Sized> {
    observer: &'o mut O,
    state: RunState,
    summary: RunSummary,
}

impl<'o, O: Observer + ?Sized> Runner<'o, O> {
    /// Create a runner reporting to `observer`
    #[must_use]
    pub fn new(observer: &'o mut O) -> Self {
        Self {
            observer,
            state: RunState::NotStarted,
            summary: RunSummary::default(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Counts accumulated so far
    #[must_use]
    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Consume `input` until end-of-stream, calling the observer as lines match
    ///
    /// Lines are split on `\n` with a trailing `\r` removed; bytes that are not
    /// valid UTF-8 are replaced rather than ending the run.
    ///
    /// # Errors
    ///
    /// Returns `RunError::AlreadyStarted` if this runner has already run (no
    /// callbacks are made), or `RunError::Io` if reading fails. A read failure
    /// still completes the run and is passed to
    /// [`Observer::on_after_parse_run_completed`].
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<RunSummary, RunError> {
        if self.state != RunState::NotStarted {
            return Err(RunError::AlreadyStarted);
        }

        self.state = RunState::Running;
        self.summary = RunSummary::default();
        debug!("Parse run started");
        self.observer.on_before_parse_run_started();

        let mut buf = Vec::new();
        let result = loop {
            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break Ok(()),
                Ok(_) => {
                    let line = String::from_utf8_lossy(trim_line_ending(&buf));
                    self.summary.lines += 1;
                    self.run_line(&line);
                }
                Err(e) => break Err(RunError::from(e)),
            }
        };

        self.state = RunState::Completed;
        debug!(
            lines = self.summary.lines,
            matched = self.summary.matched,
            unrecognized = self.summary.unrecognized,
            "Parse run completed"
        );
        self.observer.on_after_parse_run_completed(result.as_ref().err());
        result.map(|()| self.summary)
    }

    /// Dispatch a single line, making at most one observer callback
    ///
    /// Returns whether the line was recognized. Counts from calls made before
    /// `run` are discarded when the run starts.
    pub fn run_line(&mut self, line: &str) -> bool {
        match dispatch(line) {
            Dispatch::Matched { event, .. } => {
                self.summary.matched += 1;
                match event {
                    LogEvent::SuiteStarted(e) => self.observer.on_found_suite_started(e),
                    LogEvent::SuiteCompleted(e) => self.observer.on_found_suite_completed(e),
                    LogEvent::CaseStarted(e) => self.observer.on_found_case_started(e),
                    LogEvent::CaseCompleted(e) => self.observer.on_found_case_completed(e),
                }
                true
            }
            Dispatch::Unrecognized => {
                self.summary.unrecognized += 1;
                false
            }
        }
    }
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
