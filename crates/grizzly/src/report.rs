// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Reporters that turn runner events into output
//!
//! Both reporters write to any [`Write`]. Observer callbacks cannot fail, so
//! the first write error is kept and returned by `finish`; nothing more is
//! written after it.

use std::fmt;
use std::io::{self, Write};

use grizzly_core::prelude::*;
use tracing::{info, warn};

/// Keeps the first write error of a reporter
struct Sink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> Sink<W> {
    fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_line(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_none() {
            if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
                warn!(error = %e, "Failed to write report");
                self.error = Some(e);
            }
        }
    }

    fn finish(mut self) -> io::Result<W> {
        if let Some(e) = self.error {
            return Err(e);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

// ============================================================================
// Slow test reporter
// ============================================================================

/// Reports failing and slow test cases, then the slowest cases of the run
///
/// While the log streams in:
///
/// ```text
/// -[T testB] failed!
/// -[T testC] passed and was slow: 1.204
/// ```
///
/// and once it ends:
///
/// ```text
/// top 20 slowest tests:
/// -[T testC] [passed], elapsed: 1.204
/// ```
pub struct SlowTestReporter<W: Write> {
    sink: Sink<W>,
    threshold: f64,
    top: usize,
    cases: Vec<CaseCompleted>,
}

impl<W: Write> SlowTestReporter<W> {
    /// Create a reporter flagging cases slower than `threshold` seconds and
    /// listing the `top` slowest at the end
    #[must_use]
    pub fn new(out: W, threshold: f64, top: usize) -> Self {
        Self {
            sink: Sink::new(out),
            threshold,
            top,
            cases: Vec::new(),
        }
    }

    /// Completed cases seen so far, in input order
    #[must_use]
    pub fn cases(&self) -> &[CaseCompleted] {
        &self.cases
    }

    /// The `top` slowest cases, slowest first; ties keep input order
    #[must_use]
    pub fn slowest(&self) -> Vec<&CaseCompleted> {
        let mut sorted: Vec<&CaseCompleted> = self.cases.iter().collect();
        sorted.sort_by(|a, b| b.elapsed.total_cmp(&a.elapsed));
        sorted.truncate(self.top);
        sorted
    }

    /// Flush and return the writer
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing the report.
    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }
}

impl<W: Write> Observer for SlowTestReporter<W> {
    fn on_before_parse_run_started(&mut self) {
        self.cases.clear();
    }

    fn on_found_case_completed(&mut self, event: CaseCompleted) {
        if !event.passed {
            self.sink.write_line(format_args!("{} failed!", event.name));
        }
        if event.elapsed > self.threshold {
            self.sink.write_line(format_args!(
                "{} {} and was slow: {}",
                event.name,
                event.outcome(),
                event.elapsed
            ));
        }
        self.cases.push(event);
    }

    fn on_after_parse_run_completed(&mut self, error: Option<&RunError>) {
        if let Some(e) = error {
            warn!(error = %e, "Log ended early; reporting what was read");
        }

        let lines: Vec<String> = self
            .slowest()
            .into_iter()
            .map(|case| {
                format!(
                    "{} [{}], elapsed: {}",
                    case.name,
                    case.outcome(),
                    case.elapsed
                )
            })
            .collect();

        self.sink
            .write_line(format_args!("top {} slowest tests:", self.top));
        for line in lines {
            self.sink.write_line(format_args!("{line}"));
        }

        let failed = self.cases.iter().filter(|c| !c.passed).count();
        info!(cases = self.cases.len(), failed, "Report complete");
    }
}

// ============================================================================
// JSON lines reporter
// ============================================================================

/// Writes every event as one JSON object per line
///
/// ```text
/// {"event":"case_completed","name":"-[T testX]","passed":true,"elapsed":0.026}
/// ```
pub struct JsonReporter<W: Write> {
    sink: Sink<W>,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `out`
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            sink: Sink::new(out),
        }
    }

    /// Flush and return the writer
    ///
    /// # Errors
    ///
    /// Returns the first error hit while writing events.
    pub fn finish(self) -> io::Result<W> {
        self.sink.finish()
    }

    fn emit(&mut self, event: LogEvent) {
        match serde_json::to_string(&event) {
            Ok(json) => self.sink.write_line(format_args!("{json}")),
            Err(e) => warn!(error = %e, name = event.name(), "Failed to serialize event"),
        }
    }
}

impl<W: Write> Observer for JsonReporter<W> {
    fn on_found_suite_started(&mut self, event: SuiteStarted) {
        self.emit(LogEvent::SuiteStarted(event));
    }

    fn on_found_suite_completed(&mut self, event: SuiteCompleted) {
        self.emit(LogEvent::SuiteCompleted(event));
    }

    fn on_found_case_started(&mut self, event: CaseStarted) {
        self.emit(LogEvent::CaseStarted(event));
    }

    fn on_found_case_completed(&mut self, event: CaseCompleted) {
        self.emit(LogEvent::CaseCompleted(event));
    }

    fn on_after_parse_run_completed(&mut self, error: Option<&RunError>) {
        if let Some(e) = error {
            warn!(error = %e, "Log ended early");
        }
    }
}
