// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! grizzly-core: Streaming parser for `xcodebuild` test logs
//!
//! This library crate recognizes test suite and test case lifecycle lines in
//! `xcodebuild` output and forwards them, as typed events, to an
//! [`Observer`](observer::Observer). Lines it does not recognize are skipped.
//!
//! # Example
//!
//! ```
//! use grizzly_core::dispatch::{Dispatch, dispatch};
//! use grizzly_core::event::LogEvent;
//!
//! match dispatch("Test Case '-[T testX]' passed (0.026 seconds).") {
//!     Dispatch::Matched { event: LogEvent::CaseCompleted(case), remainder } => {
//!         assert_eq!(case.elapsed, 0.026);
//!         assert_eq!(remainder, ".");
//!     }
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

#![warn(missing_docs)]

pub mod dispatch;
pub mod error;
pub mod event;
pub mod fields;
pub mod grammar;
pub mod observer;
pub mod runner;

pub use dispatch::{Dispatch, dispatch};
pub use error::{ParseError, ParseErrorKind, RunError};
pub use event::{CaseCompleted, CaseStarted, LogEvent, SuiteCompleted, SuiteStarted};
pub use observer::Observer;
pub use runner::{RunState, RunSummary, Runner};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::RunError;
    pub use crate::event::{CaseCompleted, CaseStarted, LogEvent, SuiteCompleted, SuiteStarted};
    pub use crate::observer::Observer;
    pub use crate::runner::Runner;
}
