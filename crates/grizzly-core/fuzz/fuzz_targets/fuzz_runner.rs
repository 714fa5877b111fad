// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the stream runner
//!
//! This feeds raw bytes, including invalid UTF-8, through a full run.

#![no_main]

use libfuzzer_sys::fuzz_target;

use grizzly_core::observer::Observer;
use grizzly_core::runner::Runner;

struct Discard;

impl Observer for Discard {}

fuzz_target!(|data: &[u8]| {
    let mut observer = Discard;
    let summary = Runner::new(&mut observer).run(data).expect("in-memory reads never fail");
    assert_eq!(summary.lines, summary.matched + summary.unrecognized);
});
