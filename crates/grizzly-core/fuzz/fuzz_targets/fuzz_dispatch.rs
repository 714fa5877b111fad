// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fuzz target for the line dispatcher
//!
//! Any line must either match or be unrecognized; a match must render back to
//! a line that dispatches to the same event.

#![no_main]

use libfuzzer_sys::fuzz_target;

use grizzly_core::dispatch::dispatch;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        if let Some(event) = dispatch(line).into_event() {
            let rendered = event.to_string();
            assert_eq!(dispatch(&rendered).into_event(), Some(event));
        }
    }
});
