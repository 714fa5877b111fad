// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

use criterion::{Criterion, criterion_group, criterion_main};
use grizzly_core::dispatch::dispatch;
use grizzly_core::observer::Observer;
use grizzly_core::runner::Runner;

const SAMPLE_LOG: &str = include_str!("../tests/fixtures/xcodebuild-sample.log");

struct Discard;

impl Observer for Discard {}

fn dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for (name, line) in [
        ("suite_started", "Test Suite 'All tests' started at 2018-03-19 14:46:47.375"),
        ("suite_completed", "Test Suite 'AddressTest' passed at 2018-03-19 14:46:47.403."),
        ("case_started", "Test Case '-[ModelsTests.AddressTest testExample]' started."),
        (
            "case_completed",
            "Test Case '-[ModelsTests.AddressTest testExample]' passed (0.026 seconds).",
        ),
        ("unrecognized", "CompileSwift normal x86_64 /Users/dev/Models/Sources/Address.swift"),
    ] {
        group.bench_function(name, |b| b.iter(|| dispatch(std::hint::black_box(line))));
    }
    group.finish();
}

fn runner_benchmark(c: &mut Criterion) {
    let log = SAMPLE_LOG.repeat(100);
    c.bench_function("runner/sample_log_x100", |b| {
        b.iter(|| {
            let mut observer = Discard;
            Runner::new(&mut observer)
                .run(std::hint::black_box(log.as_bytes()))
                .map(|summary| summary.matched)
        })
    });
}

criterion_group!(benches, dispatch_benchmark, runner_benchmark);
criterion_main!(benches);
