// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! grizzly: find slow and failing tests in xcodebuild output
//!
//! This binary reads an `xcodebuild test` log from stdin (or a file), and
//! reports failing and slow test cases as the log streams in.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use grizzly_core::runner::Runner;
use tracing::{debug, info};

use grizzly::config::Config;
use grizzly::report::{JsonReporter, SlowTestReporter};

fn main() -> Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    config.validate()?;
    debug!(?config, "Configuration loaded");

    let input: Box<dyn BufRead> = match config.input {
        Some(ref path) => {
            info!(path = %path.display(), "Reading log file");
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };
    let out = io::stdout().lock();

    if config.json {
        let mut reporter = JsonReporter::new(out);
        let run = Runner::new(&mut reporter).run(input);
        reporter.finish().context("Failed to write events")?;
        run.context("Failed to read log")?;
    } else {
        let mut reporter = SlowTestReporter::new(out, config.threshold, config.top);
        let run = Runner::new(&mut reporter).run(input);
        reporter.finish().context("Failed to write report")?;
        run.context("Failed to read log")?;
    }

    Ok(())
}
