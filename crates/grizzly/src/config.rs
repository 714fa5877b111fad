//! Configuration for the grizzly command
//!
//! This module provides the command-line options, their environment
//! variable fallbacks, and validation.

use std::path::PathBuf;

use clap::Parser;

/// Default slow-test cutoff in seconds
pub const DEFAULT_THRESHOLD_SECS: f64 = 0.5;

/// Default number of entries in the slowest-tests table
pub const DEFAULT_TOP: usize = 20;

/// Grizzly - find slow and failing tests in xcodebuild output
#[derive(Parser, Debug, Clone)]
#[command(name = "grizzly")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Read the log from this file instead of stdin
    ///
    /// Example:
    ///   xcodebuild test -scheme Models | grizzly
    #[arg(short, long, env = "GRIZZLY_INPUT")]
    pub input: Option<PathBuf>,

    /// Emit every recognized event as a JSON object per line
    #[arg(long, env = "GRIZZLY_JSON", default_value = "false")]
    pub json: bool,

    /// Test cases slower than this many seconds are reported as slow
    #[arg(short, long, env = "GRIZZLY_THRESHOLD", default_value_t = DEFAULT_THRESHOLD_SECS)]
    pub threshold: f64,

    /// Number of test cases listed in the slowest-tests table
    #[arg(short = 'n', long, env = "GRIZZLY_TOP", default_value_t = DEFAULT_TOP)]
    pub top: usize,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the report.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            json: false,
            threshold: DEFAULT_THRESHOLD_SECS,
            top: DEFAULT_TOP,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input path is specified but doesn't exist or is not a file
    /// - The threshold is negative or not a finite number
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }

        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.threshold));
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),

    /// Threshold cannot be used as a cutoff
    #[error("Threshold must be a non-negative number of seconds, got {0}")]
    InvalidThreshold(f64),
}
