//! grizzly library
//!
//! This module exports the command configuration and the reporters for use
//! in integration tests and as a library.

pub mod config;
pub mod report;
