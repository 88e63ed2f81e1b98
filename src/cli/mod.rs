//! Command Line Interface (CLI) layer for the FLTIQ launcher.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the launch sequence (`runner`): parse, validate, default, resolve
//! the driver, invoke it. The library entrypoints live in `fltiq::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{report, run};
