//! FLTIQ CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the launch sequence
//! and exit with the driver's status. For programmatic use, prefer the
//! library API (`fltiq::api`).

use std::process::ExitCode;

use clap::error::ErrorKind;

mod cli;

fn main() -> ExitCode {
    let (args, ignored) = match cli::CliArgs::parse_lenient(std::env::args_os()) {
        Ok(parsed) => parsed,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            cli::report(&cli::errors::AppError::from(err));
            return ExitCode::FAILURE;
        }
    };

    match cli::run(args, &ignored) {
        Ok(code) => code,
        Err(err) => {
            cli::report(&err);
            ExitCode::FAILURE
        }
    }
}
