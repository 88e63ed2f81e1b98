use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::process::ExitCode;

use tracing::{debug, info};

use fltiq::api::{SystemRunner, launch};
use fltiq::core::driver::{launcher_dir, locate_driver};
use fltiq::{DriverInvocation, LaunchParams};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging(verbose: bool) {
    // try_init: a subscriber may already be installed by an embedding caller
    if verbose {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .try_init();
    } else {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

pub fn run(args: CliArgs, ignored: &[OsString]) -> Result<ExitCode, AppError> {
    init_logging(args.log);

    if !ignored.is_empty() {
        debug!("Ignoring unrecognized arguments: {:?}", ignored);
    }

    let mut params = args.to_params();
    if let Some(path) = &args.params {
        info!("Reading launch parameters from {:?}", path);
        params = params.or(LaunchParams::from_json_file(path)?);
    }

    let launcher_dir = launcher_dir()?;
    let driver = locate_driver(&launcher_dir);

    let config = match params.validate() {
        Ok(config) => config,
        Err(err) => {
            // both diagnostics are shown when both checks fail
            if let Err(driver_err) = &driver {
                eprintln!("Error: {driver_err}");
            }
            return Err(err.into());
        }
    };
    let driver = driver?;

    let invocation = DriverInvocation::new(args.python.as_str(), &driver, config);

    if args.dry_run {
        write_stdout(&serde_json::to_string_pretty(&invocation)?)?;
        return Ok(ExitCode::SUCCESS);
    }

    let report = launch(invocation, &SystemRunner)?;
    Ok(ExitCode::from(report.process_exit_code()))
}

/// Write a line to stdout. A closed reader (`| head`) is not an error.
fn write_stdout(text: &str) -> std::io::Result<()> {
    match writeln!(std::io::stdout().lock(), "{text}") {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Print `err` for the user. Usage errors also print the usage text to stdout.
pub fn report(err: &AppError) {
    eprintln!("Error: {err}");
    if err.is_usage() {
        let _ = write_stdout(&CliArgs::usage());
    }
}
