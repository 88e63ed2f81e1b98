//! High-level library API: turn a validated [`LaunchConfig`] into a driver
//! invocation and run it. Prefer these entrypoints over the `core` modules
//! when embedding the launcher.
//!
//! Process spawning goes through [`DriverRunner`] so callers can substitute
//! their own runner; the binary uses [`SystemRunner`].
use std::path::Path;
use std::process::ExitStatus;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::{info, warn};

use crate::core::driver::locate_driver;
use crate::core::invocation::DriverInvocation;
use crate::core::params::LaunchConfig;
use crate::error::{Error, Result};

/// How the driver process ended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DriverExit {
    pub code: Option<i32>,
    pub signal: Option<i32>,
}

impl DriverExit {
    pub fn from_code(code: i32) -> Self {
        Self {
            code: Some(code),
            signal: None,
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Status for the launcher's own exit: the driver's code when it fits,
    /// `128 + signal` for a killed driver, otherwise 1.
    pub fn process_exit_code(&self) -> u8 {
        match (self.code, self.signal) {
            (Some(code), _) => u8::try_from(code).unwrap_or(1),
            (None, Some(signal)) => u8::try_from(128 + signal).unwrap_or(1),
            (None, None) => 1,
        }
    }
}

impl From<ExitStatus> for DriverExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = std::os::unix::process::ExitStatusExt::signal(&status);
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

/// Seam between the launcher and the operating system.
pub trait DriverRunner {
    /// Run the invocation to completion.
    fn run(&self, invocation: &DriverInvocation) -> Result<DriverExit>;
}

/// Spawns the driver with inherited stdio and waits for it.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl DriverRunner for SystemRunner {
    fn run(&self, invocation: &DriverInvocation) -> Result<DriverExit> {
        let status = invocation
            .command()
            .status()
            .map_err(|source| Error::Spawn {
                program: invocation.program.clone(),
                source,
            })?;
        Ok(status.into())
    }
}

/// Outcome of one launch.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchReport {
    pub invocation: DriverInvocation,
    pub exit: DriverExit,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
}

impl LaunchReport {
    pub fn success(&self) -> bool {
        self.exit.success()
    }

    pub fn process_exit_code(&self) -> u8 {
        self.exit.process_exit_code()
    }
}

/// Locate the driver in `launcher_dir` and build its invocation without
/// running anything.
pub fn prepare(
    config: LaunchConfig,
    launcher_dir: &Path,
    interpreter: &str,
) -> Result<DriverInvocation> {
    let driver = locate_driver(launcher_dir)?;
    Ok(DriverInvocation::new(interpreter, &driver, config))
}

/// Run a prepared invocation through `runner`.
pub fn launch(invocation: DriverInvocation, runner: &impl DriverRunner) -> Result<LaunchReport> {
    info!("Launching: {}", invocation.command_line());

    let started_at = Local::now();
    let clock = Instant::now();
    let exit = runner.run(&invocation)?;
    let elapsed = clock.elapsed();

    if exit.success() {
        info!("Driver finished in {:.2}s", elapsed.as_secs_f64());
    } else {
        warn!(
            "Driver exited with code {:?} (signal {:?}) after {:.2}s",
            exit.code,
            exit.signal,
            elapsed.as_secs_f64()
        );
    }

    Ok(LaunchReport {
        invocation,
        exit,
        started_at,
        elapsed,
    })
}

/// [`prepare`] followed by [`launch`].
pub fn launch_from_dir(
    config: LaunchConfig,
    launcher_dir: &Path,
    interpreter: &str,
    runner: &impl DriverRunner,
) -> Result<LaunchReport> {
    let invocation = prepare(config, launcher_dir, interpreter)?;
    launch(invocation, runner)
}
