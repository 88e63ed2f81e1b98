use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Serialize;

use crate::core::params::LaunchConfig;
use crate::types::ForwardedFlag;

/// A fully resolved driver call: interpreter, script and forwarded flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverInvocation {
    pub program: String,
    pub driver: PathBuf,
    pub flags: Vec<String>,
}

impl DriverInvocation {
    pub fn new(program: impl Into<String>, driver: &Path, config: LaunchConfig) -> Self {
        Self {
            program: program.into(),
            driver: driver.to_path_buf(),
            flags: driver_flags(&config),
        }
    }

    /// Argument vector after the program name.
    pub fn args(&self) -> Vec<String> {
        std::iter::once(self.driver.to_string_lossy().into_owned())
            .chain(self.flags.iter().cloned())
            .collect()
    }

    /// Space-joined command line, for logs.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.clone())
            .chain(self.args())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Stdio is inherited from the launcher.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.driver).args(&self.flags);
        cmd
    }
}

/// `--name=value` flags for the driver, in [`ForwardedFlag::ALL`] order.
/// Unset values are forwarded empty.
pub fn driver_flags(config: &LaunchConfig) -> Vec<String> {
    ForwardedFlag::ALL
        .iter()
        .map(|flag| {
            let value = match flag {
                ForwardedFlag::ProjName => config.proj_name().unwrap_or_default(),
                ForwardedFlag::SqantiDir => config.sqanti_dir(),
                ForwardedFlag::OutputDir => config.output_dir(),
                ForwardedFlag::Reference => config.reference().unwrap_or_default(),
                ForwardedFlag::Annotation => config.annotation(),
                ForwardedFlag::IsNativeRna => "True",
                ForwardedFlag::NCpu => config.cpu_number(),
                ForwardedFlag::Hisat2Idx => config.hisat2_idx().unwrap_or_default(),
                ForwardedFlag::R1 => config.r1().unwrap_or_default(),
                ForwardedFlag::R2 => config.r2().unwrap_or_default(),
            };
            flag.with_value(value)
        })
        .collect()
}
