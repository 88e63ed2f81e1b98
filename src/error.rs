//! Crate-level error type and `Result` alias.
//! Covers argument validation, driver discovery, params files and the
//! failure to start the driver process. A driver that runs and exits
//! non-zero is not an error; see [`crate::api::LaunchReport`].
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing required parameter(s): {}", .flags.join(", "))]
    MissingParameters { flags: Vec<&'static str> },

    #[error("Driver script not found: {}", .path.display())]
    DriverNotFound { path: PathBuf },

    #[error("Cannot determine launcher location: {0}")]
    LauncherLocation(#[source] std::io::Error),

    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read params file {}: {source}", .path.display())]
    ParamsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid params file {}: {source}", .path.display())]
    ParamsFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True for errors that should be answered with the usage text.
    pub fn is_usage(&self) -> bool {
        matches!(self, Error::MissingParameters { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_parameters_lists_every_flag() {
        let err = Error::MissingParameters {
            flags: vec!["-d", "-a"],
        };
        assert_eq!(err.to_string(), "Missing required parameter(s): -d, -a");
        assert!(err.is_usage());
    }

    #[test]
    fn driver_not_found_names_path() {
        let err = Error::DriverNotFound {
            path: PathBuf::from("/opt/fltiq/run_FLTIQ.py"),
        };
        assert!(err.to_string().contains("/opt/fltiq/run_FLTIQ.py"));
        assert!(!err.is_usage());
    }
}
