use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Launch(#[from] fltiq::Error),

    #[error("Invalid arguments: {}", .0.kind().as_str().unwrap_or("unrecognized input"))]
    Args(#[from] clap::Error),

    #[error("Failed to render driver invocation: {0}")]
    Render(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True when the usage text should accompany the message.
    pub fn is_usage(&self) -> bool {
        match self {
            AppError::Launch(err) => err.is_usage(),
            AppError::Args(_) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    use crate::cli::CliArgs;

    #[test]
    fn clap_errors_come_with_usage() {
        let err = CliArgs::try_parse_from(["fltiq", "--bogus"]).unwrap_err();
        let err = AppError::from(err);
        assert!(err.is_usage());
        assert!(err.to_string().starts_with("Invalid arguments"));
    }

    #[test]
    fn driver_errors_do_not_print_usage() {
        let err = AppError::from(fltiq::Error::DriverNotFound {
            path: "/opt/fltiq/run_FLTIQ.py".into(),
        });
        assert!(!err.is_usage());
    }
}
