use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// File name of the pipeline driver, expected beside the launcher.
pub const DRIVER_SCRIPT: &str = "run_FLTIQ.py";

/// Absolute, symlink-free directory of the running launcher executable.
pub fn launcher_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(Error::LauncherLocation)?;
    let exe = exe.canonicalize().map_err(Error::LauncherLocation)?;
    let dir = exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        Error::LauncherLocation(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;
    debug!("Launcher directory: {:?}", dir);
    Ok(dir)
}

/// Path the driver is expected at inside `dir`, whether or not it exists.
pub fn expected_driver_path(dir: &Path) -> PathBuf {
    dir.join(DRIVER_SCRIPT)
}

/// Locate the driver script inside `dir`.
pub fn locate_driver(dir: &Path) -> Result<PathBuf> {
    let path = expected_driver_path(dir);
    if path.is_file() {
        debug!("Driver script: {:?}", path);
        Ok(path)
    } else {
        Err(Error::DriverNotFound { path })
    }
}
