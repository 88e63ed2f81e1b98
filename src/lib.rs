#![doc = r#"
FLTIQ — launcher for the Full-Length Transcript Identification and
Quantification pipeline.

The pipeline itself (FLAIR alignment and collapse, SQANTI quality control,
HISAT2 short-read mapping) is driven by the Python script `run_FLTIQ.py`
shipped beside the `fltiq` executable. This crate collects the launch
parameters, checks the required ones, locates the driver and runs it with
normalized `--name=value` flags.

Quick start: launch from a directory holding the driver
-------------------------------------------------------
```rust,no_run
use std::path::Path;
use fltiq::{LaunchParams, api::{launch_from_dir, SystemRunner}};

fn main() -> fltiq::Result<()> {
    let config = LaunchParams {
        data_dir: Some("/data/liver".to_string()),
        output_dir: Some("/results".to_string()),
        sqanti_dir: Some("/opt/SQANTI3".to_string()),
        annotation: Some("/ref/gencode.v44.gtf".to_string()),
        reference: Some("/ref/GRCh38.fa".to_string()),
        ..Default::default()
    }
    .validate()?;

    let report = launch_from_dir(config, Path::new("/opt/fltiq"), "python3", &SystemRunner)?;
    println!("driver exited with {:?} after {:?}", report.exit.code, report.elapsed);
    Ok(())
}
```

Inspecting the invocation without running it
--------------------------------------------
```rust,no_run
use std::path::Path;
use fltiq::{DriverInvocation, LaunchParams};

fn main() -> fltiq::Result<()> {
    let config = LaunchParams {
        data_dir: Some("/data".to_string()),
        output_dir: Some("/out".to_string()),
        sqanti_dir: Some("/sqanti".to_string()),
        annotation: Some("anno.gtf".to_string()),
        ..Default::default()
    }
    .validate()?;

    let invocation = DriverInvocation::new("python", Path::new("/opt/fltiq/run_FLTIQ.py"), config);
    assert!(invocation.flags.contains(&"--n_cpu=4".to_string()));
    Ok(())
}
```

Error handling
--------------
All public functions return `fltiq::Result<T>`. A driver that runs and exits
non-zero is not an error: inspect [`api::LaunchReport::exit`].

```rust
use fltiq::{Error, LaunchParams};

match LaunchParams::default().validate() {
    Err(Error::MissingParameters { flags }) => assert_eq!(flags, ["-d", "-o", "-s", "-a"]),
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — launch entrypoints, the `DriverRunner` seam and `LaunchReport`.
- [`core`] — parameters, driver discovery and the invocation builder.
- [`types`] — the driver's flag catalogue and defaults.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
pub use crate::core::driver::{DRIVER_SCRIPT, launcher_dir, locate_driver};
pub use crate::core::invocation::DriverInvocation;
pub use crate::core::params::{LaunchConfig, LaunchParams};
pub use error::{Error, Result};
pub use types::ForwardedFlag;

pub use api::{DriverExit, DriverRunner, LaunchReport, SystemRunner, launch, launch_from_dir, prepare};
