use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::DEFAULT_CPU_NUMBER;

/// Launch values as collected from the command line or a params file.
/// Nothing is checked here; see [`LaunchParams::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaunchParams {
    pub data_dir: Option<String>,
    pub output_dir: Option<String>,
    pub cpu_number: Option<String>,
    pub sqanti_dir: Option<String>,
    pub proj_name: Option<String>,
    pub reference: Option<String>,
    pub annotation: Option<String>,
    pub fl_reads: Option<String>,
    pub hisat2_idx: Option<String>,
    pub r1: Option<String>,
    pub r2: Option<String>,
}

/// An unset value and an empty one are the same thing to the launcher.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl LaunchParams {
    /// Load params from a JSON object whose keys are the field names above.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::ParamsRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::ParamsFile {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Fill every field that is unset here from `base`.
    pub fn or(self, base: LaunchParams) -> LaunchParams {
        LaunchParams {
            data_dir: present(self.data_dir).or(base.data_dir),
            output_dir: present(self.output_dir).or(base.output_dir),
            cpu_number: present(self.cpu_number).or(base.cpu_number),
            sqanti_dir: present(self.sqanti_dir).or(base.sqanti_dir),
            proj_name: present(self.proj_name).or(base.proj_name),
            reference: present(self.reference).or(base.reference),
            annotation: present(self.annotation).or(base.annotation),
            fl_reads: present(self.fl_reads).or(base.fl_reads),
            hisat2_idx: present(self.hisat2_idx).or(base.hisat2_idx),
            r1: present(self.r1).or(base.r1),
            r2: present(self.r2).or(base.r2),
        }
    }

    /// Short flags of the required parameters that are unset or empty, in
    /// usage order.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            ("-d", &self.data_dir),
            ("-o", &self.output_dir),
            ("-s", &self.sqanti_dir),
            ("-a", &self.annotation),
        ]
        .into_iter()
        .filter(|(_, v)| v.as_deref().is_none_or(str::is_empty))
        .map(|(flag, _)| flag)
        .collect()
    }

    /// Check the required parameters and apply the CPU default.
    pub fn validate(self) -> Result<LaunchConfig> {
        let missing = self.missing_required();
        if !missing.is_empty() {
            return Err(Error::MissingParameters { flags: missing });
        }

        let required = |v: Option<String>| present(v).unwrap_or_default();

        Ok(LaunchConfig {
            data_dir: required(self.data_dir),
            output_dir: required(self.output_dir),
            cpu_number: present(self.cpu_number).unwrap_or_else(|| DEFAULT_CPU_NUMBER.to_string()),
            sqanti_dir: required(self.sqanti_dir),
            annotation: required(self.annotation),
            proj_name: present(self.proj_name),
            reference: present(self.reference),
            fl_reads: present(self.fl_reads),
            hisat2_idx: present(self.hisat2_idx),
            r1: present(self.r1),
            r2: present(self.r2),
        })
    }
}

/// Validated, immutable launch configuration. Only obtainable through
/// [`LaunchParams::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchConfig {
    data_dir: String,
    output_dir: String,
    cpu_number: String,
    sqanti_dir: String,
    annotation: String,
    proj_name: Option<String>,
    reference: Option<String>,
    fl_reads: Option<String>,
    hisat2_idx: Option<String>,
    r1: Option<String>,
    r2: Option<String>,
}

impl LaunchConfig {
    pub fn data_dir(&self) -> &str {
        &self.data_dir
    }

    pub fn output_dir(&self) -> &str {
        &self.output_dir
    }

    pub fn cpu_number(&self) -> &str {
        &self.cpu_number
    }

    pub fn sqanti_dir(&self) -> &str {
        &self.sqanti_dir
    }

    pub fn annotation(&self) -> &str {
        &self.annotation
    }

    pub fn proj_name(&self) -> Option<&str> {
        self.proj_name.as_deref()
    }

    pub fn reference(&self) -> Option<&str> {
        self.reference.as_deref()
    }

    /// Collected for completeness; the driver is not given this value.
    pub fn fl_reads(&self) -> Option<&str> {
        self.fl_reads.as_deref()
    }

    pub fn hisat2_idx(&self) -> Option<&str> {
        self.hisat2_idx.as_deref()
    }

    pub fn r1(&self) -> Option<&str> {
        self.r1.as_deref()
    }

    pub fn r2(&self) -> Option<&str> {
        self.r2.as_deref()
    }
}
