//! Shared types used across the launcher.
//! `ForwardedFlag` is the catalogue of flags the FLTIQ driver accepts, in the
//! order the launcher passes them.
use serde::{Deserialize, Serialize};

/// Interpreter used to run the driver when neither `--python` nor
/// `FLTIQ_PYTHON` is given.
pub const DEFAULT_INTERPRETER: &str = "python";

/// CPU count applied when `-p` is absent or empty.
pub const DEFAULT_CPU_NUMBER: &str = "4";

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
pub enum ForwardedFlag {
    ProjName,
    SqantiDir,
    OutputDir,
    Reference,
    Annotation,
    IsNativeRna,
    NCpu,
    Hisat2Idx,
    R1,
    R2,
}

impl ForwardedFlag {
    /// Every flag, in forwarding order.
    pub const ALL: [ForwardedFlag; 10] = [
        ForwardedFlag::ProjName,
        ForwardedFlag::SqantiDir,
        ForwardedFlag::OutputDir,
        ForwardedFlag::Reference,
        ForwardedFlag::Annotation,
        ForwardedFlag::IsNativeRna,
        ForwardedFlag::NCpu,
        ForwardedFlag::Hisat2Idx,
        ForwardedFlag::R1,
        ForwardedFlag::R2,
    ];

    /// Name as the driver's flag parser knows it, without dashes.
    pub fn name(self) -> &'static str {
        match self {
            ForwardedFlag::ProjName => "proj_name",
            ForwardedFlag::SqantiDir => "sqanti_dir",
            ForwardedFlag::OutputDir => "output_dir",
            ForwardedFlag::Reference => "reference",
            ForwardedFlag::Annotation => "annotation",
            ForwardedFlag::IsNativeRna => "is_native_rna",
            ForwardedFlag::NCpu => "n_cpu",
            ForwardedFlag::Hisat2Idx => "hisat2_idx",
            ForwardedFlag::R1 => "r1",
            ForwardedFlag::R2 => "r2",
        }
    }

    /// Render `--name=value`.
    pub fn with_value(self, value: &str) -> String {
        format!("{}={}", self, value)
    }
}

impl std::fmt::Display for ForwardedFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "--{}", self.name())
    }
}
