use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Shape of the configuration space a sweep walks through.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default,
)]
pub enum SweepKind {
    /// One fixed transfer configuration applied to a list of subject sizes.
    #[default]
    #[display("File Size")]
    #[serde(rename = "file_size")]
    FileSize,
    /// Cartesian product of the tunable transfer parameters for one subject size.
    #[display("Tuning")]
    #[serde(rename = "tuning")]
    Tuning,
}
