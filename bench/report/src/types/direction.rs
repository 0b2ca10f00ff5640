use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize, Default,
)]
pub enum TransferDirection {
    #[default]
    #[display("Upload")]
    #[serde(rename = "upload")]
    Upload,
    #[display("Download")]
    #[serde(rename = "download")]
    Download,
}

impl TransferDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferDirection::Upload => "upload",
            TransferDirection::Download => "download",
        }
    }
}

impl FromStr for TransferDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "upload" | "up" => Ok(TransferDirection::Upload),
            "download" | "down" => Ok(TransferDirection::Download),
            _ => Err(format!("Unknown transfer direction: {s}")),
        }
    }
}
