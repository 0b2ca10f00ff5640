use super::direction::TransferDirection;
use super::sweep_kind::SweepKind;
use super::transfer_config::{format_bytes, TransferConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SweepParams {
    pub sweep_kind: SweepKind,
    pub direction: TransferDirection,
    pub bucket: String,
    pub endpoint: String,
    /// Subject sizes in MB, one entry for tuning sweeps.
    pub sizes_mb: Vec<u64>,
    /// The single configuration of a file size sweep.
    pub transfer_config: Option<TransferConfig>,
    pub multipart_thresholds: Vec<u64>,
    pub max_concurrencies: Vec<u32>,
    pub multipart_chunksizes: Vec<u64>,
    pub use_threads: Vec<bool>,
    pub identifier: Option<String>,
    pub remark: Option<String>,
    pub pretty_name: String,
    pub bench_command: String,
}

impl SweepParams {
    pub fn format_space_info(&self) -> String {
        match self.sweep_kind {
            SweepKind::FileSize => {
                let sizes = self
                    .sizes_mb
                    .iter()
                    .map(|size| format!("{size}MB"))
                    .collect::<Vec<_>>()
                    .join(", ");
                match &self.transfer_config {
                    Some(config) => format!("sizes: [{sizes}], config: {config}"),
                    None => format!("sizes: [{sizes}]"),
                }
            }
            SweepKind::Tuning => {
                let list = |values: &[u64]| {
                    values
                        .iter()
                        .map(|value| format_bytes(*value))
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                format!(
                    "size: {}MB, thresholds: [{}], concurrencies: {:?}, chunksizes: [{}], use_threads: {:?}",
                    self.sizes_mb.first().copied().unwrap_or_default(),
                    list(&self.multipart_thresholds),
                    self.max_concurrencies,
                    list(&self.multipart_chunksizes),
                    self.use_threads
                )
            }
        }
    }

    /// Number of transfers the sweep performs.
    pub fn planned_runs(&self) -> usize {
        match self.sweep_kind {
            SweepKind::FileSize => self.sizes_mb.len(),
            SweepKind::Tuning => {
                self.multipart_thresholds.len()
                    * self.max_concurrencies.len()
                    * self.multipart_chunksizes.len()
                    * self.use_threads.len()
            }
        }
    }
}
