use serde::{Deserialize, Serialize};
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::transfer_config::TransferConfig;

pub mod defaults;
pub mod displays;
pub mod provider;
pub mod validators;
mod values;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BenchConfig {
    pub storage: StorageConfig,
    pub sweep: SizeSweepConfig,
    pub tune: TuneConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageConfig {
    #[serde(deserialize_with = "values::text")]
    pub bucket: String,
    /// Custom endpoint of an S3 compatible store, AWS is used when absent.
    #[serde(default, deserialize_with = "values::optional_text")]
    pub endpoint: Option<String>,
    #[serde(deserialize_with = "values::text")]
    pub region: String,
    #[serde(default, deserialize_with = "values::optional_text")]
    pub access_key_id: Option<String>,
    #[serde(default, deserialize_with = "values::optional_text")]
    pub secret_access_key: Option<String>,
    #[serde(deserialize_with = "values::flag")]
    pub path_style: bool,
    /// Prepended to every object key.
    #[serde(deserialize_with = "values::text")]
    pub key_prefix: String,
}

/// Fixed configuration sweep over subject sizes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SizeSweepConfig {
    #[serde(deserialize_with = "values::number_list")]
    pub sizes_mb: Vec<u64>,
    #[serde(deserialize_with = "values::byte_size")]
    pub multipart_threshold: u64,
    #[serde(deserialize_with = "values::number")]
    pub max_concurrency: u32,
    #[serde(deserialize_with = "values::byte_size")]
    pub multipart_chunksize: u64,
    #[serde(deserialize_with = "values::flag")]
    pub use_threads: bool,
}

/// Cartesian product sweep over the transfer tuning knobs.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TuneConfig {
    #[serde(deserialize_with = "values::direction")]
    pub direction: TransferDirection,
    #[serde(deserialize_with = "values::number")]
    pub size_mb: u64,
    #[serde(deserialize_with = "values::byte_size_list")]
    pub multipart_thresholds: Vec<u64>,
    #[serde(deserialize_with = "values::number_list")]
    pub max_concurrencies: Vec<u32>,
    #[serde(deserialize_with = "values::byte_size_list")]
    pub multipart_chunksizes: Vec<u64>,
    #[serde(deserialize_with = "values::flag_list")]
    pub use_threads: Vec<bool>,
}

impl SizeSweepConfig {
    pub fn transfer_config(&self) -> TransferConfig {
        TransferConfig::new(
            self.multipart_threshold,
            self.max_concurrency,
            self.multipart_chunksize,
            self.use_threads,
        )
    }
}
