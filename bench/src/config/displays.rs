use crate::config::{BenchConfig, SizeSweepConfig, StorageConfig, TuneConfig};
use std::fmt::{Display, Formatter};
use transfer_bench_report::transfer_config::format_bytes;

impl Display for BenchConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ storage: {}, sweep: {}, tune: {} }}",
            self.storage, self.sweep, self.tune
        )
    }
}

impl Display for StorageConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ bucket: {}, endpoint: {}, region: {}, credentials: {}, path_style: {}, key_prefix: {} }}",
            self.bucket,
            self.endpoint.as_deref().unwrap_or("aws"),
            self.region,
            if self.access_key_id.is_some() {
                "provided"
            } else {
                "from environment"
            },
            self.path_style,
            self.key_prefix
        )
    }
}

impl Display for SizeSweepConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ sizes_mb: {:?}, transfer: {} }}",
            self.sizes_mb,
            self.transfer_config()
        )
    }
}

impl Display for TuneConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sizes = |values: &[u64]| {
            values
                .iter()
                .map(|value| format_bytes(*value))
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "{{ direction: {}, size_mb: {}, thresholds: [{}], concurrencies: {:?}, chunksizes: [{}], use_threads: {:?} }}",
            self.direction,
            self.size_mb,
            sizes(&self.multipart_thresholds),
            self.max_concurrencies,
            sizes(&self.multipart_chunksizes),
            self.use_threads
        )
    }
}
