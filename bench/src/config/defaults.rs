use crate::config::{BenchConfig, SizeSweepConfig, StorageConfig, TuneConfig};
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::transfer_config::{
    BYTES_PER_MB, DEFAULT_MAX_CONCURRENCY, DEFAULT_MULTIPART_CHUNKSIZE,
    DEFAULT_MULTIPART_THRESHOLD, DEFAULT_USE_THREADS,
};

pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_SIZES_MB: [u64; 8] = [100, 500, 1024, 5120, 10240, 20480, 51200, 102400];
pub const DEFAULT_TUNE_SIZE_MB: u64 = 1024;
pub const DEFAULT_TUNE_DIRECTION: TransferDirection = TransferDirection::Download;
pub const DEFAULT_TUNE_THRESHOLDS: [u64; 3] = [8 * BYTES_PER_MB, 16 * BYTES_PER_MB, 50 * BYTES_PER_MB];
pub const DEFAULT_TUNE_CONCURRENCIES: [u32; 3] = [5, 10, 20];
pub const DEFAULT_TUNE_CHUNKSIZES: [u64; 3] = [8 * BYTES_PER_MB, 16 * BYTES_PER_MB, 50 * BYTES_PER_MB];
pub const DEFAULT_TUNE_USE_THREADS: [bool; 1] = [true];

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            sweep: SizeSweepConfig::default(),
            tune: TuneConfig::default(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            endpoint: None,
            region: DEFAULT_REGION.to_owned(),
            access_key_id: None,
            secret_access_key: None,
            path_style: false,
            key_prefix: String::new(),
        }
    }
}

impl Default for SizeSweepConfig {
    fn default() -> Self {
        Self {
            sizes_mb: DEFAULT_SIZES_MB.to_vec(),
            multipart_threshold: DEFAULT_MULTIPART_THRESHOLD,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            multipart_chunksize: DEFAULT_MULTIPART_CHUNKSIZE,
            use_threads: DEFAULT_USE_THREADS,
        }
    }
}

impl Default for TuneConfig {
    fn default() -> Self {
        Self {
            direction: DEFAULT_TUNE_DIRECTION,
            size_mb: DEFAULT_TUNE_SIZE_MB,
            multipart_thresholds: DEFAULT_TUNE_THRESHOLDS.to_vec(),
            max_concurrencies: DEFAULT_TUNE_CONCURRENCIES.to_vec(),
            multipart_chunksizes: DEFAULT_TUNE_CHUNKSIZES.to_vec(),
            use_threads: DEFAULT_TUNE_USE_THREADS.to_vec(),
        }
    }
}
