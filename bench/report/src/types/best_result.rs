use super::run_result::RunResult;
use serde::{Deserialize, Serialize};

/// The fastest run of a result set, borrowed from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestResult<'a> {
    run: &'a RunResult,
    position: usize,
    duration_secs: f64,
    throughput_mbps: f64,
}

impl<'a> BestResult<'a> {
    pub(crate) fn new(
        run: &'a RunResult,
        position: usize,
        duration_secs: f64,
        throughput_mbps: f64,
    ) -> Self {
        Self {
            run,
            position,
            duration_secs,
            throughput_mbps,
        }
    }

    pub fn run(&self) -> &'a RunResult {
        self.run
    }

    /// Zero-based position of the run in execution order.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn throughput_mbps(&self) -> f64 {
        self.throughput_mbps
    }

    pub fn to_configuration(&self) -> BestConfiguration {
        let config = &self.run.config;
        BestConfiguration {
            multipart_threshold_bytes: config.multipart_threshold,
            max_concurrency: config.max_concurrency,
            multipart_chunksize_bytes: config.multipart_chunksize,
            use_threads: config.use_threads,
            time_taken_s: self.duration_secs,
            speed_mbps: self.throughput_mbps,
        }
    }
}

/// Document persisted for the fastest configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BestConfiguration {
    pub multipart_threshold_bytes: u64,
    pub max_concurrency: u32,
    pub multipart_chunksize_bytes: u64,
    pub use_threads: bool,
    pub time_taken_s: f64,
    pub speed_mbps: f64,
}
