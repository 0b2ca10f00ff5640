use super::hardware::BenchmarkHardware;
use super::params::SweepParams;
use super::result_set::ResultSet;
use super::run_result::RunResult;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const REPORT_FILE_NAME: &str = "report.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct BenchmarkReport {
    /// Benchmark unique identifier
    pub uuid: Uuid,

    /// Timestamp when the sweep was finished
    pub timestamp: String,

    /// Machine the sweep ran on
    pub hardware: BenchmarkHardware,

    /// Sweep parameters
    pub params: SweepParams,

    /// All runs in execution order
    pub results: ResultSet,

    /// Fastest run, absent when no run finished with a measurable throughput
    pub best: Option<RunResult>,
}

impl BenchmarkReport {
    pub fn new(
        hardware: BenchmarkHardware,
        params: SweepParams,
        results: ResultSet,
        best: Option<RunResult>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            timestamp: chrono::Local::now().to_rfc3339(),
            hardware,
            params,
            results,
            best,
        }
    }

    pub fn dump_to_json(&self, output_dir: &Path) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(output_dir)?;
        let report_path = output_dir.join(REPORT_FILE_NAME);
        let report_json = serde_json::to_string_pretty(self)?;
        std::fs::write(&report_path, report_json)?;
        Ok(report_path)
    }
}
