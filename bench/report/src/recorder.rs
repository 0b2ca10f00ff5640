use crate::best_result::BestResult;
use crate::direction::TransferDirection;
use crate::error::ReportError;
use crate::result_set::ResultSet;
use crate::run_result::RunResult;
use crate::sweep_kind::SweepKind;
use crate::transfer_config::TransferConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

const THRESHOLD_HEADER: &str = "Multipart Threshold (bytes)";
const CONCURRENCY_HEADER: &str = "Max Concurrency";
const CHUNKSIZE_HEADER: &str = "Multipart Chunksize (bytes)";
const USE_THREADS_HEADER: &str = "Use Threads";
const SIZE_HEADER: &str = "File Size (bytes)";
const TIME_HEADER: &str = "Time Taken (s)";

/// Writes sweep results to the output directory.
///
/// Every file name carries the timestamp the recorder was created with, so
/// persisting the same data twice overwrites the earlier files.
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    output_dir: PathBuf,
    timestamp: String,
}

/// One data row of a results file.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRow {
    /// Only file size sweeps record the subject size.
    pub subject_size_bytes: Option<u64>,
    pub config: TransferConfig,
    pub duration_secs: Option<f64>,
    pub throughput_mbps: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
struct FileSizeRow {
    size_bytes: u64,
    time_taken_s: Option<f64>,
    speed_mbps: Option<f64>,
    multipart_threshold: u64,
    max_concurrency: u32,
    multipart_chunksize: u64,
    use_threads: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct TuningRow {
    multipart_threshold: u64,
    max_concurrency: u32,
    multipart_chunksize: u64,
    use_threads: bool,
    time_taken_s: Option<f64>,
    speed_mbps: Option<f64>,
}

impl From<&RunResult> for FileSizeRow {
    fn from(run: &RunResult) -> Self {
        Self {
            size_bytes: run.subject_size_bytes,
            time_taken_s: run.duration_secs,
            speed_mbps: run.throughput_mbps,
            multipart_threshold: run.config.multipart_threshold,
            max_concurrency: run.config.max_concurrency,
            multipart_chunksize: run.config.multipart_chunksize,
            use_threads: run.config.use_threads,
        }
    }
}

impl From<&RunResult> for TuningRow {
    fn from(run: &RunResult) -> Self {
        Self {
            multipart_threshold: run.config.multipart_threshold,
            max_concurrency: run.config.max_concurrency,
            multipart_chunksize: run.config.multipart_chunksize,
            use_threads: run.config.use_threads,
            time_taken_s: run.duration_secs,
            speed_mbps: run.throughput_mbps,
        }
    }
}

impl From<FileSizeRow> for RecordedRow {
    fn from(row: FileSizeRow) -> Self {
        Self {
            subject_size_bytes: Some(row.size_bytes),
            config: TransferConfig::new(
                row.multipart_threshold,
                row.max_concurrency,
                row.multipart_chunksize,
                row.use_threads,
            ),
            duration_secs: row.time_taken_s,
            throughput_mbps: row.speed_mbps,
        }
    }
}

impl From<TuningRow> for RecordedRow {
    fn from(row: TuningRow) -> Self {
        Self {
            subject_size_bytes: None,
            config: TransferConfig::new(
                row.multipart_threshold,
                row.max_concurrency,
                row.multipart_chunksize,
                row.use_threads,
            ),
            duration_secs: row.time_taken_s,
            throughput_mbps: row.speed_mbps,
        }
    }
}

/// Column names of a results file, in order.
pub fn results_header(kind: SweepKind, direction: TransferDirection) -> Vec<String> {
    let speed = format!("{direction} Speed (Mbps)");
    let columns = match kind {
        SweepKind::FileSize => vec![
            SIZE_HEADER,
            TIME_HEADER,
            speed.as_str(),
            THRESHOLD_HEADER,
            CONCURRENCY_HEADER,
            CHUNKSIZE_HEADER,
            USE_THREADS_HEADER,
        ],
        SweepKind::Tuning => vec![
            THRESHOLD_HEADER,
            CONCURRENCY_HEADER,
            CHUNKSIZE_HEADER,
            USE_THREADS_HEADER,
            TIME_HEADER,
            speed.as_str(),
        ],
    };
    columns.into_iter().map(str::to_owned).collect()
}

impl ResultRecorder {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        Self::with_timestamp(output_dir, timestamp)
    }

    pub fn with_timestamp(output_dir: impl Into<PathBuf>, timestamp: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            timestamp: timestamp.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn results_path(&self, kind: SweepKind, direction: TransferDirection) -> PathBuf {
        let name = match kind {
            SweepKind::FileSize => format!("{}_results_{}.csv", direction.as_str(), self.timestamp),
            SweepKind::Tuning => format!("tuning_results_{}.csv", self.timestamp),
        };
        self.output_dir.join(name)
    }

    pub fn best_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("fastest_configuration_{}.json", self.timestamp))
    }

    /// File name of the chart without extension.
    pub fn chart_name(&self, kind: SweepKind, direction: TransferDirection) -> String {
        match kind {
            SweepKind::FileSize => format!("{}_speeds_{}", direction.as_str(), self.timestamp),
            SweepKind::Tuning => format!("tuning_plot_{}", self.timestamp),
        }
    }

    /// Writes the whole result set as CSV, replacing any previous file.
    pub fn persist_results(&self, results: &ResultSet) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.results_path(results.kind, results.direction);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&path)?;
        writer.write_record(results_header(results.kind, results.direction))?;
        for run in results {
            match results.kind {
                SweepKind::FileSize => writer.serialize(FileSizeRow::from(run))?,
                SweepKind::Tuning => writer.serialize(TuningRow::from(run))?,
            }
        }
        writer.flush()?;
        debug!("Persisted {} runs to {}", results.len(), path.display());
        Ok(path)
    }

    /// Writes the fastest configuration as a JSON document, replacing any previous file.
    pub fn persist_best(&self, best: &BestResult<'_>) -> Result<PathBuf, ReportError> {
        std::fs::create_dir_all(&self.output_dir)?;
        let path = self.best_path();
        let json = serde_json::to_string_pretty(&best.to_configuration())?;
        std::fs::write(&path, json)?;
        debug!("Persisted fastest configuration to {}", path.display());
        Ok(path)
    }

    /// Reads back a results file written by [`ResultRecorder::persist_results`].
    pub fn load_results(path: &Path, kind: SweepKind) -> Result<Vec<RecordedRow>, ReportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;
        let headers = reader.headers()?.clone();
        let known_header = [TransferDirection::Upload, TransferDirection::Download]
            .into_iter()
            .any(|direction| headers.iter().eq(results_header(kind, direction).iter()));
        if !known_header {
            return Err(ReportError::MalformedResults(format!(
                "unexpected header in {}: {:?}",
                path.display(),
                headers
            )));
        }

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let row = match kind {
                SweepKind::FileSize => record.deserialize::<FileSizeRow>(None)?.into(),
                SweepKind::Tuning => record.deserialize::<TuningRow>(None)?.into(),
            };
            rows.push(row);
        }
        Ok(rows)
    }
}
