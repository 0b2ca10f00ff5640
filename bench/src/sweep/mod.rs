use crate::client::TransferClient;
use crate::data_source::DataSource;
use crate::error::BenchError;
use generator::{SweepPlan, SweepPoint};
use human_repr::HumanCount;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{error, info, warn};
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::result_set::ResultSet;
use transfer_bench_report::run_result::RunResult;

pub mod generator;
pub mod runner;

/// Object key of the subject of the given size.
pub fn object_key(prefix: &str, size_mb: u64) -> String {
    format!("{prefix}example_{size_mb}mb.txt")
}

/// Local file a transfer reads from (upload) or writes to (download).
pub fn local_path(staging_dir: &Path, direction: TransferDirection, size_mb: u64) -> PathBuf {
    let name = match direction {
        TransferDirection::Upload => format!("dummy_{size_mb}mb.txt"),
        TransferDirection::Download => format!("downloaded_{size_mb}mb.txt"),
    };
    staging_dir.join(name)
}

/// Walks a [`SweepPlan`] one transfer at a time.
///
/// Every run owns a local artifact that is removed once the run is over,
/// whatever its outcome. A failing transfer is recorded as a failed run and the
/// sweep moves on, unless fail-fast is set, in which case it stops with the
/// transfer error.
pub struct Sweep {
    client: Arc<dyn TransferClient>,
    data_source: Arc<dyn DataSource>,
    direction: TransferDirection,
    staging_dir: PathBuf,
    key_prefix: String,
    fail_fast: bool,
}

impl Sweep {
    pub fn new(
        client: Arc<dyn TransferClient>,
        data_source: Arc<dyn DataSource>,
        direction: TransferDirection,
        staging_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            client,
            data_source,
            direction,
            staging_dir: staging_dir.into(),
            key_prefix: String::new(),
            fail_fast: false,
        }
    }

    pub fn with_key_prefix(mut self, key_prefix: impl Into<String>) -> Self {
        self.key_prefix = key_prefix.into();
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn direction(&self) -> TransferDirection {
        self.direction
    }

    pub async fn run(&self, plan: &SweepPlan) -> Result<ResultSet, BenchError> {
        self.run_with_observer(plan, |_| Ok(())).await
    }

    /// Runs the plan, calling `observer` with the results so far after every run.
    pub async fn run_with_observer<F>(
        &self,
        plan: &SweepPlan,
        mut observer: F,
    ) -> Result<ResultSet, BenchError>
    where
        F: FnMut(&ResultSet) -> Result<(), BenchError>,
    {
        let mut results = ResultSet::new(plan.kind(), self.direction);
        info!(
            "Starting {} {} sweep of {} runs...",
            self.direction,
            plan.kind(),
            plan.len()
        );

        for (index, point) in plan.iter().enumerate() {
            info!(
                "Run {}/{}: {} of {}MB with {}",
                index + 1,
                plan.len(),
                self.direction,
                point.subject_size_mb,
                point.config
            );
            let run = self.run_point(point).await?;
            match run.throughput_mbps {
                Some(throughput) => info!(
                    "{} {} in {:.2} s, speed: {:.2} Mbps",
                    self.direction,
                    run.subject_size_bytes.human_count_bytes(),
                    run.duration_secs.unwrap_or_default(),
                    throughput
                ),
                None if !run.is_failed() => {
                    warn!("{} finished too fast to measure", run.subject_id)
                }
                None => {}
            }
            results.push(run);
            observer(&results)?;
        }

        info!(
            "Finished {} sweep, {} runs, {} failed.",
            plan.kind(),
            results.len(),
            results.failed().count()
        );
        Ok(results)
    }

    async fn run_point(&self, point: &SweepPoint) -> Result<RunResult, BenchError> {
        let subject_id = object_key(&self.key_prefix, point.subject_size_mb);
        let local_path = local_path(&self.staging_dir, self.direction, point.subject_size_mb);

        if self.direction == TransferDirection::Upload {
            if let Err(error) = self
                .data_source
                .create(&local_path, point.subject_size_bytes())
                .await
            {
                error!("Cannot create {}: {error}", local_path.display());
                self.cleanup(&local_path).await?;
                return Err(error.into());
            }
        }

        let outcome = runner::run_once(
            self.client.as_ref(),
            self.direction,
            &subject_id,
            &local_path,
            &point.config,
        )
        .await;
        self.cleanup(&local_path).await?;

        match outcome {
            Ok(run) => Ok(run),
            Err(error) if self.fail_fast => {
                error!("{error}, aborting the sweep.");
                Err(error)
            }
            Err(error) => {
                warn!("{error}, continuing with the next run.");
                Ok(RunResult::failed(
                    subject_id,
                    point.config,
                    point.subject_size_bytes(),
                    error.to_string(),
                ))
            }
        }
    }

    async fn cleanup(&self, local_path: &Path) -> Result<(), BenchError> {
        self.data_source.remove(local_path).await.map_err(|error| {
            error!("Cannot remove {}: {error}", local_path.display());
            BenchError::IoError(error)
        })
    }
}
