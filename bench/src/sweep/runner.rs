use crate::client::error::TransferClientError;
use crate::client::TransferClient;
use crate::error::BenchError;
use std::path::Path;
use tokio::time::Instant;
use tracing::trace;
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::run_result::RunResult;
use transfer_bench_report::transfer_config::TransferConfig;

/// Performs exactly one transfer and measures it.
///
/// The clock only spans the transfer call. The subject size is taken from the
/// local file: before an upload, after a download. Failures are not retried.
pub async fn run_once(
    client: &dyn TransferClient,
    direction: TransferDirection,
    subject_id: &str,
    local_path: &Path,
    config: &TransferConfig,
) -> Result<RunResult, BenchError> {
    let failed = |source: TransferClientError| BenchError::TransferFailed {
        direction,
        subject_id: subject_id.to_owned(),
        config: *config,
        source,
    };

    match direction {
        TransferDirection::Upload => {
            let size = client.size_of(local_path).await.map_err(failed)?;
            let start = Instant::now();
            let outcome = client.upload(local_path, subject_id, config).await;
            let elapsed = start.elapsed();
            outcome.map_err(failed)?;
            trace!("Uploaded {size} bytes of {subject_id} in {elapsed:?}");
            Ok(RunResult::measured(subject_id, *config, size, elapsed))
        }
        TransferDirection::Download => {
            let start = Instant::now();
            let outcome = client.download(subject_id, local_path, config).await;
            let elapsed = start.elapsed();
            outcome.map_err(failed)?;
            let size = client.size_of(local_path).await.map_err(failed)?;
            trace!("Downloaded {size} bytes of {subject_id} in {elapsed:?}");
            Ok(RunResult::measured(subject_id, *config, size, elapsed))
        }
    }
}
