mod common;

use common::{FakeTransferClient, FaultyDataSource, SizedDataSource, Step};
use std::sync::Arc;
use tempfile::TempDir;
use transfer_bench::benchmark_runner::BenchmarkRunner;
use transfer_bench::data_source::DataSource;
use transfer_bench::error::BenchError;
use transfer_bench::sweep::generator::fixed_sizes;
use transfer_bench::sweep::Sweep;
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::params::SweepParams;
use transfer_bench_report::recorder::ResultRecorder;
use transfer_bench_report::report::REPORT_FILE_NAME;
use transfer_bench_report::sweep_kind::SweepKind;
use transfer_bench_report::transfer_config::{TransferConfig, BYTES_PER_MB};

const TIMESTAMP: &str = "20240101_120000";

fn params(sizes_mb: &[u64]) -> SweepParams {
    SweepParams {
        sweep_kind: SweepKind::FileSize,
        direction: TransferDirection::Upload,
        bucket: "bench".to_owned(),
        endpoint: "http://127.0.0.1:9000".to_owned(),
        sizes_mb: sizes_mb.to_vec(),
        transfer_config: Some(TransferConfig::default()),
        pretty_name: "Upload, 2 file sizes".to_owned(),
        bench_command: "transfer-bench upload".to_owned(),
        ..Default::default()
    }
}

fn runner(client: FakeTransferClient, staging: Arc<dyn DataSource>, output: &TempDir, fail_fast: bool) -> BenchmarkRunner {
    let sweep = Sweep::new(Arc::new(client), staging, TransferDirection::Upload, "/staging")
        .with_fail_fast(fail_fast);
    let plan = fixed_sizes(&[100, 500], TransferConfig::default()).unwrap();
    BenchmarkRunner::new(
        sweep,
        plan,
        ResultRecorder::with_timestamp(output.path(), TIMESTAMP),
        params(&[100, 500]),
    )
}

#[tokio::test(start_paused = true)]
async fn benchmark_should_persist_results_best_configuration_report_and_chart() {
    let output = TempDir::new().unwrap();
    let staging = SizedDataSource::new();
    let client = FakeTransferClient::new(staging.clone()).with_durations(&[2.0, 5.0]);
    let runner = runner(client, staging, &output, false);

    let report = runner.run().await.unwrap();

    let best = report.best.as_ref().unwrap();
    assert_eq!(best.subject_size_bytes, 500 * BYTES_PER_MB);

    let results_path = output.path().join(format!("upload_results_{TIMESTAMP}.csv"));
    let rows = ResultRecorder::load_results(&results_path, SweepKind::FileSize).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].subject_size_bytes, Some(100 * BYTES_PER_MB));
    assert_eq!(rows[1].duration_secs, Some(5.0));

    let best_path = output
        .path()
        .join(format!("fastest_configuration_{TIMESTAMP}.json"));
    let best_json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(best_path).unwrap()).unwrap();
    let keys = best_json.as_object().unwrap().keys().cloned().collect::<Vec<_>>();
    assert_eq!(keys.len(), 6);
    assert_eq!(best_json["max_concurrency"], 10);
    assert_eq!(best_json["multipart_threshold_bytes"], 50 * BYTES_PER_MB);

    assert!(output.path().join(REPORT_FILE_NAME).is_file());
    let chart = std::fs::read(output.path().join(format!("upload_speeds_{TIMESTAMP}.png"))).unwrap();
    assert!(chart.starts_with(b"\x89PNG"));
}

#[tokio::test(start_paused = true)]
async fn all_failed_runs_should_still_produce_results_and_report() {
    let output = TempDir::new().unwrap();
    let staging = SizedDataSource::new();
    let client = FakeTransferClient::new(staging.clone())
        .with_step(Step::Fail("no such bucket".to_owned()))
        .with_step(Step::Fail("no such bucket".to_owned()));
    let runner = runner(client, staging, &output, false);

    let report = runner.run().await.unwrap();

    assert!(report.best.is_none());
    assert_eq!(report.results.failed().count(), 2);
    assert!(output.path().join(REPORT_FILE_NAME).is_file());
    assert!(!output
        .path()
        .join(format!("fastest_configuration_{TIMESTAMP}.json"))
        .exists());

    let results_path = output.path().join(format!("upload_results_{TIMESTAMP}.csv"));
    let rows = ResultRecorder::load_results(&results_path, SweepKind::FileSize).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|row| row.throughput_mbps.is_none()));
}

#[tokio::test(start_paused = true)]
async fn aborted_benchmark_should_keep_runs_persisted_so_far() {
    let output = TempDir::new().unwrap();
    let staging = SizedDataSource::new();
    let client = FakeTransferClient::new(staging.clone())
        .with_step(Step::Take(std::time::Duration::from_secs(2)))
        .with_step(Step::Fail("timeout".to_owned()));
    let runner = runner(client, staging, &output, true);

    let result = runner.run().await;

    assert!(matches!(result, Err(BenchError::TransferFailed { .. })));
    let results_path = output.path().join(format!("upload_results_{TIMESTAMP}.csv"));
    let rows = ResultRecorder::load_results(&results_path, SweepKind::FileSize).unwrap();
    assert_eq!(rows.len(), 1);
    assert!(!output.path().join(REPORT_FILE_NAME).exists());
}

#[tokio::test(start_paused = true)]
async fn artifact_failure_should_keep_runs_persisted_so_far() {
    let output = TempDir::new().unwrap();
    let staging = SizedDataSource::new();
    let faulty = FaultyDataSource::failing_create(staging.clone(), 1);
    let client = FakeTransferClient::new(staging).with_durations(&[2.0]);
    let runner = runner(client, faulty, &output, false);

    let error = runner.run().await.unwrap_err();

    assert!(matches!(error, BenchError::IoError(_)));
    assert!(error.to_string().contains("no space left on device"));
    let results_path = output.path().join(format!("upload_results_{TIMESTAMP}.csv"));
    let rows = ResultRecorder::load_results(&results_path, SweepKind::FileSize).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].duration_secs, Some(2.0));
    assert!(!output.path().join(REPORT_FILE_NAME).exists());
}
