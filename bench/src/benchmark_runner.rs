use crate::args::common::TransferBenchArgs;
use crate::client::s3::S3TransferClient;
use crate::client::TransferClient;
use crate::config::BenchConfig;
use crate::data_source::DiskDataSource;
use crate::error::BenchError;
use crate::plot::plot_chart;
use crate::sweep::generator::{self, SweepPlan, TuningSpace};
use crate::sweep::Sweep;
use std::sync::Arc;
use tracing::{info, warn};
use transfer_bench_report::hardware::BenchmarkHardware;
use transfer_bench_report::params::SweepParams;
use transfer_bench_report::recorder::ResultRecorder;
use transfer_bench_report::report::BenchmarkReport;
use transfer_bench_report::selector::select_best;
use transfer_bench_report::sweep_kind::SweepKind;
use transfer_bench_report::ReportError;

/// Sweep, persistence and reporting of one benchmark.
pub struct BenchmarkRunner {
    sweep: Sweep,
    plan: SweepPlan,
    recorder: ResultRecorder,
    params: SweepParams,
}

impl BenchmarkRunner {
    pub fn new(sweep: Sweep, plan: SweepPlan, recorder: ResultRecorder, params: SweepParams) -> Self {
        Self {
            sweep,
            plan,
            recorder,
            params,
        }
    }

    pub fn recorder(&self) -> &ResultRecorder {
        &self.recorder
    }

    /// Runs the sweep and persists its outcome: the results CSV after every run,
    /// the fastest configuration and `report.json` at the end, then the chart.
    pub async fn run(&self) -> Result<BenchmarkReport, BenchError> {
        let recorder = &self.recorder;
        let results = self
            .sweep
            .run_with_observer(&self.plan, |results| {
                recorder.persist_results(results)?;
                Ok(())
            })
            .await?;

        let results_path = recorder.persist_results(&results)?;
        info!("Results saved to: {}", results_path.display());

        let best = match select_best(&results) {
            Ok(best) => {
                let best_path = recorder.persist_best(&best)?;
                info!(
                    "Fastest configuration (run {}) saved to: {}",
                    best.position() + 1,
                    best_path.display()
                );
                Some(best.run().clone())
            }
            Err(ReportError::NoSuccessfulRuns(failed)) => {
                warn!("None of the {failed} runs succeeded, there is no fastest configuration.");
                None
            }
            Err(error) => return Err(error.into()),
        };

        let hardware = BenchmarkHardware::get_system_info_with_identifier(self.params.identifier.clone());
        let report = BenchmarkReport::new(hardware, self.params.clone(), results, best);
        let report_path = report.dump_to_json(recorder.output_dir())?;
        info!("Report saved to: {}", report_path.display());

        let chart_name = recorder.chart_name(report.results.kind, report.results.direction);
        plot_chart(&report, recorder.output_dir(), &chart_name);

        report.print_summary();
        Ok(report)
    }
}

/// Plan of the sweep selected on the command line.
pub fn plan(args: &TransferBenchArgs, config: &BenchConfig) -> Result<SweepPlan, BenchError> {
    match args.sweep_kind.as_simple_kind() {
        Some(SweepKind::FileSize) => {
            generator::fixed_sizes(&config.sweep.sizes_mb, config.sweep.transfer_config())
        }
        Some(SweepKind::Tuning) => generator::tuning(&TuningSpace::from(&config.tune)),
        None => Err(BenchError::InvalidConfiguration(format!(
            "'{}' does not run a sweep",
            args.sweep_kind.name()
        ))),
    }
}

/// Runs the sweep selected on the command line against the configured bucket.
pub async fn run(args: &TransferBenchArgs, config: &BenchConfig) -> Result<BenchmarkReport, BenchError> {
    let plan = plan(args, config)?;
    let direction = args.sweep_kind.direction(config);

    let client = S3TransferClient::new(&config.storage).map_err(BenchError::CannotCreateClient)?;
    client
        .verify_access()
        .await
        .map_err(BenchError::CannotCreateClient)?;
    let client: Arc<dyn TransferClient> = Arc::new(client);

    let sweep = Sweep::new(client, Arc::new(DiskDataSource), direction, &args.staging_dir)
        .with_key_prefix(&config.storage.key_prefix)
        .with_fail_fast(args.fail_fast);

    let runner = BenchmarkRunner::new(
        sweep,
        plan,
        ResultRecorder::new(&args.output_dir),
        args.sweep_params(config),
    );
    runner.run().await
}
