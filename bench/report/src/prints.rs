use crate::report::BenchmarkReport;
use crate::run_result::RunResult;
use colored::{ColoredString, Colorize};
use human_repr::HumanCount;
use tracing::info;

impl BenchmarkReport {
    pub fn print_summary(&self) {
        let params = &self.params;
        let params_print = format!(
            "Sweep: {} {}, {} of {} planned runs finished, bucket: {}, {}\n",
            params.direction,
            params.sweep_kind,
            self.results.measured().count(),
            params.planned_runs(),
            params.bucket,
            params.format_space_info(),
        )
        .blue();

        info!("{}", params_print);

        self.results
            .failed()
            .for_each(|run| info!("{}", run.formatted_failure()));

        match &self.best {
            Some(best) => info!("{}\n", best.formatted_best()),
            None => info!("{}\n", "No run finished with a measurable throughput".red()),
        }
    }
}

impl RunResult {
    pub fn formatted_best(&self) -> ColoredString {
        format!(
            "Fastest configuration: {}, {} of '{}' in {:.2} s, speed: {:.2} Mbps",
            self.config,
            self.subject_size_bytes.human_count_bytes(),
            self.subject_id,
            self.duration_secs.unwrap_or_default(),
            self.throughput_mbps.unwrap_or_default(),
        )
        .green()
    }

    pub fn formatted_failure(&self) -> ColoredString {
        format!(
            "Failed run for '{}' with {}: {}",
            self.subject_id,
            self.config,
            self.failure_reason().unwrap_or("unknown error"),
        )
        .red()
    }
}
