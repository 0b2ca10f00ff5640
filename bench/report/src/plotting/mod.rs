pub mod chart;
pub mod chart_kind;
mod text;

use crate::report::BenchmarkReport;
use crate::run_result::RunResult;
use crate::sweep_kind::SweepKind;
use crate::transfer_config::BYTES_PER_MB;
use charming::element::Symbol;
use charming::Chart;
use chart::TransferChart;
use chart_kind::ChartKind;

const COLORS: [&str; 8] = [
    "#5470c6", "#91cc75", "#fac858", "#ee6666", "#73c0de", "#3ba272", "#fc8452", "#9a60b4",
];
const THREADED_SYMBOL_SIZE: f64 = 16.0;
const SEQUENTIAL_SYMBOL_SIZE: f64 = 9.0;

pub fn chart_kind(report: &BenchmarkReport) -> ChartKind {
    match report.results.kind {
        SweepKind::FileSize => ChartKind::FileSizeThroughput,
        SweepKind::Tuning => ChartKind::TuningThroughput,
    }
}

/// Builds the chart matching the sweep kind of the report.
pub fn create_chart(report: &BenchmarkReport, dark: bool) -> Chart {
    match report.results.kind {
        SweepKind::FileSize => create_file_size_chart(report, dark),
        SweepKind::Tuning => create_tuning_chart(report, dark),
    }
}

fn y_axis_label(report: &BenchmarkReport) -> String {
    format!("{} Speed [Mbps]", report.results.direction)
}

/// Line chart of throughput per subject size, in execution order.
pub fn create_file_size_chart(report: &BenchmarkReport, dark: bool) -> Chart {
    let kind = ChartKind::FileSizeThroughput;
    let measured: Vec<&RunResult> = report.results.measured().collect();
    let categories = measured
        .iter()
        .map(|run| format!("{} MB", run.subject_size_bytes / BYTES_PER_MB))
        .collect();
    let speeds = measured
        .iter()
        .filter_map(|run| run.throughput_mbps)
        .collect();

    TransferChart::new(&report.title(kind), &report.subtext(), dark)
        .with_category_x_axis(kind.x_axis_label(), categories)
        .with_y_axis(&y_axis_label(report))
        .add_series(
            &format!("{} Speed", report.results.direction),
            speeds,
            Symbol::Circle,
            COLORS[0],
        )
        .inner
}

/// Scatter of throughput against multipart threshold.
///
/// One series per (concurrency, use_threads) pair: the color tells the
/// concurrency apart, the symbol size tells whether threads were used.
pub fn create_tuning_chart(report: &BenchmarkReport, dark: bool) -> Chart {
    let kind = ChartKind::TuningThroughput;
    let mut concurrencies: Vec<u32> = report
        .results
        .iter()
        .map(|run| run.config.max_concurrency)
        .collect();
    concurrencies.sort_unstable();
    concurrencies.dedup();

    let mut chart = TransferChart::new(&report.title(kind), &report.subtext(), dark)
        .with_value_x_axis(&format!("{} [MB]", kind.x_axis_label()), "{value} MB")
        .with_y_axis(&y_axis_label(report));

    for (index, concurrency) in concurrencies.iter().enumerate() {
        let color = COLORS[index % COLORS.len()];
        for use_threads in [true, false] {
            let points: Vec<Vec<f64>> = report
                .results
                .measured()
                .filter(|run| {
                    run.config.max_concurrency == *concurrency
                        && run.config.use_threads == use_threads
                })
                .filter_map(|run| {
                    run.throughput_mbps.map(|speed| {
                        vec![
                            run.config.multipart_threshold as f64 / BYTES_PER_MB as f64,
                            speed,
                        ]
                    })
                })
                .collect();
            if points.is_empty() {
                continue;
            }
            let (name, symbol_size) = if use_threads {
                (
                    format!("concurrency {concurrency}, threads"),
                    THREADED_SYMBOL_SIZE,
                )
            } else {
                (
                    format!("concurrency {concurrency}, no threads"),
                    SEQUENTIAL_SYMBOL_SIZE,
                )
            };
            chart = chart.add_scatter_series(&name, points, symbol_size, color);
        }
    }

    chart.inner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::TransferDirection;
    use crate::params::SweepParams;
    use crate::result_set::ResultSet;
    use crate::transfer_config::TransferConfig;
    use std::time::Duration;

    fn report(kind: SweepKind) -> BenchmarkReport {
        let mut results = ResultSet::new(kind, TransferDirection::Download);
        for concurrency in [5, 10] {
            results.push(RunResult::measured(
                "example_1024mb.txt",
                TransferConfig::new(10 * BYTES_PER_MB, concurrency, 10 * BYTES_PER_MB, true),
                1024 * BYTES_PER_MB,
                Duration::from_secs(3),
            ));
        }
        results.push(RunResult::failed(
            "example_1024mb.txt",
            TransferConfig::default(),
            0,
            "not found",
        ));
        BenchmarkReport {
            params: SweepParams {
                sweep_kind: kind,
                direction: TransferDirection::Download,
                pretty_name: "test sweep".to_owned(),
                remark: Some("nightly".to_owned()),
                ..Default::default()
            },
            results,
            ..Default::default()
        }
    }

    #[test]
    fn title_should_mention_direction_kind_and_remark() {
        let report = report(SweepKind::FileSize);
        assert_eq!(
            report.title(chart_kind(&report)),
            "Download Throughput by File Size (nightly)"
        );
    }

    #[test]
    fn subtext_should_count_failed_runs() {
        let report = report(SweepKind::Tuning);
        let subtext = report.subtext();
        assert!(subtext.starts_with("test sweep"));
        assert!(subtext.contains("3 runs"));
        assert!(subtext.contains("1 failed"));
    }

    #[test]
    fn charts_should_render_to_html_for_both_sweep_kinds() {
        for kind in [SweepKind::FileSize, SweepKind::Tuning] {
            let chart = create_chart(&report(kind), true);
            let html = charming::HtmlRenderer::new("chart", 800, 600)
                .render(&chart)
                .unwrap();
            assert!(html.contains("Download Speed [Mbps]"));
        }
    }
}
