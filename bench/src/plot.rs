use charming::theme::Theme;
use charming::{Chart, ImageFormat, ImageRenderer};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{error, info};
use transfer_bench_report::report::BenchmarkReport;

const CHART_WIDTH: u32 = 1600;
const CHART_HEIGHT: u32 = 1200;

/// Renders the chart of the report. Failures are logged and swallowed, the
/// results persisted before stay valid without a chart.
pub fn plot_chart(report: &BenchmarkReport, output_directory: &Path, file_name: &str) -> Option<PathBuf> {
    let data_processing_start = Instant::now();
    let chart = transfer_bench_report::plotting::create_chart(report, true);
    let data_processing_time = data_processing_start.elapsed();

    let chart_render_start = Instant::now();
    match save_chart(&chart, file_name, output_directory) {
        Ok(chart_path) => {
            info!(
                "Generated {} chart at: {} ({} runs, data processing: {:.2?}, chart render: {:.2?})",
                transfer_bench_report::plotting::chart_kind(report),
                chart_path.display(),
                report.results.len(),
                data_processing_time,
                chart_render_start.elapsed()
            );
            Some(chart_path)
        }
        Err(error) => {
            error!("Failed to render chart {file_name}: {error}");
            None
        }
    }
}

fn save_chart(chart: &Chart, file_name: &str, output_directory: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(output_directory)?;
    let full_output_path = output_directory.join(format!("{}.png", file_name));

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT).theme(Theme::Dark);
    renderer
        .save_format(ImageFormat::Png, chart, &full_output_path)
        .map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("Failed to save PNG plot: {:?}", e),
            )
        })?;
    Ok(full_output_path)
}
