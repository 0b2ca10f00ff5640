use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{EnvFilter, LevelFilter},
    fmt::{self},
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

const DEFAULT_LOG_FILTER: &str = "info";

/// Console and optional file logging. Guards must outlive the benchmark,
/// otherwise buffered lines are lost.
pub struct Logging {
    file_guard: Option<WorkerGuard>,
    stdout_guard: Option<WorkerGuard>,
}

impl Default for Logging {
    fn default() -> Self {
        Self::new()
    }
}

impl Logging {
    pub fn new() -> Self {
        Logging {
            file_guard: None,
            stdout_guard: None,
        }
    }

    pub fn init(&mut self, quiet: bool, log_file: &Option<PathBuf>) -> Result<&mut Self, String> {
        let mut layers = vec![];

        let (stdout_writer, stdout_guard) = tracing_appender::non_blocking(std::io::stdout());
        let stdout_filter = if quiet {
            EnvFilter::new("off")
        } else {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
        };

        let stdout_layer = fmt::Layer::default()
            .with_target(false)
            .with_writer(stdout_writer)
            .with_filter(stdout_filter)
            .boxed();

        self.stdout_guard = Some(stdout_guard);
        layers.push(stdout_layer);

        if let Some(file_path) = log_file {
            let _ = std::fs::remove_file(file_path);
            let file_appender = tracing_appender::rolling::never("", file_path);
            let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

            let file_layer = fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(non_blocking_file)
                .with_filter(LevelFilter::TRACE)
                .boxed();
            self.file_guard = Some(file_guard);

            layers.push(file_layer);
        }

        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .map_err(|error| format!("Cannot set up logging: {error}"))?;

        Ok(self)
    }
}
