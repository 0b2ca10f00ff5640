use super::kind::SweepKindCommand;
use crate::config::BenchConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use transfer_bench_report::params::SweepParams;
use transfer_bench_report::sweep_kind::SweepKind;

pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_STAGING_DIR: &str = ".";
const ENV_PREFIX: &str = "TRANSFER_BENCH_";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct TransferBenchArgs {
    /// Sweep kind
    #[command(subcommand)]
    pub sweep_kind: SweepKindCommand,

    /// TOML configuration file, transfer-bench.toml is used when present and nothing is given
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Output directory for results, charts and the report
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Directory holding the local files while they are transferred
    #[arg(long, short = 's', default_value = DEFAULT_STAGING_DIR)]
    pub staging_dir: PathBuf,

    /// Identifier for the benchmark run (defaults to hostname if not provided)
    #[arg(long)]
    pub identifier: Option<String>,

    /// Additional remark for the benchmark (e.g., no-cache)
    #[arg(long)]
    pub remark: Option<String>,

    /// Stop the sweep at the first failed transfer instead of recording it and moving on
    #[arg(long, default_value_t = false)]
    pub fail_fast: bool,

    /// Write logs at trace level to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable console logging
    #[arg(long, short = 'q', default_value_t = false)]
    pub quiet: bool,
}

impl TransferBenchArgs {
    pub fn apply_overrides(&self, config: &mut BenchConfig) {
        self.sweep_kind.apply_overrides(config);
    }

    /// Human-readable name of the sweep, used in chart subtitles.
    pub fn generate_pretty_name(&self, config: &BenchConfig) -> String {
        let direction = self.sweep_kind.direction(config);
        let mut name = match self.sweep_kind.as_simple_kind() {
            Some(SweepKind::Tuning) => format!(
                "{direction} tuning, {}MB file, {} combinations",
                config.tune.size_mb,
                config.tune.multipart_thresholds.len()
                    * config.tune.max_concurrencies.len()
                    * config.tune.multipart_chunksizes.len()
                    * config.tune.use_threads.len()
            ),
            _ => format!(
                "{direction}, {} file sizes, {} parts in flight",
                config.sweep.sizes_mb.len(),
                config.sweep.transfer_config().effective_concurrency()
            ),
        };

        if let Some(remark) = &self.remark {
            name.push_str(&format!(" ({})", remark));
        }

        name
    }

    pub fn sweep_params(&self, config: &BenchConfig) -> SweepParams {
        let sweep_kind = self.sweep_kind.as_simple_kind().unwrap_or_default();
        let direction = self.sweep_kind.direction(config);
        let endpoint = config
            .storage
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("aws ({})", config.storage.region));

        let mut params = SweepParams {
            sweep_kind,
            direction,
            bucket: config.storage.bucket.clone(),
            endpoint,
            identifier: self.identifier.clone().or_else(default_identifier),
            remark: self.remark.clone(),
            pretty_name: self.generate_pretty_name(config),
            bench_command: recreate_bench_command(self),
            ..Default::default()
        };

        match sweep_kind {
            SweepKind::FileSize => {
                params.sizes_mb = config.sweep.sizes_mb.clone();
                params.transfer_config = Some(config.sweep.transfer_config());
            }
            SweepKind::Tuning => {
                params.sizes_mb = vec![config.tune.size_mb];
                params.multipart_thresholds = config.tune.multipart_thresholds.clone();
                params.max_concurrencies = config.tune.max_concurrencies.clone();
                params.multipart_chunksizes = config.tune.multipart_chunksizes.clone();
                params.use_threads = config.tune.use_threads.clone();
            }
        }

        params
    }
}

fn recreate_bench_command(args: &TransferBenchArgs) -> String {
    let mut parts = Vec::new();

    let bench_vars: Vec<_> = std::env::vars()
        .filter(|(k, _)| k.starts_with(ENV_PREFIX) && !is_secret(k))
        .collect();

    if !bench_vars.is_empty() {
        info!("Found env vars starting with {ENV_PREFIX}: {:?}", bench_vars);
        parts.extend(bench_vars.into_iter().map(|(k, v)| format!("{}={}", k, v)));
    }

    parts.push("transfer-bench".to_string());

    if let Some(ref config) = args.config {
        parts.push(format!("--config '{}'", config.display()));
    }

    if args.output_dir.as_os_str() != DEFAULT_OUTPUT_DIR {
        parts.push(format!("--output-dir '{}'", args.output_dir.display()));
    }

    if args.staging_dir.as_os_str() != DEFAULT_STAGING_DIR {
        parts.push(format!("--staging-dir '{}'", args.staging_dir.display()));
    }

    if let Some(ref remark) = args.remark {
        parts.push(format!("--remark '{}'", remark));
    }

    if args.fail_fast {
        parts.push("--fail-fast".to_string());
    }

    parts.push(args.sweep_kind.name().to_string());
    parts.extend(args.sweep_kind.command_parts());

    parts.join(" ")
}

fn default_identifier() -> Option<String> {
    hostname::get()
        .ok()
        .map(|name| name.to_string_lossy().to_string())
}

fn is_secret(name: &str) -> bool {
    let name = name.to_uppercase();
    name.contains("SECRET") || name.contains("ACCESS_KEY")
}

#[cfg(test)]
mod tests {
    use super::*;
    use transfer_bench_report::direction::TransferDirection;
    use transfer_bench_report::transfer_config::BYTES_PER_MB;

    fn parse(args: &[&str]) -> TransferBenchArgs {
        TransferBenchArgs::try_parse_from(std::iter::once("transfer-bench").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn size_sweep_options_should_override_config() {
        let args = parse(&[
            "upload",
            "--sizes",
            "100,500",
            "--multipart-threshold",
            "8MiB",
            "--max-concurrency",
            "4",
            "--use-threads",
            "no",
        ]);
        let mut config = BenchConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.sweep.sizes_mb, vec![100, 500]);
        assert_eq!(config.sweep.multipart_threshold, 8 * BYTES_PER_MB);
        assert_eq!(config.sweep.max_concurrency, 4);
        assert!(!config.sweep.use_threads);
        assert_eq!(
            args.sweep_kind.direction(&config),
            TransferDirection::Upload
        );
    }

    #[test]
    fn tune_options_should_override_config() {
        let args = parse(&[
            "tune",
            "--direction",
            "upload",
            "--size",
            "256",
            "--thresholds",
            "10MiB,50MiB",
            "--concurrencies",
            "5,10",
            "--use-threads",
            "true,false",
        ]);
        let mut config = BenchConfig::default();
        args.apply_overrides(&mut config);

        assert_eq!(config.tune.direction, TransferDirection::Upload);
        assert_eq!(config.tune.size_mb, 256);
        assert_eq!(
            config.tune.multipart_thresholds,
            vec![10 * BYTES_PER_MB, 50 * BYTES_PER_MB]
        );
        assert_eq!(config.tune.max_concurrencies, vec![5, 10]);
        assert_eq!(config.tune.use_threads, vec![true, false]);
    }

    #[test]
    fn zero_concurrency_should_be_rejected_by_parser() {
        let result = TransferBenchArgs::try_parse_from([
            "transfer-bench",
            "upload",
            "--max-concurrency",
            "0",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn params_should_describe_tuning_sweep() {
        let args = parse(&["--remark", "no-cache", "--fail-fast", "tune", "--size", "64"]);
        let mut config = BenchConfig::default();
        config.storage.bucket = "bench".to_owned();
        args.apply_overrides(&mut config);

        let params = args.sweep_params(&config);

        assert_eq!(params.sweep_kind, SweepKind::Tuning);
        assert_eq!(params.direction, TransferDirection::Download);
        assert_eq!(params.sizes_mb, vec![64]);
        assert_eq!(params.planned_runs(), 27);
        assert!(params.pretty_name.ends_with("(no-cache)"));
        assert!(params
            .bench_command
            .ends_with("--remark 'no-cache' --fail-fast tune --size 64"));
    }

    #[test]
    fn secrets_should_not_be_echoed_in_command() {
        assert!(is_secret("TRANSFER_BENCH_STORAGE__SECRET_ACCESS_KEY"));
        assert!(is_secret("TRANSFER_BENCH_STORAGE__ACCESS_KEY_ID"));
        assert!(!is_secret("TRANSFER_BENCH_STORAGE__BUCKET"));
    }
}
