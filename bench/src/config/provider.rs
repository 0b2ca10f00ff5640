use crate::config::validators::Validatable;
use crate::config::BenchConfig;
use crate::error::BenchError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use std::path::{Path, PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_PATH: &str = "transfer-bench.toml";
pub const ENV_PREFIX: &str = "TRANSFER_BENCH_";

/// Plain variables understood by the original benchmark scripts and the keys
/// they map to. Storage values are taken verbatim, the rest is parsed.
const LEGACY_TEXT_KEYS: [(&str, &str); 5] = [
    ("S3_BUCKET_NAME", "storage.bucket"),
    ("S3_ENDPOINT_URL", "storage.endpoint"),
    ("S3_REGION", "storage.region"),
    ("AWS_ACCESS_KEY_ID", "storage.access_key_id"),
    ("AWS_SECRET_ACCESS_KEY", "storage.secret_access_key"),
];

const LEGACY_ENV_KEYS: [(&str, &str); 10] = [
    ("FILE_SIZES", "sweep.sizes_mb"),
    ("MULTIPART_THRESHOLD", "sweep.multipart_threshold"),
    ("MAX_CONCURRENCY", "sweep.max_concurrency"),
    ("MULTIPART_CHUNKSIZE", "sweep.multipart_chunksize"),
    ("USE_THREADS", "sweep.use_threads"),
    ("TUNE_FILE_SIZE", "tune.size_mb"),
    ("TUNE_MULTIPART_THRESHOLD", "tune.multipart_thresholds"),
    ("TUNE_MAX_CONCURRENCY", "tune.max_concurrencies"),
    ("TUNE_MULTIPART_CHUNKSIZE", "tune.multipart_chunksizes"),
    ("TUNE_USE_THREADS", "tune.use_threads"),
];

/// Layers configuration sources, later ones overriding earlier ones:
/// defaults, TOML file, prefixed environment, plain environment.
#[derive(Debug, Default)]
pub struct ConfigProvider {
    path: Option<PathBuf>,
}

impl ConfigProvider {
    /// Uses the given file, which then must exist. Without one,
    /// [`DEFAULT_CONFIG_PATH`] is read when present.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn figment(&self) -> Result<Figment, BenchError> {
        let mut figment = Figment::from(Serialized::defaults(BenchConfig::default()));

        match &self.path {
            Some(path) => {
                if !path.is_file() {
                    return Err(BenchError::CannotLoadConfiguration(format!(
                        "Cannot find configuration file at path: '{}'.",
                        path.display()
                    )));
                }
                info!("Loading config from path: '{}'...", path.display());
                figment = figment.merge(Toml::file(path));
            }
            None if Path::new(DEFAULT_CONFIG_PATH).is_file() => {
                info!("Loading config from path: '{DEFAULT_CONFIG_PATH}'...");
                figment = figment.merge(Toml::file(DEFAULT_CONFIG_PATH));
            }
            None => {}
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .merge(legacy_env());
        for (name, key) in LEGACY_TEXT_KEYS {
            if let Some(value) = Env::var(name) {
                figment = figment.merge(Serialized::default(key, value));
            }
        }
        Ok(figment)
    }

    /// Extracts the layered configuration, applies `overrides` on top (the
    /// command line) and validates the result.
    pub fn load_config<F>(&self, overrides: F) -> Result<BenchConfig, BenchError>
    where
        F: FnOnce(&mut BenchConfig),
    {
        let mut config: BenchConfig = self.figment()?.extract()?;
        overrides(&mut config);
        config.validate()?;
        info!("Using config: {config}");
        Ok(config)
    }
}

fn legacy_env() -> Env {
    Env::raw()
        .only(&LEGACY_ENV_KEYS.map(|(name, _)| name))
        .map(|name| {
            LEGACY_ENV_KEYS
                .iter()
                .find(|(legacy, _)| name.as_str().eq_ignore_ascii_case(legacy))
                .map(|(_, key)| (*key).into())
                .unwrap_or_else(|| name.as_str().to_owned().into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::defaults::DEFAULT_SIZES_MB;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use transfer_bench_report::direction::TransferDirection;
    use transfer_bench_report::transfer_config::BYTES_PER_MB;

    const TEST_VARIABLES: [&str; 9] = [
        "S3_BUCKET_NAME",
        "AWS_ACCESS_KEY_ID",
        "AWS_SECRET_ACCESS_KEY",
        "TRANSFER_BENCH_STORAGE__REGION",
        "FILE_SIZES",
        "TUNE_USE_THREADS",
        "TUNE_MULTIPART_THRESHOLD",
        "TRANSFER_BENCH_STORAGE__BUCKET",
        "TRANSFER_BENCH_SWEEP__MAX_CONCURRENCY",
    ];

    fn clear_env() {
        for name in TEST_VARIABLES {
            std::env::remove_var(name);
        }
    }

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    #[serial]
    fn defaults_should_be_used_without_any_source() {
        clear_env();
        let figment = ConfigProvider::default().figment().unwrap();
        let config: BenchConfig = figment.extract().unwrap();

        assert_eq!(config.sweep.sizes_mb, DEFAULT_SIZES_MB.to_vec());
        assert_eq!(config.sweep.multipart_threshold, 50 * BYTES_PER_MB);
        assert_eq!(config.tune.direction, TransferDirection::Download);
        assert_eq!(config.tune.size_mb, 1024);
    }

    #[test]
    #[serial]
    fn toml_file_should_accept_arrays_and_human_sizes() {
        clear_env();
        let file = write_config(
            r#"
            [storage]
            bucket = "bench"
            endpoint = "http://127.0.0.1:9000"
            path_style = true

            [sweep]
            sizes_mb = [1, 2]
            multipart_threshold = "8MiB"

            [tune]
            direction = "Upload"
            multipart_thresholds = "8MiB, 16MiB"
            use_threads = ["true", "no"]
            "#,
        );

        let config = ConfigProvider::new(Some(file.path().to_path_buf()))
            .load_config(|_| {})
            .unwrap();

        assert_eq!(config.storage.bucket, "bench");
        assert!(config.storage.path_style);
        assert_eq!(config.sweep.sizes_mb, vec![1, 2]);
        assert_eq!(config.sweep.multipart_threshold, 8 * BYTES_PER_MB);
        assert_eq!(config.tune.direction, TransferDirection::Upload);
        assert_eq!(
            config.tune.multipart_thresholds,
            vec![8 * BYTES_PER_MB, 16 * BYTES_PER_MB]
        );
        assert_eq!(config.tune.use_threads, vec![true, false]);
    }

    #[test]
    #[serial]
    fn script_variables_should_override_file_and_prefixed_env() {
        clear_env();
        let file = write_config("[storage]\nbucket = \"from-file\"\n");
        std::env::set_var("TRANSFER_BENCH_STORAGE__BUCKET", "from-prefixed");
        std::env::set_var("TRANSFER_BENCH_SWEEP__MAX_CONCURRENCY", "4");
        std::env::set_var("S3_BUCKET_NAME", "from-script");
        std::env::set_var("FILE_SIZES", "100,500");
        std::env::set_var("TUNE_USE_THREADS", "True,0");
        std::env::set_var("TUNE_MULTIPART_THRESHOLD", "8388608,16777216");

        let config = ConfigProvider::new(Some(file.path().to_path_buf()))
            .load_config(|_| {})
            .unwrap();
        clear_env();

        assert_eq!(config.storage.bucket, "from-script");
        assert_eq!(config.sweep.max_concurrency, 4);
        assert_eq!(config.sweep.sizes_mb, vec![100, 500]);
        assert_eq!(config.tune.use_threads, vec![true, false]);
        assert_eq!(
            config.tune.multipart_thresholds,
            vec![8 * BYTES_PER_MB, 16 * BYTES_PER_MB]
        );
    }

    #[test]
    #[serial]
    fn missing_config_file_should_fail() {
        clear_env();
        let result = ConfigProvider::new(Some(PathBuf::from("/nonexistent/bench.toml"))).figment();
        assert!(matches!(
            result,
            Err(BenchError::CannotLoadConfiguration(_))
        ));
    }

    #[test]
    #[serial]
    fn invalid_values_should_be_rejected_on_load() {
        clear_env();
        let file = write_config("[storage]\nbucket = \"bench\"\n[sweep]\nmax_concurrency = 0\n");
        let result = ConfigProvider::new(Some(file.path().to_path_buf())).load_config(|_| {});
        assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
    }

    #[test]
    #[serial]
    fn overrides_should_apply_before_validation() {
        clear_env();
        let file = write_config("[storage]\nbucket = \"bench\"\n[sweep]\nmax_concurrency = 0\n");
        let config = ConfigProvider::new(Some(file.path().to_path_buf()))
            .load_config(|config| config.sweep.max_concurrency = 8)
            .unwrap();
        assert_eq!(config.sweep.max_concurrency, 8);
    }

    #[test]
    #[serial]
    fn numeric_storage_values_should_be_read_as_text() {
        clear_env();
        std::env::set_var("S3_BUCKET_NAME", "20240101");
        std::env::set_var("AWS_ACCESS_KEY_ID", "0012345");
        std::env::set_var("AWS_SECRET_ACCESS_KEY", "987654321");
        std::env::set_var("TRANSFER_BENCH_STORAGE__REGION", "1");

        let config = ConfigProvider::default().load_config(|_| {});
        clear_env();
        let config = config.unwrap();

        assert_eq!(config.storage.bucket, "20240101");
        assert_eq!(config.storage.access_key_id.as_deref(), Some("0012345"));
        assert_eq!(config.storage.secret_access_key.as_deref(), Some("987654321"));
        assert_eq!(config.storage.region, "1");
    }
}
