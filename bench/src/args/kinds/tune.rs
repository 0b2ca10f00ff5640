use crate::args::kinds::parse_flag;
use crate::config::TuneConfig;
use crate::utils::parse_byte_size;
use clap::Parser;
use std::num::{NonZeroU32, NonZeroU64};
use std::str::FromStr;
use transfer_bench_report::direction::TransferDirection;

/// Every combination of threshold, concurrency, chunksize and use_threads measured on one file
#[derive(Parser, Debug, Clone, Default)]
pub struct TuneArgs {
    /// Transfer direction to tune
    #[arg(long, short = 'd', value_parser = TransferDirection::from_str)]
    pub direction: Option<TransferDirection>,

    /// File size in MB (1 MB = 1024 * 1024 bytes)
    #[arg(long, short = 's')]
    pub size: Option<NonZeroU64>,

    /// Comma separated multipart thresholds, e.g. "8MiB,16MiB,50MiB"
    #[arg(long, short = 't', value_delimiter = ',', value_parser = parse_byte_size)]
    pub thresholds: Option<Vec<u64>>,

    /// Comma separated max concurrencies, e.g. "5,10,20"
    #[arg(long, short = 'n', value_delimiter = ',')]
    pub concurrencies: Option<Vec<NonZeroU32>>,

    /// Comma separated multipart chunksizes, e.g. "8MiB,16MiB,50MiB"
    #[arg(long, short = 'p', value_delimiter = ',', value_parser = parse_byte_size)]
    pub chunksizes: Option<Vec<u64>>,

    /// Comma separated use_threads values, e.g. "true,false"
    #[arg(long, value_delimiter = ',', value_parser = parse_flag)]
    pub use_threads: Option<Vec<bool>>,
}

impl TuneArgs {
    pub fn apply_overrides(&self, config: &mut TuneConfig) {
        if let Some(direction) = self.direction {
            config.direction = direction;
        }
        if let Some(size) = self.size {
            config.size_mb = size.get();
        }
        if let Some(thresholds) = &self.thresholds {
            config.multipart_thresholds = thresholds.clone();
        }
        if let Some(concurrencies) = &self.concurrencies {
            config.max_concurrencies = concurrencies.iter().map(|value| value.get()).collect();
        }
        if let Some(chunksizes) = &self.chunksizes {
            config.multipart_chunksizes = chunksizes.clone();
        }
        if let Some(use_threads) = &self.use_threads {
            config.use_threads = use_threads.clone();
        }
    }

    pub fn command_parts(&self) -> Vec<String> {
        fn join<T: ToString>(values: &[T]) -> String {
            values
                .iter()
                .map(T::to_string)
                .collect::<Vec<_>>()
                .join(",")
        }

        let mut parts = Vec::new();
        if let Some(direction) = self.direction {
            parts.push(format!("--direction {}", direction.as_str()));
        }
        if let Some(size) = self.size {
            parts.push(format!("--size {size}"));
        }
        if let Some(thresholds) = &self.thresholds {
            parts.push(format!("--thresholds {}", join(thresholds)));
        }
        if let Some(concurrencies) = &self.concurrencies {
            parts.push(format!("--concurrencies {}", join(concurrencies)));
        }
        if let Some(chunksizes) = &self.chunksizes {
            parts.push(format!("--chunksizes {}", join(chunksizes)));
        }
        if let Some(use_threads) = &self.use_threads {
            parts.push(format!("--use-threads {}", join(use_threads)));
        }
        parts
    }
}
