use crate::args::kinds::parse_flag;
use crate::config::SizeSweepConfig;
use crate::utils::parse_byte_size;
use clap::Parser;
use std::num::{NonZeroU32, NonZeroU64};

/// One fixed transfer configuration measured over a list of file sizes
#[derive(Parser, Debug, Clone, Default)]
pub struct SizeSweepArgs {
    /// Comma separated file sizes in MB (1 MB = 1024 * 1024 bytes), e.g. "100,500,1024"
    #[arg(long, short = 's', value_delimiter = ',')]
    pub sizes: Option<Vec<NonZeroU64>>,

    /// Files at or above this size are transferred in parts, e.g. "52428800" or "50MiB"
    #[arg(long, short = 't', value_parser = parse_byte_size)]
    pub multipart_threshold: Option<u64>,

    /// Maximum number of parts in flight
    #[arg(long, short = 'n')]
    pub max_concurrency: Option<NonZeroU32>,

    /// Size of a single part, e.g. "52428800" or "50MiB"
    #[arg(long, short = 'p', value_parser = parse_byte_size)]
    pub multipart_chunksize: Option<u64>,

    /// Move parts concurrently (true, 1, t, y, yes), anything else moves them one by one
    #[arg(long, action = clap::ArgAction::Set, value_parser = parse_flag)]
    pub use_threads: Option<bool>,
}

impl SizeSweepArgs {
    pub fn apply_overrides(&self, config: &mut SizeSweepConfig) {
        if let Some(sizes) = &self.sizes {
            config.sizes_mb = sizes.iter().map(|size| size.get()).collect();
        }
        if let Some(threshold) = self.multipart_threshold {
            config.multipart_threshold = threshold;
        }
        if let Some(concurrency) = self.max_concurrency {
            config.max_concurrency = concurrency.get();
        }
        if let Some(chunksize) = self.multipart_chunksize {
            config.multipart_chunksize = chunksize;
        }
        if let Some(use_threads) = self.use_threads {
            config.use_threads = use_threads;
        }
    }

    /// Options given on the command line, in their command line form.
    pub fn command_parts(&self) -> Vec<String> {
        let mut parts = Vec::new();
        if let Some(sizes) = &self.sizes {
            let sizes = sizes
                .iter()
                .map(|size| size.to_string())
                .collect::<Vec<_>>();
            parts.push(format!("--sizes {}", sizes.join(",")));
        }
        if let Some(threshold) = self.multipart_threshold {
            parts.push(format!("--multipart-threshold {threshold}"));
        }
        if let Some(concurrency) = self.max_concurrency {
            parts.push(format!("--max-concurrency {concurrency}"));
        }
        if let Some(chunksize) = self.multipart_chunksize {
            parts.push(format!("--multipart-chunksize {chunksize}"));
        }
        if let Some(use_threads) = self.use_threads {
            parts.push(format!("--use-threads {use_threads}"));
        }
        parts
    }
}
