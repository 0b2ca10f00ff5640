use byte_unit::{Byte, UnitType};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Bytes in one "MB" as subject sizes are expressed (binary megabyte).
pub const BYTES_PER_MB: u64 = 1024 * 1024;

pub const DEFAULT_MULTIPART_THRESHOLD: u64 = 50 * BYTES_PER_MB;
pub const DEFAULT_MAX_CONCURRENCY: u32 = 10;
pub const DEFAULT_MULTIPART_CHUNKSIZE: u64 = 50 * BYTES_PER_MB;
pub const DEFAULT_USE_THREADS: bool = true;

/// Tuning knobs handed to the transfer client for a single transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Objects at or above this size are moved in parts.
    pub multipart_threshold: u64,
    /// Upper bound of parts in flight at once.
    pub max_concurrency: u32,
    /// Size of a single part.
    pub multipart_chunksize: u64,
    /// When false, parts are moved one after another regardless of `max_concurrency`.
    pub use_threads: bool,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            multipart_threshold: DEFAULT_MULTIPART_THRESHOLD,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            multipart_chunksize: DEFAULT_MULTIPART_CHUNKSIZE,
            use_threads: DEFAULT_USE_THREADS,
        }
    }
}

impl TransferConfig {
    pub fn new(
        multipart_threshold: u64,
        max_concurrency: u32,
        multipart_chunksize: u64,
        use_threads: bool,
    ) -> Self {
        Self {
            multipart_threshold,
            max_concurrency,
            multipart_chunksize,
            use_threads,
        }
    }

    /// Number of parts allowed in flight, taking `use_threads` into account.
    pub fn effective_concurrency(&self) -> usize {
        if self.use_threads {
            self.max_concurrency.max(1) as usize
        } else {
            1
        }
    }

    /// Returns a description of the first violated invariant, if any.
    pub fn invariant_violation(&self) -> Option<String> {
        if self.multipart_threshold == 0 {
            return Some("multipart threshold must be greater than 0 bytes".to_owned());
        }
        if self.multipart_chunksize == 0 {
            return Some("multipart chunksize must be greater than 0 bytes".to_owned());
        }
        if self.max_concurrency == 0 {
            return Some("max concurrency must be at least 1".to_owned());
        }
        None
    }
}

pub fn format_bytes(bytes: u64) -> String {
    format!(
        "{:.2}",
        Byte::from_u64(bytes).get_appropriate_unit(UnitType::Binary)
    )
}

impl Display for TransferConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ threshold: {}, concurrency: {}, chunksize: {}, use_threads: {} }}",
            format_bytes(self.multipart_threshold),
            self.max_concurrency,
            format_bytes(self.multipart_chunksize),
            self.use_threads
        )
    }
}
