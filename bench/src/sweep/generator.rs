use crate::config::TuneConfig;
use crate::error::BenchError;
use transfer_bench_report::sweep_kind::SweepKind;
use transfer_bench_report::transfer_config::{TransferConfig, BYTES_PER_MB};

/// Largest subject size whose byte count fits in a `u64`.
pub const MAX_SUBJECT_SIZE_MB: u64 = u64::MAX / BYTES_PER_MB;

/// One transfer to measure: a subject of the given size moved with `config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepPoint {
    pub subject_size_mb: u64,
    pub config: TransferConfig,
}

impl SweepPoint {
    pub fn subject_size_bytes(&self) -> u64 {
        self.subject_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

/// Ordered, finite set of points. Iterating does not consume the plan, so a
/// sweep can be repeated over the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPlan {
    kind: SweepKind,
    points: Vec<SweepPoint>,
}

impl SweepPlan {
    pub fn kind(&self) -> SweepKind {
        self.kind
    }

    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SweepPoint> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl<'a> IntoIterator for &'a SweepPlan {
    type Item = &'a SweepPoint;
    type IntoIter = std::slice::Iter<'a, SweepPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Lists of knob values whose cartesian product is measured by a tuning sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningSpace {
    pub subject_size_mb: u64,
    pub multipart_thresholds: Vec<u64>,
    pub max_concurrencies: Vec<u32>,
    pub multipart_chunksizes: Vec<u64>,
    pub use_threads: Vec<bool>,
}

impl From<&TuneConfig> for TuningSpace {
    fn from(config: &TuneConfig) -> Self {
        Self {
            subject_size_mb: config.size_mb,
            multipart_thresholds: config.multipart_thresholds.clone(),
            max_concurrencies: config.max_concurrencies.clone(),
            multipart_chunksizes: config.multipart_chunksizes.clone(),
            use_threads: config.use_threads.clone(),
        }
    }
}

/// One point per size, in the given order, all sharing `config`.
pub fn fixed_sizes(sizes_mb: &[u64], config: TransferConfig) -> Result<SweepPlan, BenchError> {
    if sizes_mb.is_empty() {
        return Err(BenchError::InvalidConfiguration(
            "the list of file sizes is empty".to_owned(),
        ));
    }
    validate_config(&config)?;

    let points = sizes_mb
        .iter()
        .map(|&subject_size_mb| {
            validate_size(subject_size_mb)?;
            Ok(SweepPoint {
                subject_size_mb,
                config,
            })
        })
        .collect::<Result<Vec<_>, BenchError>>()?;

    Ok(SweepPlan {
        kind: SweepKind::FileSize,
        points,
    })
}

/// Full cartesian product of the space. Thresholds vary slowest and
/// `use_threads` fastest. Duplicate values yield duplicate points.
pub fn tuning(space: &TuningSpace) -> Result<SweepPlan, BenchError> {
    validate_size(space.subject_size_mb)?;
    let lists = [
        ("multipart thresholds", space.multipart_thresholds.is_empty()),
        ("max concurrencies", space.max_concurrencies.is_empty()),
        ("multipart chunksizes", space.multipart_chunksizes.is_empty()),
        ("use threads", space.use_threads.is_empty()),
    ];
    if let Some((name, _)) = lists.iter().find(|(_, empty)| *empty) {
        return Err(BenchError::InvalidConfiguration(format!(
            "the list of {name} is empty"
        )));
    }

    let mut points = Vec::with_capacity(
        space.multipart_thresholds.len()
            * space.max_concurrencies.len()
            * space.multipart_chunksizes.len()
            * space.use_threads.len(),
    );
    for &threshold in &space.multipart_thresholds {
        for &concurrency in &space.max_concurrencies {
            for &chunksize in &space.multipart_chunksizes {
                for &use_threads in &space.use_threads {
                    let config = TransferConfig::new(threshold, concurrency, chunksize, use_threads);
                    validate_config(&config)?;
                    points.push(SweepPoint {
                        subject_size_mb: space.subject_size_mb,
                        config,
                    });
                }
            }
        }
    }

    Ok(SweepPlan {
        kind: SweepKind::Tuning,
        points,
    })
}

fn validate_size(size_mb: u64) -> Result<(), BenchError> {
    if size_mb == 0 {
        return Err(BenchError::InvalidConfiguration(
            "subject size must be positive".to_owned(),
        ));
    }
    if size_mb.checked_mul(BYTES_PER_MB).is_none() {
        return Err(BenchError::InvalidConfiguration(format!(
            "subject size of {size_mb} MB exceeds the maximum of {MAX_SUBJECT_SIZE_MB} MB"
        )));
    }
    Ok(())
}

fn validate_config(config: &TransferConfig) -> Result<(), BenchError> {
    match config.invariant_violation() {
        Some(violation) => Err(BenchError::InvalidConfiguration(violation)),
        None => Ok(()),
    }
}
