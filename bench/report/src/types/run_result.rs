use super::transfer_config::TransferConfig;
use crate::utils::round_optional_float;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Outcome tag of a single measured transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunStatus {
    #[default]
    Succeeded,
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Object key the transfer targeted.
    pub subject_id: String,
    pub config: TransferConfig,
    pub subject_size_bytes: u64,
    /// Wall-clock time of the transfer call, absent for failed runs.
    #[serde(serialize_with = "round_optional_float")]
    pub duration_secs: Option<f64>,
    /// Absent for failed runs and for runs too fast for the clock to measure.
    #[serde(serialize_with = "round_optional_float")]
    pub throughput_mbps: Option<f64>,
    #[serde(flatten)]
    pub status: RunStatus,
}

/// Megabits per second for `size_bytes` moved in `duration_secs`.
///
/// Returns `None` when the duration is zero, negative or not finite, since the
/// throughput is undefined there.
pub fn throughput_mbps(size_bytes: u64, duration_secs: f64) -> Option<f64> {
    if !duration_secs.is_finite() || duration_secs <= 0.0 {
        return None;
    }
    Some(size_bytes as f64 * 8.0 / duration_secs / 1e6)
}

impl RunResult {
    pub fn measured(
        subject_id: impl Into<String>,
        config: TransferConfig,
        subject_size_bytes: u64,
        elapsed: Duration,
    ) -> Self {
        let duration_secs = elapsed.as_secs_f64();
        Self {
            subject_id: subject_id.into(),
            config,
            subject_size_bytes,
            duration_secs: Some(duration_secs),
            throughput_mbps: throughput_mbps(subject_size_bytes, duration_secs),
            status: RunStatus::Succeeded,
        }
    }

    pub fn failed(
        subject_id: impl Into<String>,
        config: TransferConfig,
        subject_size_bytes: u64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            config,
            subject_size_bytes,
            duration_secs: None,
            throughput_mbps: None,
            status: RunStatus::Failed {
                reason: reason.into(),
            },
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, RunStatus::Failed { .. })
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match &self.status {
            RunStatus::Failed { reason } => Some(reason),
            RunStatus::Succeeded => None,
        }
    }
}
