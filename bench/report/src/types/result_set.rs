use super::direction::TransferDirection;
use super::run_result::RunResult;
use super::sweep_kind::SweepKind;
use serde::{Deserialize, Serialize};

/// Results of one sweep in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ResultSet {
    pub kind: SweepKind,
    pub direction: TransferDirection,
    runs: Vec<RunResult>,
}

impl ResultSet {
    pub fn new(kind: SweepKind, direction: TransferDirection) -> Self {
        Self {
            kind,
            direction,
            runs: Vec::new(),
        }
    }

    pub fn push(&mut self, run: RunResult) {
        self.runs.push(run);
    }

    pub fn runs(&self) -> &[RunResult] {
        &self.runs
    }

    pub fn iter(&self) -> impl Iterator<Item = &RunResult> {
        self.runs.iter()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Runs that finished and have a defined throughput.
    pub fn measured(&self) -> impl Iterator<Item = &RunResult> {
        self.runs
            .iter()
            .filter(|run| !run.is_failed() && run.throughput_mbps.is_some())
    }

    pub fn failed(&self) -> impl Iterator<Item = &RunResult> {
        self.runs.iter().filter(|run| run.is_failed())
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a RunResult;
    type IntoIter = std::slice::Iter<'a, RunResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.runs.iter()
    }
}
