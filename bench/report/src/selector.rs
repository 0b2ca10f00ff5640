use crate::best_result::BestResult;
use crate::error::ReportError;
use crate::result_set::ResultSet;

/// Picks the run with the highest throughput.
///
/// Failed runs and runs without a defined throughput never win. When several
/// runs share the maximum, the one executed first is returned.
pub fn select_best(results: &ResultSet) -> Result<BestResult<'_>, ReportError> {
    if results.is_empty() {
        return Err(ReportError::EmptyResultSet);
    }

    let mut best: Option<BestResult<'_>> = None;
    for (position, run) in results.iter().enumerate() {
        if run.is_failed() {
            continue;
        }
        let (Some(duration_secs), Some(throughput_mbps)) = (run.duration_secs, run.throughput_mbps)
        else {
            continue;
        };
        let is_better = match &best {
            Some(current) => throughput_mbps > current.throughput_mbps(),
            None => true,
        };
        if is_better {
            best = Some(BestResult::new(
                run,
                position,
                duration_secs,
                throughput_mbps,
            ));
        }
    }

    best.ok_or(ReportError::NoSuccessfulRuns(results.len()))
}
