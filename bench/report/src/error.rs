use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot select the best configuration from an empty result set")]
    EmptyResultSet,
    #[error("None of the {0} runs finished with a measurable throughput")]
    NoSuccessfulRuns(usize),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Malformed results file: {0}")]
    MalformedResults(String),
    #[error("Cannot render chart: {0}")]
    ChartError(String),
}
