use crate::client::error::TransferClientError;
use thiserror::Error;
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::transfer_config::TransferConfig;
use transfer_bench_report::ReportError;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Cannot load configuration: {0}")]
    CannotLoadConfiguration(String),
    #[error("{direction} of '{subject_id}' with {config} failed: {source}")]
    TransferFailed {
        direction: TransferDirection,
        subject_id: String,
        config: TransferConfig,
        #[source]
        source: TransferClientError,
    },
    #[error("Cannot create transfer client: {0}")]
    CannotCreateClient(#[source] TransferClientError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Report error: {0}")]
    ReportError(#[from] ReportError),
}

impl From<figment::Error> for BenchError {
    fn from(error: figment::Error) -> Self {
        BenchError::CannotLoadConfiguration(error.to_string())
    }
}
