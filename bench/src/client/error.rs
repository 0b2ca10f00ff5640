use s3::creds::error::CredentialsError;
use s3::error::S3Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransferClientError {
    #[error("S3 error: {0}")]
    S3Error(#[from] S3Error),
    #[error("Invalid S3 credentials: {0}")]
    InvalidCredentials(#[from] CredentialsError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Unexpected status code {status} for object '{key}'")]
    UnexpectedStatus { key: String, status: u16 },
    #[error("Object '{0}' does not report its size")]
    UnknownObjectSize(String),
    #[error("Object '{key}' has {actual} bytes, expected {expected}")]
    SizeMismatch {
        key: String,
        expected: u64,
        actual: u64,
    },
    #[error("Object '{0}' not found")]
    ObjectNotFound(String),
}
