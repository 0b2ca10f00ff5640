pub mod error;
pub mod s3;

use async_trait::async_trait;
use error::TransferClientError;
use std::path::Path;
use transfer_bench_report::transfer_config::TransferConfig;

/// Moves whole objects between the local filesystem and an object store.
///
/// Multipart splitting, part concurrency and retries are the implementation's
/// business; the harness only times the calls.
#[async_trait]
pub trait TransferClient: Send + Sync {
    async fn upload(
        &self,
        local_path: &Path,
        subject_id: &str,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError>;

    async fn download(
        &self,
        subject_id: &str,
        local_path: &Path,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError>;

    /// Size of a local file in bytes.
    async fn size_of(&self, local_path: &Path) -> Result<u64, TransferClientError> {
        Ok(tokio::fs::metadata(local_path).await?.len())
    }
}
