use crate::client::error::TransferClientError;
use crate::client::TransferClient;
use crate::config::StorageConfig;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use s3::creds::Credentials;
use s3::serde_types::Part;
use s3::{Bucket, Region};
use std::io::SeekFrom;
use std::path::Path;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt};
use tracing::{debug, error, info};
use transfer_bench_report::transfer_config::TransferConfig;

const CONTENT_TYPE: &str = "application/octet-stream";
/// Smallest part S3 accepts for every part but the last one.
const MIN_UPLOAD_PART_SIZE: u64 = 5 * 1024 * 1024;
const MAX_UPLOAD_PARTS: u64 = 10_000;

/// Transfer client for S3 compatible object stores.
#[derive(Debug)]
pub struct S3TransferClient {
    bucket: Box<Bucket>,
}

impl S3TransferClient {
    pub fn new(config: &StorageConfig) -> Result<Self, TransferClientError> {
        let credentials = Credentials::new(
            config.access_key_id.as_deref(),
            config.secret_access_key.as_deref(),
            None,
            None,
            None,
        )?;

        let endpoint = config
            .endpoint
            .clone()
            .unwrap_or_else(|| format!("https://s3.{}.amazonaws.com", config.region));
        let region = Region::Custom {
            region: config.region.clone(),
            endpoint,
        };

        let mut bucket = Bucket::new(&config.bucket, region, credentials)?;
        if config.path_style {
            bucket = bucket.with_path_style();
        }
        Ok(Self { bucket })
    }

    /// Fails when the bucket cannot be reached with the configured credentials.
    pub async fn verify_access(&self) -> Result<(), TransferClientError> {
        if let Err(error) = self.bucket.list("/".to_string(), None).await {
            error!("Cannot access bucket: {}: {error}", self.bucket.name());
            return Err(error.into());
        }
        info!("Connected to bucket: {}", self.bucket.name());
        Ok(())
    }

    async fn upload_multipart(
        &self,
        local_path: &Path,
        subject_id: &str,
        size: u64,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let part_size = upload_part_size(size, config.multipart_chunksize);
        let ranges = split_into_parts(size, part_size);
        debug!(
            "Uploading {subject_id} in {} parts of {part_size} bytes, {} in flight",
            part_count(size, part_size),
            config.effective_concurrency()
        );

        let upload = self
            .bucket
            .initiate_multipart_upload(subject_id, CONTENT_TYPE)
            .await?;
        let upload_id = upload.upload_id.as_str();

        let uploaded = stream::iter(ranges.enumerate())
            .map(|(index, (start, end))| async move {
                let chunk = read_range(local_path, start, end).await?;
                let part = self
                    .bucket
                    .put_multipart_chunk(chunk, subject_id, index as u32 + 1, upload_id, CONTENT_TYPE)
                    .await?;
                Ok::<Part, TransferClientError>(part)
            })
            .buffer_unordered(config.effective_concurrency())
            .try_collect::<Vec<Part>>()
            .await;

        let mut parts = match uploaded {
            Ok(parts) => parts,
            Err(error) => {
                error!("Multipart upload of {subject_id} failed, aborting: {error}");
                if let Err(abort_error) = self.bucket.abort_upload(subject_id, upload_id).await {
                    error!("Cannot abort multipart upload of {subject_id}: {abort_error}");
                }
                return Err(error);
            }
        };

        parts.sort_by_key(|part| part.part_number);
        let response = self
            .bucket
            .complete_multipart_upload(subject_id, upload_id, parts)
            .await?;
        check_status(subject_id, response.status_code())
    }

    async fn download_ranges(
        &self,
        subject_id: &str,
        local_path: &Path,
        size: u64,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let ranges = split_into_parts(size, config.multipart_chunksize);
        debug!(
            "Downloading {subject_id} in {} ranges, {} in flight",
            part_count(size, config.multipart_chunksize),
            config.effective_concurrency()
        );

        let file = File::create(local_path).await?;
        file.set_len(size).await?;
        drop(file);

        stream::iter(ranges)
            .map(|(start, end)| async move {
                let response = self
                    .bucket
                    .get_object_range(subject_id, start, Some(end - 1))
                    .await?;
                check_status(subject_id, response.status_code())?;
                let bytes = response.bytes();
                if bytes.len() as u64 != end - start {
                    return Err(TransferClientError::SizeMismatch {
                        key: format!("{subject_id} [{start}..{end})"),
                        expected: end - start,
                        actual: bytes.len() as u64,
                    });
                }
                write_range(local_path, start, bytes).await
            })
            .buffer_unordered(config.effective_concurrency())
            .try_collect::<Vec<()>>()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl TransferClient for S3TransferClient {
    async fn upload(
        &self,
        local_path: &Path,
        subject_id: &str,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let size = fs::metadata(local_path).await?.len();
        if size >= config.multipart_threshold {
            return self
                .upload_multipart(local_path, subject_id, size, config)
                .await;
        }

        debug!("Uploading {subject_id} in a single request");
        let content = fs::read(local_path).await?;
        let response = self
            .bucket
            .put_object_with_content_type(subject_id, &content, CONTENT_TYPE)
            .await?;
        check_status(subject_id, response.status_code())
    }

    async fn download(
        &self,
        subject_id: &str,
        local_path: &Path,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let (head, status) = self.bucket.head_object(subject_id).await?;
        check_status(subject_id, status)?;
        let size = head
            .content_length
            .and_then(|length| u64::try_from(length).ok())
            .ok_or_else(|| TransferClientError::UnknownObjectSize(subject_id.to_owned()))?;

        if size >= config.multipart_threshold {
            return self
                .download_ranges(subject_id, local_path, size, config)
                .await;
        }

        debug!("Downloading {subject_id} in a single request");
        let response = self.bucket.get_object(subject_id).await?;
        check_status(subject_id, response.status_code())?;
        fs::write(local_path, response.bytes()).await?;
        Ok(())
    }
}

fn check_status(key: &str, status: u16) -> Result<(), TransferClientError> {
    match status {
        200..=299 => Ok(()),
        404 => Err(TransferClientError::ObjectNotFound(key.to_owned())),
        status => Err(TransferClientError::UnexpectedStatus {
            key: key.to_owned(),
            status,
        }),
    }
}

/// Part size for an upload: at least the S3 minimum and small enough to stay
/// within the part count limit.
fn upload_part_size(size: u64, chunksize: u64) -> u64 {
    chunksize
        .max(MIN_UPLOAD_PART_SIZE)
        .max(size.div_ceil(MAX_UPLOAD_PARTS))
}

fn part_count(size: u64, part_size: u64) -> u64 {
    size.div_ceil(part_size.max(1))
}

/// Half-open byte ranges covering `size` bytes in steps of `part_size`,
/// produced as the transfer consumes them.
fn split_into_parts(size: u64, part_size: u64) -> impl DoubleEndedIterator<Item = (u64, u64)> {
    let part_size = part_size.max(1);
    (0..part_count(size, part_size)).map(move |index| {
        let start = index * part_size;
        (start, start.saturating_add(part_size).min(size))
    })
}

async fn read_range(path: &Path, start: u64, end: u64) -> Result<Vec<u8>, TransferClientError> {
    let mut file = File::open(path).await?;
    file.seek(SeekFrom::Start(start)).await?;
    let mut buffer = vec![0u8; (end - start) as usize];
    file.read_exact(&mut buffer).await?;
    Ok(buffer)
}

async fn write_range(path: &Path, start: u64, data: &[u8]) -> Result<(), TransferClientError> {
    let mut file = OpenOptions::new().write(true).open(path).await?;
    file.seek(SeekFrom::Start(start)).await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
