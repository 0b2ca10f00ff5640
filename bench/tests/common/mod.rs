#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use transfer_bench::client::error::TransferClientError;
use transfer_bench::client::TransferClient;
use transfer_bench::data_source::{DataSource, MemoryDataSource};
use transfer_bench_report::direction::TransferDirection;
use transfer_bench_report::transfer_config::TransferConfig;

/// Tracks artifact sizes only, so that sweeps over large subjects stay cheap.
#[derive(Debug, Default)]
pub struct SizedDataSource {
    artifacts: Mutex<HashMap<PathBuf, u64>>,
    created: Mutex<Vec<PathBuf>>,
    removed: Mutex<Vec<PathBuf>>,
}

impl SizedDataSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn size_of(&self, path: &Path) -> Option<u64> {
        self.artifacts.lock().unwrap().get(path).copied()
    }

    pub fn put(&self, path: &Path, size: u64) {
        self.artifacts
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), size);
    }

    pub fn is_empty(&self) -> bool {
        self.artifacts.lock().unwrap().is_empty()
    }

    pub fn created(&self) -> Vec<PathBuf> {
        self.created.lock().unwrap().clone()
    }

    pub fn removed(&self) -> Vec<PathBuf> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for SizedDataSource {
    async fn create(&self, path: &Path, size: u64) -> std::io::Result<()> {
        self.put(path, size);
        self.created.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        self.artifacts.lock().unwrap().remove(path);
        self.removed.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Wraps a [`SizedDataSource`] and fails the n-th (zero based) call to
/// `create` or `remove`. Every removal is recorded, failed ones included.
pub struct FaultyDataSource {
    inner: Arc<SizedDataSource>,
    fail_create_at: Option<usize>,
    fail_remove_at: Option<usize>,
    creates: AtomicUsize,
    removes: AtomicUsize,
    remove_attempts: Mutex<Vec<PathBuf>>,
}

impl FaultyDataSource {
    pub fn failing_create(inner: Arc<SizedDataSource>, call: usize) -> Arc<Self> {
        Arc::new(Self::new(inner, Some(call), None))
    }

    pub fn failing_remove(inner: Arc<SizedDataSource>, call: usize) -> Arc<Self> {
        Arc::new(Self::new(inner, None, Some(call)))
    }

    fn new(inner: Arc<SizedDataSource>, fail_create_at: Option<usize>, fail_remove_at: Option<usize>) -> Self {
        Self {
            inner,
            fail_create_at,
            fail_remove_at,
            creates: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
            remove_attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn remove_attempts(&self) -> Vec<PathBuf> {
        self.remove_attempts.lock().unwrap().clone()
    }
}

#[async_trait]
impl DataSource for FaultyDataSource {
    async fn create(&self, path: &Path, size: u64) -> std::io::Result<()> {
        let call = self.creates.fetch_add(1, Ordering::SeqCst);
        if self.fail_create_at == Some(call) {
            return Err(Error::new(ErrorKind::Other, "no space left on device"));
        }
        self.inner.create(path, size).await
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        let call = self.removes.fetch_add(1, Ordering::SeqCst);
        self.remove_attempts.lock().unwrap().push(path.to_path_buf());
        if self.fail_remove_at == Some(call) {
            return Err(Error::new(ErrorKind::PermissionDenied, "staging is read only"));
        }
        self.inner.remove(path).await
    }
}

/// Keeps objects in memory and moves real content between them and a
/// [`MemoryDataSource`].
pub struct MemoryTransferClient {
    staging: Arc<MemoryDataSource>,
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MemoryTransferClient {
    pub fn new(staging: Arc<MemoryDataSource>) -> Self {
        Self {
            staging,
            objects: Mutex::new(HashMap::new()),
        }
    }

    pub fn object(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }
}

#[async_trait]
impl TransferClient for MemoryTransferClient {
    async fn upload(
        &self,
        local_path: &Path,
        subject_id: &str,
        _config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let content = self
            .staging
            .get(local_path)
            .ok_or_else(|| TransferClientError::ObjectNotFound(local_path.display().to_string()))?;
        self.objects
            .lock()
            .unwrap()
            .insert(subject_id.to_owned(), content);
        Ok(())
    }

    async fn download(
        &self,
        subject_id: &str,
        local_path: &Path,
        _config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        let content = self
            .object(subject_id)
            .ok_or_else(|| TransferClientError::ObjectNotFound(subject_id.to_owned()))?;
        self.staging.insert(local_path, content);
        Ok(())
    }

    async fn size_of(&self, local_path: &Path) -> Result<u64, TransferClientError> {
        self.staging
            .size_of(local_path)
            .ok_or_else(|| TransferClientError::ObjectNotFound(local_path.display().to_string()))
    }
}

/// What the next transfer does.
#[derive(Debug, Clone)]
pub enum Step {
    Take(Duration),
    Fail(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub direction: TransferDirection,
    pub subject_id: String,
    pub local_path: PathBuf,
    pub config: TransferConfig,
    /// Whether the local artifact existed when the transfer started.
    pub artifact_present: bool,
}

/// Transfer client following a script of steps, one per transfer. Transfers
/// past the end of the script take one second.
pub struct FakeTransferClient {
    staging: Arc<SizedDataSource>,
    script: Mutex<VecDeque<Step>>,
    objects: Mutex<HashMap<String, u64>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransferClient {
    pub fn new(staging: Arc<SizedDataSource>) -> Self {
        Self {
            staging,
            script: Mutex::new(VecDeque::new()),
            objects: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn with_durations(self, seconds: &[f64]) -> Self {
        seconds.iter().fold(self, |client, secs| {
            client.with_step(Step::Take(Duration::from_secs_f64(*secs)))
        })
    }

    pub fn with_step(self, step: Step) -> Self {
        self.script.lock().unwrap().push_back(step);
        self
    }

    pub fn with_object(self, key: &str, size: u64) -> Self {
        self.objects.lock().unwrap().insert(key.to_owned(), size);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn object_size(&self, key: &str) -> Option<u64> {
        self.objects.lock().unwrap().get(key).copied()
    }

    fn record(&self, direction: TransferDirection, subject_id: &str, local_path: &Path, config: &TransferConfig) {
        self.calls.lock().unwrap().push(Call {
            direction,
            subject_id: subject_id.to_owned(),
            local_path: local_path.to_path_buf(),
            config: *config,
            artifact_present: self.staging.size_of(local_path).is_some(),
        });
    }

    async fn next_step(&self) -> Result<(), TransferClientError> {
        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Step::Take(Duration::from_secs(1)));
        match step {
            Step::Take(duration) => {
                tokio::time::sleep(duration).await;
                Ok(())
            }
            Step::Fail(reason) => Err(TransferClientError::IoError(Error::new(
                ErrorKind::Other,
                reason,
            ))),
        }
    }
}

#[async_trait]
impl TransferClient for FakeTransferClient {
    async fn upload(
        &self,
        local_path: &Path,
        subject_id: &str,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        self.record(TransferDirection::Upload, subject_id, local_path, config);
        let size = self
            .staging
            .size_of(local_path)
            .ok_or_else(|| TransferClientError::ObjectNotFound(local_path.display().to_string()))?;
        self.next_step().await?;
        self.objects
            .lock()
            .unwrap()
            .insert(subject_id.to_owned(), size);
        Ok(())
    }

    async fn download(
        &self,
        subject_id: &str,
        local_path: &Path,
        config: &TransferConfig,
    ) -> Result<(), TransferClientError> {
        self.record(TransferDirection::Download, subject_id, local_path, config);
        let size = self
            .object_size(subject_id)
            .ok_or_else(|| TransferClientError::ObjectNotFound(subject_id.to_owned()))?;
        self.next_step().await?;
        self.staging.put(local_path, size);
        Ok(())
    }

    async fn size_of(&self, local_path: &Path) -> Result<u64, TransferClientError> {
        self.staging
            .size_of(local_path)
            .ok_or_else(|| TransferClientError::ObjectNotFound(local_path.display().to_string()))
    }
}
