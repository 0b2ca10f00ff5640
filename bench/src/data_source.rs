use async_trait::async_trait;
use bytes::Bytes;
use rand::RngCore;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, trace};

/// Random content is generated and written in chunks of this size.
const WRITE_CHUNK_SIZE: usize = 8 * 1024 * 1024;

/// Creates and removes the local artifacts of a sweep.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Creates an artifact of exactly `size` bytes filled with random content.
    async fn create(&self, path: &Path, size: u64) -> std::io::Result<()>;

    /// Removes an artifact, succeeding when there is nothing to remove.
    async fn remove(&self, path: &Path) -> std::io::Result<()>;
}

#[derive(Debug, Default)]
pub struct DiskDataSource;

#[async_trait]
impl DataSource for DiskDataSource {
    async fn create(&self, path: &Path, size: u64) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let mut file = File::create(path).await?;
        let mut chunk = vec![0u8; WRITE_CHUNK_SIZE.min(size as usize)];
        let mut remaining = size;
        while remaining > 0 {
            let len = (remaining as usize).min(chunk.len());
            rand::thread_rng().fill_bytes(&mut chunk[..len]);
            file.write_all(&chunk[..len]).await?;
            remaining -= len as u64;
        }
        file.flush().await?;
        debug!("Created {} of {size} bytes", path.display());
        Ok(())
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        match tokio::fs::remove_file(path).await {
            Ok(()) => {
                debug!("Removed {}", path.display());
                Ok(())
            }
            Err(error) if error.kind() == ErrorKind::NotFound => {
                trace!("Nothing to remove at {}", path.display());
                Ok(())
            }
            Err(error) => Err(error),
        }
    }
}

/// Keeps artifacts in memory, for sweeps against clients that never touch disk.
#[derive(Debug, Default)]
pub struct MemoryDataSource {
    buffers: Mutex<HashMap<PathBuf, Bytes>>,
}

impl MemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &Path) -> Option<Bytes> {
        self.lock().get(path).cloned()
    }

    pub fn insert(&self, path: &Path, content: Bytes) {
        self.lock().insert(path.to_path_buf(), content);
    }

    pub fn size_of(&self, path: &Path) -> Option<u64> {
        self.lock().get(path).map(|content| content.len() as u64)
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<PathBuf, Bytes>> {
        self.buffers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl DataSource for MemoryDataSource {
    async fn create(&self, path: &Path, size: u64) -> std::io::Result<()> {
        let mut content = vec![0u8; size as usize];
        rand::thread_rng().fill_bytes(&mut content);
        self.insert(path, Bytes::from(content));
        Ok(())
    }

    async fn remove(&self, path: &Path) -> std::io::Result<()> {
        self.lock().remove(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn disk_artifact_should_have_requested_size() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dummy_1mb.txt");
        let size = 2 * WRITE_CHUNK_SIZE as u64 + 17;

        DiskDataSource.create(&path, size).await.unwrap();

        assert_eq!(tokio::fs::metadata(&path).await.unwrap().len(), size);
    }

    #[tokio::test]
    async fn disk_artifacts_should_differ_between_runs() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("first");
        let second = dir.path().join("second");

        DiskDataSource.create(&first, 4096).await.unwrap();
        DiskDataSource.create(&second, 4096).await.unwrap();

        assert_ne!(
            tokio::fs::read(&first).await.unwrap(),
            tokio::fs::read(&second).await.unwrap()
        );
    }

    #[tokio::test]
    async fn removing_missing_disk_artifact_should_succeed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing");

        assert!(DiskDataSource.remove(&path).await.is_ok());
    }

    #[tokio::test]
    async fn memory_artifact_should_be_created_and_removed() {
        let source = MemoryDataSource::new();
        let path = Path::new("dummy_1mb.txt");

        source.create(path, 1024).await.unwrap();
        assert_eq!(source.size_of(path), Some(1024));

        source.remove(path).await.unwrap();
        source.remove(path).await.unwrap();
        assert!(source.is_empty());
    }
}
