use crate::config::{BenchConfig, SizeSweepConfig, StorageConfig, TuneConfig};
use crate::error::BenchError;
use crate::sweep::generator::MAX_SUBJECT_SIZE_MB;
use tracing::error;

pub trait Validatable<E: std::error::Error> {
    fn validate(&self) -> Result<(), E>;
}

fn invalid(message: String) -> BenchError {
    error!("{message}");
    BenchError::InvalidConfiguration(message)
}

impl Validatable<BenchError> for BenchConfig {
    fn validate(&self) -> Result<(), BenchError> {
        self.storage.validate()?;
        self.sweep.validate()?;
        self.tune.validate()?;

        Ok(())
    }
}

impl Validatable<BenchError> for StorageConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.bucket.trim().is_empty() {
            return Err(invalid(
                "Storage configuration -> bucket name is required.".to_owned(),
            ));
        }

        if self.access_key_id.is_some() != self.secret_access_key.is_some() {
            return Err(invalid(
                "Storage configuration -> access key id and secret access key must be set together."
                    .to_owned(),
            ));
        }

        Ok(())
    }
}

impl Validatable<BenchError> for SizeSweepConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.sizes_mb.is_empty() {
            return Err(invalid(
                "Sweep configuration -> at least one file size is required.".to_owned(),
            ));
        }

        if self.sizes_mb.contains(&0) {
            return Err(invalid(
                "Sweep configuration -> file sizes must be positive.".to_owned(),
            ));
        }

        if self.sizes_mb.iter().any(|&size| size > MAX_SUBJECT_SIZE_MB) {
            return Err(invalid(format!(
                "Sweep configuration -> file sizes cannot exceed {MAX_SUBJECT_SIZE_MB} MB."
            )));
        }

        if let Some(violation) = self.transfer_config().invariant_violation() {
            return Err(invalid(format!("Sweep configuration -> {violation}")));
        }

        Ok(())
    }
}

impl Validatable<BenchError> for TuneConfig {
    fn validate(&self) -> Result<(), BenchError> {
        if self.size_mb == 0 {
            return Err(invalid(
                "Tune configuration -> file size must be positive.".to_owned(),
            ));
        }

        if self.size_mb > MAX_SUBJECT_SIZE_MB {
            return Err(invalid(format!(
                "Tune configuration -> file size cannot exceed {MAX_SUBJECT_SIZE_MB} MB."
            )));
        }

        let lists = [
            ("multipart thresholds", self.multipart_thresholds.len()),
            ("max concurrencies", self.max_concurrencies.len()),
            ("multipart chunksizes", self.multipart_chunksizes.len()),
            ("use threads", self.use_threads.len()),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, len)| *len == 0) {
            return Err(invalid(format!(
                "Tune configuration -> {name} cannot be empty."
            )));
        }

        if self.multipart_thresholds.contains(&0)
            || self.multipart_chunksizes.contains(&0)
            || self.max_concurrencies.contains(&0)
        {
            return Err(invalid(
                "Tune configuration -> thresholds, chunksizes and concurrencies must be positive."
                    .to_owned(),
            ));
        }

        Ok(())
    }
}
