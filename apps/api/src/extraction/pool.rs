//! Bounded pool for blocking text extraction.
//!
//! A semaphore caps in-flight extractions at the configured worker count.
//! Further requests queue on `acquire`; nothing is rejected.

use std::sync::Arc;

use anyhow::anyhow;
use bytes::Bytes;
use tokio::sync::Semaphore;

use crate::errors::AppError;
use crate::extraction::extract_text;

#[derive(Clone)]
pub struct ExtractionPool {
    permits: Arc<Semaphore>,
    workers: usize,
}

impl ExtractionPool {
    pub fn new(workers: usize) -> Self {
        Self {
            permits: Arc::new(Semaphore::new(workers)),
            workers,
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Runs [`extract_text`] on the blocking pool once a worker slot is free.
    ///
    /// The permit moves into the blocking job, so the slot stays occupied until
    /// extraction really finishes even if the awaiting request is dropped.
    pub async fn extract(&self, bytes: Bytes) -> Result<String, AppError> {
        let permit = self
            .permits
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| AppError::Internal(anyhow!("extraction pool closed: {e}")))?;

        let text = tokio::task::spawn_blocking(move || {
            let _permit = permit;
            extract_text(&bytes)
        })
        .await
        .map_err(|e| AppError::Internal(anyhow!("spawn_blocking failed in extraction: {e}")))??;

        Ok(text)
    }

    #[cfg(test)]
    fn available(&self) -> usize {
        self.permits.available_permits()
    }
}
