//! Bounded concurrency for downloads.
//!
//! The limiter is an explicit, injectable object rather than ambient
//! global state: the binary uses the process-wide [`DownloadLimiter::shared`]
//! instance, tests construct their own with any capacity.

use once_cell::sync::Lazy;
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

use crate::config;
use crate::download::DownloadError;
use crate::error::AppResult;

/// Process-wide limiter guarding HTTP downloads.
static SHARED: Lazy<DownloadLimiter> = Lazy::new(|| DownloadLimiter::new(config::download::MAX_CONCURRENT_DOWNLOADS));

/// Counting semaphore bounding how many downloads run at once.
///
/// Cloning is cheap and shares the underlying permit pool.
#[derive(Clone, Debug)]
pub struct DownloadLimiter {
    semaphore: Arc<Semaphore>,
}

impl DownloadLimiter {
    /// Creates a limiter with the given number of concurrent slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            semaphore: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// The process-wide limiter (capacity `config::download::MAX_CONCURRENT_DOWNLOADS`).
    pub fn shared() -> Self {
        SHARED.clone()
    }

    /// Acquires one slot, waiting if all slots are taken.
    ///
    /// The slot is released when the returned permit is dropped.
    pub async fn acquire(&self) -> AppResult<OwnedSemaphorePermit> {
        self.semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| DownloadError::Other(format!("Download limiter closed: {}", e)).into())
    }

    /// Number of slots currently free.
    pub fn available_permits(&self) -> usize {
        self.semaphore.available_permits()
    }
}

impl Default for DownloadLimiter {
    fn default() -> Self {
        Self::shared()
    }
}
