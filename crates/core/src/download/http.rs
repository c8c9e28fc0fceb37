//! HttpFetcher — direct HTTP download with bounded concurrency.
//!
//! Handles generic files (PDF, image, anything with a direct URL):
//! - Single GET request, body streamed to disk chunk-by-chunk
//! - Concurrency bounded by an injectable [`DownloadLimiter`]
//! - Non-200 responses produce no file and the "no result" sentinel
//!
//! The fetcher performs no retries and no resume; an error mid-stream
//! leaves the partial file on disk for the caller to deal with.

use reqwest::{Client, StatusCode};
use std::io::Write;
use std::path::PathBuf;
use url::Url;

use crate::config;
use crate::error::{AppError, AppResult};
use crate::limiter::DownloadLimiter;

/// Download source for direct HTTP file downloads.
pub struct HttpFetcher {
    client: Client,
    limiter: DownloadLimiter,
    download_dir: PathBuf,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpFetcher {
    /// Fetcher with the process-wide limiter and the configured download folder.
    pub fn new() -> Self {
        Self::with(DownloadLimiter::shared(), config::download_dir())
    }

    /// Fetcher with an explicit limiter and download folder.
    pub fn with(limiter: DownloadLimiter, download_dir: impl Into<PathBuf>) -> Self {
        let client = Client::builder()
            .user_agent("Mozilla/5.0 (compatible; mediaferry/0.1)")
            .timeout(config::download::http_timeout())
            .connect_timeout(config::download::http_connect_timeout())
            .build()
            .expect("HTTP client build failed: user_agent + timeout config should always succeed");

        Self {
            client,
            limiter,
            download_dir: download_dir.into(),
        }
    }

    /// Path a download with this name and extension would be written to.
    fn destination(&self, name: &str, ext: &str) -> PathBuf {
        self.download_dir.join(format!("{}.{}", name, ext))
    }

    /// Downloads `url` into `<download_dir>/<name>.<ext>`.
    ///
    /// Returns the file path on success, or `None` on non-200 status or
    /// transport failure. Every failure is logged here; callers only
    /// check for the sentinel.
    pub async fn fetch(&self, url: &str, name: &str, ext: &str) -> Option<PathBuf> {
        match self.try_fetch(url, name, ext).await {
            Ok(path) => {
                log::info!("✅ Downloaded: {}", path.display());
                Some(path)
            }
            Err(e) => {
                log::error!("❌ Failed {} - {}", url, e);
                None
            }
        }
    }

    async fn try_fetch(&self, url: &str, name: &str, ext: &str) -> AppResult<PathBuf> {
        let url = Url::parse(url)?;

        // One slot per download; the permit is held until the body is on disk.
        let _permit = self.limiter.acquire().await?;

        log::info!("📥 HTTP download: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        if response.status() != StatusCode::OK {
            return Err(AppError::HttpStatus(response.status()));
        }

        // The file is created only after the status check, so a rejected
        // request leaves nothing behind.
        std::fs::create_dir_all(&self.download_dir)?;
        let path = self.destination(name, ext);
        let mut file = std::fs::File::create(&path)?;

        let mut stream = response.bytes_stream();
        use futures_util::StreamExt;

        while let Some(chunk_result) = stream.next().await {
            let chunk = chunk_result?;
            file.write_all(&chunk)?;
        }

        file.flush()?;
        Ok(path)
    }
}
