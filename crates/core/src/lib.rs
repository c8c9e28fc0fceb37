//! Mediaferry core — the download engine shared by the bot binary.
//!
//! # Module Structure
//!
//! - `config`: env-driven configuration and tuning constants
//! - `download`: bounded HTTP fetch and yt-dlp video fetch
//! - `error`: crate-wide error types
//! - `limiter`: injectable concurrency limiter for downloads
//! - `logging`: console + file logger initialization
//! - `process`: external process execution with timeouts

pub mod config;
pub mod download;
pub mod error;
pub mod limiter;
pub mod logging;
pub mod process;

// Re-export commonly used types for convenience
pub use download::{fetch_video, DownloadError, HttpFetcher};
pub use error::{AppError, AppResult};
pub use limiter::DownloadLimiter;
pub use logging::init_logger;
