//! Download management: bounded HTTP fetch and external-process video fetch.

pub mod error;
pub mod http;
pub mod ytdlp;

// Re-exports for convenience
pub use error::DownloadError;
pub use http::HttpFetcher;
pub use ytdlp::{fetch_video, fetch_video_with, log_ytdlp_version, probe_video_title};
