use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Download folder path
/// Read from DOWNLOAD_FOLDER environment variable
/// Defaults to the relative `downloads` directory, created on first use
pub static DOWNLOAD_FOLDER: Lazy<String> =
    Lazy::new(|| env::var("DOWNLOAD_FOLDER").unwrap_or_else(|_| "downloads".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: mediaferry.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "mediaferry.log".to_string()));

/// Download folder as a path.
pub fn download_dir() -> PathBuf {
    PathBuf::from(&*DOWNLOAD_FOLDER)
}

/// Download configuration
pub mod download {
    use super::Duration;

    /// Maximum number of concurrent HTTP downloads
    pub const MAX_CONCURRENT_DOWNLOADS: usize = 5;

    /// Total timeout for a single HTTP download (in seconds)
    pub const HTTP_TIMEOUT_SECS: u64 = 600;

    /// Connect timeout for HTTP downloads (in seconds)
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 30;

    /// Timeout for yt-dlp download commands (in seconds)
    pub const YTDLP_TIMEOUT_SECS: u64 = 240;

    /// Timeout for quick yt-dlp probes like --version and --dump-json (in seconds)
    pub const PROBE_TIMEOUT_SECS: u64 = 10;

    /// aria2c connections per server (-x)
    pub const ARIA2C_CONNECTIONS: u32 = 16;

    /// aria2c parallel download jobs (-j)
    pub const ARIA2C_PARALLEL_JOBS: u32 = 32;

    /// Default video quality ceiling (maximum height in pixels)
    pub const DEFAULT_QUALITY: &str = "720";

    /// HTTP download timeout duration
    pub fn http_timeout() -> Duration {
        Duration::from_secs(HTTP_TIMEOUT_SECS)
    }

    /// HTTP connect timeout duration
    pub fn http_connect_timeout() -> Duration {
        Duration::from_secs(HTTP_CONNECT_TIMEOUT_SECS)
    }

    /// yt-dlp command timeout duration
    pub fn ytdlp_timeout() -> Duration {
        Duration::from_secs(YTDLP_TIMEOUT_SECS)
    }

    /// yt-dlp probe timeout duration
    pub fn probe_timeout() -> Duration {
        Duration::from_secs(PROBE_TIMEOUT_SECS)
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Telegram Bot API calls (in seconds)
    /// Large enough for big file uploads, especially via a local Bot API server
    pub const REQUEST_TIMEOUT_SECS: u64 = 900;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
