use std::fmt;

/// Structured error type for download operations.
///
/// Categorized variants instead of a single string, for better error
/// handling and debugging.
#[derive(Debug)]
pub enum DownloadError {
    /// yt-dlp specific failures (binary not found, bad exit code, etc.)
    YtDlp(String),
    /// Expected file not found after the downloader exited
    FileNotFound(String),
    /// Download or process timed out
    Timeout(String),
    /// Process execution failure (spawn, exit code)
    Process(String),
    /// Catch-all for uncategorized errors
    Other(String),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::YtDlp(msg) => write!(f, "{}", msg),
            DownloadError::FileNotFound(msg) => write!(f, "{}", msg),
            DownloadError::Timeout(msg) => write!(f, "{}", msg),
            DownloadError::Process(msg) => write!(f, "{}", msg),
            DownloadError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DownloadError {}

impl DownloadError {
    /// Returns the error subcategory for log lines
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::YtDlp(_) => "ytdlp",
            DownloadError::FileNotFound(_) => "file_not_found",
            DownloadError::Timeout(_) => "timeout",
            DownloadError::Process(_) => "process",
            DownloadError::Other(_) => "other",
        }
    }
}
