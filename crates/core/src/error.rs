use thiserror::Error;

use crate::download::DownloadError;

/// Centralized error types for the application
///
/// All errors are converted to this enum for consistent handling.
/// Uses `thiserror` for automatic error conversion and display formatting.
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[cfg(feature = "telegram")]
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// Download/yt-dlp errors
    #[error("Download error: {0}")]
    Download(#[from] DownloadError),

    /// HTTP/Fetch errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP status code errors
    #[error("HTTP request failed with status: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

/// Helper to convert String to an uncategorized download error
impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Download(DownloadError::Other(err))
    }
}

/// Helper to convert &str to an uncategorized download error
impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Download(DownloadError::Other(err.to_string()))
    }
}
