//! Process execution utilities with timeout support
//!
//! Provides a helper for running external processes (yt-dlp, aria2c)
//! with a timeout to prevent hung processes from blocking the pipeline.

use std::process::Output;
use std::time::Duration;
use tokio::process::Command;

use crate::download::DownloadError;
use crate::error::AppError;

/// Run an async Command with a timeout.
///
/// Returns the process Output on success, or an AppError on timeout/IO failure.
pub async fn run_with_timeout(cmd: &mut Command, timeout: Duration) -> Result<Output, AppError> {
    match tokio::time::timeout(timeout, cmd.output()).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(AppError::Io(e)),
        Err(_) => Err(DownloadError::Timeout(format!("Process timed out after {}s", timeout.as_secs())).into()),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_run_with_timeout_success() {
        let mut cmd = Command::new("true");
        let output = run_with_timeout(&mut cmd, Duration::from_secs(5)).await.unwrap();
        assert!(output.status.success());
    }

    #[tokio::test]
    async fn test_run_with_timeout_kills_hung_process() {
        let mut cmd = Command::new("sleep");
        cmd.arg("5");
        let result = run_with_timeout(&mut cmd, Duration::from_millis(100)).await;
        match result {
            Err(AppError::Download(DownloadError::Timeout(_))) => {}
            other => panic!("expected timeout error, got {:?}", other.map(|o| o.status)),
        }
    }
}
