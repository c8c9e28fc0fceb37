//! Video downloads via yt-dlp with aria2c as the external downloader.
//!
//! The command line is built as an argument vector — the URL, the output
//! path, and the quality ceiling are each a single argv element, so
//! nothing the caller supplies is ever interpreted by a shell.
//!
//! Success requires both a zero exit status and the output file existing
//! afterward; yt-dlp can exit cleanly without producing anything (e.g.
//! when an extractor bails out early).

use std::path::{Path, PathBuf};
use tokio::process::Command;
use url::Url;

use crate::config;
use crate::download::error::DownloadError;
use crate::error::AppResult;
use crate::process::run_with_timeout;

/// yt-dlp argument vector for one video download.
///
/// `bv[height<=Q]+ba/b`: best video capped at the quality ceiling plus
/// best audio, falling back to the best combined format.
fn build_download_args(url: &str, output: &Path, quality: &str) -> Vec<String> {
    vec![
        "-f".to_string(),
        format!("bv[height<={}]+ba/b", quality),
        "-o".to_string(),
        output.display().to_string(),
        "--external-downloader".to_string(),
        "aria2c".to_string(),
        "--downloader-args".to_string(),
        format!(
            "aria2c: -x {} -j {}",
            config::download::ARIA2C_CONNECTIONS,
            config::download::ARIA2C_PARALLEL_JOBS
        ),
        url.to_string(),
    ]
}

/// Downloads `url` into `<download_dir>/<name>.mp4` using the configured
/// yt-dlp binary.
///
/// Returns the file path on success, or `None` when yt-dlp exits non-zero
/// or the output file is missing afterward. Failures are logged here;
/// callers only check for the sentinel.
pub async fn fetch_video(url: &str, name: &str, quality: &str) -> Option<PathBuf> {
    fetch_video_with(&config::YTDL_BIN, &config::download_dir(), url, name, quality).await
}

/// [`fetch_video`] with an explicit binary and download folder.
pub async fn fetch_video_with(bin: &str, download_dir: &Path, url: &str, name: &str, quality: &str) -> Option<PathBuf> {
    match try_fetch_video(bin, download_dir, url, name, quality).await {
        Ok(path) => {
            log::info!("✅ Video downloaded: {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("❌ Failed to download video: {} - {}", url, e);
            None
        }
    }
}

async fn try_fetch_video(bin: &str, download_dir: &Path, url: &str, name: &str, quality: &str) -> AppResult<PathBuf> {
    let url = Url::parse(url)?;

    std::fs::create_dir_all(download_dir)?;
    let output_path = download_dir.join(format!("{}.mp4", name));

    let args = build_download_args(url.as_str(), &output_path, quality);
    log::info!("▶️ Running: {} {}", bin, args.join(" "));

    let mut cmd = Command::new(bin);
    cmd.args(&args);
    let output = run_with_timeout(&mut cmd, config::download::ytdlp_timeout()).await?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(DownloadError::YtDlp(format!(
            "yt-dlp exited with {:?}: {}",
            output.status.code(),
            stderr.trim()
        ))
        .into());
    }

    if !output_path.exists() {
        return Err(DownloadError::FileNotFound(format!(
            "File not found after download: {}",
            output_path.display()
        ))
        .into());
    }

    Ok(output_path)
}

/// Probes the media title via `yt-dlp --dump-json` (no download).
///
/// Used for default upload captions. Any failure just yields `None`.
pub async fn probe_video_title(url: &str) -> Option<String> {
    probe_title_with(&config::YTDL_BIN, url).await
}

async fn probe_title_with(bin: &str, url: &str) -> Option<String> {
    let mut cmd = Command::new(bin);
    cmd.args(["--dump-json", "--no-playlist", url]);

    let output = run_with_timeout(&mut cmd, config::download::probe_timeout()).await.ok()?;
    if !output.status.success() {
        return None;
    }

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).ok()?;
    value.get("title").and_then(|t| t.as_str()).map(str::to_string)
}

/// Logs the yt-dlp version at startup so misconfigured installs are
/// visible before the first download fails.
pub async fn log_ytdlp_version() {
    let bin = &*config::YTDL_BIN;
    let mut cmd = Command::new(bin.as_str());
    cmd.arg("--version");

    match run_with_timeout(&mut cmd, config::download::probe_timeout()).await {
        Ok(output) if output.status.success() => {
            let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
            log::info!("Current yt-dlp version: {}", version);
        }
        Ok(output) => {
            log::warn!(
                "yt-dlp version check failed (exit code: {:?}); video downloads may not work",
                output.status.code()
            );
        }
        Err(e) => {
            log::warn!("Failed to run {} --version: {}; video downloads may not work", bin, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_download_args_matches_contract() {
        let output = PathBuf::from("downloads/sample_video.mp4");
        let args = build_download_args("https://example.com/watch?v=abc", &output, "720");

        assert_eq!(
            args,
            vec![
                "-f",
                "bv[height<=720]+ba/b",
                "-o",
                "downloads/sample_video.mp4",
                "--external-downloader",
                "aria2c",
                "--downloader-args",
                "aria2c: -x 16 -j 32",
                "https://example.com/watch?v=abc",
            ]
        );
    }

    #[test]
    fn test_url_stays_a_single_argument() {
        // A hostile URL is one argv element, never a shell fragment.
        let url = "https://example.com/a?b=c&d=e; rm -rf \"$HOME\"";
        let output = PathBuf::from("downloads/x.mp4");
        let args = build_download_args(url, &output, "480");

        assert_eq!(args.last().map(String::as_str), Some(url));
        assert_eq!(args.iter().filter(|a| a.contains("rm -rf")).count(), 1);
    }

    #[test]
    fn test_quality_ceiling_lands_in_format_selector() {
        let output = PathBuf::from("downloads/x.mp4");
        let args = build_download_args("https://example.com/v", &output, "360");
        assert_eq!(args[1], "bv[height<=360]+ba/b");
    }
}
