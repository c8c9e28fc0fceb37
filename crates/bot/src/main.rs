use anyhow::Result;
use dotenvy::dotenv;
use teloxide::types::ChatId;

use mediaferry::cli::{Cli, Commands};
use mediaferry::telegram::{create_bot, send_document, send_video_with_fallback, UploadOutcome};
use mediaferry_core::download::{fetch_video, log_ytdlp_version, probe_video_title, HttpFetcher};
use mediaferry_core::{config, init_logger};

/// Main entry point for the bot binary.
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails or an operation produced
/// no usable result.
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env if present
    let _ = dotenv();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    let cli = Cli::parse_args();

    match cli.command {
        Commands::Fetch { url, name, ext } => {
            let fetcher = HttpFetcher::new();
            match fetcher.fetch(&url, &name, &ext).await {
                Some(path) => {
                    log::info!("Saved to {}", path.display());
                    Ok(())
                }
                None => anyhow::bail!("download failed: {}", url),
            }
        }

        Commands::Video { url, name, quality } => {
            log_ytdlp_version().await;
            match fetch_video(&url, &name, &quality).await {
                Some(path) => {
                    log::info!("Saved to {}", path.display());
                    Ok(())
                }
                None => anyhow::bail!("video download failed: {}", url),
            }
        }

        Commands::Send {
            chat_id,
            path,
            caption,
            as_video,
        } => {
            let bot = create_bot()?;
            let chat = ChatId(chat_id);

            if as_video {
                match send_video_with_fallback(&bot, chat, &path, &caption).await {
                    UploadOutcome::Failed => anyhow::bail!("upload failed: {}", path.display()),
                    _ => Ok(()),
                }
            } else {
                send_document(&bot, chat, &path, &caption).await?;
                Ok(())
            }
        }

        Commands::Grab {
            url,
            name,
            chat_id,
            ext,
            quality,
            caption,
        } => {
            let bot = create_bot()?;
            let chat = ChatId(chat_id);

            if let Some(ext) = ext {
                // Document kind: plain HTTP fetch, then send as document.
                let caption = caption.unwrap_or_default();
                let fetcher = HttpFetcher::new();
                let Some(path) = fetcher.fetch(&url, &name, &ext).await else {
                    anyhow::bail!("download failed: {}", url);
                };
                // The file is already on disk; a delivery failure is logged
                // and the pipeline returns normally.
                if let Err(e) = send_document(&bot, chat, &path, &caption).await {
                    log::error!("❌ Upload failed: {} - {}", path.display(), e);
                }
                Ok(())
            } else {
                // Video kind: yt-dlp fetch, then send with fallback.
                log_ytdlp_version().await;
                let quality = quality.unwrap_or_else(|| config::download::DEFAULT_QUALITY.to_string());
                let caption = match caption {
                    Some(caption) => caption,
                    None => probe_video_title(&url).await.unwrap_or_default(),
                };
                let Some(path) = fetch_video(&url, &name, &quality).await else {
                    anyhow::bail!("video download failed: {}", url);
                };
                match send_video_with_fallback(&bot, chat, &path, &caption).await {
                    UploadOutcome::Failed => anyhow::bail!("upload failed: {}", path.display()),
                    _ => Ok(()),
                }
            }
        }
    }
}
