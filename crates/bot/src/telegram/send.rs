//! Telegram file sending with a video → document fallback.
//!
//! `send_video` rejects files Telegram cannot serve as streamable video
//! (bad container, oversize, odd codecs); in that case the same file is
//! retried once as a generic document. The outcome is a tagged result,
//! not an exception path.

use std::future::Future;
use std::path::Path;

use teloxide::prelude::*;
use teloxide::types::InputFile;
use teloxide::Bot;

use mediaferry_core::error::AppResult;

/// How an upload ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    /// Delivered with `send_video`.
    Video,
    /// `send_video` failed; delivered with the `send_document` fallback.
    Document,
    /// Both attempts failed.
    Failed,
}

impl UploadOutcome {
    /// True unless both attempts failed.
    pub fn succeeded(self) -> bool {
        !matches!(self, UploadOutcome::Failed)
    }
}

/// Runs the video attempt, then exactly one document attempt if it failed.
///
/// Parameterized over the send operations (the same closure shape the
/// real senders bind `bot`/`chat_id`/`path`/`caption` into) so the
/// sequencing is testable without the Telegram API.
async fn upload_with_fallback<T, E, FutV, FutD>(
    send_video: impl FnOnce() -> FutV,
    send_document: impl FnOnce() -> FutD,
) -> UploadOutcome
where
    E: std::fmt::Display,
    FutV: Future<Output = Result<T, E>>,
    FutD: Future<Output = Result<T, E>>,
{
    match send_video().await {
        Ok(_) => UploadOutcome::Video,
        Err(video_err) => {
            log::warn!("send_video failed, trying send_document as fallback: {}", video_err);
            match send_document().await {
                Ok(_) => UploadOutcome::Document,
                Err(doc_err) => {
                    log::error!("send_document fallback failed: {}", doc_err);
                    UploadOutcome::Failed
                }
            }
        }
    }
}

/// Uploads a video to the chat, falling back to a generic document.
///
/// The video attempt enables streaming support; the fallback reuses the
/// same path and caption. Both failures together yield
/// [`UploadOutcome::Failed`] — nothing is raised to the caller.
pub async fn send_video_with_fallback(bot: &Bot, chat_id: ChatId, file_path: &Path, caption: &str) -> UploadOutcome {
    let outcome = upload_with_fallback(
        move || async move {
            bot.send_video(chat_id, InputFile::file(file_path))
                .caption(caption)
                .supports_streaming(true)
                .await
        },
        move || async move {
            bot.send_document(chat_id, InputFile::file(file_path))
                .caption(caption)
                .await
        },
    )
    .await;

    match outcome {
        UploadOutcome::Video => log::info!("📤 Uploaded video: {}", file_path.display()),
        UploadOutcome::Document => log::warn!("⚠️ Uploaded as document (not video): {}", file_path.display()),
        UploadOutcome::Failed => log::error!("❌ Upload failed: {}", file_path.display()),
    }

    outcome
}

/// Uploads a file as a generic document. No fallback.
///
/// The error is returned to the caller; whether to absorb it is the
/// caller's decision (the grab pipeline logs and continues, the `send`
/// command propagates).
pub async fn send_document(bot: &Bot, chat_id: ChatId, file_path: &Path, caption: &str) -> AppResult<Message> {
    let message = bot
        .send_document(chat_id, InputFile::file(file_path))
        .caption(caption)
        .await?;

    log::info!("📤 Uploaded: {}", file_path.display());
    Ok(message)
}
