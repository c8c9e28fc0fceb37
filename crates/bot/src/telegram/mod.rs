//! Telegram bot integration.

pub mod bot;
pub mod send;

// Re-exports for convenience
pub use bot::create_bot;
pub use send::{send_document, send_video_with_fallback, UploadOutcome};
