//! Mediaferry — Telegram bot that downloads media files and re-uploads
//! them to chats.
//!
//! The download engine lives in `mediaferry-core`; this crate adds the
//! Telegram layer and the CLI binary.
//!
//! # Module Structure
//!
//! - `cli`: command-line interface
//! - `telegram`: bot construction and file uploads

pub mod cli;
pub mod telegram;

// Re-export commonly used types for convenience
pub use telegram::{create_bot, send_document, send_video_with_fallback, UploadOutcome};
