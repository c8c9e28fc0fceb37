use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mediaferry")]
#[command(author, version, about = "Telegram bot that downloads media files and re-uploads them to chats", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Download a file over HTTP into the downloads folder
    Fetch {
        /// Source URL
        url: String,

        /// Destination name (the file is saved as <name>.<ext>)
        name: String,

        /// Target file extension
        #[arg(short, long, default_value = "pdf")]
        ext: String,
    },

    /// Download a video via yt-dlp + aria2c
    Video {
        /// Page or video URL
        url: String,

        /// Destination name (the file is saved as <name>.mp4)
        name: String,

        /// Quality ceiling (maximum height in pixels)
        #[arg(short, long, default_value = "720")]
        quality: String,
    },

    /// Upload a local file to a chat
    Send {
        /// Destination chat identifier
        #[arg(long, allow_hyphen_values = true)]
        chat_id: i64,

        /// Path of the file to upload
        path: PathBuf,

        /// Caption for the uploaded file
        #[arg(short, long, default_value = "")]
        caption: String,

        /// Send as a streamable video, falling back to document on failure
        #[arg(long)]
        as_video: bool,
    },

    /// Download a file or video, then upload it to a chat
    Grab {
        /// Source URL
        url: String,

        /// Destination name (without extension)
        name: String,

        /// Destination chat identifier
        #[arg(long, allow_hyphen_values = true)]
        chat_id: i64,

        /// Fetch over plain HTTP with this extension instead of yt-dlp
        #[arg(short, long)]
        ext: Option<String>,

        /// Quality ceiling for video downloads (maximum height in pixels)
        #[arg(short, long)]
        quality: Option<String>,

        /// Caption; videos default to the probed title
        #[arg(short, long)]
        caption: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_defaults_to_pdf() {
        let cli = Cli::try_parse_from(["mediaferry", "fetch", "https://example.com/dummy.pdf", "sample_pdf"]).unwrap();
        match cli.command {
            Commands::Fetch { url, name, ext } => {
                assert_eq!(url, "https://example.com/dummy.pdf");
                assert_eq!(name, "sample_pdf");
                assert_eq!(ext, "pdf");
            }
            _ => panic!("expected fetch subcommand"),
        }
    }

    #[test]
    fn test_video_defaults_to_720() {
        let cli = Cli::try_parse_from(["mediaferry", "video", "https://example.com/watch?v=abc", "sample_video"])
            .unwrap();
        match cli.command {
            Commands::Video { quality, .. } => assert_eq!(quality, "720"),
            _ => panic!("expected video subcommand"),
        }
    }

    #[test]
    fn test_send_requires_chat_id() {
        assert!(Cli::try_parse_from(["mediaferry", "send", "downloads/sample.pdf"]).is_err());

        let cli = Cli::try_parse_from(["mediaferry", "send", "--chat-id", "-100123", "downloads/sample.pdf"]).unwrap();
        match cli.command {
            Commands::Send {
                chat_id,
                path,
                caption,
                as_video,
            } => {
                assert_eq!(chat_id, -100123);
                assert_eq!(path, PathBuf::from("downloads/sample.pdf"));
                assert_eq!(caption, "");
                assert!(!as_video);
            }
            _ => panic!("expected send subcommand"),
        }
    }

    #[test]
    fn test_grab_with_ext_selects_http_kind() {
        let cli = Cli::try_parse_from([
            "mediaferry",
            "grab",
            "https://example.com/dummy.pdf",
            "sample_pdf",
            "--chat-id",
            "42",
            "--ext",
            "pdf",
            "--caption",
            "Here is PDF",
        ])
        .unwrap();
        match cli.command {
            Commands::Grab { ext, quality, caption, .. } => {
                assert_eq!(ext.as_deref(), Some("pdf"));
                assert!(quality.is_none());
                assert_eq!(caption.as_deref(), Some("Here is PDF"));
            }
            _ => panic!("expected grab subcommand"),
        }
    }
}
