//! Tubedrop - Telegram bot that turns a YouTube link into a video or mp3
//!
//! The user sends a link, picks a quality from an inline keyboard, and the bot
//! runs yt-dlp in an isolated working directory and sends the result back.
//!
//! # Module Structure
//!
//! - `core`: Configuration, errors, logging, subprocess helpers
//! - `storage`: Pending-link store
//! - `download`: Quality options, yt-dlp invocation, orchestration, delivery
//! - `telegram`: Bot setup, dispatcher schema, keyboards, transport

pub mod cli;
pub mod core;
pub mod download;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use download::{DownloadError, DownloadedMedia, MediaTool, Quality, YtDlpTool};
pub use storage::{InMemoryLinkStore, LinkStore};
pub use telegram::{HandlerDeps, Messenger, TelegramMessenger};
