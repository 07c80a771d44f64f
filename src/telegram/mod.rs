//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod markdown;
pub mod menu;
pub mod messenger;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};
pub use menu::quality_keyboard;
pub use messenger::{Messenger, TelegramMessenger};

pub use teloxide::Bot;
