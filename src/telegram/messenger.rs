//! Outbound messaging
//!
//! Handlers and delivery talk to the chat through `Messenger`, so the whole
//! request flow can run against a recording fake in tests.

use async_trait::async_trait;
use std::path::Path;
use teloxide::prelude::*;
use teloxide::types::{CallbackQueryId, InlineKeyboardMarkup, InputFile};

use crate::core::error::AppError;
use crate::telegram::markdown::send_markdown_or_plain;

/// The outbound calls the bot makes, each scoped to one chat.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Plain text, optionally with an inline keyboard.
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), AppError>;

    /// MarkdownV2 text, re-sent escaped if the markup is rejected.
    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), AppError>;

    async fn send_audio(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError>;

    async fn send_video(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError>;

    /// Answers a button press with a short notice.
    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: &str) -> Result<(), AppError>;
}

/// `Messenger` backed by the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), AppError> {
        let mut req = self.bot.send_message(chat_id, text);
        if let Some(kb) = keyboard {
            req = req.reply_markup(kb);
        }
        req.await?;
        Ok(())
    }

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), AppError> {
        send_markdown_or_plain(&self.bot, chat_id, text).await?;
        Ok(())
    }

    async fn send_audio(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError> {
        self.bot
            .send_audio(chat_id, InputFile::file(path.to_path_buf()))
            .caption(caption)
            .await?;
        Ok(())
    }

    async fn send_video(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError> {
        self.bot
            .send_video(chat_id, InputFile::file(path.to_path_buf()))
            .caption(caption)
            .supports_streaming(true)
            .await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: &str) -> Result<(), AppError> {
        self.bot.answer_callback_query(callback_id.clone()).text(text).await?;
        Ok(())
    }
}
