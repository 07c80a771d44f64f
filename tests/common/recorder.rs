//! Recording messenger
//!
//! Captures every outbound call instead of talking to Telegram.

#![allow(dead_code)]

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use teloxide::types::{CallbackQueryId, ChatId, InlineKeyboardButtonKind, InlineKeyboardMarkup};

use tubedrop::core::error::AppError;
use tubedrop::telegram::Messenger;

/// One recorded outbound call
#[derive(Debug, Clone)]
pub enum Sent {
    Text {
        chat_id: ChatId,
        text: String,
        keyboard: Option<InlineKeyboardMarkup>,
    },
    Markdown {
        chat_id: ChatId,
        text: String,
    },
    Audio {
        chat_id: ChatId,
        path: PathBuf,
        caption: String,
        /// Size of the file at send time
        size: u64,
    },
    Video {
        chat_id: ChatId,
        path: PathBuf,
        caption: String,
        size: u64,
    },
    CallbackAnswer {
        callback_id: String,
        text: String,
    },
}

#[derive(Debug, Default)]
pub struct RecordingMessenger {
    calls: Mutex<Vec<Sent>>,
}

impl RecordingMessenger {
    pub fn calls(&self) -> Vec<Sent> {
        self.calls.lock().unwrap().clone()
    }

    fn push(&self, sent: Sent) {
        self.calls.lock().unwrap().push(sent);
    }

    pub fn texts(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Sent::Text { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn callback_answers(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Sent::CallbackAnswer { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn attachments(&self) -> Vec<Sent> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Sent::Audio { .. } | Sent::Video { .. }))
            .collect()
    }

    /// Keyboard of the last text message that carried one
    pub fn last_keyboard(&self) -> Option<InlineKeyboardMarkup> {
        self.calls().into_iter().rev().find_map(|c| match c {
            Sent::Text { keyboard, .. } => keyboard,
            _ => None,
        })
    }
}

/// (label, callback data) per keyboard row
pub fn keyboard_rows(keyboard: &InlineKeyboardMarkup) -> Vec<Vec<(String, String)>> {
    keyboard
        .inline_keyboard
        .iter()
        .map(|row| {
            row.iter()
                .map(|b| {
                    let data = match &b.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => data.clone(),
                        other => format!("{:?}", other),
                    };
                    (b.text.clone(), data)
                })
                .collect()
        })
        .collect()
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
        keyboard: Option<InlineKeyboardMarkup>,
    ) -> Result<(), AppError> {
        self.push(Sent::Text {
            chat_id,
            text: text.to_string(),
            keyboard,
        });
        Ok(())
    }

    async fn send_markdown(&self, chat_id: ChatId, text: &str) -> Result<(), AppError> {
        self.push(Sent::Markdown {
            chat_id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_audio(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError> {
        self.push(Sent::Audio {
            chat_id,
            path: path.to_path_buf(),
            caption: caption.to_string(),
            size: file_size(path),
        });
        Ok(())
    }

    async fn send_video(&self, chat_id: ChatId, path: &Path, caption: &str) -> Result<(), AppError> {
        self.push(Sent::Video {
            chat_id,
            path: path.to_path_buf(),
            caption: caption.to_string(),
            size: file_size(path),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &CallbackQueryId, text: &str) -> Result<(), AppError> {
        self.push(Sent::CallbackAnswer {
            callback_id: callback_id.0.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}
