//! Delivery of a download verdict to the chat.

use teloxide::types::ChatId;

use crate::download::error::DownloadError;
use crate::download::fetch::DownloadedMedia;
use crate::download::quality::MediaKind;
use crate::telegram::messenger::Messenger;

/// Caption prefix for audio attachments
pub const AUDIO_CAPTION_PREFIX: &str = "🎧";

/// Caption prefix for video attachments
pub const VIDEO_CAPTION_PREFIX: &str = "🎬";

/// Caption for a delivered file: kind emoji followed by the file name.
pub fn caption_for(kind: MediaKind, file_name: &str) -> String {
    let prefix = match kind {
        MediaKind::Audio => AUDIO_CAPTION_PREFIX,
        MediaKind::Video => VIDEO_CAPTION_PREFIX,
    };
    format!("{} {}", prefix, file_name)
}

/// Sends the file as audio or video, or the fixed failure text.
///
/// Transport errors are logged and swallowed: the request is over either way.
/// The working directory is removed when `outcome` is dropped at the end.
pub async fn deliver(messenger: &dyn Messenger, chat_id: ChatId, outcome: Result<DownloadedMedia, DownloadError>) {
    match outcome {
        Ok(media) => {
            let caption = caption_for(media.kind, &media.file_name());
            log::info!(
                "📤 Sending {:?} {} ({} bytes) to chat {}",
                media.kind,
                media.path.display(),
                media.size_bytes,
                chat_id
            );

            let sent = match media.kind {
                MediaKind::Audio => messenger.send_audio(chat_id, &media.path, &caption).await,
                MediaKind::Video => messenger.send_video(chat_id, &media.path, &caption).await,
            };

            match sent {
                Ok(()) => log::info!("✅ Delivered {} to chat {}", media.file_name(), chat_id),
                Err(e) => log::error!("❌ Failed to send {} to chat {}: {}", media.file_name(), chat_id, e),
            }
        }
        Err(err) => {
            log::warn!("Download for chat {} ended with {}: {}", chat_id, err.subcategory(), err);
            if let Err(e) = messenger.send_text(chat_id, err.user_message(), None).await {
                log::error!("❌ Failed to notify chat {} about {}: {}", chat_id, err.subcategory(), e);
            }
        }
    }
}
