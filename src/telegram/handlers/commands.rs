//! Handler implementations: /start, link submission, quality selection

use indoc::indoc;
use teloxide::types::{CallbackQueryId, ChatId};
use tokio::task::JoinHandle;

use super::types::{HandlerDeps, HandlerError};
use crate::download::error::SelectionError;
use crate::download::fetch::fetch_with_options;
use crate::download::quality::{parse_callback_data, Quality};
use crate::download::send::deliver;
use crate::telegram::menu::{quality_keyboard, QUALITY_PROMPT};

/// Welcome text (MarkdownV2)
pub const WELCOME_TEXT: &str = indoc! {"
    👋 *Welcome to the YouTube Downloader Bot\\!*

    🎥 Send me any YouTube link and choose your desired resolution\\.

    ⚠️ Please use this bot only for your own content or with permission\\.

    Let's get started: just send the link below\\!"};

/// Marker a message must contain to be treated as a video link.
pub const LINK_MARKER: &str = "youtu";

/// Whether a text message is a link submission.
pub fn is_link_submission(text: &str) -> bool {
    text.contains(LINK_MARKER)
}

/// Handle /start and /help
pub async fn handle_start_command(deps: &HandlerDeps, chat_id: ChatId) -> Result<(), HandlerError> {
    deps.messenger.send_markdown(chat_id, WELCOME_TEXT).await?;
    Ok(())
}

/// Stores the link as the chat's pending request and shows the quality menu.
///
/// A link already pending for the chat is replaced.
pub async fn handle_link_message(deps: &HandlerDeps, chat_id: ChatId, text: &str) -> Result<(), HandlerError> {
    let link = text.trim().to_string();
    log::info!("🔗 Link from chat {}: {}", chat_id, link);
    deps.link_store.set(chat_id, link);

    deps.messenger
        .send_text(chat_id, QUALITY_PROMPT, Some(quality_keyboard()))
        .await?;
    Ok(())
}

/// Resolves a quality callback to a pending link.
///
/// Checks the token before touching the store, so an unknown token never
/// consumes the pending link.
pub fn select_quality(deps: &HandlerDeps, chat_id: ChatId, token: &str) -> Result<(String, Quality), SelectionError> {
    let quality = Quality::from_token(token).ok_or_else(|| SelectionError::UnknownQuality(token.to_string()))?;
    let link = deps.link_store.take(chat_id).ok_or(SelectionError::NoPendingLink)?;
    Ok((link, quality))
}

/// Handles a `res::<label>` button press.
///
/// Answers the callback, then spawns the download as its own task and returns
/// right away. The handle of that task is returned (`None` when nothing was
/// started) so callers can wait for it.
pub async fn handle_quality_selection(
    deps: &HandlerDeps,
    callback_id: &CallbackQueryId,
    chat_id: ChatId,
    data: &str,
) -> Result<Option<JoinHandle<()>>, HandlerError> {
    let Some(token) = parse_callback_data(data) else {
        log::debug!("Ignoring callback without quality prefix: {}", data);
        return Ok(None);
    };

    let (link, quality) = match select_quality(deps, chat_id, token) {
        Ok(selection) => selection,
        Err(e) => {
            log::info!("Quality selection rejected for chat {}: {}", chat_id, e);
            deps.messenger.answer_callback(callback_id, e.notice()).await?;
            return Ok(None);
        }
    };

    log::info!("🎯 Chat {} selected {} for {}", chat_id, quality.label(), link);

    if let Err(e) = deps
        .messenger
        .answer_callback(callback_id, &quality.downloading_notice())
        .await
    {
        log::warn!("Failed to answer callback for chat {}: {}", chat_id, e);
    }

    let worker_deps = deps.clone();
    let handle = tokio::spawn(async move {
        run_download(&worker_deps, chat_id, &link, quality).await;
    });

    Ok(Some(handle))
}

/// Downloads `link` at `quality` and delivers the verdict to `chat_id`.
pub async fn run_download(deps: &HandlerDeps, chat_id: ChatId, link: &str, quality: Quality) {
    let outcome = fetch_with_options(
        deps.tool.as_ref(),
        link,
        quality,
        &deps.shutdown,
        &deps.fetch_options,
    )
    .await;
    deliver(deps.messenger.as_ref(), chat_id, outcome).await;
}
