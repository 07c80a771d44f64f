//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::commands::{handle_link_message, handle_quality_selection, handle_start_command, is_link_submission};
use super::types::{HandlerDeps, HandlerError};
use crate::download::quality::CALLBACK_PREFIX;
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Anything that matches no branch (non-link text, stickers, foreign
/// callbacks) falls through to the dispatcher's default handler.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_links = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(link_handler(deps_links))
        .branch(callback_handler(deps_callback))
}

/// /start and /help
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start | Command::Help => {
                        handle_start_command(&deps, msg.chat.id).await?;
                    }
                }
                Ok(())
            }
        },
    ))
}

/// Text messages carrying a video link
fn link_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(is_link_submission).unwrap_or(false))
        .endpoint(move |msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                handle_link_message(&deps, msg.chat.id, text).await?;
                Ok(())
            }
        })
}

/// Quality buttons (`res::<label>`)
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query()
        .filter(|q: CallbackQuery| {
            q.data
                .as_deref()
                .map(|data| data.starts_with(CALLBACK_PREFIX))
                .unwrap_or(false)
        })
        .endpoint(move |q: CallbackQuery| {
            let deps = deps.clone();
            async move {
                let chat_id = q
                    .message
                    .as_ref()
                    .map(|m| m.chat().id)
                    .unwrap_or_else(|| ChatId::from(q.from.id));
                let data = q.data.as_deref().unwrap_or_default();

                handle_quality_selection(&deps, &q.id, chat_id, data).await?;
                Ok(())
            }
        })
}
