//! Bot initialization
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Command registration in the Telegram UI

use reqwest::ClientBuilder;
use secrecy::{ExposeSecret, SecretString};
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use teloxide::utils::command::BotCommands;

use crate::core::config;
use crate::core::error::AppError;

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Supported commands:")]
pub enum Command {
    #[command(description = "show the welcome message")]
    Start,
    #[command(description = "how to use the bot")]
    Help,
}

/// Creates a Bot instance with custom or default API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError)` - No token, invalid BOT_API_URL, or HTTP client failure
pub fn create_bot() -> Result<Bot, AppError> {
    let token = config::BOT_TOKEN
        .as_ref()
        .ok_or_else(|| AppError::Config("BOT_TOKEN (or TELOXIDE_TOKEN) is not set".to_string()))?;
    create_bot_with(token, config::BOT_API_URL.as_deref())
}

/// Creates a Bot instance from an explicit token and optional API URL.
pub fn create_bot_with(token: &SecretString, api_url: Option<&str>) -> Result<Bot, AppError> {
    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.expose_secret(), client);

    match api_url {
        Some(api_url) => {
            log::info!("Using custom Bot API URL: {}", api_url);
            let url = url::Url::parse(api_url)?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Commands shown in the Telegram UI
pub fn bot_command_list() -> Vec<BotCommand> {
    Command::bot_commands()
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(bot_command_list()).await?;
    Ok(())
}
