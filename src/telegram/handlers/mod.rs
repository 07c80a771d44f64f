//! Telegram bot handler tree configuration
//!
//! This module provides the main dispatcher schema for the Telegram bot.
//! The handlers take their transport, tool and link store from `HandlerDeps`,
//! so integration tests drive the same functions with fakes.

mod commands;
mod schema;
mod types;

pub use commands::{
    handle_link_message, handle_quality_selection, handle_start_command, is_link_submission, run_download,
    select_quality, WELCOME_TEXT,
};
pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
