use anyhow::Result;
use dotenvy::dotenv;
use std::path::Path;
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

use tubedrop::cli::{Cli, Commands};
use tubedrop::core::{config, init_logger, log_startup_configuration};
use tubedrop::download::fetch::fetch;
use tubedrop::download::quality::Quality;
use tubedrop::download::ytdlp::{self as ytdlp, YtDlpTool};
use tubedrop::storage::InMemoryLinkStore;
use tubedrop::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramMessenger};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, bot creation) or a
/// one-shot subcommand fails.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Log panics instead of losing them inside spawned tasks
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // .env must be loaded before the first config read
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH, *config::LOG_LEVEL)?;

    match cli.command {
        None | Some(Commands::Run) => run_bot().await,
        Some(Commands::Fetch { url, quality, output }) => run_fetch(&url, quality, &output).await,
        Some(Commands::CheckTool) => run_check_tool().await,
    }
}

/// Long-polling bot loop. Runs until Ctrl-C.
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");
    log_startup_configuration();

    ytdlp::log_tool_version(&config::YTDL_BIN).await;

    let bot = create_bot()?;

    match bot.get_me().await {
        Ok(me) => log::info!("🤖 Logged in as @{}", me.user.username.as_deref().unwrap_or("unknown")),
        Err(e) => log::warn!("getMe failed: {}. Continuing anyway.", e),
    }

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to register bot commands: {}", e);
    }

    let shutdown = CancellationToken::new();
    let deps = HandlerDeps::new(
        Arc::new(InMemoryLinkStore::new()),
        Arc::new(YtDlpTool::from_config()),
        Arc::new(TelegramMessenger::new(bot.clone())),
        shutdown.clone(),
    );
    let handler = schema(deps);

    let mut retry_count = 0;
    let max_retries = config::retry::MAX_DISPATCHER_RETRIES;

    loop {
        let bot_clone = bot.clone();
        let handler_clone = handler.clone();

        // Dispatcher runs in its own task so a panic surfaces through the JoinHandle
        let handle = tokio::spawn(async move {
            use teloxide::update_listeners::Polling;

            let listener = Polling::builder(bot_clone.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot_clone, handler_clone)
                .default_handler(|upd| async move {
                    log::trace!("Ignoring update {}", upd.id.0);
                })
                .error_handler(LoggingErrorHandler::with_custom_text("An error has occurred in the dispatcher"))
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await
        });

        match handle.await {
            Ok(()) => {
                log::info!("Dispatcher shutdown gracefully");
                break;
            }
            Err(join_err) if join_err.is_panic() => {
                log::error!("Dispatcher panicked: {}", join_err);
                if retry_count >= max_retries {
                    log::error!("Max retries reached after panic. Exiting...");
                    break;
                }
                retry_count += 1;
                let delay = config::retry::dispatcher_delay(retry_count);
                log::info!(
                    "Restarting dispatcher in {:?} (attempt {}/{})...",
                    delay,
                    retry_count,
                    max_retries
                );
                sleep(delay).await;
            }
            Err(join_err) => {
                log::warn!("Dispatcher task was cancelled: {}", join_err);
                break;
            }
        }
    }

    log::info!("Cancelling in-flight downloads");
    shutdown.cancel();

    Ok(())
}

/// One local download, copied to `output`.
async fn run_fetch(url: &str, quality: Quality, output: &Path) -> Result<()> {
    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c_token.cancel();
        }
    });

    let tool = YtDlpTool::from_config();
    match fetch(&tool, url, quality, &cancel).await {
        Ok(media) => {
            fs_err::create_dir_all(output)?;
            let target = output.join(media.file_name());
            fs_err::copy(&media.path, &target)?;
            println!("{} ({} bytes, {:?})", target.display(), media.size_bytes, media.kind);
            Ok(())
        }
        Err(e) => anyhow::bail!("{} ({})", e.user_message(), e),
    }
}

/// Prints the configured tool's version.
async fn run_check_tool() -> Result<()> {
    let version = ytdlp::probe_version(&config::YTDL_BIN).await?;
    println!("{} {}", config::YTDL_BIN.as_str(), version);
    Ok(())
}
