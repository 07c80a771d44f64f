//! Logging initialization and startup diagnostics
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Startup configuration summary

use anyhow::Result;
use secrecy::ExposeSecret;
use simplelog::*;
use std::fs::File;

use crate::core::config;

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
/// * `level` - Maximum level for both sinks
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to create the log file or a logger is already set
pub fn init_logger(log_file_path: &str, level: LevelFilter) -> Result<()> {
    let log_file = File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    let config = ConfigBuilder::new()
        .add_filter_ignore_str("hyper")
        .add_filter_ignore_str("reqwest")
        .build();

    CombinedLogger::init(vec![
        TermLogger::new(level, config.clone(), TerminalMode::Mixed, ColorChoice::Auto),
        WriteLogger::new(level, config, log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the effective configuration at application startup
///
/// The bot token is never printed; only whether it is present and its length.
pub fn log_startup_configuration() {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("⚙️  Configuration");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    match config::BOT_TOKEN.as_ref() {
        Some(token) => log::info!("✅ BOT_TOKEN: set ({} chars)", token.expose_secret().len()),
        None => log::error!("❌ BOT_TOKEN: not set (also checked TELOXIDE_TOKEN)"),
    }

    match config::BOT_API_URL.as_deref() {
        Some(url) => log::info!("🌐 BOT_API_URL: {}", url),
        None => log::info!("🌐 BOT_API_URL: default (api.telegram.org)"),
    }

    log::info!("🛠  YTDL_BIN: {}", config::YTDL_BIN.as_str());
    log::info!("📁 TEMP_FILES_DIR: {}", config::TEMP_FILES_DIR.display());
    log::info!("⏱  YTDLP_TIMEOUT_SECS: {}", *config::download::YTDLP_TIMEOUT_SECS);
    log::info!(
        "📦 Max upload size: {} MiB",
        config::download::MAX_FILE_SIZE_BYTES / (1024 * 1024)
    );
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
}
