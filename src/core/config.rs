use once_cell::sync::Lazy;
use secrecy::SecretString;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
/// `None` when neither is set (or both are empty)
pub static BOT_TOKEN: Lazy<Option<SecretString>> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .ok()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .map(SecretString::from)
});

/// Custom Bot API server URL (local telegram-bot-api instance)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| non_empty_var("BOT_API_URL"));

/// Cached yt-dlp binary path
/// Read once at startup from YTDL_BIN environment variable or defaults to "yt-dlp"
pub static YTDL_BIN: Lazy<String> = Lazy::new(|| env::var("YTDL_BIN").unwrap_or_else(|_| "yt-dlp".to_string()));

/// Parent directory for per-request working directories
/// Read from TEMP_FILES_DIR environment variable, supports tilde (~) expansion
/// Defaults to the system temp directory
pub static TEMP_FILES_DIR: Lazy<PathBuf> = Lazy::new(|| {
    non_empty_var("TEMP_FILES_DIR")
        .map(|dir| PathBuf::from(shellexpand::tilde(&dir).into_owned()))
        .unwrap_or_else(env::temp_dir)
});

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: tubedrop.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "tubedrop.log".to_string()));

/// Log level (error, warn, info, debug, trace)
/// Read from LOG_LEVEL environment variable
/// Default: info
pub static LOG_LEVEL: Lazy<log::LevelFilter> = Lazy::new(|| {
    env::var("LOG_LEVEL")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::LevelFilter::Info)
});

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Download configuration
pub mod download {
    use super::Duration;
    use once_cell::sync::Lazy;
    use std::env;

    /// Telegram Bot API upload ceiling for bots (50 MiB)
    pub const MAX_FILE_SIZE_BYTES: u64 = 50 * 1024 * 1024;

    /// Default timeout for a single yt-dlp run (in seconds)
    pub const DEFAULT_YTDLP_TIMEOUT_SECS: u64 = 600; // 10 minutes

    /// Prefix of the per-request working directories
    pub const WORKDIR_PREFIX: &str = "ytbot_";

    /// Timeout for yt-dlp commands (in seconds)
    /// Read from YTDLP_TIMEOUT_SECS environment variable
    pub static YTDLP_TIMEOUT_SECS: Lazy<u64> = Lazy::new(|| {
        env::var("YTDLP_TIMEOUT_SECS")
            .ok()
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_YTDLP_TIMEOUT_SECS)
    });

    /// yt-dlp command timeout duration
    pub fn ytdlp_timeout() -> Duration {
        Duration::from_secs(*YTDLP_TIMEOUT_SECS)
    }
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls (in seconds)
    /// Large enough for a 50 MiB upload on a slow link
    pub const REQUEST_TIMEOUT_SECS: u64 = 300;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}

/// Tool probe configuration
pub mod tool {
    use super::Duration;

    /// Timeout for `yt-dlp --version` (in seconds)
    pub const VERSION_PROBE_TIMEOUT_SECS: u64 = 15;

    /// Version probe timeout duration
    pub fn version_probe_timeout() -> Duration {
        Duration::from_secs(VERSION_PROBE_TIMEOUT_SECS)
    }
}

/// Dispatcher retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum dispatcher restarts after a panic
    pub const MAX_DISPATCHER_RETRIES: u32 = 5;

    /// Base delay before a dispatcher restart (in seconds), doubled per attempt
    pub const DISPATCHER_BASE_DELAY_SECS: u64 = 2;

    /// Delay before restart number `attempt` (1-based), capped at 64s
    pub fn dispatcher_delay(attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(5);
        Duration::from_secs(DISPATCHER_BASE_DELAY_SECS << exp)
    }
}
