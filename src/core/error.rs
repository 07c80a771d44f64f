use thiserror::Error;

/// Centralized error types for the application
///
/// Per-request failures of the download flow live in
/// [`DownloadError`](crate::download::error::DownloadError); this enum covers
/// everything around it (transport, filesystem, configuration, subprocesses).
///
/// # Example
///
/// ```no_run
/// use tubedrop::core::error::AppError;
///
/// fn handle_error(err: AppError) {
///     eprintln!("Error: {}", err);
/// }
/// ```
#[derive(Error, Debug)]
pub enum AppError {
    /// Telegram API errors
    #[error("Telegram error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing errors
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// HTTP client construction errors
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Missing or invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// External process failures (spawn, timeout, cancellation)
    #[error("Process error: {0}")]
    Process(String),
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;
