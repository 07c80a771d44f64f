use thiserror::Error;

/// Terminal outcome of a failed download request.
///
/// Everything that goes wrong with the external tool (bad link, network,
/// region lock, crash, timeout, cancellation) collapses into
/// `DownloadFailed`; the `reason` is for logs only and never reaches the user.
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The tool produced no usable output file
    #[error("download failed: {reason}")]
    DownloadFailed { reason: String },

    /// The produced file exceeds the upload ceiling
    #[error("file too large: {size} bytes (limit {limit} bytes)")]
    FileTooLarge { size: u64, limit: u64 },
}

impl DownloadError {
    pub fn failed(reason: impl Into<String>) -> Self {
        DownloadError::DownloadFailed { reason: reason.into() }
    }

    /// Returns subcategory for logs
    pub fn subcategory(&self) -> &'static str {
        match self {
            DownloadError::DownloadFailed { .. } => "download_failed",
            DownloadError::FileTooLarge { .. } => "file_too_large",
        }
    }

    /// Fixed message shown to the user
    pub fn user_message(&self) -> &'static str {
        match self {
            DownloadError::DownloadFailed { .. } => "❌ Download failed.",
            DownloadError::FileTooLarge { .. } => "⚠️ File too large to send on Telegram.",
        }
    }
}

/// Outcome of a quality selection that could not start a download.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// No link is pending for this chat (never sent, or already consumed)
    #[error("no pending link for this chat")]
    NoPendingLink,

    /// The callback carried a token that is not one of the menu options
    #[error("unknown quality token: {0}")]
    UnknownQuality(String),
}

impl SelectionError {
    /// Short notice used to answer the callback
    pub fn notice(&self) -> &'static str {
        match self {
            SelectionError::NoPendingLink => "Send a YouTube link first.",
            SelectionError::UnknownQuality(_) => "Unknown quality option.",
        }
    }
}
