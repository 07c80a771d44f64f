//! Download orchestration and delivery

pub mod error;
pub mod fetch;
pub mod quality;
pub mod send;
pub mod workdir;
pub mod ytdlp;

// Re-exports for convenience
pub use error::{DownloadError, SelectionError};
pub use fetch::{fetch, fetch_with_options, DownloadedMedia, FetchOptions};
pub use quality::{MediaKind, Quality, QualityOption};
pub use send::deliver;
pub use workdir::WorkDir;
pub use ytdlp::{MediaTool, ToolRun, YtDlpTool};
