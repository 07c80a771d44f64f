//! Download orchestration
//!
//! One call = one isolated working directory, one tool run, one verdict.
//! The verdict depends only on what the tool left in the directory.

use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

use crate::core::config;
use crate::download::error::DownloadError;
use crate::download::quality::{MediaKind, Quality};
use crate::download::workdir::WorkDir;
use crate::download::ytdlp::MediaTool;

/// A validated download, ready for delivery.
///
/// Owns its working directory: dropping the value removes the file.
#[derive(Debug)]
pub struct DownloadedMedia {
    workdir: WorkDir,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub kind: MediaKind,
}

impl DownloadedMedia {
    /// File name used in the caption.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// Directory holding the file (removed on drop).
    pub fn workdir(&self) -> &Path {
        self.workdir.path()
    }
}

/// Limits applied by the orchestrator.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Parent of the per-request working directory
    pub temp_root: PathBuf,
    /// Largest deliverable file, inclusive
    pub max_file_size: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            temp_root: config::TEMP_FILES_DIR.clone(),
            max_file_size: config::download::MAX_FILE_SIZE_BYTES,
        }
    }
}

/// Runs one download with default options.
pub async fn fetch(
    tool: &dyn MediaTool,
    url: &str,
    quality: Quality,
    cancel: &CancellationToken,
) -> Result<DownloadedMedia, DownloadError> {
    fetch_with_options(tool, url, quality, cancel, &FetchOptions::default()).await
}

/// Runs one download.
///
/// * Tool could not finish (spawn error, timeout, cancellation): `DownloadFailed`.
/// * Directory empty afterwards: `DownloadFailed`.
/// * Chosen file larger than `max_file_size`: `FileTooLarge` (the file is removed).
pub async fn fetch_with_options(
    tool: &dyn MediaTool,
    url: &str,
    quality: Quality,
    cancel: &CancellationToken,
    options: &FetchOptions,
) -> Result<DownloadedMedia, DownloadError> {
    let workdir = WorkDir::new_in(&options.temp_root)
        .map_err(|e| DownloadError::failed(format!("cannot create working directory: {}", e)))?;

    log::info!(
        "📥 Starting {} download: url={}, quality={}, workdir={}",
        tool.name(),
        url,
        quality.label(),
        workdir.path().display()
    );

    match tool.fetch_into(url, quality, &workdir, cancel).await {
        Ok(run) if !run.success() => {
            log::debug!("{} exit code {:?}, inspecting output anyway", tool.name(), run.exit_code);
        }
        Ok(_) => {}
        Err(e) => {
            log::error!("❌ {} did not finish for {}: {}", tool.name(), url, e);
            return Err(DownloadError::failed(e.to_string()));
        }
    }

    let picked = workdir
        .media_file()
        .map_err(|e| DownloadError::failed(format!("cannot list working directory: {}", e)))?;

    let Some((path, size_bytes)) = picked else {
        log::warn!("❌ {} produced no file for {}", tool.name(), url);
        return Err(DownloadError::failed("tool produced no output file"));
    };

    if size_bytes > options.max_file_size {
        log::warn!(
            "⚠️ {} is {} bytes, over the {} byte limit",
            path.display(),
            size_bytes,
            options.max_file_size
        );
        return Err(DownloadError::FileTooLarge {
            size: size_bytes,
            limit: options.max_file_size,
        });
    }

    log::info!("✅ Downloaded {} ({} bytes)", path.display(), size_bytes);

    Ok(DownloadedMedia {
        workdir,
        path,
        size_bytes,
        kind: quality.media_kind(),
    })
}
