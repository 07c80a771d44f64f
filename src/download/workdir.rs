//! Per-request working directories
//!
//! Every download gets its own uniquely named directory, so concurrent
//! downloads for different chats never see each other's files. The directory
//! and everything in it is removed when the `WorkDir` is dropped.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::core::config;

/// Extensions treated as media output when several files are present.
const MEDIA_EXTENSIONS: &[&str] = &[
    "mp4", "mkv", "webm", "mov", "mp3", "m4a", "opus", "ogg", "aac", "wav", "flac",
];

/// A scoped, uniquely named temporary directory.
#[derive(Debug)]
pub struct WorkDir {
    dir: TempDir,
}

impl WorkDir {
    /// Creates a fresh working directory under `parent` (created if missing).
    pub fn new_in(parent: &Path) -> std::io::Result<Self> {
        fs_err::create_dir_all(parent)?;
        let dir = tempfile::Builder::new()
            .prefix(config::download::WORKDIR_PREFIX)
            .tempdir_in(parent)?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// yt-dlp output template: file named after the media title with its natural extension.
    pub fn output_template(&self) -> String {
        self.path().join("%(title)s.%(ext)s").to_string_lossy().into_owned()
    }

    /// Lists regular files directly inside the directory with their sizes.
    pub fn files(&self) -> std::io::Result<Vec<(PathBuf, u64)>> {
        let mut files = Vec::new();
        for entry in fs_err::read_dir(self.path())? {
            let entry = entry?;
            let metadata = entry.metadata()?;
            if metadata.is_file() {
                files.push((entry.path(), metadata.len()));
            }
        }
        Ok(files)
    }

    /// Picks the file to deliver, see [`pick_media_file`].
    pub fn media_file(&self) -> std::io::Result<Option<(PathBuf, u64)>> {
        Ok(pick_media_file(self.files()?))
    }
}

fn has_media_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| MEDIA_EXTENSIONS.iter().any(|known| known.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Chooses the delivered file among the tool's outputs.
///
/// Prefers the largest file with a known media extension (sidecar thumbnails,
/// subtitles and the like lose); falls back to the largest file of any kind.
/// Ties are broken by path so the choice never depends on listing order.
pub fn pick_media_file(files: Vec<(PathBuf, u64)>) -> Option<(PathBuf, u64)> {
    let largest = |candidates: Vec<(PathBuf, u64)>| {
        candidates
            .into_iter()
            .max_by(|(a_path, a_size), (b_path, b_size)| a_size.cmp(b_size).then_with(|| b_path.cmp(a_path)))
    };

    let (media, other): (Vec<_>, Vec<_>) = files.into_iter().partition(|(path, _)| has_media_extension(path));
    if media.is_empty() {
        largest(other)
    } else {
        largest(media)
    }
}
