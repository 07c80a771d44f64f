//! yt-dlp invocation
//!
//! Builds the command line for a quality and runs the tool as a subprocess.
//! The `MediaTool` trait is the seam between the orchestrator and the
//! process boundary; tests plug in a fake that writes files directly.

use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::core::config;
use crate::core::error::AppError;
use crate::core::process::{output_tail, run_with_timeout};
use crate::download::quality::Quality;
use crate::download::workdir::WorkDir;

/// Container forced for merged video streams
pub const VIDEO_CONTAINER: &str = "mp4";

/// Audio codec produced by extraction mode
pub const AUDIO_FORMAT: &str = "mp3";

/// Format selector: best video+audio under the ceiling, else best single stream under it.
pub fn build_format_selector(max_height: u32) -> String {
    format!("bv*[height<={h}]+ba/best[height<={h}]", h = max_height)
}

/// Builds yt-dlp arguments for one download.
///
/// Audio: extraction to mp3. Video: resolution ceiling, merged into mp4.
/// Playlist expansion is always disabled and output goes to `output_template`.
/// The URL always follows `--`, so text starting with `-` is never parsed as an option.
pub fn build_ytdlp_args(quality: Quality, output_template: &str, url: &str) -> Vec<String> {
    let mut args: Vec<String> = Vec::with_capacity(10);

    match quality.max_height() {
        None => {
            args.extend(["-x", "--audio-format", AUDIO_FORMAT].map(String::from));
        }
        Some(height) => {
            args.push("-f".to_string());
            args.push(build_format_selector(height));
            args.extend(["--merge-output-format", VIDEO_CONTAINER].map(String::from));
        }
    }

    args.push("--no-playlist".to_string());
    args.push("-o".to_string());
    args.push(output_template.to_string());
    args.push("--".to_string());
    args.push(url.to_string());
    args
}

/// What a finished tool run reported (for diagnostics only).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolRun {
    /// Exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Tail of stderr
    pub stderr_tail: String,
}

impl ToolRun {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// External media fetch tool.
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Human-readable name (e.g. "yt-dlp")
    fn name(&self) -> &str;

    /// Fetches `url` at `quality` into `workdir`.
    ///
    /// Returns once the tool has exited. An `Err` means the tool could not be
    /// run to completion (spawn failure, timeout, cancellation); a non-zero
    /// exit is reported through `ToolRun`, not as an error.
    async fn fetch_into(
        &self,
        url: &str,
        quality: Quality,
        workdir: &WorkDir,
        cancel: &CancellationToken,
    ) -> Result<ToolRun, AppError>;
}

/// yt-dlp as a subprocess.
#[derive(Debug, Clone)]
pub struct YtDlpTool {
    bin: String,
    timeout: Duration,
}

impl Default for YtDlpTool {
    fn default() -> Self {
        Self::from_config()
    }
}

impl YtDlpTool {
    pub fn new(bin: impl Into<String>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    /// Tool configured from `YTDL_BIN` and `YTDLP_TIMEOUT_SECS`.
    pub fn from_config() -> Self {
        Self::new(config::YTDL_BIN.as_str(), config::download::ytdlp_timeout())
    }
}

#[async_trait]
impl MediaTool for YtDlpTool {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    async fn fetch_into(
        &self,
        url: &str,
        quality: Quality,
        workdir: &WorkDir,
        cancel: &CancellationToken,
    ) -> Result<ToolRun, AppError> {
        let args = build_ytdlp_args(quality, &workdir.output_template(), url);
        log::debug!("yt-dlp command: {} {}", self.bin, args.join(" "));

        let mut cmd = Command::new(&self.bin);
        cmd.args(&args).current_dir(workdir.path());

        let output = run_with_timeout(&mut cmd, self.timeout, cancel).await?;

        let run = ToolRun {
            exit_code: output.status.code(),
            stderr_tail: output_tail(&output.stderr, 500),
        };

        if run.success() {
            log::debug!("yt-dlp stdout: {}", output_tail(&output.stdout, 500));
        } else {
            log::warn!(
                "yt-dlp exited with {:?} for {}: {}",
                run.exit_code,
                url,
                run.stderr_tail
            );
        }

        Ok(run)
    }
}

/// Returns the installed tool version (`<bin> --version`).
pub async fn probe_version(bin: &str) -> Result<String, AppError> {
    let mut cmd = Command::new(bin);
    cmd.arg("--version");

    let output = run_with_timeout(
        &mut cmd,
        config::tool::version_probe_timeout(),
        &CancellationToken::new(),
    )
    .await?;

    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if !output.status.success() || version.is_empty() {
        return Err(AppError::Process(format!(
            "{} --version failed: {}",
            bin,
            output_tail(&output.stderr, 200)
        )));
    }

    Ok(version)
}

/// Logs the tool version at startup; a missing tool is a warning, not fatal.
pub async fn log_tool_version(bin: &str) {
    match probe_version(bin).await {
        Ok(version) => log::info!("yt-dlp version: {}", version),
        Err(e) => log::warn!(
            "⚠️ yt-dlp not usable ({}): {}. Downloads will fail until it is installed.",
            bin,
            e
        ),
    }
}
