//! Process execution utilities with timeout and cancellation support
//!
//! Provides helpers for running external processes (yt-dlp) so that a hung
//! process can never block a download worker forever.

use std::process::{Output, Stdio};
use std::time::Duration;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use crate::core::error::AppError;

/// Run an async Command to completion with a timeout and a cancellation token.
///
/// stdout and stderr are captured. The child is spawned with `kill_on_drop`,
/// so when the timeout fires or the token is cancelled the pending wait is
/// dropped and the child is killed. On unix the child also leads its own
/// process group, and the whole group is killed as well, so helpers it
/// started (ffmpeg, a shell's children) do not outlive it.
///
/// Returns the process Output (whatever its exit status), or an AppError on
/// spawn failure, timeout or cancellation.
pub async fn run_with_timeout(
    cmd: &mut Command,
    timeout: Duration,
    cancel: &CancellationToken,
) -> Result<Output, AppError> {
    #[cfg(unix)]
    cmd.process_group(0);

    let child = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()?;
    let pid = child.id();

    let result = tokio::select! {
        result = tokio::time::timeout(timeout, child.wait_with_output()) => match result {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(e)) => Err(AppError::Io(e)),
            Err(_) => Err(AppError::Process(format!(
                "Process timed out after {}s",
                timeout.as_secs()
            ))),
        },
        _ = cancel.cancelled() => Err(AppError::Process("Process cancelled".to_string())),
    };

    #[cfg(unix)]
    if let (Err(_), Some(pgid)) = (&result, pid) {
        kill_process_group(pgid).await;
    }
    #[cfg(not(unix))]
    let _ = pid;

    result
}

/// Sends SIGKILL to every process in group `pgid`.
#[cfg(unix)]
async fn kill_process_group(pgid: u32) {
    let status = Command::new("kill")
        .args(["-KILL", "--", &format!("-{}", pgid)])
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => log::debug!("Killed process group {}", pgid),
        // Group already gone
        Ok(status) => log::debug!("kill -{} exited with {}", pgid, status),
        Err(e) => log::warn!("Failed to kill process group {}: {}", pgid, e),
    }
}

/// Returns the last `max_chars` characters of a process stream, lossily decoded.
pub fn output_tail(bytes: &[u8], max_chars: usize) -> String {
    let text = String::from_utf8_lossy(bytes);
    let trimmed = text.trim_end();
    let char_count = trimmed.chars().count();
    if char_count <= max_chars {
        return trimmed.to_string();
    }
    trimmed.chars().skip(char_count - max_chars).collect()
}
