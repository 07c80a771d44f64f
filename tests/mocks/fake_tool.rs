//! Fake `MediaTool`

#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;
use tokio_util::sync::CancellationToken;

use tubedrop::core::error::AppError;
use tubedrop::download::quality::Quality;
use tubedrop::download::workdir::WorkDir;
use tubedrop::download::ytdlp::{build_ytdlp_args, MediaTool, ToolRun};

/// What the fake was asked to do
#[derive(Debug, Clone)]
pub struct Invocation {
    pub url: String,
    pub quality: Quality,
    /// Arguments a real yt-dlp run would have received
    pub args: Vec<String>,
}

/// Writes the configured files (sparse, of the given sizes) on every run.
#[derive(Debug, Default)]
pub struct FakeTool {
    files: Vec<(String, u64)>,
    exit_code: i32,
    error: Option<String>,
    invocations: Mutex<Vec<Invocation>>,
}

impl FakeTool {
    /// Produces one file
    pub fn producing(name: &str, size: u64) -> Self {
        Self {
            files: vec![(name.to_string(), size)],
            ..Self::default()
        }
    }

    /// Produces nothing and exits non-zero
    pub fn producing_nothing() -> Self {
        Self {
            exit_code: 1,
            ..Self::default()
        }
    }

    /// Fails as if the run had timed out
    pub fn timing_out() -> Self {
        Self {
            error: Some("Process timed out after 600s".to_string()),
            ..Self::default()
        }
    }

    pub fn with_file(mut self, name: &str, size: u64) -> Self {
        self.files.push((name.to_string(), size));
        self
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl MediaTool for FakeTool {
    fn name(&self) -> &str {
        "fake-ytdlp"
    }

    async fn fetch_into(
        &self,
        url: &str,
        quality: Quality,
        workdir: &WorkDir,
        _cancel: &CancellationToken,
    ) -> Result<ToolRun, AppError> {
        self.invocations.lock().unwrap().push(Invocation {
            url: url.to_string(),
            quality,
            args: build_ytdlp_args(quality, &workdir.output_template(), url),
        });

        if let Some(error) = &self.error {
            return Err(AppError::Process(error.clone()));
        }

        for (name, size) in &self.files {
            let file = std::fs::File::create(workdir.path().join(name))?;
            file.set_len(*size)?;
        }

        Ok(ToolRun {
            exit_code: Some(self.exit_code),
            stderr_tail: String::new(),
        })
    }
}
