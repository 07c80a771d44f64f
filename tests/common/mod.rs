//! Common test utilities
//!
//! This module is shared across all integration tests

#![allow(dead_code)]

pub mod recorder;

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use teloxide::types::{CallbackQueryId, ChatId};
use tokio_util::sync::CancellationToken;

use tubedrop::core::config;
use tubedrop::download::fetch::FetchOptions;
use tubedrop::storage::InMemoryLinkStore;
use tubedrop::telegram::HandlerDeps;

use crate::mocks::FakeTool;

#[allow(unused_imports)]
pub use recorder::{RecordingMessenger, Sent};

pub fn create_test_chat_id() -> ChatId {
    ChatId(123456789)
}

pub fn callback_id(id: &str) -> CallbackQueryId {
    CallbackQueryId(id.to_string())
}

/// Handler dependencies wired to fakes, with direct access to each fake.
pub struct TestEnvironment {
    pub deps: HandlerDeps,
    pub store: Arc<InMemoryLinkStore>,
    pub messenger: Arc<RecordingMessenger>,
    pub tool: Arc<FakeTool>,
    pub temp_root: TempDir,
}

impl TestEnvironment {
    pub fn new(tool: FakeTool) -> Self {
        let temp_root = tempfile::tempdir().expect("temp root");
        let store = Arc::new(InMemoryLinkStore::new());
        let messenger = Arc::new(RecordingMessenger::default());
        let tool = Arc::new(tool);

        let deps = HandlerDeps::new(store.clone(), tool.clone(), messenger.clone(), CancellationToken::new())
            .with_fetch_options(FetchOptions {
                temp_root: temp_root.path().to_path_buf(),
                max_file_size: config::download::MAX_FILE_SIZE_BYTES,
            });

        Self {
            deps,
            store,
            messenger,
            tool,
            temp_root,
        }
    }

    /// Whether every per-request working directory has been removed.
    pub fn temp_root_is_empty(&self) -> bool {
        dir_is_empty(self.temp_root.path())
    }
}

pub fn dir_is_empty(path: &Path) -> bool {
    std::fs::read_dir(path).map(|mut it| it.next().is_none()).unwrap_or(true)
}
