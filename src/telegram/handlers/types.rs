//! Handler types and dependencies

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::download::fetch::FetchOptions;
use crate::download::ytdlp::MediaTool;
use crate::storage::LinkStore;
use crate::telegram::messenger::Messenger;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    /// Pending link per chat
    pub link_store: Arc<dyn LinkStore>,
    /// External fetch tool
    pub tool: Arc<dyn MediaTool>,
    /// Outbound transport
    pub messenger: Arc<dyn Messenger>,
    pub fetch_options: FetchOptions,
    /// Fired on shutdown; in-flight downloads observe it
    pub shutdown: CancellationToken,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(
        link_store: Arc<dyn LinkStore>,
        tool: Arc<dyn MediaTool>,
        messenger: Arc<dyn Messenger>,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            link_store,
            tool,
            messenger,
            fetch_options: FetchOptions::default(),
            shutdown,
        }
    }

    /// Overrides where and how large downloads may be
    pub fn with_fetch_options(mut self, fetch_options: FetchOptions) -> Self {
        self.fetch_options = fetch_options;
        self
    }
}
