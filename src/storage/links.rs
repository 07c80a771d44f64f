//! Pending-link storage keyed by chat
//!
//! A link is stored when a user sends it and is consumed when the user picks a
//! quality for it. A chat has at most one pending link: a newer link silently
//! replaces the older one.

use dashmap::DashMap;
use teloxide::types::ChatId;

/// Session store for links awaiting a quality choice.
///
/// Injected into the handlers through `HandlerDeps`, so tests and alternative
/// backends can swap the in-memory default.
pub trait LinkStore: Send + Sync {
    /// Stores `link` for `chat_id`, replacing any previous pending link.
    fn set(&self, chat_id: ChatId, link: String);

    /// Returns the pending link for `chat_id` without consuming it.
    fn get(&self, chat_id: ChatId) -> Option<String>;

    /// Removes and returns the pending link for `chat_id` in one step.
    fn take(&self, chat_id: ChatId) -> Option<String>;

    /// Drops the pending link for `chat_id`. Returns whether one existed.
    fn remove(&self, chat_id: ChatId) -> bool {
        self.take(chat_id).is_some()
    }

    /// Number of chats with a pending link.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Process-lifetime link store backed by a concurrent map.
#[derive(Debug, Default)]
pub struct InMemoryLinkStore {
    links: DashMap<ChatId, String>,
}

impl InMemoryLinkStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LinkStore for InMemoryLinkStore {
    fn set(&self, chat_id: ChatId, link: String) {
        if let Some(previous) = self.links.insert(chat_id, link) {
            log::debug!("Chat {} replaced pending link {}", chat_id, previous);
        }
    }

    fn get(&self, chat_id: ChatId) -> Option<String> {
        self.links.get(&chat_id).map(|entry| entry.value().clone())
    }

    fn take(&self, chat_id: ChatId) -> Option<String> {
        self.links.remove(&chat_id).map(|(_, link)| link)
    }

    fn len(&self) -> usize {
        self.links.len()
    }
}
