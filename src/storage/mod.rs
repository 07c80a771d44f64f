//! In-memory session state

pub mod links;

// Re-exports for convenience
pub use links::{InMemoryLinkStore, LinkStore};
