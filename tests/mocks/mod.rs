//! Mock implementations of the fetch tool
//!
//! The fake writes files straight into the working directory instead of
//! running yt-dlp, so the orchestrator sees exactly what a real run would leave.

pub mod fake_tool;

#[allow(unused_imports)]
pub use fake_tool::{FakeTool, Invocation};
