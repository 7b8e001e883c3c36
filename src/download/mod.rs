//! Download module.
//!
//! This module provides:
//! - Download request construction (format selector, argument list)
//! - yt-dlp invocation with live progress relay
//! - Tallies derived from yt-dlp's output stream

pub mod invoker;
pub mod request;
pub mod stats;

pub use invoker::{ensure_tool_available, run_download, DownloadOutcome};
pub use request::DownloadRequest;
pub use stats::DownloadStats;
