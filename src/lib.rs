//! yt-archiver - a thin CLI wrapper around yt-dlp
//!
//! This library resolves user input (channel IDs, playlist IDs, playlist URL
//! variants) into canonical playlist URLs and drives yt-dlp as a child
//! process, relaying its progress and log output.
//!
//! # Features
//!
//! - Channel ID ("UC...") to uploads-playlist ("UU...") resolution
//! - Playlist and single-video downloads with per-playlist subfolders
//! - Live progress relay from yt-dlp's `[download]` lines
//! - Console plus append-mode file logging
//!
//! # Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use yt_archiver::{resolve_playlist_url, run_download, DownloadRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let url = resolve_playlist_url("UC1234567890")?;
//!     let request = DownloadRequest {
//!         url,
//!         resolution: "1080".into(),
//!         file_format: "mp4".into(),
//!         output_folder: PathBuf::from("downloads"),
//!         single_video: false,
//!     };
//!     run_download(&request).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod logging;
pub mod output;
pub mod resolve;

// Re-exports for convenience
pub use config::Config;
pub use download::{run_download, DownloadOutcome, DownloadRequest, DownloadStats};
pub use error::{Error, Result};
pub use resolve::resolve_playlist_url;
