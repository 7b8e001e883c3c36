//! Filesystem module.
//!
//! Provides:
//! - Output directory computation
//! - yt-dlp output-template construction
//! - Idempotent directory creation

pub mod paths;

pub use paths::{ensure_dir, output_template, resolve_output_dir, SINGLE_VIDEO_SUBDIR};
