//! Configuration module for yt-archiver.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Default values the interactive prompts fall back to
//! - Configuration validation

pub mod loader;
pub mod validation;

pub use loader::{Config, LogConfig, OptionsConfig};
pub use validation::{
    validate_config, validate_file_format, validate_resolution, validate_single_video_url,
};
