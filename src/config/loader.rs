//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
///
/// Every value is optional in the file; the defaults mirror what the
/// interactive prompts offer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub options: OptionsConfig,

    #[serde(default)]
    pub log: LogConfig,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Maximum video resolution in vertical pixels (as a string, e.g. "1080").
    #[serde(default = "default_resolution")]
    pub resolution: String,

    /// Container format yt-dlp merges audio and video into.
    #[serde(default = "default_file_format")]
    pub file_format: String,

    /// Base directory for downloads.
    #[serde(default)]
    pub download_directory: Option<PathBuf>,

    /// Whether to treat input as a single video by default.
    #[serde(default)]
    pub single_video: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            file_format: default_file_format(),
            download_directory: None,
            single_video: false,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Append-mode log file, relative to the working directory.
    #[serde(default = "default_log_file")]
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
        }
    }
}

fn default_resolution() -> String {
    "1080".to_string()
}

fn default_file_format() -> String {
    "mp4".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("yt-archiver.log")
}

fn default_download_directory() -> PathBuf {
    PathBuf::from("downloads")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective download directory.
    pub fn download_directory(&self) -> PathBuf {
        self.options
            .download_directory
            .clone()
            .unwrap_or_else(default_download_directory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.options.resolution, "1080");
        assert_eq!(config.options.file_format, "mp4");
        assert!(!config.options.single_video);
        assert_eq!(config.download_directory(), PathBuf::from("downloads"));
        assert_eq!(config.log.file, PathBuf::from("yt-archiver.log"));
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [options]
            resolution = "720"
            "#,
        )
        .unwrap();
        assert_eq!(config.options.resolution, "720");
        assert_eq!(config.options.file_format, "mp4");
        assert_eq!(config.log.file, PathBuf::from("yt-archiver.log"));
    }

    #[test]
    fn test_download_directory_override() {
        let config: Config = toml::from_str(
            r#"
            [options]
            download_directory = "archive"
            "#,
        )
        .unwrap();
        assert_eq!(config.download_directory(), PathBuf::from("archive"));
    }
}
