//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// YouTube archiver CLI.
#[derive(Parser, Debug)]
#[command(
    name = "yt-archiver",
    version,
    about = "Archive YouTube channels, playlists, and videos via yt-dlp",
    long_about = "A CLI wrapper around yt-dlp for archiving YouTube content.\n\n\
                  Channel IDs (UC...) are resolved to their uploads playlist; playlist IDs\n\
                  and playlist URLs are accepted as-is. Values not given on the command\n\
                  line are prompted for interactively."
)]
pub struct Args {
    /// Video URL, playlist URL, or channel/playlist ID.
    /// Prompted for interactively when omitted.
    pub input: Option<String>,

    /// Treat the input as a single video instead of a playlist or channel.
    #[arg(short, long)]
    pub single: bool,

    /// Maximum video resolution in vertical pixels (e.g. 720, 1080).
    #[arg(short, long)]
    pub resolution: Option<String>,

    /// Container format for the merged output (e.g. mp4, mkv).
    #[arg(short = 'f', long = "format")]
    pub file_format: Option<String>,

    /// Base directory for downloads.
    #[arg(short = 'd', long = "directory")]
    pub download_directory: Option<PathBuf>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(&self, config: &mut Config) {
        if let Some(resolution) = &self.resolution {
            config.options.resolution = resolution.clone();
        }

        if let Some(file_format) = &self.file_format {
            config.options.file_format = file_format.clone();
        }

        if let Some(dir) = &self.download_directory {
            config.options.download_directory = Some(dir.clone());
        }

        // Boolean flag (only overrides if set)
        if self.single {
            config.options.single_video = true;
        }
    }
}
