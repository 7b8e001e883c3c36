//! Error types for the yt-archiver application.

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input errors
    #[error("Unrecognized input '{0}'. Provide a channel ID, playlist ID, or playlist URL.")]
    UnrecognizedInput(String),

    #[error("No input URL provided")]
    MissingUrl,

    #[error("Resolution must be a numeric value (e.g. 720, 1080), got '{0}'")]
    InvalidResolution(String),

    // External tool errors
    #[error("yt-dlp is not installed or not found in PATH. Please install it first.")]
    ToolMissing,

    #[error("yt-dlp exited with status {0}. Check the log file for details.")]
    ToolExit(i32),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes reported to the shell.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const INPUT_ERROR: i32 = 2;
    pub const CONFIG_ERROR: i32 = 3;
    pub const DOWNLOAD_ERROR: i32 = 4;
    pub const TOOL_MISSING: i32 = 5;
    pub const UNEXPECTED_ERROR: i32 = 6;
}
