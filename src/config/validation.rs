//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};
use regex::Regex;
use url::Url;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_resolution(&config.options.resolution)?;
    validate_file_format(&config.options.file_format)?;

    Ok(())
}

/// Validate the resolution string.
///
/// yt-dlp's `height<=` filter takes a bare number, so values like "720p"
/// are rejected here before anything is launched.
pub fn validate_resolution(resolution: &str) -> Result<()> {
    if resolution.is_empty() || !resolution.chars().all(|c| c.is_ascii_digit()) {
        return Err(Error::InvalidResolution(resolution.to_string()));
    }

    Ok(())
}

/// Validate the container format.
pub fn validate_file_format(file_format: &str) -> Result<()> {
    if file_format.is_empty() {
        return Err(Error::ConfigValidation {
            field: "file_format".to_string(),
            message: "Container format must not be empty".to_string(),
        });
    }

    // Container names as yt-dlp accepts them: mp4, mkv, webm, ...
    let format_pattern = Regex::new(r"^[a-z0-9]{2,6}$").unwrap();
    if !format_pattern.is_match(file_format) {
        return Err(Error::ConfigValidation {
            field: "file_format".to_string(),
            message: format!(
                "'{}' is not a valid container format (expected something like mp4 or mkv)",
                file_format
            ),
        });
    }

    Ok(())
}

/// Validate input for single-video mode.
///
/// Playlist input goes through the resolver's prefix rules instead; single
/// videos skip resolution, so the only structural check is that the input
/// parses as an http(s) URL.
pub fn validate_single_video_url(input: &str) -> Result<()> {
    let parsed = Url::parse(input).map_err(|_| Error::UnrecognizedInput(input.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(Error::UnrecognizedInput(input.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_resolution() {
        assert!(validate_resolution("1080").is_ok());
        assert!(validate_resolution("720").is_ok());
        assert!(validate_resolution("4320").is_ok());
    }

    #[test]
    fn test_resolution_with_suffix_rejected() {
        assert!(matches!(
            validate_resolution("720p"),
            Err(Error::InvalidResolution(_))
        ));
    }

    #[test]
    fn test_empty_resolution_rejected() {
        assert!(validate_resolution("").is_err());
    }

    #[test]
    fn test_valid_file_format() {
        assert!(validate_file_format("mp4").is_ok());
        assert!(validate_file_format("mkv").is_ok());
        assert!(validate_file_format("webm").is_ok());
    }

    #[test]
    fn test_invalid_file_format() {
        assert!(validate_file_format("").is_err());
        assert!(validate_file_format("MP4!").is_err());
        assert!(validate_file_format("not a format").is_err());
    }

    #[test]
    fn test_single_video_url() {
        assert!(validate_single_video_url("https://www.youtube.com/watch?v=abc").is_ok());
        assert!(validate_single_video_url("http://youtu.be/abc").is_ok());
        assert!(validate_single_video_url("ftp://example.com/file").is_err());
        assert!(validate_single_video_url("UC123").is_err());
    }

    #[test]
    fn test_validate_config_defaults() {
        assert!(validate_config(&Config::default()).is_ok());
    }
}
