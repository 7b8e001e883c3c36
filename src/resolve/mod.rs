//! Input resolution for channel IDs, playlist IDs, and playlist URL variants.
//!
//! YouTube channels carry an implicit "uploads" playlist whose ID is the
//! channel ID with its "UC" prefix swapped for "UU". Everything here reduces
//! raw user input to a playlist URL addressing that collection.

use tracing::{error, info};

use crate::error::{Error, Result};

/// Base URL every resolved playlist ends up under.
pub const PLAYLIST_BASE_URL: &str = "https://www.youtube.com/playlist?list=";

const CHANNEL_PLAYLIST_URL_PREFIX: &str = "https://www.youtube.com/playlist?list=UC";
const UPLOADS_PLAYLIST_URL_PREFIX: &str = "https://www.youtube.com/playlist?list=UU";

/// Resolve raw user input into a canonical playlist URL.
///
/// Rules are tried in order, first match wins:
/// bare "UC" channel IDs map onto their uploads playlist, bare "UU" playlist
/// IDs get the base URL prepended, full playlist URLs pass through with
/// "list=UC" rewritten to "list=UU" (first occurrence only). Anything else is
/// rejected. Only prefixes are inspected; no further URL validation happens
/// here.
pub fn resolve_playlist_url(input: &str) -> Result<String> {
    if input.starts_with("UC") {
        let resolved = format!("{}{}", PLAYLIST_BASE_URL, input.replacen("UC", "UU", 1));
        info!("Resolved channel ID to uploads playlist: {}", resolved);
        Ok(resolved)
    } else if input.starts_with("UU") {
        let resolved = format!("{}{}", PLAYLIST_BASE_URL, input);
        info!("Using uploads playlist ID directly: {}", resolved);
        Ok(resolved)
    } else if input.starts_with(CHANNEL_PLAYLIST_URL_PREFIX) {
        let resolved = input.replacen("list=UC", "list=UU", 1);
        info!("Rewrote channel playlist URL to uploads playlist: {}", resolved);
        Ok(resolved)
    } else if input.starts_with(UPLOADS_PLAYLIST_URL_PREFIX) {
        info!("Using uploads playlist URL directly: {}", input);
        Ok(input.to_string())
    } else if input.starts_with(PLAYLIST_BASE_URL) {
        info!("Using generic playlist URL: {}", input);
        Ok(input.to_string())
    } else {
        error!("Invalid input. Please provide a valid channel ID, playlist ID, or playlist URL.");
        Err(Error::UnrecognizedInput(input.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_maps_to_uploads_playlist() {
        let resolved = resolve_playlist_url("UC123").unwrap();
        assert_eq!(resolved, "https://www.youtube.com/playlist?list=UU123");
    }

    #[test]
    fn test_channel_id_replaces_first_uc_only() {
        let resolved = resolve_playlist_url("UCabcUCdef").unwrap();
        assert_eq!(resolved, "https://www.youtube.com/playlist?list=UUabcUCdef");
    }

    #[test]
    fn test_playlist_id_passes_through() {
        let resolved = resolve_playlist_url("UU456").unwrap();
        assert_eq!(resolved, "https://www.youtube.com/playlist?list=UU456");
    }

    #[test]
    fn test_channel_playlist_url_rewritten() {
        let resolved =
            resolve_playlist_url("https://www.youtube.com/playlist?list=UCxyz").unwrap();
        assert_eq!(resolved, "https://www.youtube.com/playlist?list=UUxyz");
    }

    #[test]
    fn test_channel_playlist_url_rewrites_first_occurrence_only() {
        let resolved =
            resolve_playlist_url("https://www.youtube.com/playlist?list=UCa&also=list=UCb")
                .unwrap();
        assert_eq!(
            resolved,
            "https://www.youtube.com/playlist?list=UUa&also=list=UCb"
        );
    }

    #[test]
    fn test_uploads_playlist_url_unchanged() {
        let url = "https://www.youtube.com/playlist?list=UUxyz";
        assert_eq!(resolve_playlist_url(url).unwrap(), url);
    }

    #[test]
    fn test_generic_playlist_url_unchanged() {
        let url = "https://www.youtube.com/playlist?list=PLxyz";
        assert_eq!(resolve_playlist_url(url).unwrap(), url);
    }

    #[test]
    fn test_unrecognized_input_rejected() {
        assert!(matches!(
            resolve_playlist_url("not-a-valid-input"),
            Err(Error::UnrecognizedInput(_))
        ));
    }

    #[test]
    fn test_empty_input_rejected() {
        assert!(matches!(
            resolve_playlist_url(""),
            Err(Error::UnrecognizedInput(_))
        ));
    }

    #[test]
    fn test_watch_url_rejected() {
        assert!(resolve_playlist_url("https://www.youtube.com/watch?v=abc").is_err());
    }
}
