//! Path and directory management.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;

/// Subfolder that keeps one-off videos out of the per-playlist folders.
pub const SINGLE_VIDEO_SUBDIR: &str = "individual-videos";

/// Get the directory yt-dlp writes into for this run.
///
/// Single videos are nested one level down so they never mix with the
/// playlist-named subfolders yt-dlp creates in playlist mode.
pub fn resolve_output_dir(base: &Path, single_video: bool) -> PathBuf {
    if single_video {
        base.join(SINGLE_VIDEO_SUBDIR)
    } else {
        base.to_path_buf()
    }
}

/// Build the output template handed to yt-dlp via `-o`.
///
/// The `%(...)s` placeholders are expanded by yt-dlp itself; playlist mode
/// produces one subfolder per playlist title.
pub fn output_template(output_dir: &Path, single_video: bool) -> PathBuf {
    if single_video {
        output_dir.join("%(title)s.%(ext)s")
    } else {
        output_dir.join("%(playlist_title)s/%(title)s.%(ext)s")
    }
}

/// Ensure a directory exists, creating it (and its parents) if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
        info!("Created output folder: {}", path.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_dir_playlist() {
        let dir = resolve_output_dir(Path::new("downloads"), false);
        assert_eq!(dir, PathBuf::from("downloads"));
    }

    #[test]
    fn test_resolve_output_dir_single_video() {
        let dir = resolve_output_dir(Path::new("downloads"), true);
        assert_eq!(dir, PathBuf::from("downloads/individual-videos"));
    }

    #[test]
    fn test_output_template_single_video() {
        let template = output_template(Path::new("downloads/individual-videos"), true);
        assert_eq!(
            template,
            PathBuf::from("downloads/individual-videos/%(title)s.%(ext)s")
        );
    }

    #[test]
    fn test_output_template_playlist() {
        let template = output_template(Path::new("downloads"), false);
        assert_eq!(
            template,
            PathBuf::from("downloads/%(playlist_title)s/%(title)s.%(ext)s")
        );
    }

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("downloads").join(SINGLE_VIDEO_SUBDIR);

        ensure_dir(&target).unwrap();
        assert!(target.is_dir());

        // Second call must not error or alter the tree.
        ensure_dir(&target).unwrap();
        assert!(target.is_dir());
    }
}
