//! Download request construction.

use std::path::PathBuf;

use crate::fs::{output_template, resolve_output_dir};

/// Everything needed to build one yt-dlp invocation.
///
/// Built once per run from prompts, flags, and config defaults, then
/// discarded.
#[derive(Debug, Clone)]
pub struct DownloadRequest {
    /// Source URL (already resolved for playlist/channel input).
    pub url: String,
    /// Maximum video height in pixels, digits only.
    pub resolution: String,
    /// Container format for the merged output.
    pub file_format: String,
    /// Base directory downloads land under.
    pub output_folder: PathBuf,
    /// Single-video mode nests output under "individual-videos".
    pub single_video: bool,
}

impl DownloadRequest {
    /// Directory yt-dlp writes into for this request.
    pub fn output_dir(&self) -> PathBuf {
        resolve_output_dir(&self.output_folder, self.single_video)
    }

    /// Format selector expression passed to yt-dlp via `-f`.
    ///
    /// Prefers separate avc1 video and mp4a audio streams capped at the
    /// requested height, falling back to the best pre-muxed stream matching
    /// the same constraints.
    pub fn format_selector(&self) -> String {
        format!(
            "bestvideo[height<={res}][vcodec^=avc1]+bestaudio[acodec^=mp4a]/best[height<={res}][vcodec^=avc1][acodec^=mp4a]",
            res = self.resolution
        )
    }

    /// Full argument list for the yt-dlp child process.
    ///
    /// Always an argument vector, never a shell string. `--newline` makes
    /// yt-dlp emit each progress update as its own line so the relay can
    /// read the pipe line-by-line.
    pub fn to_args(&self) -> Vec<String> {
        let template = output_template(&self.output_dir(), self.single_video);

        vec![
            "-f".to_string(),
            self.format_selector(),
            "--merge-output-format".to_string(),
            self.file_format.clone(),
            "--newline".to_string(),
            "-o".to_string(),
            template.to_string_lossy().into_owned(),
            self.url.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist_request() -> DownloadRequest {
        DownloadRequest {
            url: "https://www.youtube.com/playlist?list=UU123".to_string(),
            resolution: "1080".to_string(),
            file_format: "mp4".to_string(),
            output_folder: PathBuf::from("downloads"),
            single_video: false,
        }
    }

    #[test]
    fn test_format_selector_references_height() {
        let request = playlist_request();
        let selector = request.format_selector();
        assert_eq!(
            selector,
            "bestvideo[height<=1080][vcodec^=avc1]+bestaudio[acodec^=mp4a]/best[height<=1080][vcodec^=avc1][acodec^=mp4a]"
        );
    }

    #[test]
    fn test_playlist_args_shape() {
        let request = playlist_request();
        let args = request.to_args();
        assert_eq!(
            args,
            vec![
                "-f",
                "bestvideo[height<=1080][vcodec^=avc1]+bestaudio[acodec^=mp4a]/best[height<=1080][vcodec^=avc1][acodec^=mp4a]",
                "--merge-output-format",
                "mp4",
                "--newline",
                "-o",
                "downloads/%(playlist_title)s/%(title)s.%(ext)s",
                "https://www.youtube.com/playlist?list=UU123",
            ]
        );
    }

    #[test]
    fn test_single_video_output_template() {
        let request = DownloadRequest {
            url: "https://www.youtube.com/watch?v=abc".to_string(),
            resolution: "720".to_string(),
            file_format: "mkv".to_string(),
            output_folder: PathBuf::from("downloads"),
            single_video: true,
        };

        let args = request.to_args();
        assert!(args.contains(&"downloads/individual-videos/%(title)s.%(ext)s".to_string()));
        assert!(args.contains(&"mkv".to_string()));
        assert_eq!(
            request.output_dir(),
            PathBuf::from("downloads/individual-videos")
        );
    }
}
