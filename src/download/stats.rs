//! Tallies derived from yt-dlp's output stream.

/// Counters accumulated while relaying yt-dlp's stdout.
///
/// yt-dlp announces each stream it fetches with a "Destination:" line and
/// each finished merge with a "[Merger]" line; files skipped because they
/// already exist get their own marker. These lines are the only run summary
/// available without parsing JSON output.
#[derive(Debug, Default)]
pub struct DownloadStats {
    /// Streams yt-dlp started writing (video and audio count separately).
    pub streams_fetched: u64,
    /// Finished audio/video merges, one per completed video.
    pub videos_merged: u64,
    /// Files skipped because they were already on disk.
    pub already_downloaded: u64,
}

impl DownloadStats {
    /// Update counters from one non-progress stdout line.
    pub fn observe(&mut self, line: &str) {
        if line.contains("[download] Destination:") {
            self.streams_fetched += 1;
        } else if line.contains("[Merger]") {
            self.videos_merged += 1;
        } else if line.contains("has already been downloaded") {
            self.already_downloaded += 1;
        }
    }
}
