//! Live progress rendering for yt-dlp's `[download]` lines.

use std::sync::OnceLock;

use indicatif::{ProgressBar, ProgressStyle};
use regex::Regex;

/// Check whether a stdout line is a progress update.
///
/// yt-dlp progress lines carry the `[download]` marker plus a percent value;
/// they are rendered on the console only and never written to the log file.
pub fn is_progress_line(line: &str) -> bool {
    line.contains("[download]") && line.contains('%')
}

/// Extract the percent value from a progress line such as
/// `[download]  42.7% of 100.00MiB at 2.00MiB/s ETA 00:30`.
pub fn parse_percent(line: &str) -> Option<f64> {
    static PERCENT: OnceLock<Regex> = OnceLock::new();
    let pattern = PERCENT.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)%").unwrap());

    pattern
        .captures(line)?
        .get(1)?
        .as_str()
        .parse::<f64>()
        .ok()
}

/// Renders yt-dlp progress lines as a single self-overwriting console line.
pub struct ProgressRenderer {
    bar: ProgressBar,
}

impl ProgressRenderer {
    pub fn new() -> Self {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {msg}")
                .unwrap()
                .progress_chars("#>-"),
        );
        Self { bar }
    }

    /// Feed one raw progress line from yt-dlp.
    pub fn update(&self, line: &str) {
        if let Some(percent) = parse_percent(line) {
            self.bar.set_position(percent.clamp(0.0, 100.0) as u64);
        }
        self.bar.set_message(line.trim().to_string());
    }

    /// Remove the progress line from the console.
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for ProgressRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_line_detection() {
        assert!(is_progress_line(
            "[download]  42.7% of 100.00MiB at 2.00MiB/s ETA 00:30"
        ));
        assert!(is_progress_line("[download] 100% of 3.50MiB in 00:02"));
    }

    #[test]
    fn test_destination_line_is_not_progress() {
        assert!(!is_progress_line(
            "[download] Destination: downloads/video.f137.mp4"
        ));
    }

    #[test]
    fn test_percent_without_marker_is_not_progress() {
        assert!(!is_progress_line("CPU usage at 42%"));
    }

    #[test]
    fn test_parse_percent() {
        assert_eq!(
            parse_percent("[download]  42.7% of 100.00MiB at 2.00MiB/s"),
            Some(42.7)
        );
        assert_eq!(parse_percent("[download] 100% of 3.50MiB"), Some(100.0));
        assert_eq!(parse_percent("[download] Destination: x.mp4"), None);
    }
}
