//! Run summary reporting.

use std::path::Path;

use console::style;

use crate::download::DownloadStats;

/// Print the end-of-run summary derived from yt-dlp's output.
pub fn print_run_summary(stats: &DownloadStats, output_dir: &Path) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download summary:").bold());
    println!("  Streams fetched:    {}", stats.streams_fetched);
    println!("  Videos merged:      {}", stats.videos_merged);
    if stats.already_downloaded > 0 {
        println!(
            "  Already on disk:    {}",
            style(stats.already_downloaded).yellow()
        );
    }
    println!("  Saved to:           {}", output_dir.display());
    println!("{}", style("═".repeat(50)).dim());
}
