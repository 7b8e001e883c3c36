//! Console output utilities.

use std::path::Path;

use console::style;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     yt-archiver                                       ║
║     Archive YouTube channels and playlists            ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print a summary of the request about to run.
pub fn print_request_summary(
    url: &str,
    resolution: &str,
    file_format: &str,
    output_folder: &Path,
    single_video: bool,
) {
    println!();
    println!("{}", style("Download request:").bold());
    println!("  URL:        {}", url);
    println!(
        "  Mode:       {}",
        if single_video {
            "single video"
        } else {
            "playlist / channel"
        }
    );
    println!("  Resolution: up to {}p", resolution);
    println!("  Container:  {}", file_format);
    println!("  Directory:  {}", output_folder.display());
    println!();
}
