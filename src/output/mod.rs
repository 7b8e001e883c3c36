//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - Live progress rendering for yt-dlp's `[download]` lines
//! - Run summary reporting

pub mod console;
pub mod progress;
pub mod stats;

pub use console::{
    print_banner, print_error, print_info, print_request_summary, print_success, print_warning,
};
pub use progress::{is_progress_line, parse_percent, ProgressRenderer};
pub use stats::print_run_summary;
