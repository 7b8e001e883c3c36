//! yt-dlp invocation with live progress relay.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;
use tracing::{error, info};

use crate::download::request::DownloadRequest;
use crate::download::stats::DownloadStats;
use crate::error::{Error, Result};
use crate::fs::ensure_dir;
use crate::output::progress::{is_progress_line, ProgressRenderer};

/// Name the external tool is looked up under on PATH.
pub const YTDLP_BIN: &str = "yt-dlp";

/// Outcome of a successful run.
#[derive(Debug)]
pub struct DownloadOutcome {
    /// Absolute path videos were saved under.
    pub output_dir: PathBuf,
    /// Counters derived from yt-dlp's output.
    pub stats: DownloadStats,
}

/// Verify yt-dlp is reachable before a download starts.
///
/// Runs `yt-dlp --version` with both streams nulled. The spawn-time
/// `NotFound` mapping in [`run_download`] stays as a second line of defense.
pub async fn ensure_tool_available() -> Result<()> {
    let status = Command::new(YTDLP_BIN)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await;

    match status {
        Ok(status) if status.success() => Ok(()),
        _ => Err(Error::ToolMissing),
    }
}

/// Download a video, playlist, or channel by driving yt-dlp to completion.
///
/// Validates the request, prepares the output directory, launches the child
/// process, and relays its output: progress lines go to the console only,
/// everything else on stdout is logged at info level, stderr at error level.
/// Blocks until the child exits; there is no retry, timeout, or cancellation.
pub async fn run_download(request: &DownloadRequest) -> Result<DownloadOutcome> {
    if request.url.is_empty() {
        error!("No valid input URL provided.");
        return Err(Error::MissingUrl);
    }

    if request.resolution.is_empty() || !request.resolution.chars().all(|c| c.is_ascii_digit()) {
        error!("Resolution must be a numeric value (e.g., 720, 1080).");
        return Err(Error::InvalidResolution(request.resolution.clone()));
    }

    let output_dir = request.output_dir();
    ensure_dir(&output_dir)?;

    if request.single_video {
        info!("Downloading single video: {}", request.url);
    } else {
        info!("Downloading playlist or channel: {}", request.url);
    }
    info!(
        "Starting download: Input URL={}, Resolution={}, Format={}",
        request.url, request.resolution, request.file_format
    );

    let mut child = Command::new(YTDLP_BIN)
        .args(request.to_args())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::ToolMissing
            } else {
                Error::Io(e)
            }
        })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    // Drain both pipes concurrently so stderr lines land in the log as they
    // happen instead of after stdout closes.
    let (stats, _) = tokio::join!(relay_stdout(stdout), relay_stderr(stderr));

    let status = child.wait().await?;

    if !status.success() {
        let code = status.code().unwrap_or(-1);
        error!("yt-dlp exited with return code {}. Check logs for details.", code);
        return Err(Error::ToolExit(code));
    }

    let output_dir = std::fs::canonicalize(&output_dir).unwrap_or(output_dir);
    info!(
        "Download completed successfully! Videos saved to: {}",
        output_dir.display()
    );

    Ok(DownloadOutcome {
        output_dir,
        stats,
    })
}

/// Relay the child's stdout: progress lines drive the console-only progress
/// bar, everything else is logged.
async fn relay_stdout(stdout: Option<impl AsyncRead + Unpin>) -> DownloadStats {
    let mut stats = DownloadStats::default();

    let Some(stdout) = stdout else {
        return stats;
    };

    let renderer = ProgressRenderer::new();
    let mut lines = BufReader::new(stdout).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        if is_progress_line(line) {
            renderer.update(line);
        } else {
            stats.observe(line);
            info!("{}", line);
        }
    }

    renderer.finish();
    stats
}

/// Relay the child's stderr into the error log.
async fn relay_stderr(stderr: Option<impl AsyncRead + Unpin>) {
    let Some(stderr) = stderr else {
        return;
    };

    let mut lines = BufReader::new(stderr).lines();

    while let Ok(Some(line)) = lines.next_line().await {
        let line = line.trim_end();
        if !line.is_empty() {
            error!("{}", line);
        }
    }
}
