//! yt-archiver - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use yt_archiver::{
    cli::{pause_before_exit, prompt_line, prompt_yes_no, Args},
    config::{validate_config, validate_single_video_url, Config},
    download::{ensure_tool_available, run_download, DownloadRequest},
    error::{exit_codes, Error, Result},
    logging,
    output::{print_banner, print_error, print_info, print_request_summary, print_run_summary,
        print_success, print_warning},
    resolve::resolve_playlist_url,
};

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let mut config = if args.config.exists() {
        match Config::load(&args.config) {
            Ok(config) => config,
            Err(e) => {
                print_error(&format!("{}", e));
                return ExitCode::from(exit_codes::CONFIG_ERROR as u8);
            }
        }
    } else {
        if args.config.as_os_str() != "config.toml" {
            print_warning(&format!(
                "Configuration file not found: {}",
                args.config.display()
            ));
            print_info("Using default configuration with CLI arguments");
        }
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    if let Err(e) = validate_config(&config) {
        print_error(&format!("{}", e));
        return ExitCode::from(exit_codes::CONFIG_ERROR as u8);
    }

    // Set up logging
    if let Err(e) = logging::init(&config.log.file, args.debug) {
        print_error(&format!("{}", e));
        return ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8);
    }

    print_banner();
    info!("=== yt-archiver started ===");

    let interactive = args.input.is_none();

    let code = match run(&args, &config).await {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            error!("{}", e);
            exit_code_for(&e)
        }
    };

    info!("=== yt-archiver finished ===");

    if interactive {
        pause_before_exit();
    }

    ExitCode::from(code as u8)
}

async fn run(args: &Args, config: &Config) -> Result<()> {
    let request = build_request(args, config)?;

    print_request_summary(
        &request.url,
        &request.resolution,
        &request.file_format,
        &request.output_folder,
        request.single_video,
    );

    ensure_tool_available().await?;

    let outcome = run_download(&request).await?;

    print_run_summary(&outcome.stats, &outcome.output_dir);
    print_success("Download finished");

    Ok(())
}

/// Collect the download request from flags, config defaults, and (when the
/// target was not given on the command line) interactive prompts.
fn build_request(args: &Args, config: &Config) -> Result<DownloadRequest> {
    let interactive = args.input.is_none();

    let raw_input = match &args.input {
        Some(input) => input.trim().to_string(),
        None => prompt_line("Enter the video or playlist URL (or channel ID)", "")?,
    };

    let single_video = if config.options.single_video {
        true
    } else if interactive {
        prompt_yes_no("Is this a single video? (y/n)")?
    } else {
        false
    };

    let resolution = if args.resolution.is_some() || !interactive {
        config.options.resolution.clone()
    } else {
        prompt_line("Enter the desired resolution", &config.options.resolution)?
    };

    let file_format = if args.file_format.is_some() || !interactive {
        config.options.file_format.clone()
    } else {
        prompt_line("Enter the output file format", &config.options.file_format)?
    };

    let default_folder = config.download_directory();
    let output_folder = if args.download_directory.is_some() || !interactive {
        default_folder
    } else {
        prompt_line(
            "Enter the output folder",
            &default_folder.to_string_lossy(),
        )?
        .into()
    };

    // Playlist input goes through the resolver; single videos only get a
    // structural URL check.
    let url = if single_video {
        if let Err(e) = validate_single_video_url(&raw_input) {
            error!("Single-video input does not look like a URL: {}", raw_input);
            return Err(e);
        }
        raw_input
    } else {
        resolve_playlist_url(&raw_input)?
    };

    Ok(DownloadRequest {
        url,
        resolution,
        file_format,
        output_folder,
        single_video,
    })
}

/// Map the error taxonomy onto shell exit codes.
fn exit_code_for(error: &Error) -> i32 {
    match error {
        Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_) => {
            exit_codes::CONFIG_ERROR
        }
        Error::UnrecognizedInput(_) | Error::MissingUrl | Error::InvalidResolution(_) => {
            exit_codes::INPUT_ERROR
        }
        Error::ToolMissing => exit_codes::TOOL_MISSING,
        Error::ToolExit(_) => exit_codes::DOWNLOAD_ERROR,
        Error::Io(_) => exit_codes::UNEXPECTED_ERROR,
    }
}
