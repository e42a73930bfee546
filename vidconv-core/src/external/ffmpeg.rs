// vidconv-core/src/external/ffmpeg.rs
//
// Conversion invoker: builds the ffmpeg argument list from the effective
// options and runs the transcode to completion.

use crate::error::CoreResult;
use crate::options::ConversionOptions;
use std::path::Path;
use std::process::Command;

const FFMPEG: &str = "ffmpeg";

/// Captured output of a successful conversion run.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub stdout: String,
    pub stderr: String,
}

/// Builds the ffmpeg argument list in fixed order:
/// input, optional output scale, video codec, audio codec, optional video
/// bitrate, forced overwrite, output path.
#[must_use]
pub fn build_ffmpeg_args(
    input_path: &Path,
    output_path: &Path,
    options: &ConversionOptions,
) -> Vec<String> {
    let mut args = vec!["-i".to_string(), input_path.to_string_lossy().into_owned()];

    if let Some(resolution) = &options.resolution {
        args.push("-s".to_string());
        args.push(resolution.clone());
    }

    args.push("-c:v".to_string());
    args.push(options.video_codec.clone());
    args.push("-c:a".to_string());
    args.push(options.audio_codec.clone());

    if let Some(bitrate) = &options.bitrate {
        args.push("-b:v".to_string());
        args.push(bitrate.clone());
    }

    // -y overwrites an existing output file
    args.push("-y".to_string());
    args.push(output_path.to_string_lossy().into_owned());

    args
}

/// Runs ffmpeg with the given effective options, blocking until it exits.
///
/// Returns the captured output streams on success; a missing binary,
/// non-zero exit, or failure to start surfaces as the corresponding
/// CoreError and ends the run.
pub fn run_conversion(
    input_path: &Path,
    output_path: &Path,
    options: &ConversionOptions,
) -> CoreResult<ConversionOutcome> {
    let args = build_ffmpeg_args(input_path, output_path, options);

    let mut cmd = Command::new(FFMPEG);
    cmd.args(&args);

    let output = super::run_tool(&mut cmd, FFMPEG)?;

    Ok(ConversionOutcome {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}
