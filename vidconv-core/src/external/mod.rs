// vidconv-core/src/external/mod.rs
//
// Interactions with the external ffprobe and ffmpeg binaries. Both adapters
// run the tool as a blocking child process with captured output and map the
// failure modes onto CoreError: a missing binary, a failure to start, and a
// non-zero exit (with stderr attached) are reported distinctly.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use std::io;
use std::process::{Command, Output};

/// Executes ffmpeg commands and builds their argument lists
pub mod ffmpeg;

/// Executes ffprobe and parses its JSON output
pub mod ffprobe;

pub use ffmpeg::{build_ffmpeg_args, run_conversion, ConversionOutcome};
pub use ffprobe::probe_media;

/// Logs the full command line at debug level before execution.
fn log_command(cmd: &Command) {
    let program = cmd.get_program().to_string_lossy();
    let args: Vec<_> = cmd.get_args().map(|arg| arg.to_string_lossy()).collect();
    log::debug!("Executing command: {} {}", program, args.join(" "));
}

/// Runs an external tool to completion, capturing stdout and stderr.
///
/// Returns the raw output on success. A missing binary maps to
/// `DependencyNotFound`, any other spawn failure to `CommandStart`, and a
/// non-zero exit to `CommandFailed` carrying the captured stderr.
pub(crate) fn run_tool(cmd: &mut Command, tool: &str) -> CoreResult<Output> {
    log_command(cmd);

    let output = cmd.output().map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            log::error!("{} not found in PATH", tool);
            CoreError::DependencyNotFound(tool.to_string())
        } else {
            log::error!("Failed to start {}: {}", tool, e);
            command_start_error(tool, e)
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        log::error!("{} failed with {}", tool, output.status);
        return Err(command_failed_error(tool, output.status, stderr));
    }

    Ok(output)
}
