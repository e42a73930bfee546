// vidconv-cli/src/cli.rs
//
// Defines the command-line argument structure using clap.

use clap::Parser;
use std::path::PathBuf;
use vidconv_core::DEFAULT_PRESET_FILE;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Convert media files using FFmpeg with customizable options",
    long_about = "Probes the input file with ffprobe, prints its metadata, and converts it \
                  with ffmpeg. CLI options override preset values, which override the \
                  built-in defaults."
)]
pub struct Cli {
    /// Path to the input media file
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Path for the converted output file
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Output resolution, e.g. '1280x720'. Overrides preset
    #[arg(short = 'r', long, value_name = "WxH")]
    pub resolution: Option<String>,

    /// Video codec, e.g. 'libx264', 'libvpx-vp9'. Overrides preset
    #[arg(long, visible_alias = "vc", value_name = "CODEC")]
    pub video_codec: Option<String>,

    /// Audio codec, e.g. 'aac', 'libopus'. Overrides preset
    #[arg(long, visible_alias = "ac", value_name = "CODEC")]
    pub audio_codec: Option<String>,

    /// Video bitrate, e.g. '1M', '2000k'. Overrides preset
    #[arg(short = 'b', long, value_name = "BITRATE")]
    pub bitrate: Option<String>,

    /// Name of the preset to apply from the preset file
    #[arg(short = 'p', long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Path to the preset definitions file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_PRESET_FILE)]
    pub preset_file: PathBuf,
}
