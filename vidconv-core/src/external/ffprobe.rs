// vidconv-core/src/external/ffprobe.rs
//
// Probe adapter: runs ffprobe against an input file requesting quiet,
// JSON-formatted format+stream data, and normalizes the result into a
// MediaInfo record.

use crate::error::{CoreError, CoreResult};
use crate::media::MediaInfo;
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

const FFPROBE: &str = "ffprobe";

/// Raw ffprobe JSON document. Numeric format fields arrive as strings and
/// are coerced later; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProbeData {
    #[serde(default)]
    pub format: Option<ProbeFormat>,
    #[serde(default)]
    pub streams: Vec<ProbeStream>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeFormat {
    #[serde(default)]
    pub format_name: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub bit_rate: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProbeStream {
    #[serde(default)]
    pub codec_type: Option<String>,
    #[serde(default)]
    pub codec_name: Option<String>,
    #[serde(default)]
    pub width: Option<i64>,
    #[serde(default)]
    pub height: Option<i64>,
    #[serde(default)]
    pub avg_frame_rate: Option<String>,
    #[serde(default)]
    pub sample_rate: Option<String>,
    #[serde(default)]
    pub channels: Option<i64>,
}

/// Probes the given media file and returns its normalized info record.
///
/// Invokes `ffprobe -v quiet -print_format json -show_format -show_streams`
/// and parses the captured stdout. Every failure mode aborts the run:
/// missing binary, non-zero exit (stderr surfaced), or unparseable output.
pub fn probe_media(input_path: &Path) -> CoreResult<MediaInfo> {
    log::debug!("Probing media file: {}", input_path.display());

    let mut cmd = Command::new(FFPROBE);
    cmd.args(["-v", "quiet", "-print_format", "json", "-show_format", "-show_streams"])
        .arg(input_path);

    let output = super::run_tool(&mut cmd, FFPROBE)?;

    let data: ProbeData = serde_json::from_slice(&output.stdout)
        .map_err(|e| CoreError::JsonParse(FFPROBE.to_string(), e.to_string()))?;

    MediaInfo::from_probe(&data)
}
