//! Normalized media info extracted from probe output.
//!
//! Every field is an `Option`; `None` is the explicit "unknown" marker for
//! anything the probe did not report. Numeric fields that ffprobe reports as
//! strings are coerced here, with a zero fallback when the field is missing
//! from an otherwise-present block.

use crate::error::{CoreError, CoreResult};
use crate::external::ffprobe::{ProbeData, ProbeStream};
use std::fmt::Display;
use std::str::FromStr;

/// Container- and stream-level metadata for a single media file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MediaInfo {
    pub format_name: Option<String>,
    /// Duration in seconds
    pub duration: Option<f64>,
    /// Container size in bytes
    pub size: Option<u64>,
    /// Overall bit rate in bits per second
    pub bit_rate: Option<u64>,
    pub video_codec_name: Option<String>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    /// Average frame rate as a rational string, e.g. "30000/1001"
    pub avg_frame_rate: Option<String>,
    pub audio_codec_name: Option<String>,
    /// Sample rate in Hz
    pub sample_rate: Option<u64>,
    pub channels: Option<i64>,
}

/// Parses a numeric string field, treating absence as zero.
///
/// A present but unparseable value means the probe output cannot be trusted
/// and is reported as a parse failure.
fn parse_or_zero<T>(raw: Option<&str>, field: &str) -> CoreResult<T>
where
    T: FromStr + Default,
    T::Err: Display,
{
    match raw {
        None => Ok(T::default()),
        Some(s) => s.parse::<T>().map_err(|e| {
            CoreError::JsonParse(
                "ffprobe".to_string(),
                format!("invalid {field} value '{s}': {e}"),
            )
        }),
    }
}

fn first_stream<'a>(data: &'a ProbeData, codec_type: &str) -> Option<&'a ProbeStream> {
    data.streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some(codec_type))
}

impl MediaInfo {
    /// Normalizes a parsed ffprobe document.
    ///
    /// Takes the first video and first audio stream in tool order; a missing
    /// stream leaves all of its fields unknown.
    pub fn from_probe(data: &ProbeData) -> CoreResult<Self> {
        let mut info = Self::default();

        if let Some(format) = &data.format {
            info.format_name = format.format_name.clone();
            info.duration = Some(parse_or_zero(format.duration.as_deref(), "duration")?);
            info.size = Some(parse_or_zero(format.size.as_deref(), "size")?);
            info.bit_rate = Some(parse_or_zero(format.bit_rate.as_deref(), "bit_rate")?);
        }

        if let Some(video) = first_stream(data, "video") {
            info.video_codec_name = video.codec_name.clone();
            info.width = Some(video.width.unwrap_or(0));
            info.height = Some(video.height.unwrap_or(0));
            info.avg_frame_rate = video.avg_frame_rate.clone();
        }

        if let Some(audio) = first_stream(data, "audio") {
            info.audio_codec_name = audio.codec_name.clone();
            info.sample_rate = Some(parse_or_zero(audio.sample_rate.as_deref(), "sample_rate")?);
            info.channels = Some(audio.channels.unwrap_or(0));
        }

        Ok(info)
    }
}
