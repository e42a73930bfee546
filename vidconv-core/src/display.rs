//! Human-readable rendering of a media info record.
//!
//! Pure formatting only; the CLI decides how the (label, value) pairs reach
//! the terminal. Fields the probe left unknown produce no pair at all.

use crate::media::MediaInfo;

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// Formats a byte count as megabytes with two decimals.
#[must_use]
pub fn format_megabytes(bytes: u64) -> String {
    format!("{:.2} MB", bytes as f64 / BYTES_PER_MB)
}

/// Decodes an ffprobe rational frame rate such as "30000/1001" into decimal
/// fps, keeping the raw value alongside. Anything that is not a two-integer
/// fraction with a non-zero denominator is printed as-is.
#[must_use]
pub fn format_frame_rate(raw: &str) -> String {
    match raw.split_once('/') {
        Some((num, den)) => match (num.trim().parse::<i64>(), den.trim().parse::<i64>()) {
            (Ok(num), Ok(den)) if den != 0 => {
                format!("{:.2} fps ({raw})", num as f64 / den as f64)
            }
            _ => raw.to_string(),
        },
        None => raw.to_string(),
    }
}

/// Renders every present field of the record as a (label, value) pair,
/// in display order.
#[must_use]
pub fn info_fields(info: &MediaInfo) -> Vec<(&'static str, String)> {
    let mut fields = Vec::new();

    if let Some(format_name) = info.format_name.as_deref().filter(|s| !s.is_empty()) {
        fields.push(("Format", format_name.to_string()));
    }
    if let Some(duration) = info.duration {
        fields.push(("Duration", format!("{duration:.2} s")));
    }
    if let Some(size) = info.size {
        fields.push(("Size", format_megabytes(size)));
    }
    if let Some(bit_rate) = info.bit_rate {
        fields.push(("Overall Bit Rate", format!("{} kbps", bit_rate / 1000)));
    }

    if let Some(codec) = info.video_codec_name.as_deref().filter(|s| !s.is_empty()) {
        fields.push(("Video Codec", codec.to_string()));
    }
    if let (Some(width), Some(height)) = (info.width, info.height) {
        // A zero dimension means the probe had no usable value
        if width > 0 && height > 0 {
            fields.push(("Resolution", format!("{width}x{height}")));
        }
    }
    if let Some(rate) = info.avg_frame_rate.as_deref().filter(|s| !s.is_empty()) {
        fields.push(("Frame Rate", format_frame_rate(rate)));
    }

    if let Some(codec) = info.audio_codec_name.as_deref().filter(|s| !s.is_empty()) {
        fields.push(("Audio Codec", codec.to_string()));
    }
    if let Some(sample_rate) = info.sample_rate {
        fields.push(("Sample Rate", format!("{} kHz", sample_rate / 1000)));
    }
    if let Some(channels) = info.channels {
        fields.push(("Channels", channels.to_string()));
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_frame_rate_simple_fraction() {
        assert_eq!(format_frame_rate("30/1"), "30.00 fps (30/1)");
        assert_eq!(format_frame_rate("25/1"), "25.00 fps (25/1)");
    }

    #[test]
    fn test_format_frame_rate_ntsc() {
        assert_eq!(format_frame_rate("30000/1001"), "29.97 fps (30000/1001)");
    }

    #[test]
    fn test_format_frame_rate_invalid_falls_back_to_raw() {
        assert_eq!(format_frame_rate("0/0"), "0/0");
        assert_eq!(format_frame_rate("abc"), "abc");
        assert_eq!(format_frame_rate("30/x"), "30/x");
        assert_eq!(format_frame_rate(""), "");
    }

    #[test]
    fn test_format_megabytes() {
        assert_eq!(format_megabytes(5_000_000), "4.77 MB");
        assert_eq!(format_megabytes(0), "0.00 MB");
        assert_eq!(format_megabytes(1024 * 1024), "1.00 MB");
    }

    fn full_info() -> MediaInfo {
        MediaInfo {
            format_name: Some("matroska,webm".to_string()),
            duration: Some(120.5),
            size: Some(5_000_000),
            bit_rate: Some(332_000),
            video_codec_name: Some("h264".to_string()),
            width: Some(1920),
            height: Some(1080),
            avg_frame_rate: Some("30/1".to_string()),
            audio_codec_name: Some("aac".to_string()),
            sample_rate: Some(48_000),
            channels: Some(2),
        }
    }

    #[test]
    fn test_info_fields_full_record() {
        let fields = info_fields(&full_info());
        assert_eq!(
            fields,
            vec![
                ("Format", "matroska,webm".to_string()),
                ("Duration", "120.50 s".to_string()),
                ("Size", "4.77 MB".to_string()),
                ("Overall Bit Rate", "332 kbps".to_string()),
                ("Video Codec", "h264".to_string()),
                ("Resolution", "1920x1080".to_string()),
                ("Frame Rate", "30.00 fps (30/1)".to_string()),
                ("Audio Codec", "aac".to_string()),
                ("Sample Rate", "48 kHz".to_string()),
                ("Channels", "2".to_string()),
            ]
        );
    }

    #[test]
    fn test_info_fields_skips_unknown_fields() {
        let fields = info_fields(&MediaInfo::default());
        assert!(fields.is_empty());
    }

    #[test]
    fn test_info_fields_suppresses_zero_dimensions() {
        let info = MediaInfo {
            width: Some(0),
            height: Some(1080),
            ..MediaInfo::default()
        };
        assert!(info_fields(&info).is_empty());
    }

    #[test]
    fn test_info_fields_floor_divisions() {
        let info = MediaInfo {
            bit_rate: Some(1999),
            sample_rate: Some(44_100),
            ..MediaInfo::default()
        };
        let fields = info_fields(&info);
        assert_eq!(
            fields,
            vec![
                ("Overall Bit Rate", "1 kbps".to_string()),
                ("Sample Rate", "44 kHz".to_string()),
            ]
        );
    }
}
