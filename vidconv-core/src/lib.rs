//! Core library for the vidconv media conversion tool.
//!
//! This crate provides preset loading, three-layer option resolution
//! (CLI > preset > defaults), an ffprobe adapter that normalizes container
//! and stream metadata, display formatting for that metadata, and the
//! ffmpeg conversion invoker. All media processing is delegated to the
//! external FFmpeg tools; this crate only orchestrates them.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use vidconv_core::{resolve_options, OptionOverrides, PresetStore};
//!
//! let store = PresetStore::load(Path::new("presets.json"));
//! let options = resolve_options(OptionOverrides::default(), Some("web"), &store)?;
//!
//! let info = vidconv_core::probe_media(Path::new("in.mp4"))?;
//! for (label, value) in vidconv_core::info_fields(&info) {
//!     println!("{label}: {value}");
//! }
//!
//! vidconv_core::run_conversion(Path::new("in.mp4"), Path::new("out.mp4"), &options)?;
//! # Ok::<(), vidconv_core::CoreError>(())
//! ```

pub mod display;
pub mod error;
pub mod external;
pub mod media;
pub mod options;
pub mod presets;

// Re-exports for public API
pub use display::{format_frame_rate, format_megabytes, info_fields};
pub use error::{CoreError, CoreResult};
pub use external::{build_ffmpeg_args, probe_media, run_conversion, ConversionOutcome};
pub use media::MediaInfo;
pub use options::{
    resolve_options, ConversionOptions, OptionOverrides, DEFAULT_AUDIO_CODEC, DEFAULT_VIDEO_CODEC,
};
pub use presets::{Preset, PresetStore, DEFAULT_PRESET_FILE};
