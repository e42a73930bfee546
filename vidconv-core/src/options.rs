//! Conversion option resolution.
//!
//! Effective options come from three layers with fixed precedence:
//! CLI flags override preset values, which override the built-in defaults.
//! Resolution and bitrate have no default and may stay unset; the codecs
//! always resolve to a concrete value.

use crate::error::{CoreError, CoreResult};
use crate::presets::PresetStore;

/// Fallback video codec when neither the CLI nor a preset names one.
pub const DEFAULT_VIDEO_CODEC: &str = "libx264";

/// Fallback audio codec when neither the CLI nor a preset names one.
pub const DEFAULT_AUDIO_CODEC: &str = "aac";

/// The fully resolved set of conversion parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionOptions {
    pub resolution: Option<String>,
    pub video_codec: String,
    pub audio_codec: String,
    pub bitrate: Option<String>,
}

/// Option values supplied on the command line; each may be unset.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub resolution: Option<String>,
    pub video_codec: Option<String>,
    pub audio_codec: Option<String>,
    pub bitrate: Option<String>,
}

/// Merges CLI values, an optionally named preset, and the built-in defaults
/// into one effective option set.
///
/// Naming a preset that the store does not define is an error carrying the
/// available preset names; the caller aborts before any conversion.
pub fn resolve_options(
    cli: OptionOverrides,
    preset_name: Option<&str>,
    store: &PresetStore,
) -> CoreResult<ConversionOptions> {
    let mut resolution = cli.resolution;
    let mut video_codec = cli.video_codec;
    let mut audio_codec = cli.audio_codec;
    let mut bitrate = cli.bitrate;

    if let Some(name) = preset_name {
        let preset = store.get(name).ok_or_else(|| CoreError::PresetNotFound {
            name: name.to_string(),
            available: store.names(),
        })?;
        log::info!("Applying preset: {}", name);

        // Preset values fill in only what the CLI left unset
        resolution = resolution.or_else(|| preset.resolution.clone());
        video_codec = video_codec.or_else(|| preset.video_codec.clone());
        audio_codec = audio_codec.or_else(|| preset.audio_codec.clone());
        bitrate = bitrate.or_else(|| preset.bitrate.clone());
    }

    Ok(ConversionOptions {
        resolution,
        video_codec: video_codec.unwrap_or_else(|| DEFAULT_VIDEO_CODEC.to_string()),
        audio_codec: audio_codec.unwrap_or_else(|| DEFAULT_AUDIO_CODEC.to_string()),
        bitrate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::Preset;
    use std::collections::HashMap;

    fn store_with(name: &str, preset: Preset) -> PresetStore {
        let mut presets = HashMap::new();
        presets.insert(name.to_string(), preset);
        PresetStore::from(presets)
    }

    fn full_preset() -> Preset {
        Preset {
            resolution: Some("1280x720".to_string()),
            video_codec: Some("preset_vc".to_string()),
            audio_codec: Some("preset_ac".to_string()),
            bitrate: Some("1M".to_string()),
        }
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let options = resolve_options(OptionOverrides::default(), None, &PresetStore::default()).unwrap();
        assert_eq!(options.resolution, None);
        assert_eq!(options.video_codec, "libx264");
        assert_eq!(options.audio_codec, "aac");
        assert_eq!(options.bitrate, None);
    }

    #[test]
    fn test_cli_values_win_over_defaults() {
        let cli = OptionOverrides {
            resolution: Some("1920x1080".to_string()),
            video_codec: Some("libvpx-vp9".to_string()),
            audio_codec: Some("libopus".to_string()),
            bitrate: Some("2M".to_string()),
        };
        let options = resolve_options(cli, None, &PresetStore::default()).unwrap();
        assert_eq!(options.resolution.as_deref(), Some("1920x1080"));
        assert_eq!(options.video_codec, "libvpx-vp9");
        assert_eq!(options.audio_codec, "libopus");
        assert_eq!(options.bitrate.as_deref(), Some("2M"));
    }

    #[test]
    fn test_preset_fills_unset_fields() {
        let store = store_with("p1", full_preset());
        let options = resolve_options(OptionOverrides::default(), Some("p1"), &store).unwrap();
        assert_eq!(options.resolution.as_deref(), Some("1280x720"));
        assert_eq!(options.video_codec, "preset_vc");
        assert_eq!(options.audio_codec, "preset_ac");
        assert_eq!(options.bitrate.as_deref(), Some("1M"));
    }

    #[test]
    fn test_cli_values_win_over_preset() {
        let store = store_with("p1", full_preset());
        let cli = OptionOverrides {
            resolution: Some("640x480".to_string()),
            video_codec: Some("cli_vc".to_string()),
            audio_codec: None,
            bitrate: None,
        };
        let options = resolve_options(cli, Some("p1"), &store).unwrap();
        // CLI wins wherever it is set, regardless of preset content
        assert_eq!(options.resolution.as_deref(), Some("640x480"));
        assert_eq!(options.video_codec, "cli_vc");
        // preset fills the rest
        assert_eq!(options.audio_codec, "preset_ac");
        assert_eq!(options.bitrate.as_deref(), Some("1M"));
    }

    #[test]
    fn test_partial_preset_falls_back_to_defaults() {
        let store = store_with(
            "res-only",
            Preset {
                resolution: Some("1024x768".to_string()),
                ..Preset::default()
            },
        );
        let options = resolve_options(OptionOverrides::default(), Some("res-only"), &store).unwrap();
        assert_eq!(options.resolution.as_deref(), Some("1024x768"));
        assert_eq!(options.video_codec, "libx264");
        assert_eq!(options.audio_codec, "aac");
        assert_eq!(options.bitrate, None);
    }

    #[test]
    fn test_unknown_preset_is_an_error() {
        let store = store_with("p1", full_preset());
        let err = resolve_options(OptionOverrides::default(), Some("missing"), &store).unwrap_err();
        match err {
            CoreError::PresetNotFound { name, available } => {
                assert_eq!(name, "missing");
                assert_eq!(available, vec!["p1"]);
            }
            other => panic!("expected PresetNotFound, got {other:?}"),
        }
    }
}
