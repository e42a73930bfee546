// vidconv-cli/src/commands/convert.rs
//
// The single run flow: resolve effective options, probe and display the
// input's metadata, then run the conversion. Every failure surfaces as a
// CoreError and ends the run; nothing is retried.

use log::{debug, info};
use vidconv_core::{
    info_fields, probe_media, resolve_options, run_conversion, CoreResult, OptionOverrides,
    PresetStore,
};

use crate::cli::Cli;
use crate::output::{print_info, print_section, print_success};

/// Execute the convert flow for the parsed command line.
pub fn run_convert(args: &Cli) -> CoreResult<()> {
    let overrides = OptionOverrides {
        resolution: args.resolution.clone(),
        video_codec: args.video_codec.clone(),
        audio_codec: args.audio_codec.clone(),
        bitrate: args.bitrate.clone(),
    };

    // The preset file is only read when a preset is named, so preset-less
    // runs never warn about a missing presets.json.
    let store = match args.preset {
        Some(_) => PresetStore::load(&args.preset_file),
        None => PresetStore::default(),
    };
    let options = resolve_options(overrides, args.preset.as_deref(), &store)?;

    // Probe must complete (and its output print) before conversion starts
    let media_info = probe_media(&args.input_file)?;
    print_section("Media Information");
    for (label, value) in info_fields(&media_info) {
        print_info(label, value);
    }

    print_section("Conversion");
    print_info("Input", args.input_file.display());
    print_info("Output", args.output_file.display());
    print_info("Video Codec", &options.video_codec);
    print_info("Audio Codec", &options.audio_codec);
    if let Some(resolution) = &options.resolution {
        print_info("Resolution", resolution);
    }
    if let Some(bitrate) = &options.bitrate {
        print_info("Video Bitrate", bitrate);
    }

    info!("Converting '{}'", args.input_file.display());
    let outcome = run_conversion(&args.input_file, &args.output_file, &options)?;

    print_success(&format!(
        "Converted '{}' to '{}'",
        args.input_file.display(),
        args.output_file.display()
    ));
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout);
    }
    if !outcome.stderr.is_empty() {
        // ffmpeg logs its transcode banner to stderr even on success
        debug!("ffmpeg output:\n{}", outcome.stderr);
    }

    Ok(())
}
