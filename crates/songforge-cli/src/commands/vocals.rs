//! Vocals command implementation.
//!
//! Synthesizes a vocal take for the lyrics, generates an ambient backing
//! track of matching length, blends the two, and exports the result.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use songforge_compose::{vocals, GenerateOptions, SongGenerator};
use songforge_project::SAMPLE_RATE;

use crate::export::{export, ExportFormat};

/// Run the vocals command.
///
/// # Arguments
/// * `lyrics` - Words to sing, one sustained note each
/// * `pitch` - Carrier pitch in Hz
/// * `mix` - Vocal share of the blend, clamped to [0, 1]
/// * `output` - Output WAV path
pub fn run(lyrics: &str, pitch: f32, mix: f32, output: &Path) -> Result<ExitCode> {
    let take = vocals::synthesize(lyrics, pitch, SAMPLE_RATE);
    if take.is_empty() {
        bail!("nothing to sing: lyrics contain no words");
    }

    let generator = SongGenerator::with_builtin_templates();
    let duration = take.len() as f32 / SAMPLE_RATE as f32;
    let mut project = generator
        .generate(&GenerateOptions {
            style: Some("ambient".to_string()),
            duration,
            seed: rand::random(),
            ..Default::default()
        })
        .context("backing track generation failed")?;

    vocals::blend(&mut project, &take, mix.clamp(0.0, 1.0));
    let export_path = export(&project.audio, output, ExportFormat::Wav)?;

    println!(
        "{} backing track with vocals ({:.1} s) -> {}",
        "Generated".green().bold(),
        project.audio_seconds(SAMPLE_RATE),
        export_path.display()
    );

    Ok(ExitCode::SUCCESS)
}
