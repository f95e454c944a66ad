//! Create command implementation.
//!
//! Generates a song from a genre template, saves it to the workspace, and
//! exports the audio.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;

use songforge_compose::{GenerateOptions, SongGenerator};
use songforge_project::{Workspace, SAMPLE_RATE};

use crate::commands::default_workspace_dir;
use crate::export::{export, ExportFormat};

/// Run the create command.
///
/// # Arguments
/// * `style` - Genre template key
/// * `duration` - Target duration in seconds
/// * `tempo` - Tempo override in bpm
/// * `mood` - Mood override
/// * `seed` - Seed; a random one is drawn (and printed) when omitted
/// * `output` - Output path, extension set by `format`
/// * `format` - "wav" or "mp3"
pub fn run(
    style: &str,
    duration: f32,
    tempo: Option<u32>,
    mood: Option<&str>,
    seed: Option<u32>,
    output: &Path,
    format: &str,
) -> Result<ExitCode> {
    let seed = seed.unwrap_or_else(rand::random);
    let format: ExportFormat = format.parse()?;

    let generator = SongGenerator::with_builtin_templates();
    let project = generator
        .generate(&GenerateOptions {
            style: Some(style.to_string()),
            description: None,
            duration,
            tempo,
            mood: mood.map(str::to_string),
            seed,
        })
        .context("song generation failed")?;

    let workspace = Workspace::new(default_workspace_dir())
        .context("failed to open the workspace directory")?;
    let saved = workspace.save(&project).context("failed to save project")?;

    let export_path = export(&project.audio, output, format)?;

    println!(
        "{} {} ({} bpm, {:.1} s) -> {}",
        "Generated".green().bold(),
        project.title,
        project.tempo,
        project.audio_seconds(SAMPLE_RATE),
        export_path.display()
    );
    println!(
        "{} seed {} | saved to {}",
        "Details:".cyan().bold(),
        seed,
        saved.display()
    );

    Ok(ExitCode::SUCCESS)
}
