//! CLI argument definitions for the songforge command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined
//! here, keeping `main.rs` focused on dispatch logic.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// songforge - Offline Procedural Song Generation
#[derive(Parser)]
#[command(name = "songforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a new song from a genre template
    Create {
        /// Genre template key (lofi, pop, cinematic, edm, jazz, ambient)
        style: String,

        /// Target duration in seconds
        #[arg(long, default_value_t = 30.0)]
        duration: f32,

        /// Tempo override in bpm (default: the template's tempo)
        #[arg(long)]
        tempo: Option<u32>,

        /// Mood override (default: the template's mood)
        #[arg(long)]
        mood: Option<String>,

        /// Seed for deterministic output (drawn randomly when omitted)
        #[arg(long)]
        seed: Option<u32>,

        /// Output path; the extension follows --format
        #[arg(short, long, default_value = "output")]
        output: PathBuf,

        /// Export format (mp3 requires ffmpeg on PATH)
        #[arg(long, default_value = "wav", value_parser = ["wav", "mp3"])]
        format: String,
    },

    /// Synthesize vocals for lyrics and blend them over an ambient backing track
    Vocals {
        /// Lyrics to sing, one sustained note per word
        lyrics: String,

        /// Carrier pitch in Hz
        #[arg(long, default_value_t = 440.0)]
        pitch: f32,

        /// Vocal share of the blend, clamped to 0.0..=1.0
        #[arg(long, default_value_t = 0.5)]
        mix: f32,

        /// Output WAV path
        #[arg(short, long, default_value = "vocals.wav")]
        output: PathBuf,
    },

    /// List projects saved in the workspace
    List {
        /// Workspace directory (default: ~/.songforge)
        #[arg(long)]
        workspace: Option<PathBuf>,
    },
}
