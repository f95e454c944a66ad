//! Audio export: native WAV, delegated MP3.
//!
//! WAV goes through the deterministic writer in `songforge-synth`. MP3 is
//! not encoded in-process: the samples are written to a temporary WAV and
//! handed to an `ffmpeg` binary found on PATH. When no encoder is present
//! the export fails with an explicit error instead of degrading silently.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};

use songforge_project::SAMPLE_RATE;
use songforge_synth::wav;

/// Export formats the CLI understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Native mono 16-bit PCM WAV.
    Wav,
    /// MP3 via an external encoder.
    Mp3,
}

impl std::str::FromStr for ExportFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "wav" => Ok(ExportFormat::Wav),
            "mp3" => Ok(ExportFormat::Mp3),
            other => bail!("unsupported export format: {}", other),
        }
    }
}

/// Exports a sample buffer to `path`, returning the actual output path
/// (the extension is set from the format).
pub fn export(samples: &[f32], path: &Path, format: ExportFormat) -> Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
    }

    match format {
        ExportFormat::Wav => {
            let out = path.with_extension("wav");
            wav::write_wav_file(&out, samples, SAMPLE_RATE)
                .with_context(|| format!("failed to write {}", out.display()))?;
            Ok(out)
        }
        ExportFormat::Mp3 => export_mp3(samples, path),
    }
}

/// Writes a temporary WAV and re-encodes it with ffmpeg.
fn export_mp3(samples: &[f32], path: &Path) -> Result<PathBuf> {
    let encoder = which::which("ffmpeg").map_err(|_| {
        anyhow!("MP3 export requires an external encoder: ffmpeg was not found on PATH")
    })?;

    let staging = tempfile::Builder::new()
        .suffix(".wav")
        .tempfile()
        .context("failed to create staging WAV")?;
    wav::write_wav_file(staging.path(), samples, SAMPLE_RATE)?;

    let out = path.with_extension("mp3");
    let status = Command::new(encoder)
        .args(["-y", "-loglevel", "error", "-i"])
        .arg(staging.path())
        .arg(&out)
        .status()
        .context("failed to run ffmpeg")?;
    if !status.success() {
        bail!("ffmpeg exited with {}", status);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("wav".parse::<ExportFormat>().unwrap(), ExportFormat::Wav);
        assert_eq!("mp3".parse::<ExportFormat>().unwrap(), ExportFormat::Mp3);
        assert!("ogg".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_wav_export_sets_extension_and_writes() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out/song");

        let samples: Vec<f32> = (0..32).map(|i| (i as f32 / 32.0) - 0.5).collect();
        let written = export(&samples, &target, ExportFormat::Wav).unwrap();

        assert_eq!(written.extension().unwrap(), "wav");
        let bytes = fs::read(&written).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
        // 44-byte header + 2 bytes per sample
        assert_eq!(bytes.len(), 44 + 64);
    }
}
