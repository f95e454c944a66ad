//! Vocal synthesis, loading, and blending.
//!
//! The vocal voice is a deliberately simple collaborator to the engine: a
//! sine carrier with slow vibrato and a linear swell per word. It produces
//! the same sample-buffer type the engine uses, so blending is a plain
//! cross-fade over zero-padded buffers.

use std::f64::consts::PI;
use std::path::Path;

use songforge_project::SongProject;
use songforge_synth::{peak_normalize, wav};

use crate::error::ComposeResult;

/// Default carrier pitch in Hz.
pub const DEFAULT_PITCH: f32 = 440.0;

/// Default song/vocal cross-fade position.
pub const DEFAULT_MIX: f32 = 0.5;

/// Synthesizes a vocal take for `lyrics`.
///
/// Each word contributes `max(0.25, 2.5 / word_count)` seconds: a sine
/// carrier at `pitch` with a 2 Hz vibrato (`0.6 + 0.4·sin(4π t)`) and a
/// linear 0.1→1.0 swell. Empty lyrics yield an empty buffer.
pub fn synthesize(lyrics: &str, pitch: f32, sample_rate: u32) -> Vec<f32> {
    let words: Vec<&str> = lyrics.split_whitespace().collect();
    let duration_per_word = (2.5 / words.len().max(1) as f32).max(0.25);
    let samples_per_word = (sample_rate as f64 * duration_per_word as f64) as usize;
    if samples_per_word == 0 {
        return Vec::new();
    }

    let rate = sample_rate as f64;
    let mut combined = Vec::with_capacity(samples_per_word * words.len());
    for _ in &words {
        for i in 0..samples_per_word {
            let t = i as f64 / rate;
            let vibrato = (PI * 4.0 * t).sin();
            let carrier = (2.0 * PI * pitch as f64 * t).sin();
            let swell = 0.1 + 0.9 * i as f64 / (samples_per_word - 1).max(1) as f64;
            combined.push((carrier * (0.6 + 0.4 * vibrato) * swell) as f32);
        }
    }
    combined
}

/// Loads a previously recorded vocal take from a WAV file.
pub fn load(path: impl AsRef<Path>) -> ComposeResult<Vec<f32>> {
    Ok(wav::read_wav_mono(path)?)
}

/// Blends a vocal buffer into the project audio.
///
/// The shorter of the two buffers is zero-padded to the longer, then each
/// sample becomes `(1-mix)·song + mix·vocal` and the result is
/// peak-renormalized. `mix` is the vocal share in [0, 1]. Empty vocals are
/// a no-op; a project with no audio adopts the vocals verbatim.
pub fn blend(project: &mut SongProject, vocals: &[f32], mix: f32) {
    if vocals.is_empty() {
        return;
    }
    if project.audio.is_empty() {
        project.audio = vocals.to_vec();
        return;
    }

    let length = project.audio.len().max(vocals.len());
    let mut blended = Vec::with_capacity(length);
    for i in 0..length {
        let song = project.audio.get(i).copied().unwrap_or(0.0);
        let vocal = vocals.get(i).copied().unwrap_or(0.0);
        blended.push((1.0 - mix) * song + mix * vocal);
    }

    peak_normalize(&mut blended);
    project.audio = blended;
}

#[cfg(test)]
mod tests {
    use super::*;
    use songforge_project::SAMPLE_RATE;

    fn empty_project(audio: Vec<f32>) -> SongProject {
        SongProject {
            title: "t".to_string(),
            genre: "g".to_string(),
            mood: "m".to_string(),
            tempo: 100,
            sections: vec![],
            audio,
        }
    }

    #[test]
    fn test_word_budget_scales_with_lyrics() {
        // Two words: 1.25 s each
        let short = synthesize("hello world", DEFAULT_PITCH, SAMPLE_RATE);
        assert_eq!(short.len(), 2 * 55_125);

        // Twelve words hit the 0.25 s floor
        let many = synthesize(
            "one two three four five six seven eight nine ten eleven twelve",
            DEFAULT_PITCH,
            SAMPLE_RATE,
        );
        assert_eq!(many.len(), 12 * 11_025);
    }

    #[test]
    fn test_empty_lyrics_yield_empty_buffer() {
        assert!(synthesize("", DEFAULT_PITCH, SAMPLE_RATE).is_empty());
        assert!(synthesize("   ", DEFAULT_PITCH, SAMPLE_RATE).is_empty());
    }

    #[test]
    fn test_vocals_start_quiet_and_swell() {
        let samples = synthesize("ah", DEFAULT_PITCH, SAMPLE_RATE);
        let head: f32 = samples[..100].iter().map(|s| s.abs()).sum();
        let tail: f32 = samples[samples.len() - 100..].iter().map(|s| s.abs()).sum();
        assert!(tail > head);
    }

    #[test]
    fn test_load_reads_back_a_written_take() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("take.wav");

        let take = synthesize("la la", DEFAULT_PITCH, SAMPLE_RATE);
        songforge_synth::wav::write_wav_file(&path, &take, SAMPLE_RATE).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), take.len());
        for (a, b) in take.iter().zip(loaded.iter()) {
            assert!((a - b).abs() <= 1.0 / 32767.0);
        }
    }

    #[test]
    fn test_blend_empty_vocals_is_noop() {
        let mut project = empty_project(vec![0.5, -0.5]);
        blend(&mut project, &[], 0.5);
        assert_eq!(project.audio, vec![0.5, -0.5]);
    }

    #[test]
    fn test_blend_into_empty_project_adopts_vocals() {
        let mut project = empty_project(vec![]);
        blend(&mut project, &[0.25, -0.25], 0.5);
        assert_eq!(project.audio, vec![0.25, -0.25]);
    }

    #[test]
    fn test_blend_pads_to_longer_buffer() {
        let mut project = empty_project(vec![1.0, 1.0]);
        blend(&mut project, &[1.0, 1.0, 1.0, 1.0], 0.5);
        assert_eq!(project.audio.len(), 4);
        // Beyond the song's end only the vocal contributes; after
        // normalization the shared region carries the peak.
        assert_eq!(project.audio, vec![1.0, 1.0, 0.5, 0.5]);
    }

    #[test]
    fn test_blend_renormalizes_peak() {
        let mut project = empty_project(vec![0.1, -0.1, 0.05]);
        blend(&mut project, &[0.1, 0.1], 0.5);
        let peak = project
            .audio
            .iter()
            .fold(0.0f32, |acc, s| acc.max(s.abs()));
        assert_eq!(peak, 1.0);
    }
}
