//! Post-processing edits over a finished project's audio buffer.
//!
//! Every edit is a pure transform over the in-memory samples: tempo-relative
//! linear resampling, band-interpolated equalization, and section
//! rearrangement with a full re-render. Edits mutate the project in place
//! and re-normalize whenever they change the buffer's content shape.

use songforge_project::{SongProject, SAMPLE_RATE};
use songforge_synth::{peak_normalize, render_section};

use crate::error::{ComposeError, ComposeResult};

/// What an edit changed, reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditSummary {
    /// Resampling ratio applied by a tempo change (1.0 otherwise).
    pub tempo_ratio: f32,
    /// True when an equalizer profile was applied.
    pub equalized: bool,
    /// True when the section order changed.
    pub structure_modified: bool,
}

/// High-level editing operations over a [`SongProject`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SongEditor;

impl SongEditor {
    /// Creates an editor.
    pub fn new() -> Self {
        Self
    }

    /// Retargets the project tempo, resampling the audio by
    /// `new_tempo / current_tempo`.
    pub fn adjust_tempo(&self, project: &mut SongProject, tempo: u32) -> ComposeResult<EditSummary> {
        if tempo == 0 {
            return Err(ComposeError::InvalidTempo { tempo });
        }

        let ratio = tempo as f32 / project.tempo.max(1) as f32;
        project.audio = resample(&project.audio, ratio)?;
        project.tempo = tempo;

        Ok(EditSummary {
            tempo_ratio: ratio,
            ..EditSummary::default()
        })
    }

    /// Applies a per-band gain profile across the buffer.
    ///
    /// Band gains are spread evenly over the buffer length and linearly
    /// interpolated per sample; the result is re-normalized to peak 1.0.
    /// An empty buffer is a no-op; an empty profile is an error.
    pub fn apply_equalizer(
        &self,
        project: &mut SongProject,
        profile: &[f32],
    ) -> ComposeResult<EditSummary> {
        if profile.is_empty() {
            return Err(ComposeError::EmptyProfile);
        }

        if !project.audio.is_empty() {
            let len = project.audio.len();
            for (i, sample) in project.audio.iter_mut().enumerate() {
                *sample *= gain_at(profile, i, len);
            }
            peak_normalize(&mut project.audio);
        }

        Ok(EditSummary {
            tempo_ratio: 1.0,
            equalized: true,
            ..EditSummary::default()
        })
    }

    /// Reorders sections by `order` and re-renders the whole buffer.
    ///
    /// `order` must be a permutation of `0..sections.len()`. Re-rendering
    /// goes through the same section dispatch as generation, so flat legacy
    /// sections keep their preserved formula; joins are sample-adjacent
    /// with no crossfade.
    pub fn rearrange_sections(
        &self,
        project: &mut SongProject,
        order: &[usize],
    ) -> ComposeResult<EditSummary> {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        if sorted != (0..project.sections.len()).collect::<Vec<_>>() {
            return Err(ComposeError::InvalidOrder);
        }

        let reordered: Vec<_> = order
            .iter()
            .map(|&index| project.sections[index].clone())
            .collect();
        project.sections = reordered;

        let mut audio = Vec::new();
        for section in &project.sections {
            audio.extend(render_section(section, SAMPLE_RATE));
        }
        peak_normalize(&mut audio);
        project.audio = audio;

        Ok(EditSummary {
            tempo_ratio: 1.0,
            structure_modified: true,
            ..EditSummary::default()
        })
    }
}

/// Resamples a buffer by `ratio` with linear interpolation.
///
/// Output length is `round(len / ratio)`; sample `i` reads source position
/// `i × ratio`, interpolating between its neighbors and clamping at the
/// buffer end. A ratio of 1.0 or an empty buffer passes through unchanged;
/// a non-positive ratio is an invalid-input error.
pub fn resample(audio: &[f32], ratio: f32) -> ComposeResult<Vec<f32>> {
    if ratio <= 0.0 {
        return Err(ComposeError::InvalidRatio { ratio });
    }
    if audio.is_empty() || ratio == 1.0 {
        return Ok(audio.to_vec());
    }

    let out_len = (audio.len() as f64 / ratio as f64).round() as usize;
    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let pos = i as f64 * ratio as f64;
        let base = pos.floor() as usize;
        let frac = (pos - pos.floor()) as f32;
        let sample = match (audio.get(base), audio.get(base + 1)) {
            (Some(&a), Some(&b)) => a * (1.0 - frac) + b * frac,
            (Some(&a), None) => a,
            (None, _) => audio[audio.len() - 1],
        };
        out.push(sample);
    }
    Ok(out)
}

/// Linearly interpolated gain for sample `i` of `len` from a band profile.
fn gain_at(profile: &[f32], i: usize, len: usize) -> f32 {
    if profile.len() == 1 || len <= 1 {
        return profile[0];
    }

    let pos = i as f64 * (profile.len() - 1) as f64 / (len - 1) as f64;
    let base = pos.floor() as usize;
    let frac = (pos - base as f64) as f32;
    match (profile.get(base), profile.get(base + 1)) {
        (Some(&a), Some(&b)) => a + (b - a) * frac,
        _ => profile[profile.len() - 1],
    }
}
