//! Section and layer rendering.
//!
//! Two render paths exist on purpose. Layered sections run each instrument
//! part through the oscillator + attack/release envelope and mix the
//! results. Flat sections are the legacy single-voice path for projects
//! persisted before layers existed; its equal-budget note timing and coarse
//! 1.0→0.05 fade must keep producing identical output, so the formulas are
//! preserved exactly rather than unified with the layered path.

use std::f64::consts::PI;

use rand::Rng;

use songforge_project::{SectionLayer, SectionVoicing, SongSection};

use crate::{envelope, mixer, oscillator, seed};

/// Renders one instrument layer to a sample buffer.
///
/// Each (note, duration) pair contributes one enveloped segment: seeded
/// white noise for noise layers, zeros for silence markers and non-positive
/// frequencies, an oscillator tone otherwise. Durations are clamped to at
/// least one sample period. A layer with no scheduled notes renders empty.
pub fn render_layer(layer: &SectionLayer, sample_rate: u32) -> Vec<f32> {
    let mut rng = seed::rng_from_seed(layer.seed);
    let mut out = Vec::new();

    for (note, &duration) in layer.notes.iter().zip(layer.durations.iter()) {
        let duration = duration.max(1.0 / sample_rate as f32);
        let length = oscillator::sample_count(duration, sample_rate);

        let mut segment = if layer.is_noise {
            (0..length).map(|_| rng.gen::<f32>() * 2.0 - 1.0).collect()
        } else {
            match note {
                Some(freq) if *freq > 0.0 => {
                    oscillator::render(layer.waveform, *freq, duration, sample_rate)
                }
                _ => vec![0.0; length],
            }
        };

        envelope::shape(&mut segment, &layer.envelope, sample_rate);
        for sample in &mut segment {
            *sample *= layer.volume;
        }
        out.extend(segment);
    }

    out
}

/// Legacy single-voice rendering for sections without layers.
///
/// Every note gets an equal share of the section duration
/// (`max(1, trunc(rate × duration / count))` samples), a sine tone over an
/// endpoint-exclusive time base, a linear 1.0→0.05 fade, and a fixed 0.5
/// volume; the result is peak-normalized. An empty note list renders as
/// silence for the full duration.
pub fn render_flat(notes: &[f32], duration: f32, sample_rate: u32) -> Vec<f32> {
    let rate = sample_rate as f64;
    if notes.is_empty() {
        let length = ((rate * duration as f64) as usize).max(1);
        return vec![0.0; length];
    }

    let note_count = notes.len();
    let samples_per_note = ((rate * duration as f64 / note_count as f64) as usize).max(1);
    let note_duration = duration as f64 / note_count as f64;

    let mut audio = Vec::with_capacity(samples_per_note * note_count);
    for &freq in notes {
        for k in 0..samples_per_note {
            let t = note_duration * k as f64 / samples_per_note as f64;
            let tone = (2.0 * PI * freq as f64 * t).sin();
            let fade = if samples_per_note > 1 {
                1.0 - 0.95 * k as f64 / (samples_per_note - 1) as f64
            } else {
                1.0
            };
            audio.push((tone * fade * 0.5) as f32);
        }
    }

    mixer::peak_normalize(&mut audio);
    audio
}

/// Renders a whole section, dispatching on its voicing.
pub fn render_section(section: &SongSection, sample_rate: u32) -> Vec<f32> {
    match section.voicing() {
        SectionVoicing::Layered(layers) => {
            let rendered: Vec<Vec<f32>> = layers
                .iter()
                .map(|layer| render_layer(layer, sample_rate))
                .collect();
            mixer::mix_down(&rendered)
        }
        SectionVoicing::Flat(notes) => render_flat(notes, section.duration, sample_rate),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use songforge_project::{Envelope, Waveform, SAMPLE_RATE};

    fn tone_layer(seed: u32) -> SectionLayer {
        SectionLayer {
            name: "lead".to_string(),
            notes: vec![Some(220.0), None, Some(330.0)],
            durations: vec![0.1, 0.05, 0.1],
            waveform: Waveform::Saw,
            volume: 0.5,
            envelope: Envelope::new(0.01, 0.02),
            seed,
            is_noise: false,
        }
    }

    fn noise_layer(seed: u32) -> SectionLayer {
        SectionLayer {
            name: "percussion".to_string(),
            notes: vec![Some(0.0), Some(0.0)],
            durations: vec![0.05, 0.05],
            waveform: Waveform::Noise,
            volume: 0.3,
            envelope: Envelope::new(0.005, 0.01),
            seed,
            is_noise: true,
        }
    }

    #[test]
    fn test_layer_length_sums_segments() {
        let samples = render_layer(&tone_layer(1), SAMPLE_RATE);
        // 0.1 + 0.05 + 0.1 seconds at 44.1 kHz
        assert_eq!(samples.len(), 4_410 + 2_205 + 4_410);
    }

    #[test]
    fn test_silence_marker_renders_zeros() {
        let layer = SectionLayer {
            notes: vec![None],
            durations: vec![0.01],
            ..tone_layer(1)
        };
        let samples = render_layer(&layer, SAMPLE_RATE);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_non_positive_frequency_renders_zeros() {
        let layer = SectionLayer {
            notes: vec![Some(-440.0), Some(0.0)],
            durations: vec![0.01, 0.01],
            ..tone_layer(1)
        };
        let samples = render_layer(&layer, SAMPLE_RATE);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_noise_layer_is_seed_deterministic() {
        let a = render_layer(&noise_layer(42), SAMPLE_RATE);
        let b = render_layer(&noise_layer(42), SAMPLE_RATE);
        let c = render_layer(&noise_layer(43), SAMPLE_RATE);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_empty_layer_renders_empty() {
        let layer = SectionLayer {
            notes: vec![],
            durations: vec![],
            ..tone_layer(1)
        };
        assert!(render_layer(&layer, SAMPLE_RATE).is_empty());
    }

    #[test]
    fn test_layer_volume_bounds_output() {
        let samples = render_layer(&tone_layer(1), SAMPLE_RATE);
        assert!(samples.iter().all(|&s| s.abs() <= 0.5 + 1e-6));
    }

    #[test]
    fn test_flat_equal_budget_per_note() {
        let samples = render_flat(&[220.0, 440.0, 330.0], 0.3, SAMPLE_RATE);
        // trunc(44100 * 0.3 / 3) = 4410 samples per note
        assert_eq!(samples.len(), 4_410 * 3);
    }

    #[test]
    fn test_flat_empty_notes_is_silence() {
        let samples = render_flat(&[], 0.25, SAMPLE_RATE);
        assert_eq!(samples.len(), 11_025);
        assert!(samples.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_flat_output_is_normalized() {
        let samples = render_flat(&[220.0, 440.0], 0.2, SAMPLE_RATE);
        assert_eq!(mixer::peak(&samples), 1.0);
    }

    #[test]
    fn test_section_dispatch_matches_paths() {
        let flat = SongSection {
            name: "intro".to_string(),
            lead_notes: vec![220.0, 440.0],
            duration: 0.2,
            layers: vec![],
        };
        assert_eq!(
            render_section(&flat, SAMPLE_RATE),
            render_flat(&[220.0, 440.0], 0.2, SAMPLE_RATE)
        );

        let layered = SongSection {
            name: "verse".to_string(),
            lead_notes: vec![220.0],
            duration: 0.25,
            layers: vec![tone_layer(5), noise_layer(6)],
        };
        let mixed = render_section(&layered, SAMPLE_RATE);
        assert_eq!(mixer::peak(&mixed), 1.0);
        // Longest layer wins the mix length
        assert_eq!(mixed.len(), 4_410 + 2_205 + 4_410);
    }
}
