//! Basic oscillator synthesis (sine, square, saw, triangle).
//!
//! Saw and triangle are exact closed forms, not band-limited; aliasing at
//! high frequency is accepted for this engine's short offline renders.

use std::f64::consts::PI;

use songforge_project::Waveform;

/// Number of samples for `duration` seconds, never less than one.
pub fn sample_count(duration: f32, sample_rate: u32) -> usize {
    ((sample_rate as f64 * duration as f64).round() as usize).max(1)
}

/// Generates one oscillator tone.
///
/// # Arguments
/// * `waveform` - Waveform kind; `Noise` is not an oscillator shape and
///   falls back to sine (noise is rendered from the layer's RNG upstream)
/// * `frequency` - Tone frequency in Hz
/// * `duration` - Tone length in seconds; zero or negative yields an empty
///   buffer
/// * `sample_rate` - Sample rate in Hz
///
/// # Returns
/// `max(1, round(sample_rate × duration))` samples in [-1, 1]
pub fn render(waveform: Waveform, frequency: f32, duration: f32, sample_rate: u32) -> Vec<f32> {
    if duration <= 0.0 {
        return Vec::new();
    }

    let length = sample_count(duration, sample_rate);
    let rate = sample_rate as f64;
    let freq = frequency as f64;

    (0..length)
        .map(|i| {
            let t = i as f64 / rate;
            let phase = 2.0 * PI * freq * t;
            let cycles = phase / (2.0 * PI);

            let value = match waveform {
                Waveform::Square => {
                    let s = phase.sin();
                    if s > 0.0 {
                        1.0
                    } else if s < 0.0 {
                        -1.0
                    } else {
                        0.0
                    }
                }
                Waveform::Saw => 2.0 * (cycles - (0.5 + cycles).floor()),
                Waveform::Triangle => 2.0 * (2.0 * (cycles - (cycles + 0.5).floor())).abs() - 1.0,
                Waveform::Sine | Waveform::Noise => phase.sin(),
            };

            value as f32
        })
        .collect()
}
