//! Layer summation and peak normalization.

/// Peak absolute value of a buffer (0.0 when empty).
pub fn peak(samples: &[f32]) -> f32 {
    samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
}

/// Scales a buffer so its peak absolute value is exactly 1.0.
///
/// A buffer whose peak is 0 (all-zero or empty) is left untouched; the
/// zero-peak case is defined behavior, not an error.
pub fn peak_normalize(samples: &mut [f32]) {
    let peak = peak(samples);
    if peak > 0.0 {
        for sample in samples {
            *sample /= peak;
        }
    }
}

/// Sums rendered layers of unequal length into one normalized buffer.
///
/// Empty layers are excluded; the rest are zero-padded to the longest,
/// summed element-wise, and peak-normalized. Mixing no layers (or only
/// empty ones) yields an empty buffer.
pub fn mix_down(layers: &[Vec<f32>]) -> Vec<f32> {
    let rendered: Vec<&Vec<f32>> = layers.iter().filter(|layer| !layer.is_empty()).collect();
    if rendered.is_empty() {
        return Vec::new();
    }

    let max_len = rendered.iter().map(|layer| layer.len()).max().unwrap_or(0);
    let mut mix = vec![0.0f32; max_len];
    for layer in rendered {
        for (slot, &sample) in mix.iter_mut().zip(layer.iter()) {
            *slot += sample;
        }
    }

    peak_normalize(&mut mix);
    mix
}
