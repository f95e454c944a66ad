//! Linear attack/release amplitude shaping.

use songforge_project::Envelope;

/// Shapes a buffer in place with a piecewise-linear attack/release gain
/// curve.
///
/// Attack and release times are floored at one sample period and their
/// sample counts capped at the buffer length. The gain curve ramps 0→1
/// over the attack region (endpoint exclusive), holds 1.0 over the
/// sustain remainder, and ramps 1→0 over the release region (endpoint
/// inclusive: the final sample reaches exactly 0). The release window is
/// always anchored to the buffer end; when attack and release together
/// exceed the buffer, the release overwrites the overlap and the attack is
/// truncated by lack of room.
pub fn shape(samples: &mut [f32], envelope: &Envelope, sample_rate: u32) {
    if samples.is_empty() {
        return;
    }

    let rate = sample_rate as f64;
    let attack = (envelope.attack as f64).max(1.0 / rate);
    let release = (envelope.release as f64).max(1.0 / rate);

    let len = samples.len();
    let attack_samples = ((rate * attack) as usize).min(len);
    let release_samples = ((rate * release) as usize).min(len);

    let mut gain = vec![1.0f32; len];
    for (i, g) in gain.iter_mut().take(attack_samples).enumerate() {
        *g = i as f32 / attack_samples as f32;
    }
    if release_samples > 0 {
        let start = len - release_samples;
        for i in 0..release_samples {
            gain[start + i] = if release_samples > 1 {
                1.0 - i as f32 / (release_samples - 1) as f32
            } else {
                1.0
            };
        }
    }

    for (sample, g) in samples.iter_mut().zip(gain) {
        *sample *= g;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shaped(len: usize, attack: f32, release: f32) -> Vec<f32> {
        let mut samples = vec![1.0f32; len];
        shape(&mut samples, &Envelope::new(attack, release), 44_100);
        samples
    }

    #[test]
    fn test_attack_starts_at_zero_release_ends_at_zero() {
        let samples = shaped(44_100, 0.01, 0.3);
        assert_eq!(samples[0], 0.0);
        assert_eq!(*samples.last().unwrap(), 0.0);
    }

    #[test]
    fn test_sustain_region_is_unity() {
        let samples = shaped(44_100, 0.01, 0.01);
        // Well inside the sustain region
        assert_eq!(samples[22_050], 1.0);
    }

    #[test]
    fn test_attack_ramp_is_monotonic() {
        let samples = shaped(44_100, 0.05, 0.01);
        let attack_samples = (44_100.0f64 * 0.05) as usize;
        for i in 1..attack_samples {
            assert!(samples[i] >= samples[i - 1]);
        }
    }

    #[test]
    fn test_release_anchored_to_buffer_end_on_overlap() {
        // Attack + release both cover the whole buffer; release wins the
        // overlap so the tail still reaches exactly zero.
        let samples = shaped(100, 1.0, 1.0);
        assert_eq!(*samples.last().unwrap(), 0.0);
        // The release ramp occupies the entire buffer (it was written last)
        assert_eq!(samples[0], 1.0);
    }

    #[test]
    fn test_empty_buffer_is_noop() {
        let mut samples: Vec<f32> = Vec::new();
        shape(&mut samples, &Envelope::default(), 44_100);
        assert!(samples.is_empty());
    }

    #[test]
    fn test_single_sample_buffer() {
        let mut samples = vec![0.5f32];
        shape(&mut samples, &Envelope::default(), 44_100);
        assert_eq!(samples.len(), 1);
    }
}
