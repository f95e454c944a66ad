//! Composition planning: sections and per-layer note schedules.
//!
//! The planner turns a template plus (duration, tempo, seeded RNG) into the
//! structural plan the renderer consumes. All draws come from the caller's
//! RNG; per-layer seeds are derived from the base seed by position, so a
//! future per-layer parallel render would reproduce sequential output.

use rand::Rng;
use rand_pcg::Pcg32;

use songforge_project::{
    Envelope, InstrumentPreset, PatternStep, SectionLayer, SongSection, Template, Waveform,
};
use songforge_synth::seed;

/// Hard floor for a drawn section length, seconds. The final section may
/// still be shorter when it absorbs a small remainder; that is intentional.
pub const MIN_SECTION_SECONDS: f32 = 4.0;

/// Range a section length is drawn from, seconds.
const SECTION_DRAW_SECONDS: std::ops::Range<f32> = 6.0..12.0;

/// Shortest schedulable note step, in beats.
const MIN_STEP_BEATS: f32 = 0.25;

/// Section names used when a template declares none.
const DEFAULT_SECTION_NAMES: [&str; 4] = ["intro", "verse", "chorus", "bridge"];

/// C-major fallback scale used when a template declares none.
const DEFAULT_SCALE: [f32; 7] = [261.63, 293.66, 329.63, 349.23, 392.0, 440.0, 493.88];

/// Plans the ordered sections filling `duration` seconds.
///
/// Draws a section name and a length in [6, 12] s (floored at 4.0, capped
/// at the remaining budget) until the budget is spent; the drawn lengths
/// sum exactly to `duration`.
pub fn plan_sections(
    template: &Template,
    duration: f32,
    tempo: u32,
    rng: &mut Pcg32,
    base_seed: u32,
) -> Vec<SongSection> {
    let names: Vec<&str> = if template.section_names.is_empty() {
        DEFAULT_SECTION_NAMES.to_vec()
    } else {
        template.section_names.iter().map(|s| s.as_str()).collect()
    };

    let mut sections = Vec::new();
    let mut remaining = duration;
    while remaining > 0.0 {
        let name = names[rng.gen_range(0..names.len())].to_string();
        let drawn: f32 = rng.gen_range(SECTION_DRAW_SECONDS);
        let section_duration = drawn.max(MIN_SECTION_SECONDS).min(remaining);
        remaining -= section_duration;

        let section_seed = seed::derive_seed(base_seed, sections.len() as u32);
        sections.push(build_section(
            template,
            name,
            section_duration,
            tempo,
            section_seed,
        ));
    }
    sections
}

/// Builds one section: schedules a layer per instrument preset and derives
/// the legacy lead-note list from the first layer.
fn build_section(
    template: &Template,
    name: String,
    duration: f32,
    tempo: u32,
    section_seed: u32,
) -> SongSection {
    let default_voices;
    let presets: &[InstrumentPreset] = if template.instrument_presets.is_empty() {
        default_voices = default_presets();
        &default_voices
    } else {
        &template.instrument_presets
    };
    let scale: &[f32] = if template.scale.is_empty() {
        &DEFAULT_SCALE
    } else {
        &template.scale
    };

    let beat = 60.0 / tempo as f32;
    let layers: Vec<SectionLayer> = presets
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let layer_seed = seed::derive_seed(section_seed, i as u32);
            schedule_layer(preset, scale, duration, beat, layer_seed)
        })
        .collect();

    // Silences become 0.0 here; the flat render path treats non-positive
    // frequencies as silence, so the raw values stay compatible.
    let lead_notes = layers
        .first()
        .map(|layer| layer.notes.iter().map(|n| n.unwrap_or(0.0)).collect())
        .unwrap_or_default();

    SongSection {
        name,
        lead_notes,
        duration,
        layers,
    }
}

/// Schedules one layer: walks the preset's pattern and rhythm cyclically,
/// one note (or rest) per step, until the section duration is filled.
///
/// Step length is `beat × rhythm` floored at a quarter beat; the last step
/// is clipped so the layer total equals the section duration exactly.
fn schedule_layer(
    preset: &InstrumentPreset,
    scale: &[f32],
    section_duration: f32,
    beat: f32,
    layer_seed: u32,
) -> SectionLayer {
    let mut notes = Vec::new();
    let mut durations = Vec::new();

    if !preset.pattern.is_empty() && !preset.rhythm.is_empty() {
        let mut total = 0.0f32;
        let mut step = 0usize;
        while total < section_duration {
            let rhythm = preset.rhythm[step % preset.rhythm.len()];
            let mut step_duration = (beat * rhythm).max(beat * MIN_STEP_BEATS);
            if total + step_duration >= section_duration {
                step_duration = section_duration - total;
            }

            let note = match preset.pattern[step % preset.pattern.len()] {
                PatternStep::Degree(degree) => {
                    Some(scale[degree % scale.len()] * 2.0f32.powi(preset.octave_shift))
                }
                PatternStep::Rest => None,
            };

            notes.push(note);
            durations.push(step_duration);
            total += step_duration;
            step += 1;
        }
    }

    SectionLayer {
        name: preset.name.clone(),
        notes,
        durations,
        waveform: preset.waveform,
        volume: preset.volume,
        envelope: preset.envelope,
        seed: layer_seed,
        is_noise: preset.waveform == Waveform::Noise,
    }
}

/// Built-in three-voice preset set used when a template defines no
/// instruments: saw lead, square bass one octave down, noise percussion.
pub fn default_presets() -> Vec<InstrumentPreset> {
    vec![
        InstrumentPreset {
            name: "lead".to_string(),
            waveform: Waveform::Saw,
            pattern: vec![
                PatternStep::Degree(0),
                PatternStep::Degree(2),
                PatternStep::Degree(4),
                PatternStep::Degree(2),
                PatternStep::Degree(5),
                PatternStep::Degree(4),
                PatternStep::Degree(2),
                PatternStep::Rest,
            ],
            rhythm: vec![1.0, 0.5, 0.5, 1.0],
            volume: 0.5,
            octave_shift: 0,
            envelope: Envelope::new(0.01, 0.3),
        },
        InstrumentPreset {
            name: "bass".to_string(),
            waveform: Waveform::Square,
            pattern: vec![
                PatternStep::Degree(0),
                PatternStep::Rest,
                PatternStep::Degree(3),
                PatternStep::Rest,
            ],
            rhythm: vec![2.0],
            volume: 0.4,
            octave_shift: -1,
            envelope: Envelope::new(0.02, 0.25),
        },
        InstrumentPreset {
            name: "percussion".to_string(),
            waveform: Waveform::Noise,
            pattern: vec![PatternStep::Degree(0)],
            rhythm: vec![0.5],
            volume: 0.2,
            octave_shift: 0,
            envelope: Envelope::new(0.005, 0.08),
        },
    ]
}
