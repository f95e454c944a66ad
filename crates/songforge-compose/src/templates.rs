//! Built-in genre templates.
//!
//! Six genres ship with the engine; each carries the scale, section names,
//! keyword hints, and a three-voice instrument set tuned for the genre.
//! Callers are free to build their own [`TemplateStore`] instead; the
//! generator only ever reads whichever store it was constructed with.

use songforge_project::{
    Envelope, InstrumentPreset, PatternStep, Template, TemplateStore, Waveform,
};

use songforge_project::PatternStep::{Degree, Rest};

fn preset(
    name: &str,
    waveform: Waveform,
    pattern: Vec<PatternStep>,
    rhythm: Vec<f32>,
    volume: f32,
    octave_shift: i32,
    envelope: Envelope,
) -> InstrumentPreset {
    InstrumentPreset {
        name: name.to_string(),
        waveform,
        pattern,
        rhythm,
        volume,
        octave_shift,
        envelope,
    }
}

fn strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Builds the store of built-in genre templates.
pub fn builtin_store() -> TemplateStore {
    let mut store = TemplateStore::new();

    store.insert(
        "lofi",
        Template {
            genre: "Lo-Fi".to_string(),
            mood: "chill".to_string(),
            tempo: 85,
            scale: vec![220.0, 246.94, 277.18, 293.66, 329.63, 369.99, 415.3],
            section_names: strings(&["intro", "verse", "chorus", "outro"]),
            instrument_presets: vec![
                preset(
                    "keys",
                    Waveform::Triangle,
                    vec![Degree(0), Degree(2), Degree(4), Rest, Degree(3), Degree(1)],
                    vec![1.0, 0.5, 0.5, 1.0],
                    0.5,
                    0,
                    Envelope::new(0.02, 0.4),
                ),
                preset(
                    "bass",
                    Waveform::Sine,
                    vec![Degree(0), Rest, Degree(4), Rest],
                    vec![2.0],
                    0.4,
                    -1,
                    Envelope::new(0.03, 0.3),
                ),
                preset(
                    "dust",
                    Waveform::Noise,
                    vec![Degree(0)],
                    vec![0.5],
                    0.12,
                    0,
                    Envelope::new(0.01, 0.15),
                ),
            ],
            keywords: strings(&["study", "lofi", "relax", "coffee"]),
        },
    );

    store.insert(
        "pop",
        Template {
            genre: "Pop".to_string(),
            mood: "upbeat".to_string(),
            tempo: 120,
            scale: vec![261.63, 293.66, 329.63, 349.23, 392.0, 440.0, 493.88],
            section_names: strings(&["intro", "verse", "chorus", "bridge", "chorus"]),
            instrument_presets: vec![
                preset(
                    "lead",
                    Waveform::Saw,
                    vec![
                        Degree(0),
                        Degree(2),
                        Degree(4),
                        Degree(2),
                        Degree(5),
                        Degree(4),
                        Degree(2),
                        Rest,
                    ],
                    vec![0.5, 0.5, 1.0, 0.5],
                    0.5,
                    0,
                    Envelope::new(0.01, 0.2),
                ),
                preset(
                    "bass",
                    Waveform::Square,
                    vec![Degree(0), Degree(0), Degree(3), Degree(4)],
                    vec![1.0],
                    0.4,
                    -1,
                    Envelope::new(0.01, 0.15),
                ),
                preset(
                    "hats",
                    Waveform::Noise,
                    vec![Degree(0)],
                    vec![0.25],
                    0.15,
                    0,
                    Envelope::new(0.005, 0.05),
                ),
            ],
            keywords: strings(&["pop", "catchy", "radio"]),
        },
    );

    store.insert(
        "cinematic",
        Template {
            genre: "Cinematic".to_string(),
            mood: "epic".to_string(),
            tempo: 100,
            scale: vec![174.61, 196.0, 220.0, 246.94, 277.18, 311.13, 349.23],
            section_names: strings(&["intro", "build", "climax", "resolution"]),
            instrument_presets: vec![
                preset(
                    "horns",
                    Waveform::Saw,
                    vec![Degree(0), Degree(4), Degree(5), Degree(4)],
                    vec![2.0, 1.0, 1.0],
                    0.5,
                    0,
                    Envelope::new(0.1, 0.5),
                ),
                preset(
                    "low strings",
                    Waveform::Triangle,
                    vec![Degree(0), Degree(3)],
                    vec![4.0],
                    0.45,
                    -1,
                    Envelope::new(0.2, 0.8),
                ),
                preset(
                    "timpani",
                    Waveform::Noise,
                    vec![Degree(0), Rest, Rest, Degree(0)],
                    vec![1.0],
                    0.2,
                    0,
                    Envelope::new(0.005, 0.3),
                ),
            ],
            keywords: strings(&["film", "orchestra", "cinematic"]),
        },
    );

    store.insert(
        "edm",
        Template {
            genre: "EDM".to_string(),
            mood: "energetic".to_string(),
            tempo: 128,
            scale: vec![261.63, 293.66, 329.63, 391.0, 440.0, 523.25, 587.33],
            section_names: strings(&["intro", "build", "drop", "breakdown"]),
            instrument_presets: vec![
                preset(
                    "lead",
                    Waveform::Saw,
                    vec![
                        Degree(0),
                        Degree(0),
                        Degree(3),
                        Degree(5),
                        Degree(4),
                        Degree(3),
                    ],
                    vec![0.5, 0.25, 0.25],
                    0.5,
                    0,
                    Envelope::new(0.005, 0.1),
                ),
                preset(
                    "bass",
                    Waveform::Square,
                    vec![Degree(0)],
                    vec![0.5],
                    0.45,
                    -1,
                    Envelope::new(0.005, 0.1),
                ),
                preset(
                    "hats",
                    Waveform::Noise,
                    vec![Degree(0)],
                    vec![0.25],
                    0.18,
                    0,
                    Envelope::new(0.002, 0.04),
                ),
            ],
            keywords: strings(&["club", "dance", "edm"]),
        },
    );

    store.insert(
        "jazz",
        Template {
            genre: "Jazz".to_string(),
            mood: "smooth".to_string(),
            tempo: 110,
            scale: vec![261.63, 311.13, 349.23, 392.0, 466.16, 523.25, 587.33],
            section_names: strings(&["intro", "theme", "solo", "theme"]),
            instrument_presets: vec![
                preset(
                    "keys",
                    Waveform::Triangle,
                    vec![
                        Degree(0),
                        Degree(2),
                        Rest,
                        Degree(4),
                        Degree(6),
                        Rest,
                        Degree(5),
                    ],
                    vec![0.5, 1.0, 0.5],
                    0.5,
                    0,
                    Envelope::new(0.02, 0.35),
                ),
                preset(
                    "walking bass",
                    Waveform::Sine,
                    vec![Degree(0), Degree(2), Degree(4), Degree(2)],
                    vec![1.0],
                    0.4,
                    -1,
                    Envelope::new(0.02, 0.2),
                ),
                preset(
                    "brush",
                    Waveform::Noise,
                    vec![Degree(0), Rest],
                    vec![0.5],
                    0.1,
                    0,
                    Envelope::new(0.01, 0.1),
                ),
            ],
            keywords: strings(&["jazz", "sax", "swing"]),
        },
    );

    store.insert(
        "ambient",
        Template {
            genre: "Ambient".to_string(),
            mood: "dreamy".to_string(),
            tempo: 60,
            scale: vec![110.0, 146.83, 196.0, 220.0, 261.63, 329.63, 392.0],
            section_names: strings(&["drone", "texture", "swells", "release"]),
            instrument_presets: vec![
                preset(
                    "pad",
                    Waveform::Sine,
                    vec![Degree(0), Degree(2), Degree(4)],
                    vec![4.0],
                    0.5,
                    0,
                    Envelope::new(0.8, 1.5),
                ),
                preset(
                    "drone",
                    Waveform::Triangle,
                    vec![Degree(0)],
                    vec![8.0],
                    0.4,
                    -1,
                    Envelope::new(1.0, 2.0),
                ),
                preset(
                    "air",
                    Waveform::Noise,
                    vec![Degree(0)],
                    vec![4.0],
                    0.08,
                    0,
                    Envelope::new(1.0, 2.0),
                ),
            ],
            keywords: strings(&["ambient", "relax", "space"]),
        },
    );

    store
}
