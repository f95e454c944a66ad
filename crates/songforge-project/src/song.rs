//! Song sections, instrument layers, and the project aggregate.

use serde::{Deserialize, Serialize};

use crate::template::{Envelope, Waveform};

/// One instrument part scheduled inside a section.
///
/// `notes` and `durations` always have the same length; a `None` note is a
/// silence marker that still consumes its duration slot. Silent notes
/// serialize as explicit JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionLayer {
    /// Voice name (e.g. "lead", "bass", "percussion").
    pub name: String,
    /// Note frequencies in Hz; `None` marks silence.
    pub notes: Vec<Option<f32>>,
    /// Per-note durations in seconds, same length as `notes`.
    pub durations: Vec<f32>,
    /// Waveform used to render the layer.
    pub waveform: Waveform,
    /// Layer volume in [0, 1].
    pub volume: f32,
    /// Amplitude envelope applied per note.
    pub envelope: Envelope,
    /// Seed for the layer's independent random stream.
    pub seed: u32,
    /// When set, every scheduled slot renders as seeded white noise.
    #[serde(default)]
    pub is_noise: bool,
}

impl SectionLayer {
    /// Total scheduled duration of the layer in seconds.
    pub fn total_duration(&self) -> f32 {
        self.durations.iter().sum()
    }
}

/// How a section is rendered.
///
/// Layered sections mix their instrument parts; flat sections are the
/// legacy single-voice path kept for projects persisted before layers
/// existed. The two paths use different envelope and normalization
/// formulas on purpose; see the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionVoicing<'a> {
    /// Mix of instrument layers.
    Layered(&'a [SectionLayer]),
    /// Legacy single-voice note list.
    Flat(&'a [f32]),
}

/// A named time segment of a song.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongSection {
    /// Section name (e.g. "verse", "drop").
    pub name: String,
    /// Lead-voice note frequencies, kept for the legacy flat render path
    /// and populated from the first layer on newly planned sections.
    #[serde(rename = "notes")]
    pub lead_notes: Vec<f32>,
    /// Section duration in seconds.
    pub duration: f32,
    /// Instrument layers; empty for legacy flat sections.
    #[serde(default)]
    pub layers: Vec<SectionLayer>,
}

impl SongSection {
    /// Returns the render dispatch for this section.
    ///
    /// The flat fallback is an intentional branch, not an error path: a
    /// section with no layers renders its `lead_notes` directly.
    pub fn voicing(&self) -> SectionVoicing<'_> {
        if self.layers.is_empty() {
            SectionVoicing::Flat(&self.lead_notes)
        } else {
            SectionVoicing::Layered(&self.layers)
        }
    }
}

/// In-memory representation of a generated song.
///
/// `audio` is the flattened, peak-normalized concatenation of the rendered
/// sections at creation time; editing operations (tempo, equalization,
/// rearrangement, vocal blend) replace it in place.
#[derive(Debug, Clone, PartialEq)]
pub struct SongProject {
    /// Derived song title.
    pub title: String,
    /// Genre name from the resolved template.
    pub genre: String,
    /// Mood, either caller-supplied or the template default.
    pub mood: String,
    /// Tempo in beats per minute.
    pub tempo: u32,
    /// Ordered sections that produced the audio.
    pub sections: Vec<SongSection>,
    /// Mono samples in [-1, 1].
    pub audio: Vec<f32>,
}

impl SongProject {
    /// Peak absolute sample value of the audio buffer (0.0 when empty).
    pub fn peak(&self) -> f32 {
        self.audio.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }

    /// Total audio length in seconds at the given sample rate.
    pub fn audio_seconds(&self, sample_rate: u32) -> f32 {
        self.audio.len() as f32 / sample_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layer(name: &str) -> SectionLayer {
        SectionLayer {
            name: name.to_string(),
            notes: vec![Some(220.0), None, Some(330.0)],
            durations: vec![0.5, 0.25, 0.25],
            waveform: Waveform::Sine,
            volume: 0.5,
            envelope: Envelope::default(),
            seed: 7,
            is_noise: false,
        }
    }

    #[test]
    fn test_voicing_dispatch() {
        let flat = SongSection {
            name: "intro".to_string(),
            lead_notes: vec![220.0, 440.0],
            duration: 4.0,
            layers: vec![],
        };
        assert!(matches!(flat.voicing(), SectionVoicing::Flat(notes) if notes.len() == 2));

        let layered = SongSection {
            name: "verse".to_string(),
            lead_notes: vec![220.0],
            duration: 4.0,
            layers: vec![layer("lead")],
        };
        assert!(matches!(
            layered.voicing(),
            SectionVoicing::Layered(layers) if layers.len() == 1
        ));
    }

    #[test]
    fn test_layer_total_duration() {
        assert!((layer("lead").total_duration() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_silence_serializes_as_null() {
        let json = serde_json::to_string(&layer("lead")).unwrap();
        assert!(json.contains("[220.0,null,330.0]"));

        let back: SectionLayer = serde_json::from_str(&json).unwrap();
        assert_eq!(back.notes[1], None);
    }

    #[test]
    fn test_project_peak() {
        let project = SongProject {
            title: "t".to_string(),
            genre: "g".to_string(),
            mood: "m".to_string(),
            tempo: 120,
            sections: vec![],
            audio: vec![0.25, -0.75, 0.5],
        };
        assert!((project.peak() - 0.75).abs() < 1e-6);
    }
}
