//! Genre templates, instrument presets, and the immutable template store.

use serde::{Deserialize, Serialize};

/// Basic waveform kinds an instrument layer can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Pure sine tone.
    Sine,
    /// Hard square wave.
    Square,
    /// Rising sawtooth (closed form, not band-limited).
    Saw,
    /// Symmetric triangle (closed form, not band-limited).
    Triangle,
    /// Seeded white noise, rendered from the layer's RNG.
    Noise,
}

impl Waveform {
    /// Returns the waveform kind as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Waveform::Sine => "sine",
            Waveform::Square => "square",
            Waveform::Saw => "saw",
            Waveform::Triangle => "triangle",
            Waveform::Noise => "noise",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Waveform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sine" => Ok(Waveform::Sine),
            "square" => Ok(Waveform::Square),
            "saw" => Ok(Waveform::Saw),
            "triangle" => Ok(Waveform::Triangle),
            "noise" => Ok(Waveform::Noise),
            _ => Err(format!("unknown waveform: {}", s)),
        }
    }
}

/// One step of an instrument pattern.
///
/// Serializes as `{"degree": n}` for a scale degree and the plain string
/// `"rest"` for a rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternStep {
    /// Index into the template scale; wraps modulo the scale length.
    Degree(usize),
    /// Explicit rest. Consumes its rhythm slot as silence.
    Rest,
}

/// Linear attack/release amplitude envelope, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// Attack time in seconds.
    pub attack: f32,
    /// Release time in seconds.
    pub release: f32,
}

impl Default for Envelope {
    fn default() -> Self {
        Self {
            attack: 0.01,
            release: 0.3,
        }
    }
}

impl Envelope {
    /// Creates a new envelope.
    pub fn new(attack: f32, release: f32) -> Self {
        Self { attack, release }
    }
}

/// A repeating instrument voice inside a genre template.
///
/// The pattern and rhythm arrays are walked cyclically by the planner; they
/// do not need to be the same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentPreset {
    /// Display name of the voice (e.g. "lead", "bass").
    pub name: String,
    /// Waveform used to render the voice.
    pub waveform: Waveform,
    /// Scale degrees and rests, walked cyclically.
    pub pattern: Vec<PatternStep>,
    /// Positive beat-length multipliers, walked cyclically.
    pub rhythm: Vec<f32>,
    /// Layer volume in [0, 1].
    pub volume: f32,
    /// Octave transposition applied to every resolved note.
    pub octave_shift: i32,
    /// Amplitude envelope applied per note.
    pub envelope: Envelope,
}

/// A static genre preset.
///
/// Templates are pure data: the store hands out references and nothing in
/// the engine ever mutates one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Human-readable genre name (e.g. "Lo-Fi").
    pub genre: String,
    /// Default mood used when the caller does not override it.
    pub mood: String,
    /// Default tempo in beats per minute.
    pub tempo: u32,
    /// Scale frequencies in Hz, indexed by pattern degrees.
    pub scale: Vec<f32>,
    /// Section names the planner draws from.
    pub section_names: Vec<String>,
    /// Instrument voices. When empty the planner falls back to a built-in
    /// default three-voice set.
    pub instrument_presets: Vec<InstrumentPreset>,
    /// Lowercase keywords matched against free-text descriptions.
    pub keywords: Vec<String>,
}

/// Immutable, ordered lookup table of genre templates.
///
/// Built explicitly at startup and injected into the generator; insertion
/// order is the deterministic iteration order used for keyword resolution
/// and the final fallback.
#[derive(Debug, Clone, Default)]
pub struct TemplateStore {
    entries: Vec<(String, Template)>,
}

impl TemplateStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template under `key`, replacing any existing entry in place.
    pub fn insert(&mut self, key: impl Into<String>, template: Template) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = template,
            None => self.entries.push((key, template)),
        }
    }

    /// Looks up a template by exact style key.
    pub fn get(&self, key: &str) -> Option<&Template> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, t)| t)
    }

    /// Iterates templates in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Template)> {
        self.entries.iter().map(|(k, t)| (k.as_str(), t))
    }

    /// Returns the first template in insertion order, if any.
    pub fn first(&self) -> Option<&Template> {
        self.entries.first().map(|(_, t)| t)
    }

    /// Number of templates in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no templates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn template(genre: &str) -> Template {
        Template {
            genre: genre.to_string(),
            mood: "calm".to_string(),
            tempo: 100,
            scale: vec![220.0, 246.94, 277.18],
            section_names: vec!["intro".to_string(), "verse".to_string()],
            instrument_presets: vec![],
            keywords: vec!["calm".to_string()],
        }
    }

    #[test]
    fn test_store_preserves_insertion_order() {
        let mut store = TemplateStore::new();
        store.insert("b", template("B"));
        store.insert("a", template("A"));

        let keys: Vec<&str> = store.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(store.first().unwrap().genre, "B");
    }

    #[test]
    fn test_store_insert_replaces_in_place() {
        let mut store = TemplateStore::new();
        store.insert("a", template("A"));
        store.insert("b", template("B"));
        store.insert("a", template("A2"));

        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a").unwrap().genre, "A2");
        // Replacement keeps the original slot
        assert_eq!(store.first().unwrap().genre, "A2");
    }

    #[test]
    fn test_waveform_round_trip() {
        for wf in [
            Waveform::Sine,
            Waveform::Square,
            Waveform::Saw,
            Waveform::Triangle,
            Waveform::Noise,
        ] {
            let parsed: Waveform = wf.as_str().parse().unwrap();
            assert_eq!(parsed, wf);
        }
        assert!("theremin".parse::<Waveform>().is_err());
    }

    #[test]
    fn test_pattern_step_serialization() {
        let json = serde_json::to_string(&vec![PatternStep::Degree(3), PatternStep::Rest]).unwrap();
        assert_eq!(json, r#"[{"degree":3},"rest"]"#);

        let steps: Vec<PatternStep> = serde_json::from_str(&json).unwrap();
        assert_eq!(steps, vec![PatternStep::Degree(3), PatternStep::Rest]);
    }
}
