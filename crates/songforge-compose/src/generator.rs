//! Song generation from a template store.

use rand::Rng;
use rand_pcg::Pcg32;

use songforge_project::{SongProject, Template, TemplateStore, SAMPLE_RATE};
use songforge_synth::{peak_normalize, render_section, seed};

use crate::error::{ComposeError, ComposeResult};
use crate::planner;

/// Title word pools.
const ADJECTIVES: [&str; 6] = [
    "Crimson", "Electric", "Crystal", "Midnight", "Golden", "Velvet",
];
const NOUNS: [&str; 6] = ["Echo", "Dream", "Pulse", "Canvas", "Mirage", "Cascade"];

/// Inputs to one generation run.
///
/// `style` references a template key; `description` is a free-text fallback
/// matched against template keywords. Everything left unset falls back to
/// the resolved template's defaults.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Template key to look up first.
    pub style: Option<String>,
    /// Free-text description for keyword resolution.
    pub description: Option<String>,
    /// Target duration in seconds; must be positive.
    pub duration: f32,
    /// Tempo override in bpm.
    pub tempo: Option<u32>,
    /// Mood override.
    pub mood: Option<String>,
    /// Seed driving every random draw of the run.
    pub seed: u32,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            style: None,
            description: None,
            duration: 30.0,
            tempo: None,
            mood: None,
            seed: 0,
        }
    }
}

/// Generates songs from an injected, immutable template store.
///
/// The store is read-only after construction, and every call owns its own
/// RNG, so independent generations may run in parallel freely.
#[derive(Debug, Clone)]
pub struct SongGenerator {
    store: TemplateStore,
}

impl SongGenerator {
    /// Creates a generator over an explicit template store.
    pub fn new(store: TemplateStore) -> Self {
        Self { store }
    }

    /// Creates a generator over the built-in genre templates.
    pub fn with_builtin_templates() -> Self {
        Self::new(crate::templates::builtin_store())
    }

    /// Resolves a template from an optional style key and description.
    ///
    /// Order: exact key match, then the first template (in store order)
    /// with a keyword occurring in the lowercased description, then the
    /// first template outright. Returns `None` only for an empty store.
    pub fn resolve_template(
        &self,
        style: Option<&str>,
        description: Option<&str>,
    ) -> Option<&Template> {
        if let Some(style) = style {
            if let Some(template) = self.store.get(style) {
                return Some(template);
            }
        }
        if let Some(description) = description {
            let lowered = description.to_lowercase();
            for (_, template) in self.store.iter() {
                if template.keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
                    return Some(template);
                }
            }
        }
        self.store.first()
    }

    /// Creates a new [`SongProject`].
    ///
    /// Deterministic: the same options always produce byte-identical audio.
    /// The returned project's buffer is peak-normalized whenever it holds
    /// any nonzero sample.
    pub fn generate(&self, options: &GenerateOptions) -> ComposeResult<SongProject> {
        if options.duration <= 0.0 {
            return Err(ComposeError::InvalidDuration {
                duration: options.duration,
            });
        }

        let template = self
            .resolve_template(options.style.as_deref(), options.description.as_deref())
            .ok_or(ComposeError::EmptyStore)?;

        let tempo = options.tempo.unwrap_or(template.tempo);
        if tempo == 0 {
            return Err(ComposeError::InvalidTempo { tempo });
        }
        let mood = options
            .mood
            .clone()
            .unwrap_or_else(|| template.mood.clone());

        let mut rng = seed::rng_from_seed(options.seed);
        let title = derive_title(template, &mood, &mut rng);
        let sections = planner::plan_sections(template, options.duration, tempo, &mut rng, options.seed);

        let mut audio = Vec::new();
        for section in &sections {
            audio.extend(render_section(section, SAMPLE_RATE));
        }
        peak_normalize(&mut audio);

        Ok(SongProject {
            title,
            genre: template.genre.clone(),
            mood,
            tempo,
            sections,
            audio,
        })
    }
}

/// Derives a song title from the run's RNG and the resolved template.
fn derive_title(template: &Template, mood: &str, rng: &mut Pcg32) -> String {
    let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
    let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
    format!("{} {} ({} - {})", adjective, noun, template.genre, mood)
}
