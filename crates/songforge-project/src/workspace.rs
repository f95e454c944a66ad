//! JSON persistence for song projects.
//!
//! A workspace is a flat directory of `<title>.json` documents. The stored
//! shape separates structural metadata from the raw sample buffer:
//!
//! ```json
//! {
//!   "metadata": {"title": ..., "genre": ..., "mood": ..., "tempo": ..., "sections": [...]},
//!   "audio": [0.0, ...]
//! }
//! ```
//!
//! Loading reconstructs the project bit-for-bit: identical structural
//! fields and identical sample values.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ProjectResult;
use crate::song::{SongProject, SongSection};

/// On-disk project document.
#[derive(Debug, Serialize, Deserialize)]
struct StoredProject {
    metadata: StoredMetadata,
    audio: Vec<f32>,
}

/// Structural half of the stored document.
#[derive(Debug, Serialize, Deserialize)]
struct StoredMetadata {
    title: String,
    genre: String,
    mood: String,
    tempo: u32,
    sections: Vec<SongSection>,
}

/// Directory-backed storage for song projects.
#[derive(Debug, Clone)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    /// Opens a workspace rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> ProjectResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the workspace root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Saves a project as `<title with underscores>.json` and returns the path.
    pub fn save(&self, project: &SongProject) -> ProjectResult<PathBuf> {
        let stored = StoredProject {
            metadata: StoredMetadata {
                title: project.title.clone(),
                genre: project.genre.clone(),
                mood: project.mood.clone(),
                tempo: project.tempo,
                sections: project.sections.clone(),
            },
            audio: project.audio.clone(),
        };

        let file_name = format!("{}.json", project.title.replace(' ', "_"));
        let path = self.root.join(file_name);
        fs::write(&path, serde_json::to_string(&stored)?)?;
        Ok(path)
    }

    /// Loads a project document from `path`.
    pub fn load(&self, path: impl AsRef<Path>) -> ProjectResult<SongProject> {
        let stored: StoredProject = serde_json::from_str(&fs::read_to_string(path)?)?;
        Ok(SongProject {
            title: stored.metadata.title,
            genre: stored.metadata.genre,
            mood: stored.metadata.mood,
            tempo: stored.metadata.tempo,
            sections: stored.metadata.sections,
            audio: stored.audio,
        })
    }

    /// Lists all project documents in the workspace, sorted by path.
    pub fn list_projects(&self) -> ProjectResult<Vec<PathBuf>> {
        let mut paths: Vec<PathBuf> = fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::song::SectionLayer;
    use crate::template::{Envelope, Waveform};
    use pretty_assertions::assert_eq;

    fn sample_project() -> SongProject {
        SongProject {
            title: "Velvet Echo (Pop - upbeat)".to_string(),
            genre: "Pop".to_string(),
            mood: "upbeat".to_string(),
            tempo: 120,
            sections: vec![SongSection {
                name: "chorus".to_string(),
                lead_notes: vec![261.63, 0.0, 392.0],
                duration: 6.5,
                layers: vec![SectionLayer {
                    name: "lead".to_string(),
                    notes: vec![Some(261.63), None, Some(392.0)],
                    durations: vec![0.5, 0.5, 0.25],
                    waveform: Waveform::Saw,
                    volume: 0.5,
                    envelope: Envelope::new(0.01, 0.2),
                    seed: 1234,
                    is_noise: false,
                }],
            }],
            audio: vec![0.0, 0.5, -1.0, 0.125, 1.0],
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path()).unwrap();

        let project = sample_project();
        let path = workspace.save(&project).unwrap();
        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Velvet_Echo_(Pop_-_upbeat).json"
        );

        let loaded = workspace.load(&path).unwrap();
        assert_eq!(loaded, project);
    }

    #[test]
    fn test_list_projects_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path()).unwrap();

        let mut b = sample_project();
        b.title = "B Side".to_string();
        let mut a = sample_project();
        a.title = "A Side".to_string();

        workspace.save(&b).unwrap();
        workspace.save(&a).unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let listed = workspace.list_projects().unwrap();
        let names: Vec<&str> = listed
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["A_Side.json", "B_Side.json"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let workspace = Workspace::new(dir.path()).unwrap();
        let err = workspace.load(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::error::ProjectError::Io(_)));
    }
}
