//! songforge Composition Engine
//!
//! This crate turns genre templates into finished songs:
//!
//! - **Templates** - six built-in genres (scale, tempo, sections, voices)
//! - **Planner** - seeded section/layer planning over a time budget
//! - **Generator** - template resolution, planning, rendering, normalization
//! - **Editor** - tempo resampling, equalization, section rearrangement
//! - **Vocals** - simple vocal synthesis and cross-fade blending
//!
//! # Determinism
//!
//! Generation is deterministic: for a fixed (style, duration, tempo, mood,
//! seed) the produced sample buffer is byte-identical across runs. All
//! randomness flows through one PCG32 stream per call plus BLAKE3-derived
//! per-layer sub-seeds.
//!
//! # Example
//!
//! ```
//! use songforge_compose::{GenerateOptions, SongGenerator};
//!
//! let generator = SongGenerator::with_builtin_templates();
//! let project = generator
//!     .generate(&GenerateOptions {
//!         style: Some("lofi".to_string()),
//!         duration: 5.0,
//!         seed: 42,
//!         ..Default::default()
//!     })
//!     .unwrap();
//!
//! assert_eq!(project.genre, "Lo-Fi");
//! assert!(!project.audio.is_empty());
//! ```
//!
//! # Modules
//!
//! - [`templates`] - built-in genre template store
//! - [`planner`] - section and layer planning
//! - [`generator`] - the song generator entry point
//! - [`editor`] - post-processing transforms
//! - [`vocals`] - vocal synthesis/blending boundary
//! - [`error`] - error types

pub mod editor;
pub mod error;
pub mod generator;
pub mod planner;
pub mod templates;
pub mod vocals;

// Re-export main types at the crate root
pub use editor::{EditSummary, SongEditor};
pub use error::{ComposeError, ComposeResult};
pub use generator::{GenerateOptions, SongGenerator};
pub use templates::builtin_store;
