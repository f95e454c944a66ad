//! songforge Synthesis Backend
//!
//! This crate renders the data model of `songforge-project` into audio:
//!
//! - **Oscillators** - closed-form sine, square, saw, and triangle tones
//! - **Envelope** - linear attack/release amplitude shaping
//! - **Layer rendering** - scheduled notes, silence, and seeded noise
//! - **Mixing** - zero-padded summation with peak normalization
//! - **WAV I/O** - deterministic 16-bit PCM writer, hound-based reader
//!
//! # Determinism
//!
//! Rendering is deterministic. All randomness (noise layers) flows through
//! PCG32 streams seeded per layer, with sub-seeds derived via BLAKE3
//! hashing, so the same structural input always produces byte-identical
//! samples.
//!
//! # Modules
//!
//! - [`oscillator`] - waveform generators
//! - [`envelope`] - attack/release shaping
//! - [`render`] - layer and section rendering (layered and legacy flat paths)
//! - [`mixer`] - summation and normalization
//! - [`seed`] - deterministic RNG construction and seed derivation
//! - [`wav`] - WAV encoding/decoding
//! - [`error`] - error types

pub mod envelope;
pub mod error;
pub mod mixer;
pub mod oscillator;
pub mod render;
pub mod seed;
pub mod wav;

// Re-export main entry points at the crate root
pub use error::{SynthError, SynthResult};
pub use mixer::{mix_down, peak, peak_normalize};
pub use render::{render_flat, render_layer, render_section};
