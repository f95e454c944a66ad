//! Deterministic random streams.
//!
//! Every random draw in the engine flows through a PCG32 stream built here.
//! Child streams (per section, per layer) get independent seeds derived by
//! BLAKE3-hashing the parent seed with the child's position, so rendering
//! order can never influence the output.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Builds the PCG32 stream for a 32-bit seed.
///
/// The seed is mirrored into both halves of the 64-bit state word PCG32
/// initializes from.
pub fn rng_from_seed(seed: u32) -> Pcg32 {
    let state = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(state)
}

/// Derives an independent child seed from a parent seed and a position.
///
/// Hashes `parent ‖ index` (little-endian) with BLAKE3 and truncates the
/// digest to 32 bits. The same (parent, index) pair always yields the same
/// child seed; distinct indices yield unrelated streams.
pub fn derive_seed(parent: u32, index: u32) -> u32 {
    let mut input = [0u8; 8];
    input[..4].copy_from_slice(&parent.to_le_bytes());
    input[4..].copy_from_slice(&index.to_le_bytes());

    let digest = blake3::hash(&input);
    let bytes: [u8; 4] = digest.as_bytes()[..4]
        .try_into()
        .expect("digest is 32 bytes");
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = rng_from_seed(42);
        let mut b = rng_from_seed(42);

        let first: Vec<f32> = (0..64).map(|_| a.gen()).collect();
        let second: Vec<f32> = (0..64).map(|_| b.gen()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = rng_from_seed(42);
        let mut b = rng_from_seed(43);

        let first: Vec<f32> = (0..16).map(|_| a.gen()).collect();
        let second: Vec<f32> = (0..16).map(|_| b.gen()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_derive_seed_is_stable_and_positional() {
        assert_eq!(derive_seed(7, 0), derive_seed(7, 0));
        assert_ne!(derive_seed(7, 0), derive_seed(7, 1));
        assert_ne!(derive_seed(7, 0), derive_seed(8, 0));
    }
}
