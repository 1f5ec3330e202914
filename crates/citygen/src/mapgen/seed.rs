//! Deterministic seed mixing and bounded draws over an injected random source.

use rand_chacha::rand_core::Rng;

pub const LAYOUT_STREAM: u64 = 1;
pub const FURNISH_STREAM: u64 = 2;

/// Uniform index in `0..len`. `len` must be non-zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

/// Uniform value in `min_value..=max_value`.
pub fn random_inclusive<R: Rng + ?Sized>(rng: &mut R, min_value: u64, max_value: u64) -> u64 {
    debug_assert!(min_value <= max_value);
    let range_size = max_value - min_value;
    if range_size == u64::MAX {
        return rng.next_u64();
    }
    min_value + rng.next_u64() % (range_size + 1)
}

pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.next_u64() & 1 == 1
}

/// Splits one run seed into independent streams so that prefab assignment
/// never perturbs the layout drawn from the same run seed.
pub fn derive_stream_seed(run_seed: u64, stream: u64) -> u64 {
    let mut mixed = run_seed ^ 0x9E37_79B9_7F4A_7C15;
    mixed ^= stream.wrapping_mul(0xD6E8_FD9A_5B89_7A4D);
    mixed ^= mixed >> 30;
    mixed = mixed.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed ^= mixed >> 27;
    mixed = mixed.wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^ (mixed >> 31)
}
