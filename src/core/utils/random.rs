//! Random helpers on top of `rand`
//!
//! The engine owns one `SmallRng`. It is seeded from entropy by default, so
//! two runs never match; tests pass an explicit seed instead.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub type EngineRng = SmallRng;

pub fn entropy_rng() -> EngineRng {
    SmallRng::from_entropy()
}

pub fn seeded_rng(seed: u64) -> EngineRng {
    SmallRng::seed_from_u64(seed)
}

/// Bernoulli draw. Probabilities outside [0, 1] saturate instead of panicking.
#[inline]
pub fn chance(rng: &mut EngineRng, probability: f32) -> bool {
    rng.gen::<f32>() < probability
}

/// Uniform integer in `[min, max]`; a reversed range collapses to `min`.
#[inline]
pub fn range_u16(rng: &mut EngineRng, min: u16, max: u16) -> u16 {
    if max <= min {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform jitter in `[-half_width, half_width)`.
#[inline]
pub fn jitter(rng: &mut EngineRng, half_width: f32) -> f32 {
    (rng.gen::<f32>() - 0.5) * 2.0 * half_width
}

/// Left/right (or any symmetric pair) in random order.
#[inline]
pub fn shuffled_pair(rng: &mut EngineRng) -> [i32; 2] {
    if rng.gen::<bool>() { [-1, 1] } else { [1, -1] }
}

/// `-1, 0, 1` in random order.
#[inline]
pub fn shuffled_triple(rng: &mut EngineRng) -> [i32; 3] {
    let mut dirs = [-1, 0, 1];
    dirs.shuffle(rng);
    dirs
}
