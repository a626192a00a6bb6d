use std::array;

use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::types::Axis;

/// Draws `count` points uniformly from `[min, max)` on every axis, reproducibly for a given
/// `seed`.
pub fn seeded_points<A: Axis + SampleUniform, const K: usize>(
    seed: u64,
    count: usize,
    min: A,
    max: A,
) -> Vec<[A; K]> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| array::from_fn(|_| rng.random_range(min..max)))
        .collect()
}

/// Same as [`seeded_points`], with a seed drawn from the thread-local generator.
pub fn rand_points<A: Axis + SampleUniform, const K: usize>(
    count: usize,
    min: A,
    max: A,
) -> Vec<[A; K]> {
    seeded_points(rand::random(), count, min, max)
}
