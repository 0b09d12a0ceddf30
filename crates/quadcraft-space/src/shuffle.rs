//! Uniform in-place permutation.

use rand::Rng;

/// Shuffle `items` in place with the process-wide random source.
///
/// Fisher–Yates: every permutation is equally likely. This is the only
/// nondeterministic operation in the engine; use [`shuffle_with`] and a
/// seeded generator where results must be reproducible.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, &mut rand::rng());
}

/// Shuffle `items` in place using `rng` (Fisher–Yates).
pub fn shuffle_with<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
