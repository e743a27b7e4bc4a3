// injectable source of randomness for name, content, and sampling decisions

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const PRINTABLE: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789 \n";

/// everything the generators need to draw at random
pub trait RandomSource {
    /// random string over `a-z`
    fn lowercase_string(&mut self, length: usize) -> String;

    /// random string over letters, digits, space and newline
    fn printable_string(&mut self, length: usize) -> String;

    /// uniform index in `0..upper`, `upper` must be non-zero
    fn index(&mut self, upper: usize) -> usize;

    /// uniform value in an inclusive range
    fn in_range(&mut self, range: RangeInclusive<usize>) -> usize;

    /// `amount` distinct indices from `0..length`, without replacement
    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize>;
}

/// `RandomSource` backed by any `rand` generator
pub struct RngSource<R = StdRng> {
    rng: R,
}

impl RngSource<StdRng> {
    /// seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// reproducible sequence for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn string_from(&mut self, alphabet: &[u8], length: usize) -> String {
        (0..length)
            .map(|_| alphabet[self.rng.random_range(0..alphabet.len())] as char)
            .collect()
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn lowercase_string(&mut self, length: usize) -> String {
        self.string_from(LOWERCASE, length)
    }

    fn printable_string(&mut self, length: usize) -> String {
        self.string_from(PRINTABLE, length)
    }

    fn index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }

    fn in_range(&mut self, range: RangeInclusive<usize>) -> usize {
        self.rng.random_range(range)
    }

    fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, length, amount.min(length)).into_vec()
    }
}
