//! Strategies for picking which candidates appear in the output.

use rand::Rng;
use rand::seq::SliceRandom;

/// Picks up to `count` items from a token's candidates.
///
/// Implementations must return at most `min(count, candidates.len())` items,
/// each taken from `candidates` at most once.
pub trait Selection {
    fn select(&mut self, candidates: Vec<String>, count: usize) -> Vec<String>;
}

/// Declared-order selection used for live preview. Consumes no randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewSelection;

impl Selection for PreviewSelection {
    fn select(&mut self, mut candidates: Vec<String>, count: usize) -> Vec<String> {
        candidates.truncate(count);
        candidates
    }
}

/// Uniform random selection backed by an injected generator.
///
/// All candidates are shuffled (Fisher-Yates) before truncating, so when
/// `count` covers every candidate the result is a random permutation rather
/// than the declared order.
#[derive(Debug)]
pub struct RandomSelection<R> {
    rng: R,
}

impl<R: Rng> RandomSelection<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Selection for RandomSelection<R> {
    fn select(&mut self, mut candidates: Vec<String>, count: usize) -> Vec<String> {
        candidates.shuffle(&mut self.rng);
        candidates.truncate(count);
        candidates
    }
}
