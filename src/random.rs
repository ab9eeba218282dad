//! Random sources for the color flip
//!
//! The session never touches a global generator: it draws from whatever
//! [`FlipSource`] it was built with, so games can be seeded and tests can
//! script exact flip/no-flip outcomes.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform samples in `[0, 1)`
pub trait FlipSource: Send {
    fn draw(&mut self) -> f64;
}

impl FlipSource for StdRng {
    fn draw(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// `StdRng` seeded from `seed`, or from the OS when no seed is given
pub fn std_source(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Replays a fixed list of samples, then repeats `fallback` forever
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    samples: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedSource {
    pub fn new(samples: impl IntoIterator<Item = f64>, fallback: f64) -> Self {
        Self {
            samples: samples.into_iter().collect(),
            fallback,
        }
    }

    /// Always returns `value`
    pub fn constant(value: f64) -> Self {
        Self::new([], value)
    }

    /// Number of scripted samples not yet drawn
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl FlipSource for ScriptedSource {
    fn draw(&mut self) -> f64 {
        self.samples.pop_front().unwrap_or(self.fallback)
    }
}
