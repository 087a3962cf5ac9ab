use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;

/// Uniform random numbers in `[0, 1)` driving latency, failures and progression rolls.
///
/// A query draws once for its latency and once for the first contact roll of an unseen
/// flight number. Once the time gate is open, a known number draws once for the
/// progression roll, plus a second draw for the synthetic timestamp if that roll
/// succeeds. Tests pin outcomes by scripting that sequence.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}

/// Draws from the thread local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 { rand::rng().random::<f64>() }
}

/// Reproducible sequence from a fixed seed.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self { rng: Mutex::new(StdRng::seed_from_u64(seed)) }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        match self.rng.lock() {
            Ok(mut rng) => rng.random::<f64>(),
            // generator state stays valid after a poisoning panic
            Err(poisoned) => poisoned.into_inner().random::<f64>(),
        }
    }
}

/// Always returns the same value.
#[cfg(test)]
#[derive(Debug)]
pub struct FixedRandom(pub f64);

#[cfg(test)]
impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 { self.0 }
}

/// Replays a script of values, then falls back to a default once exhausted.
#[cfg(test)]
#[derive(Debug)]
pub struct ScriptedRandom {
    script: Mutex<std::collections::VecDeque<f64>>,
    fallback: f64,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: &[f64], fallback: f64) -> Self {
        Self { script: Mutex::new(values.iter().copied().collect()), fallback }
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&self) -> f64 { self.script.lock().unwrap().pop_front().unwrap_or(self.fallback) }
}
