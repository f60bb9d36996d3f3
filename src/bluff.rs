//! Sources for the bluff roll.
//!
//! The advisor draws one roll in `0..ROLL_RANGE` per recommendation. The
//! source sits behind [`BluffRoll`] so a session can be driven by a seeded
//! RNG while tests pin the roll to a known value.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

/// Rolls fall in `0..ROLL_RANGE`, so a threshold reads as a percentage.
pub const ROLL_RANGE: u32 = 100;

pub trait BluffRoll {
    /// Draw the next roll, in `0..ROLL_RANGE`.
    fn roll(&mut self) -> u32;
}

impl<B: BluffRoll + ?Sized> BluffRoll for &mut B {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

impl<B: BluffRoll + ?Sized> BluffRoll for Box<B> {
    fn roll(&mut self) -> u32 {
        (**self).roll()
    }
}

/// ChaCha8-backed rolls, seeded once and never reseeded.
#[derive(Debug, Clone)]
pub struct SeededRoll {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededRoll {
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed), seed }
    }

    /// Seed from the wall clock.
    pub fn from_clock() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        Self::with_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BluffRoll for SeededRoll {
    fn roll(&mut self) -> u32 {
        self.rng.random_range(0..ROLL_RANGE)
    }
}

/// Always returns the same roll (clamped into range).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRoll(pub u32);

impl FixedRoll {
    /// A roll that never triggers a bluff at any threshold below 100.
    pub const NEVER: FixedRoll = FixedRoll(ROLL_RANGE - 1);
    /// A roll that triggers a bluff at any non-zero threshold.
    pub const ALWAYS: FixedRoll = FixedRoll(0);
}

impl BluffRoll for FixedRoll {
    fn roll(&mut self) -> u32 {
        self.0.min(ROLL_RANGE - 1)
    }
}

/// Plays back a list of rolls, then repeats `fallback`.
#[derive(Debug, Clone)]
pub struct ScriptedRoll {
    rolls: VecDeque<u32>,
    fallback: u32,
}

impl ScriptedRoll {
    pub fn new<I: IntoIterator<Item = u32>>(rolls: I, fallback: u32) -> Self {
        Self { rolls: rolls.into_iter().collect(), fallback }
    }
}

impl BluffRoll for ScriptedRoll {
    fn roll(&mut self) -> u32 {
        self.rolls.pop_front().unwrap_or(self.fallback).min(ROLL_RANGE - 1)
    }
}
