//! Recommendation engine: turns a strength score and the bet being faced
//! into one suggested action.

use crate::bluff::{BluffRoll, SeededRoll, ROLL_RANGE};
use crate::cards::Rank;
use crate::evaluator::Strength;
use crate::game::Street;
use crate::sizing::raise_size;
use std::fmt;
use std::io::{self, Write};

/// A suggested action. Amounts are in big blinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Recommendation {
    /// Unopened pot, bluff roll hit.
    BluffRaise { raise: u32 },
    /// Unopened pot, strong hand.
    Raise { raise: u32 },
    Check,
    /// Facing a bet, bluff roll hit.
    BluffReraise { to: u32 },
    /// Facing a bet, strong hand.
    Reraise { to: u32 },
    Call { amount: u32 },
    Fold { facing: u32 },
}

impl Recommendation {
    pub fn is_fold(self) -> bool {
        matches!(self, Recommendation::Fold { .. })
    }

    pub fn is_bluff(self) -> bool {
        matches!(self, Recommendation::BluffRaise { .. } | Recommendation::BluffReraise { .. })
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Recommendation::BluffRaise { raise } => {
                write!(f, "The play is to BLUFF and RAISE {raise} BB!")
            }
            Recommendation::Raise { raise } => {
                write!(f, "The play is to RAISE {raise} BB (strong hand)!")
            }
            Recommendation::Check => write!(f, "The play is to CHECK."),
            Recommendation::BluffReraise { to } => {
                write!(f, "The play is to BLUFF and RAISE to {to} BB!")
            }
            Recommendation::Reraise { to } => write!(f, "The play is to RE-RAISE to {to} BB!"),
            Recommendation::Call { amount } => {
                write!(f, "The play is to CALL (match {amount} BB).")
            }
            Recommendation::Fold { facing } => {
                write!(f, "The play is to FOLD (fold to {facing} BB).")
            }
        }
    }
}

/// Tuning for the advisor.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct AdvisorProfile {
    /// Bluff when the roll falls below this (out of 100).
    pub bluff_percent: u32,
    /// Raise or re-raise at or above this score.
    pub raise_threshold: Strength,
    /// Call a bet at or above this score.
    pub call_threshold: Strength,
    pub seed: Option<u64>,
}

impl AdvisorProfile {
    /// Set a deterministic RNG seed for reproducible bluffs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_bluff_percent(mut self, percent: u32) -> Self {
        self.bluff_percent = percent.min(ROLL_RANGE);
        self
    }
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            bluff_percent: 5,
            raise_threshold: Strength::new(Rank::Queen.value()),
            call_threshold: Strength::new(Rank::Ten.value()),
            seed: None,
        }
    }
}

/// Recommendation engine with its own bluff roll source.
#[derive(Debug)]
pub struct Advisor<B = SeededRoll> {
    profile: AdvisorProfile,
    roll: B,
}

impl Advisor<SeededRoll> {
    /// Build an advisor whose rolls come from the profile's seed, or from the
    /// clock when no seed is set.
    pub fn from_profile(profile: AdvisorProfile) -> Self {
        let roll = match profile.seed {
            Some(seed) => SeededRoll::with_seed(seed),
            None => SeededRoll::from_clock(),
        };
        log::debug!("bluff roll seeded with {}", roll.seed());
        Self { profile, roll }
    }
}

impl<B: BluffRoll> Advisor<B> {
    pub fn with_roll(profile: AdvisorProfile, roll: B) -> Self {
        Self { profile, roll }
    }

    /// Draw one bluff roll and pick an action. A hit bluff roll wins over
    /// every strength branch. Only a bet that is too big for the hand folds.
    pub fn decide(&mut self, strength: Strength, bet: u32) -> Recommendation {
        let roll = self.roll.roll();
        let bluff = roll < self.profile.bluff_percent;
        let strong = strength >= self.profile.raise_threshold;
        log::debug!("bluff roll {roll} (bluffs below {})", self.profile.bluff_percent);

        let rec = if bet == 0 {
            if bluff {
                Recommendation::BluffRaise { raise: raise_size(strength) }
            } else if strong {
                Recommendation::Raise { raise: raise_size(strength) }
            } else {
                Recommendation::Check
            }
        } else if bluff {
            Recommendation::BluffReraise { to: raise_size(strength) }
        } else if strong {
            Recommendation::Reraise { to: raise_size(strength) }
        } else if strength >= self.profile.call_threshold {
            Recommendation::Call { amount: bet }
        } else {
            Recommendation::Fold { facing: bet }
        };
        log::debug!("strength {strength} facing {bet} BB -> {rec:?}");
        rec
    }

    /// Decide and print the recommendation block for one street.
    pub fn make_recommendation<W: Write + ?Sized>(
        &mut self,
        strength: Strength,
        street: Street,
        bet: u32,
        out: &mut W,
    ) -> io::Result<Recommendation> {
        writeln!(out)?;
        writeln!(out, "=== {street} Recommendation ===")?;
        writeln!(out, "Current bet: {bet} BB")?;
        let rec = self.decide(strength, bet);
        writeln!(out, "{rec}")?;
        Ok(rec)
    }
}
