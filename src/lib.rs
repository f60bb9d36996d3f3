//! holdem-helper: a heuristic advisor for one Texas Hold'em hand.
//!
//! The helper scores the two hole cards (high card, pair or connector bonus,
//! suited bonus), then for every bet on every street suggests one of check,
//! call, raise, bluff-raise or fold.
//!
//! ## Quick start: advise on a hand
//! ```
//! use holdem_helper::advisor::{Advisor, AdvisorProfile, Recommendation};
//! use holdem_helper::bluff::FixedRoll;
//! use holdem_helper::evaluator::evaluate_hand;
//! use holdem_helper::hand::{Board, HoleCards};
//!
//! let hole: HoleCards = "Ah Ad".parse().unwrap();
//! let strength = evaluate_hand(&hole, &Board::new());
//! assert_eq!(strength.value(), 24);
//!
//! let mut advisor = Advisor::with_roll(AdvisorProfile::default(), FixedRoll::NEVER);
//! assert_eq!(advisor.decide(strength, 0), Recommendation::Raise { raise: 25 });
//! ```
//!
//! ## CLI
//! Run the interactive prompt with:
//! ```sh
//! cargo run --bin holdem-helper -- --seed 42
//! ```

pub mod advisor;
pub mod bluff;
pub mod cards;
pub mod console;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod round;
pub mod session;
pub mod sizing;
