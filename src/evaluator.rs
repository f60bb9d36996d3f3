use crate::cards::Rank;
use crate::hand::{Board, HoleCards};
use std::fmt;

/// Heuristic hand-strength score. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Strength(u8);

impl Strength {
    pub const fn new(score: u8) -> Self {
        Self(score)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How closely the two hole ranks sit together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Connection {
    Pair,
    Connector,
    OneGapper,
    Unconnected,
}

impl Connection {
    pub const fn from_gap(gap: u8) -> Self {
        match gap {
            0 => Connection::Pair,
            1 => Connection::Connector,
            2 => Connection::OneGapper,
            _ => Connection::Unconnected,
        }
    }

    pub const fn bonus(self) -> u8 {
        match self {
            Connection::Pair => 10,
            Connection::Connector | Connection::OneGapper => 5,
            Connection::Unconnected => 0,
        }
    }
}

pub const SUITED_BONUS: u8 = 5;

/// Breakdown of a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct Evaluation {
    pub high: Rank,
    pub low: Rank,
    pub connection: Connection,
    pub suited: bool,
    pub strength: Strength,
}

/// Score the hole cards: high card, plus a pair/connector bonus, plus a
/// suited bonus.
///
/// The board is accepted so callers can pass what has been dealt, but it
/// does not contribute to the score.
pub fn evaluate_detailed(hole: &HoleCards, board: &Board) -> Evaluation {
    log::trace!("evaluating {}{} with {} community cards", hole.first(), hole.second(), board.len());
    let (a, b) = (hole.first(), hole.second());
    let high = a.rank().max(b.rank());
    let low = a.rank().min(b.rank());
    let connection = Connection::from_gap(high.value() - low.value());
    let suited = a.suit() == b.suit();

    let mut score = high.value() + connection.bonus();
    if suited {
        score += SUITED_BONUS;
    }
    Evaluation { high, low, connection, suited, strength: Strength(score) }
}

/// Strength score for the hole cards.
///
/// ```
/// use holdem_helper::evaluator::evaluate_hand;
/// use holdem_helper::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "Ah Ad".parse().unwrap();
/// assert_eq!(evaluate_hand(&hole, &Board::new()).value(), 24);
/// ```
pub fn evaluate_hand(hole: &HoleCards, board: &Board) -> Strength {
    evaluate_detailed(hole, board).strength
}
