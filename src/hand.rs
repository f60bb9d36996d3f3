use crate::cards::{parse_cards, Card};
use std::str::FromStr;

/// Most community cards a Hold'em board can hold.
pub const MAX_BOARD_CARDS: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("too many board cards: {0}")]
    TooManyBoardCards(usize),
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// Duplicate cards are accepted; the helper trusts what the user typed.
///
/// ```
/// use holdem_helper::cards::{Card, Rank, Suit};
/// use holdem_helper::hand::HoleCards;
///
/// let hole = HoleCards::new(
///     Card::new(Rank::Ace, Suit::Spades),
///     Card::new(Rank::King, Suit::Spades),
/// );
/// assert_eq!(hole.second().rank(), Rank::King);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards(Card, Card);

impl HoleCards {
    pub const fn new(a: Card, b: Card) -> Self {
        Self(a, b)
    }

    /// Return the first hole card, in entry order.
    pub fn first(&self) -> Card {
        self.0
    }

    /// Return the second hole card, in entry order.
    pub fn second(&self) -> Card {
        self.1
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, HandError> {
        match slice {
            [a, b] => Ok(Self::new(*a, *b)),
            _ => Err(HandError::HoleCount(slice.len())),
        }
    }
}

impl FromStr for HoleCards {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards revealed so far. Cards are appended street by street and
/// never removed.
///
/// ```
/// use holdem_helper::hand::Board;
///
/// let mut board: Board = "2c 3c 4c".parse().unwrap();
/// board.push("5d".parse().unwrap()).unwrap();
/// assert_eq!(board.len(), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new() -> Self {
        Self { cards: Vec::with_capacity(MAX_BOARD_CARDS) }
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(cards.len()));
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Append one card; a sixth card is rejected and the board is unchanged.
    pub fn push(&mut self, card: Card) -> Result<(), HandError> {
        if self.cards.len() >= MAX_BOARD_CARDS {
            return Err(HandError::TooManyBoardCards(self.cards.len() + 1));
        }
        self.cards.push(card);
        Ok(())
    }
}

impl FromStr for Board {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}
