//! Drives one hand from hole cards to the river, stopping early on a fold.

use crate::advisor::{Advisor, Recommendation};
use crate::bluff::{BluffRoll, SeededRoll};
use crate::cards::{Card, CardParseError};
use crate::console::{Console, InputError};
use crate::evaluator::{evaluate_detailed, Strength};
use crate::game::{Position, Street};
use crate::hand::{Board, HandError, HoleCards};
use crate::round::{BettingRound, RoundError, RoundOutcome};
use std::io::{BufRead, Write};

pub const POSITION_PROMPT: &str = "Enter your position (SB, BB, UTG, BTN): ";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum SessionError {
    #[error("invalid card entered: {0}")]
    Card(#[from] CardParseError),
    #[error(transparent)]
    Hand(#[from] HandError),
    #[error("{street}: {source}")]
    Round {
        street: Street,
        #[source]
        source: RoundError,
    },
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Advice was to fold on this street; later streets were skipped.
    Folded(Street),
    /// All four streets were played without a fold.
    Completed,
}

/// What happened on one street.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreetRecord {
    pub street: Street,
    pub community_cards: usize,
    pub strength: Strength,
    pub recommendations: Vec<Recommendation>,
}

pub struct Session<R, W, B = SeededRoll> {
    console: Console<R, W>,
    advisor: Advisor<B>,
    hole: Option<HoleCards>,
    board: Board,
    position: Option<Position>,
    history: Vec<StreetRecord>,
}

impl<R: BufRead, W: Write, B: BluffRoll> Session<R, W, B> {
    pub fn new(console: Console<R, W>, advisor: Advisor<B>) -> Self {
        Self {
            console,
            advisor,
            hole: None,
            board: Board::new(),
            position: None,
            history: Vec::new(),
        }
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    /// Streets played so far, in order.
    pub fn history(&self) -> &[StreetRecord] {
        &self.history
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Play the hand. A fold is a normal outcome; bad cards, bad bets and
    /// running out of input are errors.
    pub fn run(&mut self) -> Result<SessionOutcome, SessionError> {
        let hole = HoleCards::new(
            self.read_card(&Street::Preflop.card_prompt(0))?,
            self.read_card(&Street::Preflop.card_prompt(1))?,
        );
        self.hole = Some(hole);

        self.console.prompt(POSITION_PROMPT)?;
        let position = Position::from(self.console.read_token()?.as_str());
        log::info!("hole cards {}{} from {position}", hole.first(), hole.second());
        self.position = Some(position);

        for street in Street::ALL {
            self.deal(street)?;
            if self.play_street(street, &hole)? == RoundOutcome::Folded {
                log::info!("folded on the {street}");
                return Ok(SessionOutcome::Folded(street));
            }
        }

        self.console.say("")?;
        self.console.say("Game complete.")?;
        log::info!("hand complete");
        Ok(SessionOutcome::Completed)
    }

    fn read_card(&mut self, prompt: &str) -> Result<Card, SessionError> {
        self.console.prompt(prompt)?;
        let token = self.console.read_token()?;
        Ok(token.parse::<Card>()?)
    }

    fn deal(&mut self, street: Street) -> Result<(), SessionError> {
        for i in 0..street.new_cards() {
            let card = self.read_card(&street.card_prompt(i))?;
            self.board.push(card)?;
        }
        debug_assert_eq!(self.board.len(), street.community_cards());
        Ok(())
    }

    fn play_street(&mut self, street: Street, hole: &HoleCards) -> Result<RoundOutcome, SessionError> {
        let eval = evaluate_detailed(hole, &self.board);
        log::info!("{street} with {} community cards", self.board.len());
        log::debug!(
            "strength {} (high {}, {:?}, suited {})",
            eval.strength,
            eval.high,
            eval.connection,
            eval.suited
        );

        let mut round = BettingRound::new(street, eval.strength, &mut self.advisor);
        let result = round.play(&mut self.console);
        self.history.push(StreetRecord {
            street,
            community_cards: self.board.len(),
            strength: eval.strength,
            recommendations: round.recommendations().to_vec(),
        });
        result.map_err(|source| SessionError::Round { street, source })
    }
}
