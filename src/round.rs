//! One street of betting: read the bet, recommend, then follow re-raises
//! until the user says there are none or the advice is to fold.

use crate::advisor::{Advisor, Recommendation};
use crate::bluff::BluffRoll;
use crate::console::{Console, InputError};
use crate::evaluator::Strength;
use crate::game::Street;
use std::io::{BufRead, Write};

pub const INITIAL_BET_PROMPT: &str = "Enter current bet (in big blinds, 0 to check): ";
pub const NEW_BET_PROMPT: &str = "Enter new bet (in big blinds): ";
pub const RERAISE_PROMPT: &str = "Did opponents re-raise? (y/n): ";
pub const RERAISE_RETRY: &str = "Please enter 'y' or 'n'.";

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum RoundError {
    #[error("invalid bet amount: '{0}'")]
    InvalidBet(String),
    #[error(transparent)]
    Input(#[from] InputError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// The advisor said fold; the hand is over.
    Folded,
    /// No more re-raises; move on to the next street.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitInitialBet,
    Recommend { bet: u32 },
    /// Re-asked until the answer is y or n; there is no retry limit.
    AwaitReraiseDecision,
    AwaitNewBet,
    Finished(RoundOutcome),
}

/// Parse a bet in big blinds. Anything but a non-negative integer is an
/// error, never an implicit fold.
pub fn parse_bet(token: &str) -> Result<u32, RoundError> {
    token.parse::<u32>().map_err(|_| RoundError::InvalidBet(token.to_string()))
}

pub struct BettingRound<'a, B> {
    street: Street,
    strength: Strength,
    advisor: &'a mut Advisor<B>,
    state: RoundState,
    recommendations: Vec<Recommendation>,
}

impl<'a, B: BluffRoll> BettingRound<'a, B> {
    pub fn new(street: Street, strength: Strength, advisor: &'a mut Advisor<B>) -> Self {
        Self {
            street,
            strength,
            advisor,
            state: RoundState::AwaitInitialBet,
            recommendations: Vec::new(),
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    /// Every recommendation made this round, oldest first.
    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Run the round to a finish.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<RoundOutcome, RoundError> {
        loop {
            if let RoundState::Finished(outcome) = self.step(console)? {
                log::info!("{} round finished: {outcome:?}", self.street);
                return Ok(outcome);
            }
        }
    }

    /// Perform one transition and return the new state.
    pub fn step<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<RoundState, RoundError> {
        let next = match self.state {
            RoundState::AwaitInitialBet => {
                console.prompt(INITIAL_BET_PROMPT)?;
                RoundState::Recommend { bet: parse_bet(&console.read_token()?)? }
            }
            RoundState::Recommend { bet } => {
                let rec = self
                    .advisor
                    .make_recommendation(self.strength, self.street, bet, console.output())
                    .map_err(InputError::from)?;
                if rec.is_bluff() {
                    log::info!("bluffing on the {}", self.street);
                }
                self.recommendations.push(rec);
                if rec.is_fold() {
                    RoundState::Finished(RoundOutcome::Folded)
                } else {
                    RoundState::AwaitReraiseDecision
                }
            }
            RoundState::AwaitReraiseDecision => {
                console.prompt(RERAISE_PROMPT)?;
                match console.read_char()? {
                    'y' | 'Y' => RoundState::AwaitNewBet,
                    'n' | 'N' => RoundState::Finished(RoundOutcome::Completed),
                    other => {
                        log::debug!("unrecognized re-raise answer {other:?}");
                        console.say(RERAISE_RETRY)?;
                        RoundState::AwaitReraiseDecision
                    }
                }
            }
            RoundState::AwaitNewBet => {
                console.prompt(NEW_BET_PROMPT)?;
                RoundState::Recommend { bet: parse_bet(&console.read_token()?)? }
            }
            finished @ RoundState::Finished(_) => finished,
        };
        self.state = next;
        Ok(next)
    }
}
