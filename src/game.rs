use std::fmt;

/// One betting phase of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
}

impl Street {
    pub const ALL: [Street; 4] = [Street::Preflop, Street::Flop, Street::Turn, Street::River];

    pub fn label(self) -> &'static str {
        match self {
            Street::Preflop => "Pre-flop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
        }
    }

    /// Community cards on the board once this street's cards are dealt.
    pub const fn community_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }

    /// Community cards revealed at the start of this street.
    pub const fn new_cards(self) -> usize {
        match self {
            Street::Preflop => 0,
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
        }
    }

    /// Prompt for the `index`-th (zero based) card revealed on this street.
    pub fn card_prompt(self, index: usize) -> String {
        match self {
            Street::Preflop => format!("Enter hole card {} (e.g. Ah, Td): ", index + 1),
            Street::Flop => format!("Enter flop card {}: ", index + 1),
            Street::Turn => "Enter turn card: ".to_string(),
            Street::River => "Enter river card: ".to_string(),
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Seat position as typed by the user. Recorded for the log only.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Position {
    SmallBlind,
    BigBlind,
    UnderTheGun,
    Button,
    Other(String),
}

impl Position {
    pub fn label(&self) -> &str {
        match self {
            Position::SmallBlind => "SB",
            Position::BigBlind => "BB",
            Position::UnderTheGun => "UTG",
            Position::Button => "BTN",
            Position::Other(s) => s,
        }
    }
}

impl From<&str> for Position {
    fn from(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "SB" => Position::SmallBlind,
            "BB" => Position::BigBlind,
            "UTG" => Position::UnderTheGun,
            "BTN" => Position::Button,
            _ => Position::Other(s.trim().to_string()),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
