//! Construction-time errors.
//!
//! Play itself never fails; these only surface when a board, deck or config
//! is built with values the game cannot run with.

use std::fmt;

use crate::types::{Rank, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Deck did not contain exactly 52 cards.
    DeckSize { found: usize },
    /// The same (rank, suit) appeared more than once.
    DuplicateCard { rank: Rank, suit: Suit },
    /// Board storage did not match the 4x13 grid.
    BoardShape { rows: usize, cols: usize },
    ZeroMaxSteps,
    ZeroFlipBackDelay,
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::DeckSize { .. } | ConfigError::DuplicateCard { .. } => "invalid_deck",
            ConfigError::BoardShape { .. } => "invalid_board",
            ConfigError::ZeroMaxSteps | ConfigError::ZeroFlipBackDelay => "invalid_config",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::DeckSize { .. } => "deck must contain exactly 52 cards",
            ConfigError::DuplicateCard { .. } => "deck contains a duplicate card",
            ConfigError::BoardShape { .. } => "board must be 4 rows by 13 columns",
            ConfigError::ZeroMaxSteps => "max steps must be at least 1",
            ConfigError::ZeroFlipBackDelay => "flip-back delay must be at least 1 tick",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ConfigError::DeckSize { found } => write!(f, "{} (found {})", self.message(), found),
            ConfigError::DuplicateCard { rank, suit } => write!(
                f,
                "{}: {}{}",
                self.message(),
                rank.symbol(),
                suit.symbol()
            ),
            ConfigError::BoardShape { rows, cols } => {
                write!(f, "{} (got {}x{})", self.message(), rows, cols)
            }
            ConfigError::ZeroMaxSteps | ConfigError::ZeroFlipBackDelay => {
                f.write_str(self.message())
            }
        }
    }
}

impl std::error::Error for ConfigError {}
