//! Card module - rank/suit identity plus face state
//!
//! Structural equality (`PartialEq`) compares rank, suit and face state.
//! The game's pairing rule is the separate [`matches`] predicate: same rank
//! and same color, regardless of the exact suit.

use std::fmt;

use crate::types::{CardColor, Rank, Suit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            rank,
            suit,
            face_up: false,
        }
    }

    /// Toggle the face state
    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn color(&self) -> CardColor {
        self.suit.color()
    }

    pub fn is_red(&self) -> bool {
        self.color() == CardColor::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == CardColor::Black
    }

    /// True if `self` and `other` form a pair
    pub fn matches(&self, other: &Card) -> bool {
        matches(self, other)
    }

    /// Same rank and suit, ignoring face state
    pub fn same_identity(&self, other: &Card) -> bool {
        self.rank == other.rank && self.suit == other.suit
    }
}

/// Pairing rule: equal rank and equal color.
pub fn matches(a: &Card, b: &Card) -> bool {
    a.rank == b.rank && a.color() == b.color()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}
