//! Board module - the 4x13 card grid
//!
//! The board owns every card of the session. Uses a flat array in row-major
//! order (`row * GRID_COLS + col`); the shape never changes, a reset only
//! replaces the contents.

use rand::Rng;

use crate::card::Card;
use crate::deck::{shuffle, validate_deck};
use crate::error::ConfigError;
use crate::types::{Rank, Suit, DECK_SIZE, GRID_COLS, GRID_ROWS};

/// Board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    cards: [Card; DECK_SIZE],
}

impl Board {
    /// Deal a freshly shuffled deck, all cards face-down.
    pub fn deal<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut cards = [Card::new(Rank::ACE, Suit::Club); DECK_SIZE];
        let mut i = 0;
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards[i] = Card::new(rank, suit);
                i += 1;
            }
        }
        shuffle(&mut cards, rng);
        Self { cards }
    }

    /// Lay out a full deck row by row.
    ///
    /// Fails unless `cards` holds exactly one of each of the 52 cards.
    pub fn from_cards(cards: &[Card]) -> Result<Self, ConfigError> {
        validate_deck(cards)?;
        let mut out = [cards[0]; DECK_SIZE];
        out.copy_from_slice(cards);
        Ok(Self { cards: out })
    }

    /// Lay out a deck given as explicit rows.
    pub fn from_rows(rows: &[Vec<Card>]) -> Result<Self, ConfigError> {
        let cols = rows.first().map(Vec::len).unwrap_or(0);
        if rows.len() != GRID_ROWS as usize || rows.iter().any(|r| r.len() != GRID_COLS as usize)
        {
            return Err(ConfigError::BoardShape {
                rows: rows.len(),
                cols,
            });
        }
        let flat: Vec<Card> = rows.iter().flatten().copied().collect();
        Self::from_cards(&flat)
    }

    #[inline(always)]
    fn index(row: u8, col: u8) -> Option<usize> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        Some((row as usize) * (GRID_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        GRID_ROWS
    }

    pub fn cols(&self) -> u8 {
        GRID_COLS
    }

    pub fn in_bounds(&self, row: u8, col: u8) -> bool {
        Self::index(row, col).is_some()
    }

    /// Card at (row, col), `None` if out of bounds
    pub fn get(&self, row: u8, col: u8) -> Option<&Card> {
        Self::index(row, col).map(|idx| &self.cards[idx])
    }

    pub fn get_mut(&mut self, row: u8, col: u8) -> Option<&mut Card> {
        Self::index(row, col).map(move |idx| &mut self.cards[idx])
    }

    pub fn at(&self, pos: Pos) -> Option<&Card> {
        self.get(pos.row, pos.col)
    }

    pub fn at_mut(&mut self, pos: Pos) -> Option<&mut Card> {
        self.get_mut(pos.row, pos.col)
    }

    /// Cards in row-major order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// One row of cards
    pub fn row(&self, row: u8) -> Option<&[Card]> {
        if row >= GRID_ROWS {
            return None;
        }
        let start = (row as usize) * (GRID_COLS as usize);
        Some(&self.cards[start..start + GRID_COLS as usize])
    }

    /// Find where a card with the given identity sits
    pub fn position_of(&self, card: &Card) -> Option<Pos> {
        self.cards
            .iter()
            .position(|c| c.same_identity(card))
            .map(|idx| {
                Pos::new(
                    (idx / GRID_COLS as usize) as u8,
                    (idx % GRID_COLS as usize) as u8,
                )
            })
    }

    pub fn face_up_count(&self) -> usize {
        self.cards.iter().filter(|c| c.face_up).count()
    }

    /// True when every card is face-up
    pub fn all_face_up(&self) -> bool {
        self.cards.iter().all(|c| c.face_up)
    }

    /// Turn every card face-down
    pub fn hide_all(&mut self) {
        for card in &mut self.cards {
            card.face_up = false;
        }
    }
}
