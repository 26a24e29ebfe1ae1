//! Deck module - builds and shuffles the 52-card deck
//!
//! The canonical order is suit-major (club, diamond, heart, spade) and
//! rank-minor (ace through king). Order only matters for tests; every deal
//! shuffles first.

use rand::Rng;

use crate::card::Card;
use crate::error::ConfigError;
use crate::types::{Rank, Suit, DECK_SIZE};

/// Build a face-down deck in canonical order.
pub fn build_deck() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            cards.push(Card::new(rank, suit));
        }
    }
    cards
}

/// Shuffle a slice in place using Fisher-Yates.
///
/// For each index from the last down to 1, swap it with a uniformly drawn
/// index in `[0, i]`. `gen_range` rejects out-of-zone samples instead of
/// reducing modulo, so the permutation is unbiased for a uniform source.
pub fn shuffle<T, R: Rng + ?Sized>(cards: &mut [T], rng: &mut R) {
    for i in (1..cards.len()).rev() {
        let j = rng.gen_range(0..=i);
        cards.swap(i, j);
    }
}

/// Build and shuffle a fresh deck.
pub fn shuffled_deck<R: Rng + ?Sized>(rng: &mut R) -> Vec<Card> {
    let mut cards = build_deck();
    shuffle(&mut cards, rng);
    cards
}

/// Check that `cards` is exactly one full deck.
pub fn validate_deck(cards: &[Card]) -> Result<(), ConfigError> {
    if cards.len() != DECK_SIZE {
        return Err(ConfigError::DeckSize { found: cards.len() });
    }

    let mut seen = [false; DECK_SIZE];
    for card in cards {
        let idx = identity_index(card);
        if seen[idx] {
            return Err(ConfigError::DuplicateCard {
                rank: card.rank,
                suit: card.suit,
            });
        }
        seen[idx] = true;
    }
    Ok(())
}

/// Position of a card's identity in canonical order (0..52).
fn identity_index(card: &Card) -> usize {
    let suit = match card.suit {
        Suit::Club => 0,
        Suit::Diamond => 1,
        Suit::Heart => 2,
        Suit::Spade => 3,
    };
    suit * 13 + (card.rank.value() as usize - 1)
}
