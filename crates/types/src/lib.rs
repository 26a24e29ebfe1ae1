//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! The playfield is a fixed grid holding one standard 52-card deck:
//!
//! - **Rows**: 4 (indexed 0-3)
//! - **Columns**: 13 (indexed 0-12)
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed timestep interval (10 ticks per second) |
//! | `INITIAL_SCORE` | 26 | One point per pair, counts down to 0 |
//! | `DEFAULT_MAX_STEPS` | 100 | Mismatches allowed per game |
//! | `DEFAULT_FLIP_BACK_TICKS` | 20 | Ticks a mismatched pair stays visible |
//!
//! # Examples
//!
//! ```
//! use concentration_types::{CardColor, GameAction, Rank, Suit, GRID_COLS, GRID_ROWS};
//!
//! assert_eq!(Suit::from_str("Heart"), Some(Suit::Heart));
//! assert_eq!(Suit::Diamond.color(), CardColor::Red);
//! assert_eq!(Rank::new(12).map(|r| r.symbol()), Some("Q"));
//! assert_eq!(GameAction::from_str("reset"), Some(GameAction::Reset));
//!
//! assert_eq!(GRID_ROWS * GRID_COLS, 52);
//! ```

/// Number of rows on the board
pub const GRID_ROWS: u8 = 4;

/// Number of columns on the board
pub const GRID_COLS: u8 = 13;

/// Cards in a full deck (one per rank and suit)
pub const DECK_SIZE: usize = 52;

/// Score at the start of a game; each match takes one point off
pub const INITIAL_SCORE: u32 = 26;

/// Default number of mismatches a player may make before the game locks
pub const DEFAULT_MAX_STEPS: u32 = 100;

/// Default flip-back delay in ticks (2 seconds at 10 ticks per second)
pub const DEFAULT_FLIP_BACK_TICKS: u32 = 20;

/// Fixed timestep interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Ticks per second derived from `TICK_MS`
pub const TICKS_PER_SECOND: u32 = 1000 / TICK_MS;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_holds_exactly_one_deck() {
        assert_eq!((GRID_ROWS as usize) * (GRID_COLS as usize), DECK_SIZE);
        assert_eq!(INITIAL_SCORE as usize, DECK_SIZE / 2);
    }

    #[test]
    fn timing_defaults() {
        assert_eq!(TICKS_PER_SECOND, 10);
        assert_eq!(DEFAULT_FLIP_BACK_TICKS, 20);
        assert_eq!(DEFAULT_MAX_STEPS, 100);
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Club.color(), CardColor::Black);
        assert_eq!(Suit::Spade.color(), CardColor::Black);
        assert_eq!(Suit::Diamond.color(), CardColor::Red);
        assert_eq!(Suit::Heart.color(), CardColor::Red);
    }

    #[test]
    fn rank_bounds() {
        assert_eq!(Rank::new(0), None);
        assert_eq!(Rank::new(14), None);
        assert_eq!(Rank::ALL.len(), 13);
        assert_eq!(Rank::ALL[0].value(), 1);
        assert_eq!(Rank::ALL[12].value(), 13);
    }

    #[test]
    fn geometry_maps_pointer_to_cell() {
        let g = CellGeometry::new(2, 1, 5, 3);
        assert_eq!(g.cell_at(2, 1), Some((0, 0)));
        assert_eq!(g.cell_at(6, 3), Some((0, 0)));
        assert_eq!(g.cell_at(7, 4), Some((1, 1)));
        assert_eq!(g.cell_at(1, 1), None);
        assert_eq!(g.cell_at(2, 0), None);
        // Past the last column/row.
        assert_eq!(g.cell_at(2 + 5 * 13, 1), None);
        assert_eq!(g.cell_at(2, 1 + 3 * 4), None);
    }
}

/// The four suits
///
/// - **Club** and **Spade** are black
/// - **Diamond** and **Heart** are red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    Club,
    Diamond,
    Heart,
    Spade,
}

impl Suit {
    /// All suits in canonical deck order
    pub const ALL: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Card color, a pure function of the suit
    pub fn color(&self) -> CardColor {
        match self {
            Suit::Club | Suit::Spade => CardColor::Black,
            Suit::Diamond | Suit::Heart => CardColor::Red,
        }
    }

    /// Unicode suit symbol
    ///
    /// # Examples
    ///
    /// ```
    /// use concentration_types::Suit;
    ///
    /// assert_eq!(Suit::Club.symbol(), '♣');
    /// assert_eq!(Suit::Heart.symbol(), '♥');
    /// ```
    pub fn symbol(&self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    /// Parse suit from string (case-insensitive, singular or plural)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "club" | "clubs" | "c" => Some(Suit::Club),
            "diamond" | "diamonds" | "d" => Some(Suit::Diamond),
            "heart" | "hearts" | "h" => Some(Suit::Heart),
            "spade" | "spades" | "s" => Some(Suit::Spade),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Suit::Club => "club",
            Suit::Diamond => "diamond",
            Suit::Heart => "heart",
            Suit::Spade => "spade",
        }
    }
}

/// Card color used by the matching rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardColor {
    Red,
    Black,
}

/// Card rank, 1 (ace) through 13 (king)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rank(u8);

impl Rank {
    pub const ACE: Rank = Rank(1);
    pub const KING: Rank = Rank(13);

    /// All ranks in ascending order
    pub const ALL: [Rank; 13] = [
        Rank(1),
        Rank(2),
        Rank(3),
        Rank(4),
        Rank(5),
        Rank(6),
        Rank(7),
        Rank(8),
        Rank(9),
        Rank(10),
        Rank(11),
        Rank(12),
        Rank(13),
    ];

    /// Create a rank; `None` outside 1..=13
    pub const fn new(value: u8) -> Option<Self> {
        if value >= 1 && value <= 13 {
            Some(Rank(value))
        } else {
            None
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Face symbol: `A`, `2`..`10`, `J`, `Q`, `K`
    ///
    /// # Examples
    ///
    /// ```
    /// use concentration_types::Rank;
    ///
    /// assert_eq!(Rank::ACE.symbol(), "A");
    /// assert_eq!(Rank::new(10).unwrap().symbol(), "10");
    /// assert_eq!(Rank::KING.symbol(), "K");
    /// ```
    pub fn symbol(&self) -> &'static str {
        match self.0 {
            1 => "A",
            2 => "2",
            3 => "3",
            4 => "4",
            5 => "5",
            6 => "6",
            7 => "7",
            8 => "8",
            9 => "9",
            10 => "10",
            11 => "J",
            12 => "Q",
            _ => "K",
        }
    }
}

/// Commands the host feeds into the game
///
/// Clicks carry board coordinates; the host maps pointer positions to
/// `(row, col)` before building the action. Coordinates are re-validated by
/// the core, so out-of-range values are allowed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Reveal the card at (row, col)
    Click { row: u8, col: u8 },
    /// Deal a fresh shuffled board and reset all counters
    Reset,
}

impl GameAction {
    /// Parse a parameterless action from string
    ///
    /// Clicks carry coordinates and cannot be parsed from a bare name.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "reset" | "restart" => Some(GameAction::Reset),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Click { .. } => "click",
            GameAction::Reset => "reset",
        }
    }
}

/// Screen placement of the card grid, in terminal cells
///
/// Shared between the view (which draws with it) and input mapping (which
/// turns pointer positions back into board coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    /// Column of the top-left card's first cell
    pub origin_x: u16,
    /// Row of the top-left card's first cell
    pub origin_y: u16,
    /// Card width in terminal columns
    pub card_w: u16,
    /// Card height in terminal rows
    pub card_h: u16,
}

impl CellGeometry {
    pub const fn new(origin_x: u16, origin_y: u16, card_w: u16, card_h: u16) -> Self {
        Self {
            origin_x,
            origin_y,
            card_w,
            card_h,
        }
    }

    /// Map a pointer position to `(row, col)`, or `None` when it misses the grid
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(u8, u8)> {
        if self.card_w == 0 || self.card_h == 0 || x < self.origin_x || y < self.origin_y {
            return None;
        }
        let col = (x - self.origin_x) / self.card_w;
        let row = (y - self.origin_y) / self.card_h;
        if row >= GRID_ROWS as u16 || col >= GRID_COLS as u16 {
            return None;
        }
        Some((row as u8, col as u8))
    }

    /// Top-left terminal position of the card at (row, col)
    pub fn cell_origin(&self, row: u8, col: u8) -> (u16, u16) {
        (
            self.origin_x + (col as u16) * self.card_w,
            self.origin_y + (row as u16) * self.card_h,
        )
    }
}
