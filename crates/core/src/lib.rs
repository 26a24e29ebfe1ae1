//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! flip-back timing. It has **zero dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Testable**: Boards can be staged and ticks driven by hand
//! - **Portable**: Can run behind any presentation (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`card`]: rank/suit identity, face state and the pairing rule
//! - [`deck`]: 52-card deck construction and Fisher-Yates shuffle
//! - [`board`]: fixed 4x13 grid owning every card
//! - [`game_state`]: the click/tick state machine
//! - [`config`]: session tunables (max steps, flip-back delay, seed)
//! - [`rng`]: seeded ChaCha8 source for dealing
//! - [`snapshot`]: plain view data for renderers
//!
//! # Game Rules
//!
//! - **Pairs**: two cards match when they share rank and color
//!   (5♥ pairs with 5♦, not with 5♠)
//! - **Score**: starts at 26 and drops by one per match; 0 means cleared
//! - **Steps**: each mismatch costs one step; matches are free
//! - **Flip-back**: a mismatched pair stays visible for 20 ticks, during
//!   which clicks are ignored
//! - **Exhaustion**: with no steps left, clicks are ignored until reset
//!
//! # Example
//!
//! ```
//! use concentration_core::GameState;
//! use concentration_types::GameAction;
//!
//! let mut game = GameState::seeded(12345);
//!
//! game.apply_action(GameAction::Click { row: 0, col: 0 });
//! assert_eq!(game.selection().len(), 1);
//!
//! game.on_tick();
//! assert_eq!(game.elapsed_ticks(), 1);
//! assert_eq!(game.score(), 26);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::on_tick`](game_state::GameState::on_tick)
//! once per fixed quantum (100ms in the terminal runner). Clock time is never
//! read by the state machine itself.

pub mod board;
pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod snapshot;

pub use concentration_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Pos};
pub use card::{matches, Card};
pub use config::GameConfig;
pub use deck::{build_deck, shuffle, shuffled_deck, validate_deck};
pub use error::ConfigError;
pub use game_state::{ClickOutcome, GameState, IgnoreReason, Phase};
pub use rng::DeckRng;
pub use snapshot::{CardView, GameSnapshot};
