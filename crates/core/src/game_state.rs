//! Game state module - the Concentration state machine
//!
//! Owns the board, score, remaining steps, the pending selection and the
//! flip-back countdown. Everything is advanced by two serial stimuli: a
//! click on a cell and a fixed clock tick. Every (state, input) pair has a
//! defined next state; invalid input is a silent no-op.
//!
//! The selection holds board positions rather than cards, so the board is
//! the single owner of every card.

use arrayvec::ArrayVec;

use crate::board::{Board, Pos};
use crate::card::matches;
use crate::config::GameConfig;
use crate::error::ConfigError;
use crate::rng::{clock_seed, DeckRng};
use crate::snapshot::{CardView, GameSnapshot};
use crate::types::{GameAction, INITIAL_SCORE};

/// Phase of play, derived from the counters in [`GameState::phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// No card pending
    Idle,
    /// One card revealed, waiting for the second
    OneFlipped,
    /// A mismatched pair is showing until the countdown runs out
    PendingFlipBack,
    /// No steps left; clicks are ignored until reset
    Exhausted,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::OneFlipped => "one_flipped",
            Phase::PendingFlipBack => "pending_flip_back",
            Phase::Exhausted => "exhausted",
        }
    }
}

/// Why a click did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    Exhausted,
    OutOfBounds,
    AlreadyFaceUp,
    /// Two cards are already revealed
    Busy,
}

/// Result of a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Ignored(IgnoreReason),
    /// First card of a pair revealed
    Flipped,
    /// Second card completed a pair
    Matched,
    /// Second card did not pair; flip-back countdown started
    Mismatched,
}

impl ClickOutcome {
    /// True if the click changed any state
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored(_))
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: DeckRng,
    board: Board,
    score: u32,
    steps_remaining: u32,
    selection: ArrayVec<Pos, 2>,
    /// Ticks until a mismatched pair turns back over; 0 when idle.
    flip_back_delay: u32,
    elapsed_ticks: u32,
    /// Monotonic id, increments on reset.
    episode_id: u32,
}

impl GameState {
    /// Create a game dealt from the configured seed (or the clock).
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => DeckRng::new(seed),
            None => DeckRng::from_clock(),
        };
        Self::with_rng(config, rng)
    }

    /// Create a game dealt from an explicit random source.
    pub fn with_rng(config: GameConfig, mut rng: DeckRng) -> Result<Self, ConfigError> {
        config.validate()?;
        let board = Board::deal(&mut rng);
        let state = Self::assemble(config, rng, board);
        log::info!(
            "dealt new game (seed {}, max steps {})",
            state.seed(),
            state.config.max_steps
        );
        Ok(state)
    }

    /// Create a game on a pre-arranged board.
    ///
    /// Later resets deal from the configured seed (or the clock).
    pub fn from_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = DeckRng::new(config.seed.unwrap_or_else(clock_seed));
        Ok(Self::assemble(config, rng, board))
    }

    /// Default rules dealt from `seed`.
    pub fn seeded(seed: u64) -> Self {
        let config = GameConfig::default().with_seed(seed);
        let mut rng = DeckRng::new(seed);
        let board = Board::deal(&mut rng);
        Self::assemble(config, rng, board)
    }

    fn assemble(config: GameConfig, rng: DeckRng, board: Board) -> Self {
        Self {
            config,
            rng,
            board,
            score: INITIAL_SCORE,
            steps_remaining: config.max_steps,
            selection: ArrayVec::new(),
            flip_back_delay: 0,
            elapsed_ticks: 0,
            episode_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn steps_remaining(&self) -> u32 {
        self.steps_remaining
    }

    pub fn max_steps(&self) -> u32 {
        self.config.max_steps
    }

    pub fn elapsed_ticks(&self) -> u32 {
        self.elapsed_ticks
    }

    pub fn flip_back_delay(&self) -> u32 {
        self.flip_back_delay
    }

    /// Positions of revealed cards awaiting resolution, in click order
    pub fn selection(&self) -> &[Pos] {
        &self.selection
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn is_exhausted(&self) -> bool {
        self.steps_remaining == 0
    }

    /// True when every card on the board is face-up
    pub fn is_complete(&self) -> bool {
        self.board.all_face_up()
    }

    /// Current phase. Exhaustion takes precedence over the selection state.
    pub fn phase(&self) -> Phase {
        if self.steps_remaining == 0 {
            return Phase::Exhausted;
        }
        match self.selection.len() {
            0 => Phase::Idle,
            1 => Phase::OneFlipped,
            _ => Phase::PendingFlipBack,
        }
    }

    /// Apply a host command
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Click { row, col } => self.on_cell_clicked(row, col).changed(),
            GameAction::Reset => {
                self.on_reset();
                true
            }
        }
    }

    /// Deal a fresh board and reset every counter. Valid from any state.
    pub fn on_reset(&mut self) {
        let next_episode = self.episode_id.wrapping_add(1);
        let board = Board::deal(&mut self.rng);
        let rng = self.rng.clone();
        *self = Self::assemble(self.config, rng, board);
        self.episode_id = next_episode;
        log::info!("reset (episode {}, seed {})", self.episode_id, self.seed());
    }

    /// Reveal the card at (row, col).
    pub fn on_cell_clicked(&mut self, row: u8, col: u8) -> ClickOutcome {
        if self.steps_remaining == 0 {
            return ClickOutcome::Ignored(IgnoreReason::Exhausted);
        }
        if self.selection.is_full() {
            return ClickOutcome::Ignored(IgnoreReason::Busy);
        }

        let pos = Pos::new(row, col);
        let Some(card) = self.board.at_mut(pos) else {
            return ClickOutcome::Ignored(IgnoreReason::OutOfBounds);
        };
        if card.face_up {
            return ClickOutcome::Ignored(IgnoreReason::AlreadyFaceUp);
        }

        card.flip();
        self.selection.push(pos);

        if self.selection.is_full() {
            self.resolve_pair()
        } else {
            ClickOutcome::Flipped
        }
    }

    /// Compare the two selected cards.
    fn resolve_pair(&mut self) -> ClickOutcome {
        let (Some(first), Some(second)) = (
            self.board.at(self.selection[0]).copied(),
            self.board.at(self.selection[1]).copied(),
        ) else {
            self.selection.clear();
            return ClickOutcome::Flipped;
        };

        if matches(&first, &second) {
            self.score = self.score.saturating_sub(1);
            self.selection.clear();
            log::debug!("matched {} and {} (score {})", first, second, self.score);
            if self.is_complete() {
                log::info!(
                    "board complete after {} ticks with {} steps left",
                    self.elapsed_ticks,
                    self.steps_remaining
                );
            }
            ClickOutcome::Matched
        } else {
            self.steps_remaining = self.steps_remaining.saturating_sub(1);
            self.flip_back_delay = self.config.flip_back_delay_ticks;
            log::debug!(
                "mismatched {} and {} ({} steps left)",
                first,
                second,
                self.steps_remaining
            );
            if self.steps_remaining == 0 {
                log::info!("out of steps (score {})", self.score);
            }
            ClickOutcome::Mismatched
        }
    }

    /// Advance the clock by one tick.
    ///
    /// Returns true if a mismatched pair was turned back over.
    pub fn on_tick(&mut self) -> bool {
        let mut flipped_back = false;
        if self.flip_back_delay > 0 {
            self.flip_back_delay -= 1;
            if self.flip_back_delay == 0 && self.selection.is_full() {
                for pos in self.selection.drain(..) {
                    if let Some(card) = self.board.at_mut(pos) {
                        card.flip();
                    }
                }
                flipped_back = true;
                log::debug!("flipped mismatched pair back");
            }
        }
        self.elapsed_ticks = self.elapsed_ticks.saturating_add(1);
        flipped_back
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (r, row) in out.cards.iter_mut().enumerate() {
            for (c, view) in row.iter_mut().enumerate() {
                let pos = Pos::new(r as u8, c as u8);
                if let Some(card) = self.board.at(pos) {
                    *view = CardView {
                        rank: card.rank,
                        suit: card.suit,
                        face_up: card.face_up,
                        selected: self.selection.contains(&pos),
                    };
                }
            }
        }
        out.score = self.score;
        out.steps_remaining = self.steps_remaining;
        out.max_steps = self.config.max_steps;
        out.elapsed_ticks = self.elapsed_ticks;
        out.flip_back_delay = self.flip_back_delay;
        out.phase = self.phase();
        out.complete = self.is_complete();
        out.seed = self.seed();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
