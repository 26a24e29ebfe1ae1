use crate::game_state::Phase;
use crate::types::{Rank, Suit, GRID_COLS, GRID_ROWS};

/// What the presentation layer needs to draw one card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardView {
    pub rank: Rank,
    pub suit: Suit,
    pub face_up: bool,
    /// Part of the pair currently being revealed
    pub selected: bool,
}

impl Default for CardView {
    fn default() -> Self {
        Self {
            rank: Rank::ACE,
            suit: Suit::Club,
            face_up: false,
            selected: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cards: [[CardView; GRID_COLS as usize]; GRID_ROWS as usize],
    pub score: u32,
    pub steps_remaining: u32,
    pub max_steps: u32,
    pub elapsed_ticks: u32,
    pub flip_back_delay: u32,
    pub phase: Phase,
    pub complete: bool,
    pub seed: u64,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cards = [[CardView::default(); GRID_COLS as usize]; GRID_ROWS as usize];
        self.score = 0;
        self.steps_remaining = 0;
        self.max_steps = 0;
        self.elapsed_ticks = 0;
        self.flip_back_delay = 0;
        self.phase = Phase::Idle;
        self.complete = false;
        self.seed = 0;
        self.episode_id = 0;
    }

    /// True while clicks can still change the board
    pub fn playable(&self) -> bool {
        !self.complete && self.phase != Phase::Exhausted
    }

    pub fn card(&self, row: u8, col: u8) -> Option<&CardView> {
        self.cards.get(row as usize)?.get(col as usize)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cards: [[CardView::default(); GRID_COLS as usize]; GRID_ROWS as usize],
            score: 0,
            steps_remaining: 0,
            max_steps: 0,
            elapsed_ticks: 0,
            flip_back_delay: 0,
            phase: Phase::Idle,
            complete: false,
            seed: 0,
            episode_id: 0,
        };
        s.clear();
        s
    }
}
