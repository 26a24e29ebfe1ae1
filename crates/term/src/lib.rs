//! Terminal presentation for the card grid.
//!
//! A small, game-oriented rendering layer: the view draws a core snapshot
//! into a framebuffer, and the renderer flushes only the cells that changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Share one grid geometry between drawing and pointer mapping
//! - Keep HUD text formatting out of the core

pub mod fb;
pub mod game_view;
pub mod hud;
pub mod renderer;

pub use concentration_core as core;
pub use concentration_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use hud::{format_elapsed, hud_lines};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
