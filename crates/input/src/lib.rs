//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key and mouse events into [`crate::types::GameAction`]s and
//! provides a keyboard cursor so the board is playable without a mouse.

pub mod cursor;
pub mod map;

pub use concentration_types as types;

pub use cursor::CursorHandler;
pub use map::{handle_key_event, handle_mouse_event, should_quit};
