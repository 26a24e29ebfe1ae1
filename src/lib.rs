//! TUI Concentration (workspace facade crate).
//!
//! Exposes `tui_concentration::{core,input,term,types}` while the
//! implementation lives in dedicated crates under `crates/`.

pub use concentration_core as core;
pub use concentration_input as input;
pub use concentration_term as term;
pub use concentration_types as types;
