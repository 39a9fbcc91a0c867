//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::GameAction`] and tracks which
//! movement keys are held, including on terminals that never report key
//! releases.

pub mod handler;
pub mod map;

pub use tui_platformer_types as types;

pub use handler::InputHandler;
pub use map::{map_key, map_key_code, should_quit};
