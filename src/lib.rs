//! TUI Platformer (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_platformer::{core,input,term,types}` and carries the
//! runner-level configuration and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_platformer_core as core;
pub use tui_platformer_input as input;
pub use tui_platformer_term as term;
pub use tui_platformer_types as types;

pub use config::RunnerConfig;
