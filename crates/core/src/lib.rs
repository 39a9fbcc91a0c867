//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces the same level and the same run
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for frame processing
//!
//! # Module Structure
//!
//! - [`entity`]: player, platform and objective data
//! - [`level`]: platform generation and ring-buffer recycling
//! - [`physics`]: gravity, movement, jumping and platform collision
//! - [`objective`]: pickup collection and respawn
//! - [`camera`]: snap-follow camera and scroll-driven recycling
//! - [`session`]: screen state machine owning everything above
//! - [`rng`]: deterministic uniform integer source
//! - [`config`]: session parameters, with environment overrides
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tui_platformer_core::{GameConfig, GameSession};
//! use tui_platformer_types::{GameAction, Horizontal, Screen};
//!
//! let mut game = GameSession::new(GameConfig::default(), 12345);
//! assert_eq!(game.screen(), Screen::MainMenu);
//!
//! game.apply_action(GameAction::Start);
//! game.apply_action(GameAction::Jump);
//! game.tick(Horizontal::Right);
//!
//! assert_eq!(game.screen(), Screen::Gameplay);
//! assert!(game.player().is_jumping);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Gravity**: 0.5 units/frame² added once per tick
//! - **Movement**: 5 units/frame while a direction is held
//!
//! Call [`GameSession::tick`](session::GameSession::tick) once per frame.

pub mod camera;
pub mod config;
pub mod entity;
pub mod level;
pub mod objective;
pub mod physics;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tui_platformer_types as types;

// Re-export commonly used types for convenience
pub use camera::Camera;
pub use config::GameConfig;
pub use entity::{Objective, Platform, Player};
pub use level::Level;
pub use objective::Objectives;
pub use rng::{RandomSource, SimpleRng};
pub use session::GameSession;
pub use snapshot::GameSnapshot;
