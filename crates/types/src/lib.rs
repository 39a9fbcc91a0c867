//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, benchmarks).
//!
//! # Logical Screen
//!
//! The simulation runs in a fixed logical screen of 800x450 units. The
//! terminal front end projects that screen onto whatever size it is given.
//!
//! - **Ground line**: `SCREEN_HEIGHT - GROUND_HEIGHT` (y = 400)
//! - **Lanes**: platform `i` starts at `x = i * LANE_SPACING`
//!
//! # Physics Constants
//!
//! All physics values are applied once per frame at `TARGET_FPS`:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY` | 0.5 | Added to vertical velocity every frame |
//! | `JUMP_FORCE` | 10.0 | Upward velocity set by a jump |
//! | `MOVE_SPEED` | 5.0 | Horizontal velocity while a direction is held |
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//!
//! # Level Generation
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLATFORM_COUNT` | 20 | Default number of platform slots |
//! | `PLATFORM_HEIGHT` | 20 | Height of every platform |
//! | `PLATFORM_MIN_WIDTH` | 50 | Narrowest platform |
//! | `PLATFORM_MAX_WIDTH` | 200 | Widest platform |
//! | `PLATFORM_MAX_STEP` | 100 | Max height change between consecutive platforms |
//! | `SEED_PLATFORM_HEIGHT` | 300 | Height the random walk starts from |
//!
//! # Examples
//!
//! ```
//! use tui_platformer_types::{Horizontal, Rect, Screen};
//!
//! let a = Rect::new(0.0, 0.0, 40.0, 40.0);
//! let b = Rect::new(20.0, 20.0, 40.0, 40.0);
//! assert!(a.overlaps(&b));
//!
//! assert_eq!(Horizontal::from_held(true, true), Horizontal::Left);
//! assert_eq!(Screen::default(), Screen::MainMenu);
//! ```

/// Logical screen width in world units.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Logical screen height in world units.
pub const SCREEN_HEIGHT: f32 = 450.0;

/// Thickness of the ground band at the bottom of the logical screen.
pub const GROUND_HEIGHT: f32 = 50.0;

/// Target frame rate of the fixed-step loop.
pub const TARGET_FPS: u32 = 60;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Downward acceleration added to the player's vertical velocity each frame.
pub const GRAVITY: f32 = 0.5;

/// Upward velocity applied by a jump.
pub const JUMP_FORCE: f32 = 10.0;

/// Horizontal speed while moving left or right.
pub const MOVE_SPEED: f32 = 5.0;

/// Player box edge length.
pub const PLAYER_SIZE: f32 = 40.0;

/// Objective box edge length.
pub const OBJECTIVE_SIZE: f32 = 20.0;

/// Default number of platform (and objective) slots.
pub const PLATFORM_COUNT: usize = 20;

/// Capacity of the fixed platform/objective arenas.
pub const MAX_PLATFORMS: usize = 64;

/// Horizontal distance between consecutive platform lanes.
pub const LANE_SPACING: i32 = 200;

/// Height of every platform.
pub const PLATFORM_HEIGHT: i32 = 20;

/// Narrowest generated platform.
pub const PLATFORM_MIN_WIDTH: i32 = 50;

/// Widest generated platform.
pub const PLATFORM_MAX_WIDTH: i32 = 200;

/// Largest height change between consecutively generated platforms.
pub const PLATFORM_MAX_STEP: i32 = 100;

/// Height the platform random walk starts from.
pub const SEED_PLATFORM_HEIGHT: i32 = 300;


/// 2D vector in world units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box.
///
/// `x`/`y` is the top-left corner; y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Strict AABB intersection test.
    ///
    /// Boxes that only share an edge do not overlap.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_platformer_types::Rect;
    ///
    /// let floor = Rect::new(0.0, 100.0, 200.0, 20.0);
    /// let resting = Rect::new(10.0, 60.0, 40.0, 40.0);
    /// assert!(!resting.overlaps(&floor));
    ///
    /// let sunk = Rect::new(10.0, 60.5, 40.0, 40.0);
    /// assert!(sunk.overlaps(&floor));
    /// ```
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Which horizontal movement key is held this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizontal {
    Left,
    Right,
    #[default]
    None,
}

impl Horizontal {
    /// Resolve two held flags. Left wins when both are held.
    pub fn from_held(left: bool, right: bool) -> Self {
        if left {
            Horizontal::Left
        } else if right {
            Horizontal::Right
        } else {
            Horizontal::None
        }
    }
}

/// Top-level game screen.
///
/// - **MainMenu**: initial screen, waits for `Start`
/// - **Gameplay**: simulation runs every frame
/// - **GameOver**: entered when the player touches the ground line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    MainMenu,
    Gameplay,
    GameOver,
}

impl Screen {
    pub fn as_str(&self) -> &'static str {
        match self {
            Screen::MainMenu => "mainMenu",
            Screen::Gameplay => "gameplay",
            Screen::GameOver => "gameOver",
        }
    }
}

/// Discrete input actions delivered once per key press.
///
/// Movement is also reported here so that front ends can map keys in one
/// place; the session itself reads movement through [`Horizontal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Hold to move left
    MoveLeft,
    /// Hold to move right
    MoveRight,
    /// Jump when standing on a platform
    Jump,
    /// Leave the main menu and start playing
    Start,
    /// Start a new run from the game over screen
    Restart,
    /// Return to the main menu from the game over screen
    Menu,
    /// Quit the game from any screen
    Exit,
}
