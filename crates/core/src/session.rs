//! Game session module - owns the complete game state
//!
//! This module ties together all core components: level, physics, objectives,
//! camera and RNG. It implements the screen state machine:
//!
//! ```text
//! MainMenu --Start--> Gameplay --ground touch--> GameOver
//!                        ^                          |
//!                        +---------Restart----------+
//! MainMenu <-------------------Menu-----------------+
//! ```
//!
//! `Exit` is accepted on every screen and only raises a flag; the loop that
//! owns the session decides how to shut down.

use crate::camera::{self, Camera};
use crate::config::GameConfig;
use crate::entity::Player;
use crate::level::Level;
use crate::objective::Objectives;
use crate::physics;
use crate::rng::{RandomSource, SimpleRng};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Horizontal, Rect, Screen};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession<R: RandomSource = SimpleRng> {
    config: GameConfig,
    rng: R,
    player: Player,
    level: Level,
    objectives: Objectives,
    camera: Camera,
    screen: Screen,
    score: u32,
    high_score: u32,
    exit_requested: bool,
    /// Gameplay frames simulated in the current run.
    frame: u64,
    /// Monotonic run id (increments every time a run starts).
    run_id: u32,
}

impl GameSession<SimpleRng> {
    /// Create a session seeded from `config.seed`, or `fallback_seed` when unset.
    pub fn new(config: GameConfig, fallback_seed: u32) -> Self {
        let seed = config.seed.unwrap_or(fallback_seed);
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> GameSession<R> {
    /// Build the level, scatter objectives and place the player on slot 0.
    ///
    /// Panics if `config.platform_count` is zero or above the arena capacity.
    pub fn with_rng(config: GameConfig, mut rng: R) -> Self {
        let level = Level::generate(config.platform_count, config.ground_y(), &mut rng);
        let objectives = Objectives::scatter(&level, &mut rng);

        let mut player = Player::new(0.0, 0.0);
        player.spawn_on(&level.platforms()[0]);
        let camera = Camera::new(config.screen_size(), player.center());

        log::info!(
            "session created: {} platforms, ground at y={}",
            level.len(),
            config.ground_y()
        );

        Self {
            config,
            rng,
            player,
            level,
            objectives,
            camera,
            screen: Screen::MainMenu,
            score: 0,
            high_score: 0,
            exit_requested: false,
            frame: 0,
            run_id: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn objectives(&self) -> &Objectives {
        &self.objectives
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn exit_requested(&self) -> bool {
        self.exit_requested
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn run_id(&self) -> u32 {
        self.run_id
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, score: u32, high_score: u32) {
        self.score = score;
        self.high_score = high_score;
    }

    /// Apply an input action
    ///
    /// Returns whether the action had an effect. Actions that do not belong
    /// to the current screen are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match (self.screen, action) {
            (_, GameAction::Exit) => {
                log::info!("exit requested from {}", self.screen.as_str());
                self.exit_requested = true;
                true
            }
            (Screen::MainMenu, GameAction::Start) => {
                self.start_run();
                true
            }
            (Screen::Gameplay, GameAction::Jump) => physics::try_jump(&mut self.player),
            (Screen::GameOver, GameAction::Restart) => {
                self.start_run();
                true
            }
            (Screen::GameOver, GameAction::Menu) => {
                self.set_screen(Screen::MainMenu);
                true
            }
            _ => false,
        }
    }

    /// Reset the run and enter gameplay.
    ///
    /// The player is re-spawned on platform slot 0, score is cleared and all
    /// objectives are reactivated. Platforms are kept as they are.
    fn start_run(&mut self) {
        self.player.spawn_on(&self.level.platforms()[0]);
        self.score = 0;
        self.objectives.reactivate_all();
        self.camera.follow(&self.player);
        self.frame = 0;
        self.run_id = self.run_id.wrapping_add(1);
        self.set_screen(Screen::Gameplay);
    }

    fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            log::info!("screen {} -> {}", self.screen.as_str(), screen.as_str());
        }
        self.screen = screen;
    }

    /// Advance one gameplay frame
    ///
    /// Order: player physics, objective pickup, ground check, camera follow,
    /// platform recycling. Does nothing outside [`Screen::Gameplay`] and
    /// returns whether a frame was simulated.
    pub fn tick(&mut self, horizontal: Horizontal) -> bool {
        if self.screen != Screen::Gameplay {
            return false;
        }
        self.frame += 1;

        physics::advance_player(&mut self.player, horizontal, self.level.platforms());

        let collected = self
            .objectives
            .collect(&self.player.rect, &self.level, &mut self.rng);
        self.score += collected;

        if physics::touches_ground(&self.player, self.config.ground_y()) {
            self.end_run();
        }

        self.camera.follow(&self.player);
        camera::scroll(
            &self.camera,
            &mut self.level,
            &mut self.objectives,
            &mut self.rng,
        );

        log::trace!(
            "frame {}: player at ({}, {}) v=({}, {})",
            self.frame,
            self.player.rect.x,
            self.player.rect.y,
            self.player.velocity.x,
            self.player.velocity.y
        );
        true
    }

    fn end_run(&mut self) {
        if self.score > self.high_score {
            self.high_score = self.score;
        }
        log::info!(
            "run {} over after {} frames: score {}, high score {}",
            self.run_id,
            self.frame,
            self.score,
            self.high_score
        );
        self.set_screen(Screen::GameOver);
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.screen = self.screen;
        out.screen_size = self.config.screen_size();
        out.ground_y = self.config.ground_y();
        out.player = self.player.rect;
        out.camera = self.camera;
        out.score = self.score;
        out.high_score = self.high_score;
        out.run_id = self.run_id;

        out.platforms.clear();
        out.platforms.extend(
            self.level
                .platforms()
                .iter()
                .filter(|p| p.is_active)
                .map(|p| p.rect),
        );
        out.objectives.clear();
        out.objectives.extend(
            self.objectives
                .items()
                .iter()
                .filter(|o| o.is_active)
                .map(|o| o.rect),
        );
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Player box (convenience for front ends and tests).
    pub fn player_rect(&self) -> Rect {
        self.player.rect
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
