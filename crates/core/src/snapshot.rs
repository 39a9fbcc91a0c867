//! Snapshot module - what a renderer needs to draw one frame

use arrayvec::ArrayVec;

use crate::camera::Camera;
use crate::types::{Rect, Screen, Vec2, MAX_PLATFORMS, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Read-only view of a session for renderers.
///
/// Only active platforms and objectives are included. Filling an existing
/// snapshot with `GameSession::snapshot_into` does not allocate.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub screen: Screen,
    /// Logical screen size the camera was built for.
    pub screen_size: Vec2,
    pub ground_y: f32,
    pub player: Rect,
    pub platforms: ArrayVec<Rect, MAX_PLATFORMS>,
    pub objectives: ArrayVec<Rect, MAX_PLATFORMS>,
    pub camera: Camera,
    pub score: u32,
    pub high_score: u32,
    pub run_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let screen_size = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        Self {
            screen: Screen::MainMenu,
            screen_size,
            ground_y: 0.0,
            player: Rect::default(),
            platforms: ArrayVec::new(),
            objectives: ArrayVec::new(),
            camera: Camera::new(screen_size, Vec2::ZERO),
            score: 0,
            high_score: 0,
            run_id: 0,
        }
    }
}
