//! Camera module - snap-follow camera and scroll-driven recycling

use crate::entity::Player;
use crate::level::Level;
use crate::objective::Objectives;
use crate::rng::RandomSource;
use crate::types::Vec2;

/// 2D camera: `target` is shown at `offset` on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub target: Vec2,
    pub offset: Vec2,
    pub zoom: f32,
    pub rotation: f32,
}

impl Camera {
    /// Camera centred on `target` for a screen of `screen` size.
    pub fn new(screen: Vec2, target: Vec2) -> Self {
        Self {
            target,
            offset: Vec2::new(screen.x / 2.0, screen.y / 2.0),
            zoom: 1.0,
            rotation: 0.0,
        }
    }

    /// Snap the target to the player's centre.
    pub fn follow(&mut self, player: &Player) {
        self.target = player.center();
    }

    /// World x of the left edge of the view.
    pub fn view_left(&self) -> f32 {
        self.target.x - self.offset.x / self.zoom
    }

    /// Map a world point to screen coordinates.
    pub fn world_to_screen(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            (point.x - self.target.x) * self.zoom + self.offset.x,
            (point.y - self.target.y) * self.zoom + self.offset.y,
        )
    }
}

/// Recycle platforms that scrolled off the left of the view.
///
/// Objectives resting on a recycled platform move with it. Returns the number
/// of platforms recycled.
pub fn scroll(
    camera: &Camera,
    level: &mut Level,
    objectives: &mut Objectives,
    rng: &mut impl RandomSource,
) -> usize {
    level.recycle_behind(camera.view_left(), rng, |slot, old, new| {
        log::debug!(
            "recycled platform {}: x {} -> {}, y {} -> {}",
            slot,
            old.x,
            new.x,
            old.y,
            new.y
        );
        objectives.follow_platform(slot, old, new);
    })
}
