//! Entity model: the player, platforms and objectives.

use crate::types::{Rect, Vec2, OBJECTIVE_SIZE, PLAYER_SIZE};

/// The player-controlled box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub velocity: Vec2,
    pub is_jumping: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            rect: Rect::new(x, y, PLAYER_SIZE, PLAYER_SIZE),
            velocity: Vec2::ZERO,
            is_jumping: false,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.rect.center()
    }

    /// Place the player at rest on top of `platform`, at its left edge.
    pub fn spawn_on(&mut self, platform: &Platform) {
        self.rect.x = platform.rect.x;
        self.rect.y = platform.rect.y - self.rect.height;
        self.velocity = Vec2::ZERO;
        self.is_jumping = false;
    }
}

/// One slot of the platform ring buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    pub is_active: bool,
}

/// A respawning pickup resting on a platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Objective {
    pub rect: Rect,
    pub is_active: bool,
    /// Slot of the platform this objective rests on.
    pub platform: usize,
}

impl Objective {
    pub fn new(platform: usize) -> Self {
        Self {
            rect: Rect::new(0.0, 0.0, OBJECTIVE_SIZE, OBJECTIVE_SIZE),
            is_active: true,
            platform,
        }
    }

    /// True when the box sits exactly on top of `platform` and within its span.
    pub fn rests_on(&self, platform: &Platform) -> bool {
        let p = &platform.rect;
        self.rect.y == p.y - self.rect.height
            && self.rect.x >= p.x
            && self.rect.x <= p.right() - self.rect.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform(x: f32, y: f32, w: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, w, 20.0),
            is_active: true,
        }
    }

    #[test]
    fn test_spawn_on_rests_on_platform_top() {
        let mut player = Player::new(500.0, -40.0);
        player.velocity = Vec2::new(5.0, 3.0);
        player.is_jumping = true;

        player.spawn_on(&platform(200.0, 300.0, 120.0));

        assert_eq!(player.rect.x, 200.0);
        assert_eq!(player.rect.bottom(), 300.0);
        assert_eq!(player.velocity, Vec2::ZERO);
        assert!(!player.is_jumping);
    }

    #[test]
    fn test_player_center() {
        let player = Player::new(100.0, 200.0);
        assert_eq!(player.center(), Vec2::new(120.0, 220.0));
    }

    #[test]
    fn test_objective_rests_on() {
        let p = platform(0.0, 300.0, 100.0);
        let mut obj = Objective::new(0);
        obj.rect.x = 80.0;
        obj.rect.y = 280.0;
        assert!(obj.rests_on(&p));

        obj.rect.x = 81.0;
        assert!(!obj.rests_on(&p), "must not hang over the right edge");

        obj.rect.x = 0.0;
        obj.rect.y = 279.0;
        assert!(!obj.rests_on(&p), "must sit exactly on the top edge");
    }
}
