//! Physics module - per-frame player motion and platform collision
//!
//! Motion is frame-based: gravity and speed are added once per tick and are
//! not scaled by elapsed time.
//!
//! Collision is resolved in two passes. The first runs after the horizontal
//! move but before the vertical one, so it only catches platforms that
//! already overlap the player's previous height (e.g. walking into the side
//! of a platform snaps the player on top of it). The second pass runs after
//! the vertical move and is the one that stops falls and jumps.

use crate::entity::{Platform, Player};
use crate::types::{Horizontal, GRAVITY, JUMP_FORCE, MOVE_SPEED};

/// Advance the player by one frame and resolve platform overlaps.
pub fn advance_player(player: &mut Player, horizontal: Horizontal, platforms: &[Platform]) {
    player.velocity.y += GRAVITY;

    player.velocity.x = match horizontal {
        Horizontal::Left => -MOVE_SPEED,
        Horizontal::Right => MOVE_SPEED,
        Horizontal::None => 0.0,
    };
    player.rect.x += player.velocity.x;

    resolve_platform_overlaps(player, platforms);

    player.rect.y += player.velocity.y;

    resolve_platform_overlaps(player, platforms);
}

/// Snap the player on top of every active platform it overlaps.
///
/// When several platforms overlap, the last slot wins. Returns whether any
/// snap happened.
pub fn resolve_platform_overlaps(player: &mut Player, platforms: &[Platform]) -> bool {
    let mut landed = false;
    for platform in platforms.iter().filter(|p| p.is_active) {
        if player.rect.overlaps(&platform.rect) {
            player.velocity.y = 0.0;
            player.is_jumping = false;
            player.rect.y = platform.rect.y - player.rect.height;
            landed = true;
        }
    }
    landed
}

/// Start a jump unless one is already in progress.
pub fn try_jump(player: &mut Player) -> bool {
    if player.is_jumping {
        return false;
    }
    player.velocity.y = -JUMP_FORCE;
    player.is_jumping = true;
    true
}

/// True once the player's bottom edge reaches the ground line.
pub fn touches_ground(player: &Player, ground_y: f32) -> bool {
    player.rect.bottom() >= ground_y
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rect, Vec2};

    fn platform(x: f32, y: f32, w: f32) -> Platform {
        Platform {
            rect: Rect::new(x, y, w, 20.0),
            is_active: true,
        }
    }

    /// Player whose bottom edge sits `gap` units above `top`.
    fn player_above(x: f32, top: f32, gap: f32) -> Player {
        Player::new(x, top - 40.0 - gap)
    }

    #[test]
    fn test_gravity_accumulates_per_frame() {
        let mut p = Player::new(0.0, 0.0);
        advance_player(&mut p, Horizontal::None, &[]);
        assert_eq!(p.velocity.y, 0.5);
        assert_eq!(p.rect.y, 0.5);

        advance_player(&mut p, Horizontal::None, &[]);
        assert_eq!(p.velocity.y, 1.0);
        assert_eq!(p.rect.y, 1.5);
    }

    #[test]
    fn test_horizontal_speed_is_set_not_accumulated() {
        let mut p = Player::new(100.0, 0.0);

        advance_player(&mut p, Horizontal::Right, &[]);
        assert_eq!(p.velocity.x, 5.0);
        assert_eq!(p.rect.x, 105.0);

        advance_player(&mut p, Horizontal::Left, &[]);
        assert_eq!(p.velocity.x, -5.0);
        assert_eq!(p.rect.x, 100.0);

        advance_player(&mut p, Horizontal::None, &[]);
        assert_eq!(p.velocity.x, 0.0);
        assert_eq!(p.rect.x, 100.0);
    }

    #[test]
    fn test_falling_player_lands_in_one_tick() {
        let floor = platform(0.0, 300.0, 200.0);
        let mut p = player_above(50.0, 300.0, 1.0);
        p.velocity.y = 1.0;
        p.is_jumping = true;

        advance_player(&mut p, Horizontal::None, &[floor]);

        assert_eq!(p.rect.y, 300.0 - 40.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_standing_player_one_unit_above_lands_within_two_ticks() {
        let floor = platform(0.0, 300.0, 200.0);
        let mut p = player_above(50.0, 300.0, 1.0);
        p.is_jumping = true;

        // First tick only reaches 0.5 of the gap.
        advance_player(&mut p, Horizontal::None, &[floor]);
        assert_eq!(p.rect.bottom(), 299.5);
        assert!(p.is_jumping);

        advance_player(&mut p, Horizontal::None, &[floor]);
        assert_eq!(p.rect.y, 260.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_resting_player_stays_on_platform() {
        let floor = platform(0.0, 300.0, 200.0);
        let mut p = player_above(50.0, 300.0, 0.0);

        for _ in 0..120 {
            advance_player(&mut p, Horizontal::None, &[floor]);
            assert_eq!(p.rect.bottom(), 300.0);
            assert_eq!(p.velocity.y, 0.0);
        }
    }

    #[test]
    fn test_first_pass_snaps_when_walking_into_platform_side() {
        // Player beside a raised platform, overlapping its height range.
        let ledge = platform(100.0, 280.0, 100.0);
        let mut p = Player::new(58.0, 270.0);
        p.is_jumping = true;

        advance_player(&mut p, Horizontal::Right, &[ledge]);

        assert_eq!(p.rect.x, 63.0);
        assert_eq!(p.rect.y, 240.0);
        assert_eq!(p.velocity.y, 0.0);
        assert!(!p.is_jumping);
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let floor = platform(100.0, 300.0, 100.0);
        // Right edge touches platform left edge after the move.
        let mut p = Player::new(55.0, 270.0);
        p.velocity.y = -3.0;

        advance_player(&mut p, Horizontal::Right, &[floor]);

        assert_eq!(p.rect.right(), 100.0);
        assert_eq!(p.velocity.y, -2.5);
    }

    #[test]
    fn test_inactive_platforms_are_ignored() {
        let mut floor = platform(0.0, 300.0, 200.0);
        floor.is_active = false;
        let mut p = player_above(50.0, 300.0, 0.0);

        advance_player(&mut p, Horizontal::None, &[floor]);

        assert_eq!(p.rect.bottom(), 300.5);
        assert_eq!(p.velocity.y, 0.5);
    }

    #[test]
    fn test_last_overlapping_platform_wins() {
        let low = platform(0.0, 300.0, 200.0);
        let high = platform(0.0, 290.0, 200.0);
        // Overlaps `low` first; the snap onto it then overlaps `high`.
        let mut p = Player::new(50.0, 285.0);

        assert!(resolve_platform_overlaps(&mut p, &[low, high]));
        assert_eq!(p.rect.y, 250.0);
    }

    #[test]
    fn test_jump_only_from_ground() {
        let mut p = Player::new(0.0, 0.0);

        assert!(try_jump(&mut p));
        assert_eq!(p.velocity.y, -10.0);
        assert!(p.is_jumping);

        // Airborne: jump must not change velocity.
        p.velocity = Vec2::new(5.0, -3.5);
        assert!(!try_jump(&mut p));
        assert_eq!(p.velocity, Vec2::new(5.0, -3.5));
        assert!(p.is_jumping);
    }

    #[test]
    fn test_jump_rises_then_lands_again() {
        let floor = platform(0.0, 300.0, 200.0);
        let mut p = player_above(50.0, 300.0, 0.0);

        assert!(try_jump(&mut p));
        let mut peak = p.rect.y;
        let mut landed_after = None;
        for frame in 0..200 {
            advance_player(&mut p, Horizontal::None, &[floor]);
            peak = peak.min(p.rect.y);
            if !p.is_jumping {
                landed_after = Some(frame);
                break;
            }
        }

        assert!(landed_after.is_some(), "player never landed");
        assert!(peak < 260.0 - 90.0, "jump too low: {}", peak);
        assert_eq!(p.rect.bottom(), 300.0);
    }

    #[test]
    fn test_touches_ground_is_inclusive() {
        let mut p = Player::new(0.0, 359.0);
        assert!(!touches_ground(&p, 400.0));
        p.rect.y = 360.0;
        assert!(touches_ground(&p, 400.0));
        p.rect.y = 420.0;
        assert!(touches_ground(&p, 400.0));
    }
}
