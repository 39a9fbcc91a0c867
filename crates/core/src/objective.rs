//! Objective module - respawning pickups
//!
//! Every objective is anchored to a platform slot. Collecting one scores a
//! point and immediately re-seats it on a random platform, so objectives are
//! never permanently consumed. When a platform slot is recycled, the
//! objectives resting on it move with it.

use arrayvec::ArrayVec;

use crate::entity::Objective;
use crate::level::Level;
use crate::rng::RandomSource;
use crate::types::{Rect, MAX_PLATFORMS};

/// Fixed-capacity set of objectives, one per platform slot.
#[derive(Debug, Clone)]
pub struct Objectives {
    items: ArrayVec<Objective, MAX_PLATFORMS>,
}

impl Objectives {
    /// Place one objective per platform slot, each on a random platform.
    pub fn scatter(level: &Level, rng: &mut impl RandomSource) -> Self {
        let mut items = ArrayVec::new();
        for _ in 0..level.len() {
            let mut objective = Objective::new(0);
            place_on_random_platform(&mut objective, level, rng);
            items.push(objective);
        }
        Self { items }
    }

    /// Collect every active objective the player overlaps.
    ///
    /// Each collected objective is relocated onto a random platform and
    /// reactivated in the same call. Returns the number collected.
    pub fn collect(&mut self, player: &Rect, level: &Level, rng: &mut impl RandomSource) -> u32 {
        let mut collected = 0;
        for (i, objective) in self.items.iter_mut().enumerate() {
            if !objective.is_active || !player.overlaps(&objective.rect) {
                continue;
            }

            objective.is_active = false;
            collected += 1;

            place_on_random_platform(objective, level, rng);
            objective.is_active = true;

            log::debug!(
                "objective {} collected, respawned on platform {} at ({}, {})",
                i,
                objective.platform,
                objective.rect.x,
                objective.rect.y
            );
        }
        collected
    }

    /// Move objectives anchored to `slot` along with their recycled platform.
    ///
    /// The horizontal offset from the platform's left edge is kept and the
    /// objective is re-seated on the platform's new top.
    pub fn follow_platform(&mut self, slot: usize, old: Rect, new: Rect) {
        for objective in self.items.iter_mut().filter(|o| o.platform == slot) {
            objective.rect.x = new.x + (objective.rect.x - old.x);
            objective.rect.y = new.y - objective.rect.height;
        }
    }

    pub fn reactivate_all(&mut self) {
        for objective in self.items.iter_mut() {
            objective.is_active = true;
        }
    }

    pub fn items(&self) -> &[Objective] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn items_mut(&mut self) -> &mut [Objective] {
        &mut self.items
    }
}

/// Seat `objective` on a uniformly chosen platform slot.
///
/// The slot is not checked for `is_active`; every platform stays active.
fn place_on_random_platform(objective: &mut Objective, level: &Level, rng: &mut impl RandomSource) {
    let slot = rng.random_int(0, level.len() as i32 - 1) as usize;
    let platform = level.platforms()[slot].rect;

    let min_x = platform.x as i32;
    let max_x = (platform.right() - objective.rect.width) as i32;
    objective.rect.x = rng.random_int(min_x, max_x) as f32;
    objective.rect.y = platform.y - objective.rect.height;
    objective.platform = slot;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimpleRng;
    use crate::types::{GROUND_HEIGHT, PLATFORM_COUNT, SCREEN_HEIGHT};

    const GROUND_Y: f32 = SCREEN_HEIGHT - GROUND_HEIGHT;

    fn setup(seed: u32) -> (Level, Objectives, SimpleRng) {
        let mut rng = SimpleRng::new(seed);
        let level = Level::generate(PLATFORM_COUNT, GROUND_Y, &mut rng);
        let objectives = Objectives::scatter(&level, &mut rng);
        (level, objectives, rng)
    }

    fn assert_all_resting(level: &Level, objectives: &Objectives) {
        for o in objectives.items().iter().filter(|o| o.is_active) {
            let p = &level.platforms()[o.platform];
            assert!(o.rests_on(p), "objective {:?} not on platform {:?}", o.rect, p.rect);
        }
    }

    #[test]
    fn test_scatter_places_one_per_slot_on_platforms() {
        for seed in 1..20 {
            let (level, objectives, _) = setup(seed);
            assert_eq!(objectives.len(), level.len());
            assert!(objectives.items().iter().all(|o| o.is_active));
            assert!(objectives.items().iter().all(|o| o.rect.width == 20.0));
            assert_all_resting(&level, &objectives);
        }
    }

    #[test]
    fn test_collect_scores_and_respawns() {
        let (level, mut objectives, mut rng) = setup(4);
        let target = objectives.items()[0].rect;
        // A small box touching only this objective's interior.
        let player = Rect::new(target.x + 5.0, target.y + 5.0, 1.0, 1.0);

        let scored = objectives.collect(&player, &level, &mut rng);

        assert!(scored >= 1);
        let o = objectives.items()[0];
        assert!(o.is_active, "collected objective must respawn immediately");
        assert!(o.rests_on(&level.platforms()[o.platform]));
    }

    #[test]
    fn test_collect_ignores_inactive_objectives() {
        let (level, mut objectives, mut rng) = setup(4);
        let target = objectives.items()[0].rect;
        objectives.items_mut()[0].is_active = false;
        let player = Rect::new(target.x + 5.0, target.y + 5.0, 1.0, 1.0);

        let before: Vec<Rect> = objectives.items().iter().map(|o| o.rect).collect();
        let scored = objectives.collect(&player, &level, &mut rng);

        // Other objectives could share the spot, but slot 0 must not move.
        assert_eq!(objectives.items()[0].rect, before[0]);
        assert!(!objectives.items()[0].is_active);
        assert_eq!(
            scored as usize,
            before
                .iter()
                .enumerate()
                .filter(|(i, r)| *i != 0 && player.overlaps(r))
                .count()
        );
    }

    #[test]
    fn test_collect_without_overlap_scores_nothing() {
        let (level, mut objectives, mut rng) = setup(8);
        let far_away = Rect::new(-10_000.0, -10_000.0, 40.0, 40.0);
        assert_eq!(objectives.collect(&far_away, &level, &mut rng), 0);
    }

    #[test]
    fn test_follow_platform_keeps_objectives_on_recycled_slot() {
        let (mut level, mut objectives, mut rng) = setup(21);

        level.recycle_behind(1_200.0, &mut rng, |slot, old, new| {
            objectives.follow_platform(slot, old, new)
        });

        assert_all_resting(&level, &objectives);
    }

    #[test]
    fn test_reactivate_all() {
        let (_, mut objectives, _) = setup(2);
        for o in objectives.items_mut() {
            o.is_active = false;
        }
        objectives.reactivate_all();
        assert!(objectives.items().iter().all(|o| o.is_active));
    }
}
