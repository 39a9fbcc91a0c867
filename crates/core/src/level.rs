//! Level module - procedural platform generation and recycling
//!
//! Platforms live in a fixed-size arena used as a ring buffer. Slot `i` is
//! first generated in lane `i` (`x = i * LANE_SPACING`); once it scrolls off
//! the left of the view it is moved `count` lanes ahead, so the level never
//! ends while storage stays constant.
//!
//! Heights follow a bounded random walk: each new platform is at most
//! `PLATFORM_MAX_STEP` above or below the previously generated one, and is
//! clamped so it never sinks into the ground.

use arrayvec::ArrayVec;

use crate::entity::Platform;
use crate::rng::RandomSource;
use crate::types::{
    Rect, LANE_SPACING, MAX_PLATFORMS, PLATFORM_HEIGHT, PLATFORM_MAX_STEP, PLATFORM_MAX_WIDTH,
    PLATFORM_MIN_WIDTH, SEED_PLATFORM_HEIGHT,
};

/// Fixed-capacity platform ring buffer plus the random-walk cursor.
#[derive(Debug, Clone)]
pub struct Level {
    platforms: ArrayVec<Platform, MAX_PLATFORMS>,
    /// Height of the most recently generated (or recycled) platform.
    previous_height: i32,
    ground_y: i32,
}

impl Level {
    /// Generate `count` platforms, one per lane.
    ///
    /// Panics if `count` is zero or exceeds [`MAX_PLATFORMS`].
    pub fn generate(count: usize, ground_y: f32, rng: &mut impl RandomSource) -> Self {
        assert!(
            (1..=MAX_PLATFORMS).contains(&count),
            "platform count must be in 1..={}, got {}",
            MAX_PLATFORMS,
            count
        );

        let mut level = Self {
            platforms: ArrayVec::new(),
            previous_height: SEED_PLATFORM_HEIGHT,
            ground_y: ground_y as i32,
        };

        for i in 0..count {
            let width = rng.random_int(PLATFORM_MIN_WIDTH, PLATFORM_MAX_WIDTH);
            let x = i as i32 * LANE_SPACING;
            let y = level.next_height(rng);
            level.platforms.push(Platform {
                rect: Rect::new(x as f32, y as f32, width as f32, PLATFORM_HEIGHT as f32),
                is_active: true,
            });
        }

        level
    }

    /// Draw the next height of the random walk and advance the cursor.
    fn next_height(&mut self, rng: &mut impl RandomSource) -> i32 {
        let (lo, hi) = height_bounds(self.previous_height, self.ground_y);
        let y = rng.random_int(lo, hi);
        self.previous_height = y;
        y
    }

    /// Move slot `index` forward by `count` lanes and re-roll its height.
    ///
    /// Returns the platform's rect before the move.
    pub fn recycle(&mut self, index: usize, rng: &mut impl RandomSource) -> Rect {
        let shift = self.platforms.len() as i32 * LANE_SPACING;
        let y = self.next_height(rng);

        let platform = &mut self.platforms[index];
        let old = platform.rect;
        platform.rect.x += shift as f32;
        platform.rect.y = y as f32;
        platform.is_active = true;
        old
    }

    /// Recycle every platform whose right edge is strictly left of `left_edge`.
    ///
    /// Slots are visited in order and each is moved at most once per call.
    /// `on_recycle` receives `(slot, old_rect, new_rect)`. Returns how many
    /// platforms were recycled.
    pub fn recycle_behind(
        &mut self,
        left_edge: f32,
        rng: &mut impl RandomSource,
        mut on_recycle: impl FnMut(usize, Rect, Rect),
    ) -> usize {
        let mut recycled = 0;
        for i in 0..self.platforms.len() {
            if self.platforms[i].rect.right() < left_edge {
                let old = self.recycle(i, rng);
                on_recycle(i, old, self.platforms[i].rect);
                recycled += 1;
            }
        }
        recycled
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    pub fn previous_height(&self) -> i32 {
        self.previous_height
    }

    pub fn ground_y(&self) -> f32 {
        self.ground_y as f32
    }

    #[cfg(test)]
    pub(crate) fn platforms_mut(&mut self) -> &mut [Platform] {
        &mut self.platforms
    }
}

/// Inclusive bounds for the next platform height.
///
/// The upper bound (largest y, i.e. lowest on screen) is clamped to the
/// ground; the lower bound never crosses it.
pub fn height_bounds(previous: i32, ground_y: i32) -> (i32, i32) {
    let ceiling = ground_y - PLATFORM_HEIGHT;
    let hi = (previous + PLATFORM_MAX_STEP).min(ceiling);
    let lo = (previous - PLATFORM_MAX_STEP).min(hi);
    (lo, hi)
}
