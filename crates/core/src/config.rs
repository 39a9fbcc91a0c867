//! Game configuration.

use crate::types::{Vec2, GROUND_HEIGHT, PLATFORM_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Simulation parameters fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical screen width (camera offset and recycle threshold).
    pub screen_width: f32,
    /// Logical screen height (camera offset and ground line).
    pub screen_height: f32,
    /// Number of platform and objective slots.
    pub platform_count: usize,
    /// RNG seed. `None` lets the front end pick one.
    pub seed: Option<u32>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            platform_count: PLATFORM_COUNT,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// - `PLATFORMER_SEED`: RNG seed
    /// - `PLATFORMER_PLATFORMS`: platform slot count
    ///
    /// Unparsable values are ignored. The platform count is validated when a
    /// session is built, not here.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("PLATFORMER_SEED").and_then(|s| s.trim().parse().ok());
        let platform_count = lookup("PLATFORMER_PLATFORMS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(defaults.platform_count);

        Self {
            platform_count,
            seed,
            ..defaults
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        Vec2::new(self.screen_width, self.screen_height)
    }

    /// World y of the ground line.
    pub fn ground_y(&self) -> f32 {
        self.screen_height - GROUND_HEIGHT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.platform_count, 20);
        assert_eq!(config.ground_y(), 400.0);
        assert_eq!(config.screen_size(), Vec2::new(800.0, 450.0));
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_from_lookup_reads_overrides() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PLATFORMER_SEED", "1234"),
            ("PLATFORMER_PLATFORMS", " 32 "),
        ]));
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.platform_count, 32);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = GameConfig::from_lookup(lookup(&[
            ("PLATFORMER_SEED", "abc"),
            ("PLATFORMER_PLATFORMS", "-3"),
        ]));
        assert_eq!(config, GameConfig::default());
    }
}
