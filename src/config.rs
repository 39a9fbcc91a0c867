//! Runner configuration read from the environment.

use crate::core::GameConfig;

const DEFAULT_LOG_FILTER: &str = "info";
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Everything the binary needs before the first frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RunnerConfig {
    pub game: GameConfig,
    /// Log file. Logging stays off when unset, the terminal is in raw mode.
    pub log_path: Option<String>,
    /// `env_logger` filter directives.
    pub log_filter: String,
    /// Auto-release timeout for held movement keys on terminals that do not
    /// report key releases.
    pub key_release_timeout_ms: u32,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            log_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }
}

impl RunnerConfig {
    /// Create from environment variables
    ///
    /// - `PLATFORMER_SEED`, `PLATFORMER_PLATFORMS`: see [`GameConfig::from_env`]
    /// - `PLATFORMER_LOG_PATH`: log file (disabled when unset or blank)
    /// - `PLATFORMER_LOG`: log filter (default `info`)
    /// - `PLATFORMER_KEY_RELEASE_MS`: held-key auto-release timeout (default 150)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let game = GameConfig::from_lookup(&lookup);

        let log_path = lookup("PLATFORMER_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("PLATFORMER_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let key_release_timeout_ms = lookup("PLATFORMER_KEY_RELEASE_MS")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(DEFAULT_KEY_RELEASE_TIMEOUT_MS);

        Self {
            game,
            log_path,
            log_filter,
            key_release_timeout_ms,
        }
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
    fn test_runner_config_defaults() {
        let cfg = RunnerConfig::from_lookup(lookup(&[]));
        assert_eq!(cfg, RunnerConfig::default());
        assert!(cfg.log_path.is_none());
        assert_eq!(cfg.log_filter, "info");
    }

    #[test]
    fn test_runner_config_reads_all_variables() {
        let cfg = RunnerConfig::from_lookup(lookup(&[
            ("PLATFORMER_SEED", "99"),
            ("PLATFORMER_PLATFORMS", "12"),
            ("PLATFORMER_LOG_PATH", " /tmp/platformer.log "),
            ("PLATFORMER_LOG", "tui_platformer_core=debug"),
            ("PLATFORMER_KEY_RELEASE_MS", "300"),
        ]));

        assert_eq!(cfg.game.seed, Some(99));
        assert_eq!(cfg.game.platform_count, 12);
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/platformer.log"));
        assert_eq!(cfg.log_filter, "tui_platformer_core=debug");
        assert_eq!(cfg.key_release_timeout_ms, 300);
    }

    #[test]
    fn test_blank_log_path_disables_logging() {
        let cfg = RunnerConfig::from_lookup(lookup(&[("PLATFORMER_LOG_PATH", "   ")]));
        assert!(cfg.log_path.is_none());
    }

    #[test]
    fn test_invalid_timeout_falls_back_to_default() {
        let cfg = RunnerConfig::from_lookup(lookup(&[("PLATFORMER_KEY_RELEASE_MS", "soon")]));
        assert_eq!(cfg.key_release_timeout_ms, 150);
    }

    #[test]
    fn test_runner_config_from_env() {
        // This test just ensures it doesn't panic
        let _config = RunnerConfig::from_env();
    }
}
