use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Largest tower the board view can lay out in a typical 80-column terminal:
/// three slots of `2·disks + 3` cells each.
pub const MAX_DISKS: u32 = 10;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub puzzle: PuzzleConfig,
    pub animation: AnimationConfig,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Number of disks initially stacked on the source rod.
    pub disks: u32,
}

/// Real-time pacing of the animation, all in milliseconds.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Pause after each completed move.
    pub move_delay_ms: u64,
    /// Frame pacing applied after presenting a frame, independent of the
    /// move pause.
    pub frame_delay_ms: u64,
    /// Hold on the initial board before the solve starts.
    pub start_hold_ms: u64,
    /// Hold on the solved board before the idle phase begins.
    pub solved_hold_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            puzzle: PuzzleConfig::default(),
            animation: AnimationConfig::default(),
        }
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        PuzzleConfig { disks: 3 }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            move_delay_ms: 500,
            frame_delay_ms: 33,
            start_hold_ms: 1000,
            solved_hold_ms: 2000,
        }
    }
}

impl AnimationConfig {
    pub fn move_delay(&self) -> Duration {
        Duration::from_millis(self.move_delay_ms)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    pub fn start_hold(&self) -> Duration {
        Duration::from_millis(self.start_hold_ms)
    }

    pub fn solved_hold(&self) -> Duration {
        Duration::from_millis(self.solved_hold_ms)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.puzzle.disks == 0 {
            return Err(ConfigError::Validation(
                "puzzle.disks must be >= 1".into(),
            ));
        }
        if self.puzzle.disks > MAX_DISKS {
            return Err(ConfigError::Validation(format!(
                "puzzle.disks must be <= {MAX_DISKS}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.puzzle.disks, 3);
        assert_eq!(config.animation.move_delay_ms, 500);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [puzzle]
            disks = 5

            [animation]
            move_delay_ms = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.puzzle.disks, 5);
        assert_eq!(config.animation.move_delay_ms, 120);
        // Untouched fields keep their defaults
        assert_eq!(config.animation.frame_delay_ms, 33);
        assert_eq!(config.animation.solved_hold_ms, 2000);
    }

    #[test]
    fn test_validation_rejects_zero_disks() {
        let mut config = AppConfig::default();
        config.puzzle.disks = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_oversized_tower() {
        let mut config = AppConfig::default();
        config.puzzle.disks = MAX_DISKS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_without_file() {
        let config = AppConfig::load_or_default(Path::new("no-such-config.toml")).unwrap();
        assert_eq!(config.puzzle.disks, 3);
    }

    #[test]
    fn test_delay_conversions() {
        let animation = AnimationConfig::default();
        assert_eq!(animation.move_delay(), Duration::from_millis(500));
        assert_eq!(animation.frame_delay(), Duration::from_millis(33));
    }
}
