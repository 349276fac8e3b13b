//! Runtime configuration loaded from an optional TOML file.
//!
//! Every field falls back to the compile-time constants, so a partial file
//! (or no file at all) is valid.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::constants::{
    camera_3d_constants::{CAMERA_3D_MAX_RADIUS, CAMERA_3D_MIN_RADIUS},
    game_constants::{SCRAMBLE_LENGTH, SEED},
    gesture_constants::{DRAG_THRESHOLD, TOP_ROW_THRESHOLD},
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Environment variable that overrides `scramble.seed`.
pub const SEED_ENV_VAR: &str = "CUBE_GAME_SEED";

/// Drag interpretation thresholds, in normalized viewport units.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GestureConfig {
    pub drag_threshold: f32,
    pub top_row_threshold: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            drag_threshold: DRAG_THRESHOLD,
            top_row_threshold: TOP_ROW_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    pub length: usize,
    pub seed: u64,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: SCRAMBLE_LENGTH,
            seed: SEED,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            min_radius: CAMERA_3D_MIN_RADIUS,
            max_radius: CAMERA_3D_MAX_RADIUS,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub gesture: GestureConfig,
    pub scramble: ScrambleConfig,
    pub camera: CameraConfig,
}

impl GameConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read `path`. A missing file yields the defaults. `CUBE_GAME_SEED`
    /// overrides the scramble seed in both cases.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let seed_override = std::env::var(SEED_ENV_VAR).ok();
        Self::load_with_seed_override(path, seed_override.as_deref())
    }

    /// `load` with the seed override passed in instead of read from the environment.
    pub fn load_with_seed_override(
        path: impl AsRef<Path>,
        seed_override: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            let config = Self::from_toml_str(&raw)?;
            log::info!("Loaded config from {}", path.display());
            config
        } else {
            log::debug!("No config file at {}, using defaults", path.display());
            Self::default()
        };
        config.apply_seed_override(seed_override);
        Ok(config)
    }

    /// Like `load`, but any error is logged and replaced by the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}; falling back to default config");
                Self::default()
            }
        }
    }

    /// A malformed override is logged and leaves the current seed in place.
    fn apply_seed_override(&mut self, raw: Option<&str>) {
        let Some(raw) = raw else {
            return;
        };
        match raw.trim().parse() {
            Ok(seed) => {
                log::info!("{SEED_ENV_VAR} overrides the scramble seed: {seed}");
                self.scramble.seed = seed;
            }
            Err(_) => log::warn!(
                "{SEED_ENV_VAR}=`{raw}` is not an unsigned integer; keeping seed {}",
                self.scramble.seed
            ),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let gesture = &self.gesture;
        if !(gesture.drag_threshold.is_finite() && gesture.drag_threshold >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "gesture.drag_threshold",
                reason: "must be a finite, non-negative number".into(),
            });
        }
        if !(-1.0..=1.0).contains(&gesture.top_row_threshold) {
            return Err(ConfigError::Invalid {
                field: "gesture.top_row_threshold",
                reason: "must lie in [-1, 1]".into(),
            });
        }
        let camera = &self.camera;
        if !(camera.min_radius > 0.0 && camera.min_radius <= camera.max_radius) {
            return Err(ConfigError::Invalid {
                field: "camera",
                reason: format!(
                    "need 0 < min_radius <= max_radius, got {} and {}",
                    camera.min_radius, camera.max_radius
                ),
            });
        }
        Ok(())
    }
}
