//! GalleryConfig — все tuning-константы симуляции в одном resource
//!
//! Defaults = каноничный вариант (одна комната, одна камера, один темп шагов).
//! Хост может переопределить любую часть через JSON:
//!
//! ```json
//! { "movement": { "speed": 6.0 }, "proximity": { "threshold": 4.0 } }
//! ```
//!
//! Отсутствующие поля берутся из `Default`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::camera::CameraConfig;
use crate::footprints::FootprintConfig;
use crate::movement::MovementConfig;
use crate::proximity::ProximityConfig;

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Ошибки загрузки конфига
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub movement: MovementConfig,
    pub camera: CameraConfig,
    pub proximity: ProximityConfig,
    pub footprints: FootprintConfig,
}

impl GalleryConfig {
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Проверка значений, при которых per-frame математика ломается
    pub fn validate(&self) -> ConfigResult<()> {
        let m = &self.movement;
        positive("movement.speed", m.speed)?;
        positive("movement.run_multiplier", m.run_multiplier)?;
        positive("movement.max_delta", m.max_delta)?;
        positive("movement.rotation_speed", m.rotation_speed)?;
        if !(m.friction > 0.0 && m.friction < 1.0) {
            return Err(invalid("movement.friction", format!("{} not in (0, 1)", m.friction)));
        }
        if m.bound() <= 0.0 {
            return Err(invalid(
                "movement.room_half_extent",
                format!("room {} too small for avatar radius {}", m.room_half_extent, m.avatar_radius),
            ));
        }

        let c = &self.camera;
        positive("camera.smoothness", c.smoothness)?;
        positive("camera.orbit_distance", c.orbit_distance)?;
        positive("camera.sensitivity", c.sensitivity)?;
        positive("camera.zoom_distance", c.zoom_distance)?;
        // Делитель FOV blend'а в zoom mode
        positive("camera.zoom_fov_blend_distance", c.zoom_fov_blend_distance)?;
        positive("camera.zoom_fov_rate", c.zoom_fov_rate)?;
        positive("camera.orbit_fov_rate", c.orbit_fov_rate)?;
        positive("camera.max_delta", c.max_delta)?;
        if c.min_pitch >= c.max_pitch {
            return Err(invalid(
                "camera.min_pitch",
                format!("{} must be below max_pitch {}", c.min_pitch, c.max_pitch),
            ));
        }
        positive("camera.bounds", c.bounds)?;

        positive("proximity.threshold", self.proximity.threshold)?;

        let f = &self.footprints;
        positive("footprints.walk_period", f.walk_period)?;
        positive("footprints.run_period", f.run_period)?;
        positive("footprints.decay_rate", f.decay_rate)?;
        if f.max_footprints == 0 {
            return Err(invalid("footprints.max_footprints", "must be at least 1".to_string()));
        }

        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid { field, reason }
}

fn positive(field: &'static str, value: f32) -> ConfigResult<()> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("{} must be positive", value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GalleryConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GalleryConfig::from_json_str(r#"{ "movement": { "speed": 6.5 } }"#)
            .expect("valid partial config");

        assert_eq!(config.movement.speed, 6.5);
        assert_eq!(config.movement.friction, MovementConfig::default().friction);
        assert_eq!(config.proximity, ProximityConfig::default());
    }

    #[test]
    fn test_friction_out_of_range_rejected() {
        let err = GalleryConfig::from_json_str(r#"{ "movement": { "friction": 1.2 } }"#)
            .expect_err("friction 1.2 must be rejected");
        assert!(matches!(err, ConfigError::Invalid { field: "movement.friction", .. }));
    }

    #[test]
    fn test_zero_footprint_cap_rejected() {
        let err = GalleryConfig::from_json_str(r#"{ "footprints": { "max_footprints": 0 } }"#)
            .expect_err("cap 0 must be rejected");
        assert!(matches!(err, ConfigError::Invalid { field: "footprints.max_footprints", .. }));
    }

    #[test]
    fn test_degenerate_camera_rates_rejected() {
        let fields = [
            "zoom_fov_blend_distance",
            "zoom_distance",
            "sensitivity",
            "zoom_fov_rate",
            "orbit_fov_rate",
        ];

        for field in fields {
            let json = format!(r#"{{ "camera": {{ "{}": 0.0 }} }}"#, field);
            let err = GalleryConfig::from_json_str(&json).expect_err("zero camera value must be rejected");
            match err {
                ConfigError::Invalid { field: rejected, .. } => {
                    assert_eq!(rejected, format!("camera.{}", field));
                }
                other => panic!("unexpected error for {}: {:?}", field, other),
            }
        }
    }

    #[test]
    fn test_malformed_json() {
        let err = GalleryConfig::from_json_str("{ movement: ").expect_err("not JSON");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = GalleryConfig::load("/definitely/not/here/gallery.json").expect_err("no file");
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
