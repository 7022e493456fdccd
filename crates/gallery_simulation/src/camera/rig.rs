//! GalleryCamera — per-frame поза камеры

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::state::{AvatarState, Painting};

/// Параметры камеры (углы: радианы, FOV: градусы)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Скорость сглаживания (lerp factor = smoothness * delta)
    pub smoothness: f32,
    pub orbit_distance: f32,
    /// Радиан на пиксель drag'а
    pub sensitivity: f32,
    pub min_pitch: f32,
    pub max_pitch: f32,
    /// Подъём камеры над сферой (уровень глаз)
    pub orbit_height_offset: f32,
    /// Подъём точки look-at над аватаром
    pub look_at_height: f32,
    /// Камера не выходит за |x|, |z| ≤ bounds (в orbit mode)
    pub bounds: f32,
    pub base_fov: f32,
    pub zoom_distance: f32,
    pub zoom_narrow_fov: f32,
    pub zoom_wide_fov: f32,
    /// Дистанция, на которой FOV в zoom mode уже полностью wide
    pub zoom_fov_blend_distance: f32,
    /// FOV в момент выбора новой картины
    pub establishing_fov: f32,
    pub zoom_fov_rate: f32,
    pub orbit_fov_rate: f32,
    pub max_delta: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            smoothness: 5.0,
            orbit_distance: 7.0,
            sensitivity: 0.003,
            min_pitch: (-80.0f32).to_radians(),
            max_pitch: 60.0f32.to_radians(), // выше — камера переворачивается через полюс
            orbit_height_offset: 2.2,
            look_at_height: 2.0,
            bounds: 14.0,
            base_fov: 50.0,
            zoom_distance: 3.5,
            zoom_narrow_fov: 45.0,
            zoom_wide_fov: 55.0,
            zoom_fov_blend_distance: 2.0,
            establishing_fov: 65.0,
            zoom_fov_rate: 4.0,
            orbit_fov_rate: 5.0,
            max_delta: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CameraMode {
    #[default]
    Orbit,
    Zoom,
}

/// Поза камеры (пишет только `update_gallery_camera`, хост применяет к своей камере)
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GalleryCamera {
    pub mode: CameraMode,
    pub position: Vec3,
    pub look_at: Vec3,
    /// Vertical FOV (градусы)
    pub fov: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub target_yaw: f32,
    pub target_pitch: f32,
    /// id картины, на которую сейчас zoom (для сброса FOV при смене)
    pub zoom_target: Option<String>,
}

impl Default for GalleryCamera {
    fn default() -> Self {
        Self {
            mode: CameraMode::Orbit,
            position: Vec3::new(0.0, 4.0, 8.0),
            look_at: Vec3::ZERO,
            fov: CameraConfig::default().base_fov,
            yaw: 0.0,
            pitch: 0.0,
            target_yaw: 0.0,
            target_pitch: 0.0,
            zoom_target: None,
        }
    }
}

/// Lerp factor, не больше 1 (не перелетаем цель на длинном кадре)
fn blend(rate: f32, delta: f32) -> f32 {
    (rate * delta).clamp(0.0, 1.0)
}

impl GalleryCamera {
    /// Drag в пикселях → target yaw/pitch (только в orbit mode)
    pub fn apply_drag(&mut self, drag: Vec2, config: &CameraConfig) {
        self.target_yaw -= drag.x * config.sensitivity;
        self.target_pitch = (self.target_pitch - drag.y * config.sensitivity)
            .clamp(config.min_pitch, config.max_pitch);
    }

    /// Точка на сфере вокруг аватара (до сглаживания)
    pub fn orbit_target(&self, avatar: &AvatarState, config: &CameraConfig) -> Vec3 {
        let phi = std::f32::consts::FRAC_PI_2 - self.pitch;
        let theta = self.yaw;
        let distance = config.orbit_distance;
        let center = avatar.position;

        Vec3::new(
            (center.x + distance * phi.sin() * theta.sin()).clamp(-config.bounds, config.bounds),
            center.y + distance * phi.cos() + config.orbit_height_offset,
            (center.z + distance * phi.sin() * theta.cos()).clamp(-config.bounds, config.bounds),
        )
    }

    /// Точка перед картиной на высоте её центра
    pub fn zoom_target_position(painting: &Painting, config: &CameraConfig) -> Vec3 {
        let mut target = painting.position + painting.outward_normal() * config.zoom_distance;
        target.y = painting.position.y;
        target
    }

    /// Один кадр камеры
    pub fn update(
        &mut self,
        avatar: &AvatarState,
        selected: Option<&Painting>,
        config: &CameraConfig,
        delta: f32,
    ) {
        let delta = delta.clamp(0.0, config.max_delta);

        match selected {
            Some(painting) => self.update_zoom(painting, config, delta),
            None => self.update_orbit(avatar, config, delta),
        }
    }

    fn update_orbit(&mut self, avatar: &AvatarState, config: &CameraConfig, delta: f32) {
        self.mode = CameraMode::Orbit;
        self.zoom_target = None;

        self.fov += (config.base_fov - self.fov) * blend(config.orbit_fov_rate, delta);

        let t = blend(config.smoothness, delta);
        self.yaw += (self.target_yaw - self.yaw) * t;
        self.pitch += (self.target_pitch - self.pitch) * t;

        let target = self.orbit_target(avatar, config);
        self.position = self.position.lerp(target, t);

        let look_target = avatar.position + Vec3::Y * config.look_at_height;
        self.look_at = self.look_at.lerp(look_target, t);
    }

    fn update_zoom(&mut self, painting: &Painting, config: &CameraConfig, delta: f32) {
        self.mode = CameraMode::Zoom;

        let target = Self::zoom_target_position(painting, config);
        let distance = self.position.distance(target);

        // Издалека подлетаем быстрее, у цели: мягче
        let approach = if distance > 1.0 { 2.5 } else { 1.5 };

        let progress = (distance / config.zoom_fov_blend_distance).clamp(0.0, 1.0);
        let target_fov =
            config.zoom_narrow_fov + (config.zoom_wide_fov - config.zoom_narrow_fov) * progress;
        self.fov += (target_fov - self.fov) * blend(config.zoom_fov_rate, delta);

        self.position = self
            .position
            .lerp(target, blend(config.smoothness * approach, delta));
        self.look_at = self
            .look_at
            .lerp(painting.position, blend(config.smoothness, delta));

        // Новая цель: прогресс zoom'а не переносится, начинаем с establishing
        if self.zoom_target.as_deref() != Some(painting.id.as_str()) {
            self.zoom_target = Some(painting.id.clone());
            self.fov = config.establishing_fov;
        }
    }
}
