//! AvatarState — поза управляемого персонажа

use bevy::prelude::*;

/// Поза и флаги движения аватара
///
/// Пишет только `integrate_avatar_movement` (раз за кадр, целиком).
///
/// Инварианты:
/// - `|position.x|, |position.z| ≤ MovementConfig::bound()`
/// - `is_running ⇒ is_moving`
/// - `facing ∈ (-π, π]`
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default)]
pub struct AvatarState {
    pub position: Vec3,
    /// Yaw (радианы) в (-π, π], 0 = смотрит в +Z
    pub facing: f32,
    pub velocity: Vec3,
    pub is_moving: bool,
    pub is_running: bool,
}

impl AvatarState {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Точка на полу (XZ), для planar distance
    pub fn planar_position(&self) -> Vec2 {
        Vec2::new(self.position.x, self.position.z)
    }
}
