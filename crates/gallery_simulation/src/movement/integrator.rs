//! Movement Integrator
//!
//! Архитектура:
//! - Velocity накапливается из intent (не задаётся напрямую)
//! - Трение каждый кадр → экспоненциальное затухание
//! - Жёсткий clamp по стенам комнаты (без отскока)
//! - Facing плавно догоняет target по кратчайшей дуге

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};

use crate::state::AvatarState;

/// Параметры движения
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Ускорение ходьбы (units/s²)
    pub speed: f32,
    /// Множитель speed при беге
    pub run_multiplier: f32,
    /// Доля velocity, остающаяся после кадра (0 < friction < 1)
    pub friction: f32,
    /// Скорость поворота (1/s)
    pub rotation_speed: f32,
    /// Половина стороны комнаты
    pub room_half_extent: f32,
    /// Радиус аватара (отступ от стены)
    pub avatar_radius: f32,
    /// Максимальный delta (s): защита от скачка после alt-tab
    pub max_delta: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 8.0,
            run_multiplier: 1.8,
            friction: 0.88,
            rotation_speed: 12.0,
            room_half_extent: 15.0, // комната 30x30
            avatar_radius: 0.3,
            max_delta: 0.1,
        }
    }
}

impl MovementConfig {
    /// Допустимый диапазон по X и Z: [-bound, bound]
    pub fn bound(&self) -> f32 {
        self.room_half_extent - self.avatar_radius
    }
}

/// Целевой facing (сохраняется между кадрами, пока нет input)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementTarget {
    pub facing: f32,
}

/// Разница углов, обёрнутая в (-π, π]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid даёт [-π, π): переносим -π в +π
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}

/// Один шаг интеграции
///
/// `intent`: x: left/right, y: ось Z (forward = -1). Длина ≤ 1.
/// Возвращает новый AvatarState целиком; `target` обновляется на месте.
pub fn integrate(
    avatar: &AvatarState,
    target: &mut MovementTarget,
    intent: Vec2,
    run_held: bool,
    config: &MovementConfig,
    delta: f32,
) -> AvatarState {
    let delta = delta.clamp(0.0, config.max_delta);

    let is_moving = intent.x != 0.0 || intent.y != 0.0;
    let is_running = is_moving && run_held;

    let mut velocity = avatar.velocity;

    if is_moving {
        target.facing = intent.x.atan2(intent.y);

        let speed = if is_running {
            config.speed * config.run_multiplier
        } else {
            config.speed
        };
        velocity.x += intent.x * speed * delta;
        velocity.z += intent.y * speed * delta;
    }

    // Трение: всегда, даже без input
    velocity.x *= config.friction;
    velocity.z *= config.friction;

    let bound = config.bound();
    let mut position = avatar.position;
    let next_x = position.x + velocity.x * delta;
    let next_z = position.z + velocity.z * delta;

    position.x = next_x.clamp(-bound, bound);
    position.z = next_z.clamp(-bound, bound);

    // Упёрлись в стену: гасим компоненту, чтобы не "давить" в неё
    if position.x != next_x {
        velocity.x = 0.0;
    }
    if position.z != next_z {
        velocity.z = 0.0;
    }

    let diff = wrap_angle(target.facing - avatar.facing);
    let step = (config.rotation_speed * delta).min(1.0);
    let facing = wrap_angle(avatar.facing + diff * step);

    AvatarState {
        position,
        facing,
        velocity,
        is_moving,
        is_running,
    }
}
