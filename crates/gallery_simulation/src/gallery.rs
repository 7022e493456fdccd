//! Стандартная комната: 30x30, семь картин на трёх стенах

use bevy::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::state::Painting;

pub const ROOM_SIZE: f32 = 30.0;
pub const WALL_HEIGHT: f32 = 8.0;
/// Высота центра картины
pub const PAINTING_HEIGHT: f32 = 2.5;
/// Отступ картины от плоскости стены
const WALL_INSET: f32 = 0.1;

/// Картины по умолчанию (порядок = порядок Next/Prev)
pub fn default_paintings() -> Vec<Painting> {
    let half = ROOM_SIZE / 2.0;
    let front = -half + WALL_INSET;
    let left = -half + WALL_INSET;
    let right = half - WALL_INSET;

    let layout: [(&str, Vec3, f32, &str); 7] = [
        ("painting-1", Vec3::new(-5.0, PAINTING_HEIGHT, front), 0.0, "Midnight Serenity"),
        ("painting-2", Vec3::new(0.0, PAINTING_HEIGHT, front), 0.0, "Urban Echoes"),
        ("painting-3", Vec3::new(5.0, PAINTING_HEIGHT, front), 0.0, "Distant Horizons"),
        ("painting-4", Vec3::new(left, PAINTING_HEIGHT, -5.0), FRAC_PI_2, "Abstract Pulse"),
        ("painting-5", Vec3::new(left, PAINTING_HEIGHT, 5.0), FRAC_PI_2, "Chromatic Flow"),
        ("painting-6", Vec3::new(right, PAINTING_HEIGHT, -5.0), -FRAC_PI_2, "Fractured Light"),
        ("painting-7", Vec3::new(right, PAINTING_HEIGHT, 5.0), -FRAC_PI_2, "Veiled Reality"),
    ];

    layout
        .iter()
        .enumerate()
        .map(|(index, (id, position, yaw, title))| {
            Painting::new(
                *id,
                *position,
                Vec3::new(0.0, *yaw, 0.0),
                *title,
                format!("https://picsum.photos/400/300?random={}", index + 1),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paintings_face_into_room() {
        for painting in default_paintings() {
            // Шаг по нормали от картины приближает к центру комнаты
            let inside = painting.position + painting.outward_normal();
            assert!(
                Vec2::new(inside.x, inside.z).length() < painting.planar_position().length(),
                "{} faces the wall",
                painting.id
            );
        }
    }

    #[test]
    fn test_ids_unique() {
        let paintings = default_paintings();
        let mut ids: Vec<_> = paintings.iter().map(|p| p.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), paintings.len());
    }
}
