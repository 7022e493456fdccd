//! Proximity Detector — ближайшая картина в радиусе
//!
//! Гистерезис по identity: `NearestPainting` меняется только когда меняется
//! id победителя. Дрожание дистанции у границы UI не видит.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::logger;
use crate::state::{AvatarState, NearestPainting, Painting, PaintingRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProximityConfig {
    /// Максимальная planar (XZ) дистанция "рядом" (строго меньше)
    pub threshold: f32,
}

impl Default for ProximityConfig {
    fn default() -> Self {
        Self { threshold: 3.5 }
    }
}

/// Event: nearest painting сменился (UI показывает/прячет prompt)
#[derive(Event, Debug, Clone, PartialEq)]
pub struct NearestPaintingChanged {
    pub previous: Option<String>,
    pub current: Option<String>,
}

/// Ближайшая картина строго ближе `threshold` по XZ
///
/// При равной дистанции выигрывает зарегистрированная раньше.
pub fn find_nearest<'a>(
    avatar: Vec2,
    paintings: &'a [Painting],
    threshold: f32,
) -> Option<&'a Painting> {
    let mut nearest: Option<(&Painting, f32)> = None;

    for painting in paintings {
        let distance = avatar.distance(painting.planar_position());
        if distance >= threshold {
            continue;
        }

        match nearest {
            Some((_, best)) if distance >= best => {}
            _ => nearest = Some((painting, distance)),
        }
    }

    nearest.map(|(painting, _)| painting)
}

/// Система: пересчёт nearest каждый кадр, публикация только при смене id
pub fn detect_nearest_painting(
    avatar: Res<AvatarState>,
    registry: Res<PaintingRegistry>,
    config: Res<crate::config::GalleryConfig>,
    mut nearest: ResMut<NearestPainting>,
    mut changed: EventWriter<NearestPaintingChanged>,
) {
    let winner = find_nearest(
        avatar.planar_position(),
        registry.as_slice(),
        config.proximity.threshold,
    );

    let winner_id = winner.map(|p| p.id.as_str());
    if winner_id == nearest.id() {
        return;
    }

    let previous = nearest.id().map(str::to_owned);
    let current = winner_id.map(str::to_owned);

    logger::log(&format!("Nearest painting: {:?} → {:?}", previous, current));

    *nearest = NearestPainting(winner.cloned());
    changed.write(NearestPaintingChanged { previous, current });
}
