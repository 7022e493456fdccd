//! GallerySnapshot — read-only снимок для UI слоя (и детерминизм-тестов)

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AvatarState, CharacterKind, GalleryPaused, NearestPainting, SelectedPainting};
use crate::camera::{CameraMode, GalleryCamera};
use crate::footprints::Footprints;

/// id + title картины (то, что показывает prompt / диалог)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaintingRef {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GallerySnapshot {
    pub avatar_position: [f32; 3],
    pub avatar_facing: f32,
    pub is_moving: bool,
    pub is_running: bool,
    pub nearest: Option<PaintingRef>,
    pub selected: Option<PaintingRef>,
    pub camera_mode: CameraMode,
    pub character: CharacterKind,
    pub footprint_count: usize,
    pub paused: bool,
}

impl GallerySnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Собирает снимок из resources (отсутствующие resources → defaults)
pub fn gallery_snapshot(world: &World) -> GallerySnapshot {
    let avatar = world.get_resource::<AvatarState>().copied().unwrap_or_default();

    let nearest = world
        .get_resource::<NearestPainting>()
        .and_then(|n| n.0.as_ref())
        .map(|p| PaintingRef {
            id: p.id.clone(),
            title: p.title.clone(),
        });

    let selected = world
        .get_resource::<SelectedPainting>()
        .and_then(|s| s.0.as_ref())
        .map(|p| PaintingRef {
            id: p.id.clone(),
            title: p.title.clone(),
        });

    GallerySnapshot {
        avatar_position: avatar.position.to_array(),
        avatar_facing: avatar.facing,
        is_moving: avatar.is_moving,
        is_running: avatar.is_running,
        nearest,
        selected,
        camera_mode: world
            .get_resource::<GalleryCamera>()
            .map(|camera| camera.mode)
            .unwrap_or_default(),
        character: world.get_resource::<CharacterKind>().copied().unwrap_or_default(),
        footprint_count: world.get_resource::<Footprints>().map_or(0, |f| f.len()),
        paused: world.get_resource::<GalleryPaused>().is_some_and(|p| p.0),
    }
}
