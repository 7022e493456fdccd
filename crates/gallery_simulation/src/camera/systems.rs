//! Camera systems (ECS)

use bevy::prelude::*;

use super::rig::GalleryCamera;
use crate::config::GalleryConfig;
use crate::input::{InputState, PointerDragged};
use crate::state::{AvatarState, SelectedPainting};

/// Система: pointer drag → target yaw/pitch
///
/// Drag учитывается только пока `pointer_down` и нет selection
/// (в zoom mode свободная камера выключена).
pub fn apply_camera_drag(
    input: Res<InputState>,
    selected: Res<SelectedPainting>,
    config: Res<GalleryConfig>,
    mut drags: EventReader<PointerDragged>,
    mut camera: ResMut<GalleryCamera>,
) {
    if !input.pointer_down || selected.0.is_some() {
        // Consume events even when not orbiting
        drags.clear();
        return;
    }

    for drag in drags.read() {
        camera.apply_drag(drag.delta, &config.camera);
    }
}

/// Система: поза камеры из опубликованного AvatarState / SelectedPainting
pub fn update_gallery_camera(
    avatar: Res<AvatarState>,
    selected: Res<SelectedPainting>,
    config: Res<GalleryConfig>,
    time: Res<Time>,
    mut camera: ResMut<GalleryCamera>,
) {
    camera.update(&avatar, selected.0.as_ref(), &config.camera, time.delta_secs());
}
