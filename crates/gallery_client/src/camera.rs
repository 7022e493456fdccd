use bevy::prelude::*;
use gallery_simulation::{GalleryCamera, GallerySet};

/// Применяет опубликованную позу GalleryCamera к Bevy Camera3d
pub struct CameraSyncPlugin;

impl Plugin for CameraSyncPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, sync_camera_transform.after(GallerySet::Presentation));
    }
}

/// Marker: камера, которую двигает симуляция
#[derive(Component)]
pub struct GalleryViewCamera;

fn spawn_camera(mut commands: Commands, rig: Res<GalleryCamera>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: rig.fov.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_translation(rig.position).looking_at(rig.look_at, Vec3::Y),
        GalleryViewCamera,
    ));
}

/// Update camera transform + FOV (только когда rig изменился)
fn sync_camera_transform(
    rig: Res<GalleryCamera>,
    mut query: Query<(&mut Transform, &mut Projection), With<GalleryViewCamera>>,
) {
    if !rig.is_changed() {
        return;
    }

    for (mut transform, mut projection) in query.iter_mut() {
        // looking_at с совпадающими точками даёт NaN: держим прежнюю ориентацию
        if rig.position.distance_squared(rig.look_at) > f32::EPSILON {
            *transform = Transform::from_translation(rig.position).looking_at(rig.look_at, Vec3::Y);
        } else {
            transform.translation = rig.position;
        }

        if let Projection::Perspective(perspective) = projection.as_mut() {
            perspective.fov = rig.fov.to_radians();
        }
    }
}
