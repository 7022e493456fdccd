use std::collections::HashMap;

use bevy::prelude::*;
use gallery_simulation::gallery::{ROOM_SIZE, WALL_HEIGHT};
use gallery_simulation::{
    AvatarState, CharacterKind, Footprints, GallerySet, NearestPainting, PaintingRegistry,
};

/// Размер полотна (ширина × высота) и рамки вокруг него
const CANVAS_SIZE: Vec2 = Vec2::new(3.0, 2.0);
const FRAME_BORDER: f32 = 0.15;
const FOOTPRINT_SIZE: Vec2 = Vec2::new(0.12, 0.26);

pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PaintingVisuals>()
            .init_resource::<FootprintVisuals>()
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: 400.0,
                ..default()
            })
            .add_systems(Startup, (spawn_room, spawn_avatar_visual))
            .add_systems(
                Update,
                (
                    spawn_painting_visuals,
                    highlight_nearest_painting,
                    sync_avatar_transform,
                    sync_avatar_color,
                    sync_footprint_visuals,
                )
                    .chain()
                    .after(GallerySet::Presentation),
            );
    }
}

/// Marker: визуал аватара
#[derive(Component)]
pub struct AvatarVisual;

/// Link: рамка → id картины
#[derive(Component)]
pub struct PaintingFrame(pub String);

/// Link: след → id следа
#[derive(Component)]
pub struct FootprintVisual(pub String);

/// painting id → entity рамки
#[derive(Resource, Default)]
pub struct PaintingVisuals(HashMap<String, Entity>);

/// footprint id → entity
#[derive(Resource, Default)]
pub struct FootprintVisuals(HashMap<String, Entity>);

/// Пол, четыре стены и свет
fn spawn_room(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let half = ROOM_SIZE / 2.0;

    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_SIZE, ROOM_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.55, 0.5, 0.45),
            perceptual_roughness: 0.9,
            ..default()
        })),
        Transform::default(),
    ));

    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.92, 0.91, 0.88),
        ..default()
    });
    let wall_mesh = meshes.add(Cuboid::new(ROOM_SIZE, WALL_HEIGHT, 0.2));

    // (центр, поворот вокруг Y)
    let walls = [
        (Vec3::new(0.0, WALL_HEIGHT / 2.0, -half), 0.0),
        (Vec3::new(0.0, WALL_HEIGHT / 2.0, half), 0.0),
        (Vec3::new(-half, WALL_HEIGHT / 2.0, 0.0), std::f32::consts::FRAC_PI_2),
        (Vec3::new(half, WALL_HEIGHT / 2.0, 0.0), std::f32::consts::FRAC_PI_2),
    ];
    for (center, yaw) in walls {
        commands.spawn((
            Mesh3d(wall_mesh.clone()),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(center).with_rotation(Quat::from_rotation_y(yaw)),
        ));
    }

    commands.spawn((
        DirectionalLight {
            illuminance: 8000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(4.0, 12.0, 6.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        PointLight {
            intensity: 600_000.0,
            range: ROOM_SIZE,
            ..default()
        },
        Transform::from_xyz(0.0, WALL_HEIGHT - 1.0, 0.0),
    ));
}

fn spawn_avatar_visual(
    mut commands: Commands,
    avatar: Res<AvatarState>,
    kind: Res<CharacterKind>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Capsule3d::new(0.3, 1.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: character_color(*kind),
            ..default()
        })),
        avatar_transform(&avatar),
        AvatarVisual,
    ));
}

/// Рамка + полотно для каждой новой картины в registry
fn spawn_painting_visuals(
    mut commands: Commands,
    registry: Res<PaintingRegistry>,
    mut visuals: ResMut<PaintingVisuals>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !registry.is_changed() {
        return;
    }

    for painting in registry.iter() {
        let transform = Transform::from_translation(painting.position).with_rotation(
            Quat::from_euler(
                EulerRot::XYZ,
                painting.rotation.x,
                painting.rotation.y,
                painting.rotation.z,
            ),
        );

        // Upsert: картину могли перерегистрировать с новой позой
        if let Some(&entity) = visuals.0.get(&painting.id) {
            commands.entity(entity).insert(transform);
            continue;
        }

        let frame = commands
            .spawn((
                Mesh3d(meshes.add(Cuboid::new(
                    CANVAS_SIZE.x + FRAME_BORDER * 2.0,
                    CANVAS_SIZE.y + FRAME_BORDER * 2.0,
                    0.08,
                ))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: frame_color(false),
                    ..default()
                })),
                transform,
                PaintingFrame(painting.id.clone()),
            ))
            .id();

        // Полотно чуть впереди рамки (локальный +Z = outward normal)
        let canvas = commands
            .spawn((
                Mesh3d(meshes.add(Rectangle::new(CANVAS_SIZE.x, CANVAS_SIZE.y))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: canvas_color(&painting.id),
                    ..default()
                })),
                Transform::from_xyz(0.0, 0.0, 0.05),
            ))
            .id();

        commands.entity(frame).add_child(canvas);
        visuals.0.insert(painting.id.clone(), frame);
    }
}

/// Nearest картина: золотая рамка
fn highlight_nearest_painting(
    nearest: Res<NearestPainting>,
    frames: Query<(&PaintingFrame, &MeshMaterial3d<StandardMaterial>)>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !nearest.is_changed() {
        return;
    }

    for (frame, material) in frames.iter() {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = frame_color(nearest.id() == Some(frame.0.as_str()));
        }
    }
}

fn sync_avatar_transform(
    avatar: Res<AvatarState>,
    mut query: Query<&mut Transform, With<AvatarVisual>>,
) {
    if !avatar.is_changed() {
        return;
    }

    for mut transform in query.iter_mut() {
        *transform = avatar_transform(&avatar);
    }
}

fn sync_avatar_color(
    kind: Res<CharacterKind>,
    query: Query<&MeshMaterial3d<StandardMaterial>, With<AvatarVisual>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !kind.is_changed() {
        return;
    }

    for material in query.iter() {
        if let Some(material) = materials.get_mut(&material.0) {
            material.base_color = character_color(*kind);
        }
    }
}

/// Footprints → decals на полу: spawn новых, opacity, despawn исчезнувших
fn sync_footprint_visuals(
    mut commands: Commands,
    footprints: Res<Footprints>,
    mut visuals: ResMut<FootprintVisuals>,
    handles: Query<&MeshMaterial3d<StandardMaterial>, With<FootprintVisual>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    if !footprints.is_changed() {
        return;
    }

    for footprint in footprints.0.iter() {
        match visuals.0.get(&footprint.id) {
            Some(&entity) => {
                if let Ok(handle) = handles.get(entity) {
                    if let Some(material) = materials.get_mut(&handle.0) {
                        material.base_color = footprint_color(footprint.opacity);
                    }
                }
            }
            None => {
                let entity = commands
                    .spawn((
                        Mesh3d(meshes.add(Plane3d::default().mesh().size(FOOTPRINT_SIZE.x, FOOTPRINT_SIZE.y))),
                        MeshMaterial3d(materials.add(StandardMaterial {
                            base_color: footprint_color(footprint.opacity),
                            alpha_mode: AlphaMode::Blend,
                            unlit: true,
                            ..default()
                        })),
                        Transform::from_translation(footprint.position)
                            .with_rotation(Quat::from_rotation_y(footprint.facing)),
                        FootprintVisual(footprint.id.clone()),
                    ))
                    .id();
                visuals.0.insert(footprint.id.clone(), entity);
            }
        }
    }

    // Вытесненные лимитом или полностью выцветшие
    visuals.0.retain(|id, entity| {
        let alive = footprints.0.iter().any(|footprint| &footprint.id == id);
        if !alive {
            commands.entity(*entity).despawn();
        }
        alive
    });
}

/// Капсула стоит на полу: центр на половине высоты
fn avatar_transform(avatar: &AvatarState) -> Transform {
    Transform::from_translation(avatar.position + Vec3::Y * 0.8)
        .with_rotation(Quat::from_rotation_y(avatar.facing))
}

fn character_color(kind: CharacterKind) -> Color {
    match kind {
        CharacterKind::Human => Color::srgb(0.85, 0.65, 0.5),
        CharacterKind::Bear => Color::srgb(0.45, 0.3, 0.2),
        CharacterKind::Robot => Color::srgb(0.6, 0.65, 0.75),
    }
}

fn frame_color(highlighted: bool) -> Color {
    if highlighted {
        Color::srgb(0.85, 0.7, 0.25)
    } else {
        Color::srgb(0.25, 0.18, 0.12)
    }
}

/// Стабильный цвет полотна по id (картинки не грузим)
fn canvas_color(id: &str) -> Color {
    let hash = id.bytes().fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let hue = (hash % 360) as f32;
    Color::hsl(hue, 0.45, 0.55)
}

fn footprint_color(opacity: f32) -> Color {
    Color::srgba(0.2, 0.15, 0.1, opacity.clamp(0.0, 1.0) * 0.6)
}
